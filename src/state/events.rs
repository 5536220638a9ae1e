use std::fmt;

use crate::state::data_model::RowId;

/// Notifications the table sends to its host. Row lists are snapshots taken
/// when the event fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableEvent {
    FilterChanged(Vec<RowId>),
    PageChanged(Vec<RowId>),
    SelectionChanged(Vec<RowId>),
    SelectedColumnsChanged(Vec<String>),
    ExpandChanged { expanded: bool, row: RowId },
}

pub type Listener = Box<dyn FnMut(&TableEvent)>;

#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Listener>,
}

impl EventBus {
    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: TableEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
