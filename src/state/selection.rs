use std::collections::HashSet;

use crate::state::data_model::RowId;

/// Selected rows, kept in the order they were selected. Selection outlives
/// filtering and paging: a selected row need not be in the working set.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Selection {
    rows: Vec<RowId>,
    members: HashSet<RowId>,
}

impl Selection {
    pub fn rows(&self) -> &[RowId] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.members.contains(&id)
    }

    /// Returns whether membership changed.
    pub fn set(&mut self, id: RowId, selected: bool) -> bool {
        if selected {
            if !self.members.insert(id) {
                return false;
            }
            self.rows.push(id);
        } else {
            if !self.members.remove(&id) {
                return false;
            }
            self.rows.retain(|row| *row != id);
        }
        true
    }

    pub fn replace(&mut self, ids: &[RowId]) {
        self.rows.clear();
        self.members.clear();
        for id in ids {
            if self.members.insert(*id) {
                self.rows.push(*id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.members.clear();
    }

    /// Header-checkbox state. Only the visible page is checked member by
    /// member; the size comparison against the working set stands in for the
    /// rest, which keeps the check proportional to the page size.
    pub fn all_selected(&self, working_len: usize, page: &[RowId]) -> bool {
        if self.rows.len() < working_len {
            return false;
        }
        page.iter().all(|id| self.contains(*id))
    }
}
