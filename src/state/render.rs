use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::state::data_model::Row;

pub type RenderFn<T> = Rc<dyn Fn(&Row) -> T>;

/// Host-registered cell renderers keyed by column, plus an optional renderer
/// for the expandable detail row. `T` is whatever the host renders into.
pub struct CellRenderers<T> {
    columns: HashMap<String, RenderFn<T>>,
    detail: Option<RenderFn<T>>,
}

impl<T> CellRenderers<T> {
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
            detail: None,
        }
    }

    pub fn register(&mut self, key: impl Into<String>, render: impl Fn(&Row) -> T + 'static) {
        self.columns.insert(key.into(), Rc::new(render));
    }

    pub fn set_detail(&mut self, render: impl Fn(&Row) -> T + 'static) {
        self.detail = Some(Rc::new(render));
    }

    pub fn has_renderer(&self, key: &str) -> bool {
        self.columns.contains_key(key)
    }

    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    pub fn render(&self, key: &str, row: &Row) -> Option<T> {
        self.columns.get(key).map(|render| render(row))
    }

    pub fn render_detail(&self, row: &Row) -> Option<T> {
        self.detail.as_ref().map(|render| render(row))
    }
}

impl CellRenderers<String> {
    /// Registered renderer output, or the plain cell text.
    pub fn render_text(&self, key: &str, row: &Row) -> String {
        self.render(key, row).unwrap_or_else(|| row.display(key))
    }
}

impl<T> Default for CellRenderers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CellRenderers<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            detail: self.detail.clone(),
        }
    }
}

impl<T> fmt::Debug for CellRenderers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.columns.keys().collect();
        keys.sort();
        f.debug_struct("CellRenderers")
            .field("columns", &keys)
            .field("detail", &self.detail.is_some())
            .finish()
    }
}
