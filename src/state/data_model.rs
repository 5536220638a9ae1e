use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type Cells = BTreeMap<String, Value>;

/// Column descriptor supplied by the host. Identity is `key`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub title: String,
    pub key: String,
    #[serde(default)]
    pub show_filter: bool,
    #[serde(default = "default_checked")]
    pub checked: bool,
}

fn default_checked() -> bool {
    true
}

impl Header {
    pub fn new(title: impl Into<String>, key: impl Into<String>, show_filter: bool) -> Self {
        Self {
            title: title.into(),
            key: key.into(),
            show_filter,
            checked: true,
        }
    }
}

/// Stable index of a row inside the table's row arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub usize);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Row {
    pub cells: Cells,
    pub checked: bool,
    pub expand: bool,
}

impl Row {
    pub fn new(cells: Cells) -> Self {
        Self {
            cells,
            checked: false,
            expand: false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.cells.get(key)
    }

    /// Cell text as shown in the table; missing and null cells are empty.
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(display_value).unwrap_or_default()
    }
}

impl From<Cells> for Row {
    fn from(cells: Cells) -> Self {
        Row::new(cells)
    }
}

/// Formats a JSON value for display in a table cell.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
