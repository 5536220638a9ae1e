use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::state::data_model::{Cells, Row};

#[derive(Debug, Error)]
pub enum JsonIoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("JSON root is not an array")]
    NotAnArray,
    #[error("JSON array contains non-object elements")]
    NotArrayOfObjects,
}

/// Loads a JSON array of objects as table rows, in file order.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, JsonIoError> {
    let content = fs::read_to_string(path)?;
    let rows = parse_rows(&content)?;
    info!(path = %path.display(), rows = rows.len(), "rows loaded");
    Ok(rows)
}

pub fn parse_rows(content: &str) -> Result<Vec<Row>, JsonIoError> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Array(arr) => {
            let mut rows = Vec::with_capacity(arr.len());
            for item in arr {
                match item {
                    Value::Object(map) => {
                        let cells: Cells = map.into_iter().collect();
                        rows.push(Row::new(cells));
                    }
                    _ => return Err(JsonIoError::NotArrayOfObjects),
                }
            }
            Ok(rows)
        }
        _ => Err(JsonIoError::NotAnArray),
    }
}
