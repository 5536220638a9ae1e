use thiserror::Error;

use crate::state::data_model::RowId;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
    #[error("no row {0}")]
    UnknownRow(RowId),
    #[error("invalid filter pattern for column `{key}`: {pattern}")]
    InvalidPattern {
        key: String,
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
    #[error("page size must be greater than zero, got {0}")]
    InvalidPageSize(usize),
}
