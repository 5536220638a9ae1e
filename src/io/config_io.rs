use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::state::config::TableConfig;

#[derive(Debug, Error)]
pub enum ConfigIoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Reads a JSON table config. Absent fields take their defaults.
pub fn load_config(path: &Path) -> Result<TableConfig, ConfigIoError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    info!(path = %path.display(), page_size = config.page_size, "config loaded");
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<TableConfig, ConfigIoError> {
    let config: TableConfig = serde_json::from_str(content)?;
    config.validate().map_err(ConfigIoError::Invalid)?;
    Ok(config)
}
