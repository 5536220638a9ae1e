use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use tracing::warn;

use crate::io::{csv_io, json_io};
use crate::state::table_state::TableState;

pub async fn open_rows_file(table: Signal<TableState>, error_message: Signal<Option<String>>) {
    let task = rfd::AsyncFileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
        .await;

    if let Some(handle) = task {
        load_rows_into(table, error_message, handle.path());
    }
}

/// Loads rows from `path` into the table, replacing whatever was there.
pub fn load_rows_into(
    mut table: Signal<TableState>,
    mut error_message: Signal<Option<String>>,
    path: &Path,
) {
    match json_io::load_rows(path) {
        Ok(rows) => {
            table.with_mut(|state| state.set_rows(rows));
            error_message.set(None);
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "could not load rows");
            error_message.set(Some(err.to_string()));
        }
    }
}

/// Asks for a destination and writes the current working set as CSV.
/// Returns `true` when a file was written.
pub async fn export_csv(table: Signal<TableState>, mut error_message: Signal<Option<String>>) -> bool {
    let file_name = table.read().config().csv_file_name.clone();
    let task = rfd::AsyncFileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(file_name.as_str())
        .save_file()
        .await;

    let Some(handle) = task else {
        return false;
    };
    let path: PathBuf = handle.path().to_path_buf();

    let result = csv_io::save_csv(&path, &table.read());
    match result {
        Ok(()) => {
            error_message.set(None);
            true
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "csv export failed");
            error_message.set(Some(err.to_string()));
            false
        }
    }
}
