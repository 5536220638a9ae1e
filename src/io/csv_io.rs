use std::io;
use std::path::Path;

use tracing::info;

use crate::io::atomic_write_string;
use crate::state::table_state::TableState;

/// Writes the table's current working set as BOM-prefixed CSV.
pub fn save_csv(path: &Path, state: &TableState) -> io::Result<()> {
    let content = state.export_csv();
    atomic_write_string(path, &content)?;
    info!(
        path = %path.display(),
        rows = state.working_set().len(),
        "csv exported"
    );
    Ok(())
}
