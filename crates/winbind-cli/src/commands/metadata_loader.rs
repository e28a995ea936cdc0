use std::fs;
use std::path::Path;

use tracing::debug;
use winbind_core::TableStore;

use crate::error::CliError;

/// Read and validate a snapshot in either encoding.
pub fn load_store(path: &Path) -> Result<TableStore, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    let store = TableStore::from_bytes(&bytes).map_err(|source| CliError::Snapshot {
        path: path.to_owned(),
        source,
    })?;
    let tables = store.tables();
    debug!(
        path = %path.display(),
        methods = tables.method_defs.len(),
        types = tables.type_defs.len(),
        "loaded metadata snapshot"
    );
    Ok(store)
}
