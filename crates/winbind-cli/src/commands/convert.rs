use std::fs;
use std::path::PathBuf;

use tracing::info;

use super::metadata_loader::load_store;
use crate::error::CliError;

pub struct ConvertArgs {
    pub snapshot: PathBuf,
    pub output: PathBuf,
}

/// Validate a snapshot and write it in the binary encoding.
pub fn run(args: ConvertArgs) -> Result<(), CliError> {
    let store = load_store(&args.snapshot)?;
    let bytes = store.into_tables().to_binary();
    fs::write(&args.output, &bytes).map_err(|source| CliError::Write {
        path: args.output.clone(),
        source,
    })?;
    info!(
        path = %args.output.display(),
        bytes = bytes.len(),
        "wrote binary snapshot"
    );
    Ok(())
}
