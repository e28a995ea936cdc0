use std::io;
use std::path::PathBuf;

use winbind_compiler::EmitError;
use winbind_core::SnapshotError;

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid metadata snapshot {}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },

    #[error(transparent)]
    Compile(#[from] winbind_compiler::Error),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("no identifiers given (pass them as arguments or with --input)")]
    NoIdentifiers,

    #[error("unresolved identifiers: {}", .0.join(", "))]
    Unresolved(Vec<String>),

    #[error(
        "output directory {} is not empty; confirm clearing it or pass --force-clean",
        .0.display()
    )]
    ClearDeclined(PathBuf),

    #[error("failed to clear {}", .path.display())]
    Clear {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode JSON output")]
    Json(#[source] serde_json::Error),

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
