//! Source generation from a closed binding registry.
//!
//! - `golang` - Go wrappers calling through `syscall.LazyProc`
//! - `sink` - where generated files go

pub mod golang;
mod sink;

#[cfg(test)]
mod sink_tests;

use std::path::PathBuf;

pub use sink::{DirectorySink, MemorySink, OutputSink, SourceFile};

/// Failure to turn the model into source files or to persist them.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("method `{method}` has no import library")]
    MissingLibrary { method: String },

    #[error("parameter `{param}` of `{method}` cannot be passed as a word ({ty})")]
    UnsupportedParameter {
        method: String,
        param: String,
        ty: String,
    },

    #[error("`{method}` returns `{ty}`, which does not fit in a word")]
    UnsupportedReturn { method: String, ty: String },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
