//! Go binding emission.
//!
//! Aggregates become `struct` declarations; methods become functions that
//! call through a lazily loaded `syscall.LazyProc`. Arguments and results
//! travel as single `uintptr` words, so anything wider is not marshaled.

mod config;
mod emitter;
mod naming;
mod render;
mod words;

#[cfg(test)]
mod emitter_tests;

pub use config::{Config, TypeLayout};
pub use emitter::{Emitter, TYPES_FILE};

use crate::registry::BindingRegistry;
use crate::typegen::{EmitError, SourceFile};

/// Emit Go sources for `registry` with the given configuration.
pub fn emit(registry: &BindingRegistry, config: Config) -> Result<Vec<SourceFile>, EmitError> {
    Emitter::new(registry, config).emit()
}
