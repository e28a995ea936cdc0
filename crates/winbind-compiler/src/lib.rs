//! winbind compiler: metadata resolution and binding generation.
//!
//! - `resolve` - type and method resolvers over a `MetadataStore`
//! - `registry` - resolved methods and the aggregates they reach
//! - `session` - identifier lookup feeding the registry
//! - `typegen` - Go source generation and output sinks

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod registry;
pub mod resolve;
pub mod session;
pub mod typegen;

#[cfg(test)]
mod registry_tests;
#[cfg(test)]
pub mod test_utils;

pub use registry::BindingRegistry;
pub use resolve::{MethodResolver, ResolveError, TypeResolver};
pub use session::{Lookup, Session};
pub use typegen::{DirectorySink, EmitError, MemorySink, OutputSink, SourceFile};

/// Errors from a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot resolve `{identifier}`")]
    Resolve {
        identifier: String,
        #[source]
        source: ResolveError,
    },

    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;

/// Closed registry plus the lookup outcome of every identifier, in input
/// order.
#[derive(Debug)]
pub struct Resolution {
    pub registry: BindingRegistry,
    pub lookups: Vec<(String, Lookup)>,
}

impl Resolution {
    /// Identifiers naming neither a method nor a type.
    pub fn unresolved(&self) -> Vec<&str> {
        self.lookups
            .iter()
            .filter(|(_, lookup)| *lookup == Lookup::NotFound)
            .map(|(identifier, _)| identifier.as_str())
            .collect()
    }
}

/// Look up every identifier and close the resulting registry.
///
/// Stops at the first identifier whose resolution fails for a reason other
/// than not being found.
pub fn resolve_identifiers<S>(store: &S, identifiers: &[String]) -> Result<Resolution>
where
    S: winbind_core::MetadataStore + ?Sized,
{
    let mut session = Session::new(store);
    let mut lookups = Vec::with_capacity(identifiers.len());
    for identifier in identifiers {
        let lookup = session
            .request(identifier)
            .map_err(|source| Error::Resolve {
                identifier: identifier.clone(),
                source,
            })?;
        lookups.push((identifier.clone(), lookup));
    }

    Ok(Resolution {
        registry: session.finish(),
        lookups,
    })
}

/// Emit Go sources for `registry` and hand them to `sink`.
///
/// Returns the number of files written.
pub fn emit_to<O>(
    registry: &BindingRegistry,
    config: typegen::golang::Config,
    sink: &mut O,
) -> Result<usize>
where
    O: OutputSink + ?Sized,
{
    let files = typegen::golang::emit(registry, config)?;
    sink.write_all(&files)?;
    Ok(files.len())
}
