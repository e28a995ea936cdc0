//! Resolution of metadata records into the binding model.
//!
//! - `types` - signature types, named references, aggregates and aliases
//! - `methods` - method signatures, parameter names, import library

mod error;
mod methods;
mod types;


pub use error::ResolveError;
pub use methods::MethodResolver;
pub use types::TypeResolver;
