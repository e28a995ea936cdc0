#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for winbind.
//!
//! Three layers:
//! - **Model layer**: the resolved, language-neutral `Type`/`Method` values
//!   that the resolver produces and the emitter consumes
//! - **Element layer**: static tables mapping signature element kinds and
//!   typedef aliases to builtin type names
//! - **Metadata layer**: the `MetadataStore` lookup trait, the on-disk
//!   snapshot format (JSON and binary) and the table-backed store

pub mod colors;
pub mod element;
pub mod metadata;
pub mod model;
pub mod store;

#[cfg(test)]
mod model_tests;

pub use colors::Colors;
pub use element::{ElementType, typedef_alias};
pub use metadata::{MetadataSnapshot, SnapshotBuilder, SnapshotError, TableStore};
pub use model::{Method, Parameter, Property, Type};
pub use store::{
    FieldId, MetadataStore, MethodDefId, MethodSignature, ModuleRefId, ParamId, QualifiedName,
    SignatureType, TypeDefId, TypeRefId,
};
