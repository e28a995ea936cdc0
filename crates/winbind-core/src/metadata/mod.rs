//! Metadata snapshots: the decoded ECMA-335 tables winbind reads.
//!
//! Snapshots load from JSON (hand-written fixtures, external dumpers) or a
//! compact binary form, and are served through [`TableStore`].

mod binary;
mod builder;
mod error;
mod json;
mod table_store;
mod types;


pub use binary::{MAGIC, VERSION};
pub use builder::SnapshotBuilder;
pub use error::SnapshotError;
pub use table_store::TableStore;
pub use types::{
    FieldRow, ImplMapRow, MetadataSnapshot, MethodDefRow, ModuleRefRow, ParamRow, RowRange,
    TypeDefRow, TypeRefRow,
};
