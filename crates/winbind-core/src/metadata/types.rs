//! Snapshot table rows.
//!
//! One struct per ECMA-335 table the resolvers read. Rows reference each
//! other by index, exactly like the tables they mirror.

use serde::{Deserialize, Serialize};

use crate::store::{MethodSignature, ModuleRefId, SignatureType};

/// Decoded metadata tables.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    pub module_refs: Vec<ModuleRefRow>,
    pub type_refs: Vec<TypeRefRow>,
    pub type_defs: Vec<TypeDefRow>,
    pub fields: Vec<FieldRow>,
    pub method_defs: Vec<MethodDefRow>,
    pub params: Vec<ParamRow>,
    pub impl_maps: Vec<ImplMapRow>,
}

/// Half-open run of rows in another table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRange {
    pub start: u32,
    pub end: u32,
}

impl RowRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRefRow {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRefRow {
    pub name: String,
    pub namespace: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefRow {
    pub name: String,
    pub namespace: String,
    pub field_list: RowRange,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRow {
    pub name: String,
    /// `None` when the field's signature blob could not be decoded.
    pub signature: Option<SignatureType>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefRow {
    pub name: String,
    pub signature: MethodSignature,
    pub param_list: RowRange,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRow {
    pub name: String,
}

/// P/Invoke import: which module exports a member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplMapRow {
    pub import_name: String,
    pub import_scope: ModuleRefId,
}
