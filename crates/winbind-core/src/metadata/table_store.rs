//! `MetadataStore` backed by an in-memory snapshot.

use std::collections::HashMap;
use std::ops::Range;

use super::error::SnapshotError;
use super::types::{MetadataSnapshot, RowRange};
use crate::store::{
    FieldId, MetadataStore, MethodDefId, MethodSignature, ParamId, QualifiedName, SignatureType,
    TypeDefId, TypeRefId,
};

/// Validated snapshot with name indexes.
///
/// When several rows share a name, lookups return the first one.
#[derive(Debug)]
pub struct TableStore {
    tables: MetadataSnapshot,
    methods_by_name: HashMap<String, MethodDefId>,
    types_by_name: HashMap<String, TypeDefId>,
    types_by_qualified_name: HashMap<(String, String), TypeDefId>,
    imports_by_name: HashMap<String, usize>,
}

impl TableStore {
    /// Validate row references and build the lookup indexes.
    pub fn new(tables: MetadataSnapshot) -> Result<Self, SnapshotError> {
        validate(&tables)?;

        let mut methods_by_name = HashMap::new();
        for (i, row) in tables.method_defs.iter().enumerate() {
            methods_by_name
                .entry(row.name.clone())
                .or_insert(MethodDefId::from_raw(i as u32));
        }

        let mut types_by_name = HashMap::new();
        let mut types_by_qualified_name = HashMap::new();
        for (i, row) in tables.type_defs.iter().enumerate() {
            let id = TypeDefId::from_raw(i as u32);
            types_by_name.entry(row.name.clone()).or_insert(id);
            types_by_qualified_name
                .entry((row.namespace.clone(), row.name.clone()))
                .or_insert(id);
        }

        let mut imports_by_name = HashMap::new();
        for (i, row) in tables.impl_maps.iter().enumerate() {
            imports_by_name.entry(row.import_name.clone()).or_insert(i);
        }

        Ok(Self {
            tables,
            methods_by_name,
            types_by_name,
            types_by_qualified_name,
            imports_by_name,
        })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Self::new(MetadataSnapshot::from_bytes(bytes)?)
    }

    pub fn tables(&self) -> &MetadataSnapshot {
        &self.tables
    }

    pub fn into_tables(self) -> MetadataSnapshot {
        self.tables
    }
}

fn validate(tables: &MetadataSnapshot) -> Result<(), SnapshotError> {
    for (row, def) in tables.type_defs.iter().enumerate() {
        check_range("TypeDef", row, "Field", def.field_list, tables.fields.len())?;
    }
    for (row, def) in tables.method_defs.iter().enumerate() {
        check_range("MethodDef", row, "Param", def.param_list, tables.params.len())?;
    }
    for (row, map) in tables.impl_maps.iter().enumerate() {
        let index = map.import_scope.as_u32();
        if map.import_scope.index() >= tables.module_refs.len() {
            return Err(SnapshotError::DanglingReference {
                table: "ImplMap",
                row,
                target: "ModuleRef",
                index,
                len: tables.module_refs.len(),
            });
        }
    }
    Ok(())
}

fn check_range(
    table: &'static str,
    row: usize,
    target: &'static str,
    range: RowRange,
    len: usize,
) -> Result<(), SnapshotError> {
    if range.start > range.end || range.end as usize > len {
        return Err(SnapshotError::RangeOutOfBounds {
            table,
            row,
            target,
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

impl MetadataStore for TableStore {
    fn find_method_by_name(&self, name: &str) -> Option<MethodDefId> {
        self.methods_by_name.get(name).copied()
    }

    fn find_type_by_name(&self, name: &str) -> Option<TypeDefId> {
        self.types_by_name.get(name).copied()
    }

    fn find_type_by_name_and_namespace(&self, name: &str, namespace: &str) -> Option<TypeDefId> {
        self.types_by_qualified_name
            .get(&(namespace.to_owned(), name.to_owned()))
            .copied()
    }

    fn method_name(&self, method: MethodDefId) -> &str {
        &self.tables.method_defs[method.index()].name
    }

    fn method_signature(&self, method: MethodDefId) -> &MethodSignature {
        &self.tables.method_defs[method.index()].signature
    }

    fn param_list(&self, method: MethodDefId) -> Range<u32> {
        let range = self.tables.method_defs[method.index()].param_list;
        range.start..range.end
    }

    fn param_name(&self, param: ParamId) -> Option<&str> {
        self.tables
            .params
            .get(param.index())
            .map(|row| row.name.as_str())
    }

    fn type_name(&self, ty: TypeDefId) -> &str {
        &self.tables.type_defs[ty.index()].name
    }

    fn type_namespace(&self, ty: TypeDefId) -> &str {
        &self.tables.type_defs[ty.index()].namespace
    }

    fn fields_of(&self, ty: TypeDefId) -> Vec<FieldId> {
        let range = self.tables.type_defs[ty.index()].field_list;
        (range.start..range.end).map(FieldId::from_raw).collect()
    }

    fn field_name(&self, field: FieldId) -> &str {
        &self.tables.fields[field.index()].name
    }

    fn field_signature_type(&self, field: FieldId) -> Option<&SignatureType> {
        self.tables.fields[field.index()].signature.as_ref()
    }

    fn type_ref(&self, type_ref: TypeRefId) -> Option<QualifiedName<'_>> {
        self.tables
            .type_refs
            .get(type_ref.index())
            .map(|row| QualifiedName {
                name: &row.name,
                namespace: &row.namespace,
            })
    }

    fn imported_library_name_for(&self, method_name: &str) -> Option<&str> {
        let map = &self.tables.impl_maps[*self.imports_by_name.get(method_name)?];
        Some(&self.tables.module_refs[map.import_scope.index()].name)
    }
}
