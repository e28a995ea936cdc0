//! Incremental construction of snapshots.
//!
//! Keeps row ranges consistent so callers only deal in names and signatures.

use super::error::SnapshotError;
use super::table_store::TableStore;
use super::types::{
    FieldRow, ImplMapRow, MetadataSnapshot, MethodDefRow, ModuleRefRow, ParamRow, RowRange,
    TypeDefRow, TypeRefRow,
};
use crate::store::{
    MethodDefId, MethodSignature, ModuleRefId, SignatureType, TypeDefId, TypeRefId,
};

#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    tables: MetadataSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// ModuleRef row for `name`, reusing an existing one.
    pub fn module_ref(&mut self, name: &str) -> ModuleRefId {
        let refs = &mut self.tables.module_refs;
        let index = match refs.iter().position(|row| row.name == name) {
            Some(index) => index,
            None => {
                refs.push(ModuleRefRow {
                    name: name.to_owned(),
                });
                refs.len() - 1
            }
        };
        ModuleRefId::from_raw(index as u32)
    }

    /// TypeRef row for `namespace.name`, reusing an existing one.
    pub fn type_ref(&mut self, name: &str, namespace: &str) -> TypeRefId {
        let refs = &mut self.tables.type_refs;
        let index = match refs
            .iter()
            .position(|row| row.name == name && row.namespace == namespace)
        {
            Some(index) => index,
            None => {
                refs.push(TypeRefRow {
                    name: name.to_owned(),
                    namespace: namespace.to_owned(),
                });
                refs.len() - 1
            }
        };
        TypeRefId::from_raw(index as u32)
    }

    /// Signature naming `namespace.name` through a TypeRef.
    pub fn named(&mut self, name: &str, namespace: &str) -> SignatureType {
        SignatureType::Named(self.type_ref(name, namespace))
    }

    /// TypeDef whose fields may carry undecodable (`None`) signatures.
    pub fn type_def(
        &mut self,
        name: &str,
        namespace: &str,
        fields: Vec<(&str, Option<SignatureType>)>,
    ) -> TypeDefId {
        let start = self.tables.fields.len() as u32;
        self.tables
            .fields
            .extend(fields.into_iter().map(|(name, signature)| FieldRow {
                name: name.to_owned(),
                signature,
            }));
        let end = self.tables.fields.len() as u32;

        self.tables.type_defs.push(TypeDefRow {
            name: name.to_owned(),
            namespace: namespace.to_owned(),
            field_list: RowRange::new(start, end),
        });
        TypeDefId::from_raw(self.tables.type_defs.len() as u32 - 1)
    }

    pub fn struct_def(
        &mut self,
        name: &str,
        namespace: &str,
        fields: Vec<(&str, SignatureType)>,
    ) -> TypeDefId {
        let fields = fields
            .into_iter()
            .map(|(name, sig)| (name, Some(sig)))
            .collect();
        self.type_def(name, namespace, fields)
    }

    /// MethodDef with one named Param row per signature parameter.
    pub fn method(
        &mut self,
        name: &str,
        return_type: SignatureType,
        params: Vec<(&str, SignatureType)>,
    ) -> MethodDefId {
        let (names, types): (Vec<&str>, Vec<SignatureType>) = params.into_iter().unzip();
        let signature = MethodSignature {
            return_type,
            params: types,
        };
        self.raw_method(name, signature, &names)
    }

    /// MethodDef whose Param names need not line up with the signature.
    ///
    /// A return-slot row is inserted ahead of `param_names`.
    pub fn raw_method(
        &mut self,
        name: &str,
        signature: MethodSignature,
        param_names: &[&str],
    ) -> MethodDefId {
        let start = self.tables.params.len() as u32;
        self.tables.params.push(ParamRow {
            name: String::new(),
        });
        self.tables
            .params
            .extend(param_names.iter().map(|name| ParamRow {
                name: (*name).to_owned(),
            }));
        let end = self.tables.params.len() as u32;

        self.tables.method_defs.push(MethodDefRow {
            name: name.to_owned(),
            signature,
            param_list: RowRange::new(start, end),
        });
        MethodDefId::from_raw(self.tables.method_defs.len() as u32 - 1)
    }

    /// Record that `library` exports `member`.
    pub fn import(&mut self, member: &str, library: &str) -> &mut Self {
        let import_scope = self.module_ref(library);
        self.tables.impl_maps.push(ImplMapRow {
            import_name: member.to_owned(),
            import_scope,
        });
        self
    }

    pub fn build(self) -> MetadataSnapshot {
        self.tables
    }

    pub fn into_store(self) -> Result<TableStore, SnapshotError> {
        TableStore::new(self.tables)
    }
}
