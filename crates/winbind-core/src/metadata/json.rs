//! JSON deserialization for metadata snapshots.
//!
//! Signatures use an internally tagged form keyed by `type`, spelled the way
//! ECMA-335 names element types (`"I4"`, `"PTR"`, `"VALUETYPE"`, ...).

use serde::Deserialize;

use super::error::SnapshotError;
use super::types::{
    FieldRow, ImplMapRow, MetadataSnapshot, MethodDefRow, ModuleRefRow, ParamRow, RowRange,
    TypeDefRow, TypeRefRow,
};
use crate::element::ElementType;
use crate::store::{MethodSignature, SignatureType, TypeRefId};

impl MetadataSnapshot {
    /// Parse a snapshot from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: RawSnapshot = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    module_refs: Vec<ModuleRefRow>,
    #[serde(default)]
    type_refs: Vec<TypeRefRow>,
    #[serde(default)]
    type_defs: Vec<TypeDefRow>,
    #[serde(default)]
    fields: Vec<RawField>,
    #[serde(default)]
    method_defs: Vec<RawMethodDef>,
    #[serde(default)]
    params: Vec<ParamRow>,
    #[serde(default)]
    impl_maps: Vec<ImplMapRow>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(default)]
    signature: Option<RawSig>,
}

#[derive(Debug, Deserialize)]
struct RawMethodDef {
    name: String,
    signature: RawMethodSig,
    #[serde(default)]
    param_list: RowRange,
}

#[derive(Debug, Deserialize)]
struct RawMethodSig {
    return_type: RawSig,
    #[serde(default)]
    params: Vec<RawSig>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum RawSig {
    #[serde(rename = "VOID")]
    Void,
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "CHAR")]
    Char,
    I1,
    U1,
    I2,
    U2,
    I4,
    U4,
    I8,
    U8,
    R4,
    R8,
    #[serde(rename = "STRING")]
    String,
    I,
    U,
    #[serde(rename = "PTR")]
    Ptr { inner: Box<RawSig> },
    #[serde(rename = "ARRAY")]
    Array { inner: Box<RawSig> },
    #[serde(rename = "SZARRAY")]
    SzArray { inner: Box<RawSig> },
    #[serde(rename = "VALUETYPE")]
    ValueType { type_ref: u32 },
    #[serde(rename = "CLASS")]
    Class { type_ref: u32 },
    #[serde(rename = "OTHER")]
    Other { code: u8 },
}

impl From<RawSnapshot> for MetadataSnapshot {
    fn from(raw: RawSnapshot) -> Self {
        Self {
            module_refs: raw.module_refs,
            type_refs: raw.type_refs,
            type_defs: raw.type_defs,
            fields: raw.fields.into_iter().map(Into::into).collect(),
            method_defs: raw.method_defs.into_iter().map(Into::into).collect(),
            params: raw.params,
            impl_maps: raw.impl_maps,
        }
    }
}

impl From<RawField> for FieldRow {
    fn from(raw: RawField) -> Self {
        Self {
            name: raw.name,
            signature: raw.signature.map(Into::into),
        }
    }
}

impl From<RawMethodDef> for MethodDefRow {
    fn from(raw: RawMethodDef) -> Self {
        Self {
            name: raw.name,
            signature: MethodSignature {
                return_type: raw.signature.return_type.into(),
                params: raw.signature.params.into_iter().map(Into::into).collect(),
            },
            param_list: raw.param_list,
        }
    }
}

impl From<RawSig> for SignatureType {
    fn from(raw: RawSig) -> Self {
        let element = match raw {
            RawSig::Void => ElementType::Void,
            RawSig::Boolean => ElementType::Boolean,
            RawSig::Char => ElementType::Char,
            RawSig::I1 => ElementType::I1,
            RawSig::U1 => ElementType::U1,
            RawSig::I2 => ElementType::I2,
            RawSig::U2 => ElementType::U2,
            RawSig::I4 => ElementType::I4,
            RawSig::U4 => ElementType::U4,
            RawSig::I8 => ElementType::I8,
            RawSig::U8 => ElementType::U8,
            RawSig::R4 => ElementType::R4,
            RawSig::R8 => ElementType::R8,
            RawSig::String => ElementType::String,
            RawSig::I => ElementType::ISize,
            RawSig::U => ElementType::USize,
            RawSig::Ptr { inner } => return SignatureType::pointer((*inner).into()),
            RawSig::Array { inner } | RawSig::SzArray { inner } => {
                return SignatureType::array((*inner).into());
            }
            RawSig::ValueType { type_ref } | RawSig::Class { type_ref } => {
                return SignatureType::Named(TypeRefId::from_raw(type_ref));
            }
            // A code that names a primitive is still a primitive.
            RawSig::Other { code } => {
                return ElementType::from_u8(code)
                    .map(SignatureType::Element)
                    .unwrap_or(SignatureType::Unsupported(code));
            }
        };
        SignatureType::Element(element)
    }
}
