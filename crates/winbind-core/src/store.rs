//! Read-only lookup surface over metadata tables.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::element::{ELEMENT_ARRAY, ELEMENT_CLASS, ELEMENT_PTR, ElementType};

macro_rules! table_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub fn as_u32(self) -> u32 {
                self.0
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

table_id!(
    /// Row in the TypeDef table.
    TypeDefId
);
table_id!(
    /// Row in the TypeRef table.
    TypeRefId
);
table_id!(
    /// Row in the Field table.
    FieldId
);
table_id!(
    /// Row in the MethodDef table.
    MethodDefId
);
table_id!(
    /// Row in the Param table.
    ParamId
);
table_id!(
    /// Row in the ModuleRef table.
    ModuleRefId
);

/// Type of a field, parameter or return value as encoded in a signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureType {
    Element(ElementType),
    Pointer(Box<SignatureType>),
    Array(Box<SignatureType>),
    /// Value type or class, by TypeRef row.
    Named(TypeRefId),
    /// Element code outside the supported set (function pointers, generic
    /// instances, ...).
    Unsupported(u8),
}

impl SignatureType {
    pub fn pointer(inner: SignatureType) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn array(inner: SignatureType) -> Self {
        Self::Array(Box::new(inner))
    }

    #[inline]
    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// Element type code of the outermost layer.
    pub fn code(&self) -> u8 {
        match self {
            Self::Element(kind) => kind.code(),
            Self::Pointer(_) => ELEMENT_PTR,
            Self::Array(_) => ELEMENT_ARRAY,
            Self::Named(_) => ELEMENT_CLASS,
            Self::Unsupported(code) => *code,
        }
    }
}

/// Decoded method signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub return_type: SignatureType,
    pub params: Vec<SignatureType>,
}

/// Name and namespace of a type reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
}

/// Lookups the resolvers need from a metadata source.
///
/// Handles returned by the `find_*` methods and by `fields_of` are valid for
/// the accessors taking them. Lookups that can legitimately miss return
/// `Option`.
pub trait MetadataStore {
    fn find_method_by_name(&self, name: &str) -> Option<MethodDefId>;
    /// First TypeDef with this name in any namespace.
    fn find_type_by_name(&self, name: &str) -> Option<TypeDefId>;
    fn find_type_by_name_and_namespace(&self, name: &str, namespace: &str) -> Option<TypeDefId>;

    fn method_name(&self, method: MethodDefId) -> &str;
    fn method_signature(&self, method: MethodDefId) -> &MethodSignature;
    /// Param rows owned by the method. The first row is the return slot.
    fn param_list(&self, method: MethodDefId) -> Range<u32>;
    fn param_name(&self, param: ParamId) -> Option<&str>;

    fn type_name(&self, ty: TypeDefId) -> &str;
    fn type_namespace(&self, ty: TypeDefId) -> &str;
    fn fields_of(&self, ty: TypeDefId) -> Vec<FieldId>;
    fn field_name(&self, field: FieldId) -> &str;
    fn field_signature_type(&self, field: FieldId) -> Option<&SignatureType>;
    fn type_ref(&self, type_ref: TypeRefId) -> Option<QualifiedName<'_>>;

    /// Library that exports `method_name`, from the import map.
    fn imported_library_name_for(&self, method_name: &str) -> Option<&str>;
}
