//! Resolved binding model.
//!
//! Values here are plain owned data. Wrapping a type in a pointer or array
//! produces a new value; nothing is shared between wrappers.

use serde::Serialize;

/// A resolved type: builtin, pointer/array wrapper, or named aggregate.
///
/// Invariant: `is_builtin` implies `properties` is empty. The constructors
/// uphold it; code building a `Type` by hand must too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Type {
    pub name: String,
    pub properties: Vec<Property>,
    pub is_pointer: bool,
    pub is_array: bool,
    pub is_builtin: bool,
}

/// Named field of an aggregate type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

/// Formal argument of a method.
///
/// `is_pointer` says whether the signature passed the argument by address.
/// It is tracked separately from `ty.is_pointer`: the resolver unwraps that
/// outer pointer, so `int32*` becomes an `int32` parameter with
/// `is_pointer == true`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    pub is_pointer: bool,
}

/// Resolved native entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Method {
    pub name: String,
    pub params: Vec<Parameter>,
    pub return_type: Type,
    /// Library exporting the entry point; empty when the metadata has no
    /// import record for it.
    pub dll_import: String,
}

impl Type {
    pub fn builtin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            is_pointer: false,
            is_array: false,
            is_builtin: true,
        }
    }

    pub fn aggregate(name: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            name: name.into(),
            properties,
            is_pointer: false,
            is_array: false,
            is_builtin: false,
        }
    }

    /// Copy of this type with the pointer flag set.
    pub fn to_pointer(&self) -> Self {
        self.clone().into_pointer()
    }

    /// Copy of this type with the array flag set.
    pub fn to_array(&self) -> Self {
        self.clone().into_array()
    }

    pub fn into_pointer(mut self) -> Self {
        self.is_pointer = true;
        self
    }

    pub fn into_array(mut self) -> Self {
        self.is_array = true;
        self
    }

    #[inline]
    pub fn is_aggregate(&self) -> bool {
        !self.is_builtin
    }

    /// Aggregates nested anywhere below this type's properties, depth first.
    /// The type itself is not yielded.
    pub fn nested_aggregates(&self) -> Vec<&Type> {
        let mut out = Vec::new();
        collect_nested(self, &mut out);
        out
    }
}

fn collect_nested<'a>(ty: &'a Type, out: &mut Vec<&'a Type>) {
    for prop in &ty.properties {
        if prop.ty.is_aggregate() {
            out.push(&prop.ty);
            collect_nested(&prop.ty, out);
        }
    }
}

impl Property {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type, is_pointer: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            is_pointer,
        }
    }
}

impl Method {
    /// Types directly reachable from the signature: the return type first,
    /// then parameter types in order.
    pub fn signature_types(&self) -> impl Iterator<Item = &Type> {
        std::iter::once(&self.return_type).chain(self.params.iter().map(|p| &p.ty))
    }
}
