//! Signature types to resolved `Type` values.

use tracing::trace;
use winbind_core::{
    FieldId, MetadataStore, Property, SignatureType, Type, TypeDefId, TypeRefId, typedef_alias,
};

use super::ResolveError;

/// Aggregate currently being expanded.
#[derive(Debug)]
struct Frame {
    name: String,
    /// Pointer wrappers open when the aggregate was entered.
    pointer_depth: usize,
}

/// Resolves signature types against a metadata store.
///
/// Recursion through aggregates is tracked so that self-reference through a
/// pointer yields a placeholder instead of looping, while self-containment by
/// value is reported as [`ResolveError::CyclicType`].
pub struct TypeResolver<'s, S: MetadataStore + ?Sized> {
    store: &'s S,
    expanding: Vec<Frame>,
    pointer_depth: usize,
}

impl<'s, S: MetadataStore + ?Sized> TypeResolver<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            expanding: Vec::new(),
            pointer_depth: 0,
        }
    }

    pub fn store(&self) -> &'s S {
        self.store
    }

    pub fn resolve(&mut self, signature: &SignatureType) -> Result<Type, ResolveError> {
        match signature {
            SignatureType::Element(kind) => Ok(Type::builtin(kind.builtin_name())),
            SignatureType::Pointer(inner) => {
                self.pointer_depth += 1;
                let inner = self.resolve(inner);
                self.pointer_depth -= 1;
                Ok(inner?.into_pointer())
            }
            SignatureType::Array(inner) => Ok(self.resolve(inner)?.into_array()),
            SignatureType::Named(type_ref) => self.resolve_type_ref(*type_ref),
            SignatureType::Unsupported(code) => {
                Err(ResolveError::UnsupportedElement { code: *code })
            }
        }
    }

    /// Resolve a type by name alone, taking the first definition in any
    /// namespace.
    pub fn resolve_named(&mut self, name: &str) -> Result<Type, ResolveError> {
        let def = self
            .store
            .find_type_by_name(name)
            .ok_or_else(|| ResolveError::TypeNotFound {
                name: name.to_owned(),
                namespace: String::new(),
            })?;
        self.resolve_definition(def)
    }

    fn resolve_type_ref(&mut self, type_ref: TypeRefId) -> Result<Type, ResolveError> {
        let store = self.store;
        let target = store
            .type_ref(type_ref)
            .ok_or(ResolveError::DanglingTypeRef {
                index: type_ref.as_u32(),
            })?;
        let def = store
            .find_type_by_name_and_namespace(target.name, target.namespace)
            .ok_or_else(|| ResolveError::TypeNotFound {
                name: target.name.to_owned(),
                namespace: target.namespace.to_owned(),
            })?;
        self.resolve_definition(def)
    }

    fn resolve_definition(&mut self, def: TypeDefId) -> Result<Type, ResolveError> {
        let store = self.store;
        let name = store.type_name(def);
        if let Some(builtin) = typedef_alias(name) {
            return Ok(Type::builtin(builtin));
        }

        if let Some(frame) = self.expanding.iter().find(|frame| frame.name == name) {
            if self.pointer_depth > frame.pointer_depth {
                trace!(name, "self reference through pointer, emitting placeholder");
                return Ok(Type::aggregate(name, Vec::new()));
            }
            return Err(self.cycle_error(name));
        }

        self.expanding.push(Frame {
            name: name.to_owned(),
            pointer_depth: self.pointer_depth,
        });
        let properties = self.resolve_fields(def);
        self.expanding.pop();

        Ok(Type::aggregate(name, properties?))
    }

    fn resolve_fields(&mut self, def: TypeDefId) -> Result<Vec<Property>, ResolveError> {
        self.store
            .fields_of(def)
            .into_iter()
            .map(|field| self.resolve_property(field))
            .collect()
    }

    pub fn resolve_property(&mut self, field: FieldId) -> Result<Property, ResolveError> {
        let store = self.store;
        let name = store.field_name(field);
        let signature = store
            .field_signature_type(field)
            .ok_or_else(|| ResolveError::FieldSignature {
                field: name.to_owned(),
            })?;

        match self.resolve(signature) {
            Ok(ty) => Ok(Property::new(name, ty)),
            Err(err @ ResolveError::CyclicType { .. }) => Err(err),
            Err(err) => Err(ResolveError::PropertyType {
                property: name.to_owned(),
                source: Box::new(err),
            }),
        }
    }

    fn cycle_error(&self, name: &str) -> ResolveError {
        let start = self
            .expanding
            .iter()
            .position(|frame| frame.name == name)
            .unwrap_or(0);
        let mut path: Vec<&str> = self.expanding[start..]
            .iter()
            .map(|frame| frame.name.as_str())
            .collect();
        path.push(name);
        ResolveError::CyclicType {
            name: name.to_owned(),
            path: path.join(" -> "),
        }
    }
}
