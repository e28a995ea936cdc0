//! MethodDef rows to resolved `Method` values.

use tracing::debug;
use winbind_core::{MetadataStore, Method, MethodDefId, ParamId, Parameter, SignatureType};

use super::{ResolveError, TypeResolver};

pub struct MethodResolver<'s, S: MetadataStore + ?Sized> {
    types: TypeResolver<'s, S>,
}

impl<'s, S: MetadataStore + ?Sized> MethodResolver<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            types: TypeResolver::new(store),
        }
    }

    /// Type resolver sharing this resolver's store.
    pub fn types(&mut self) -> &mut TypeResolver<'s, S> {
        &mut self.types
    }

    pub fn resolve_by_name(&mut self, name: &str) -> Result<Method, ResolveError> {
        let method = self
            .types
            .store()
            .find_method_by_name(name)
            .ok_or_else(|| ResolveError::MethodNotFound {
                name: name.to_owned(),
            })?;
        self.resolve(method)
    }

    pub fn resolve(&mut self, method: MethodDefId) -> Result<Method, ResolveError> {
        let store = self.types.store();
        let name = store.method_name(method);
        let signature = store.method_signature(method);

        let return_type = self.types.resolve(&signature.return_type)?;
        let dll_import = store
            .imported_library_name_for(name)
            .unwrap_or_default()
            .to_owned();

        // First row of the range describes the return value.
        let rows = store.param_list(method);
        let names: Vec<&str> = (rows.start.saturating_add(1)..rows.end)
            .map(|row| store.param_name(ParamId::from_raw(row)).unwrap_or_default())
            .collect();

        if names.len() != signature.params.len() {
            return Err(ResolveError::ParameterCountMismatch {
                method: name.to_owned(),
                declared: names.len(),
                signature: signature.params.len(),
            });
        }

        let params = names
            .into_iter()
            .zip(&signature.params)
            .map(|(param, ty)| self.resolve_parameter(param, ty))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            method = name,
            library = dll_import.as_str(),
            params = params.len(),
            "resolved method"
        );

        Ok(Method {
            name: name.to_owned(),
            params,
            return_type,
            dll_import,
        })
    }

    /// A by-address parameter is described by its pointee plus `is_pointer`.
    fn resolve_parameter(
        &mut self,
        name: &str,
        signature: &SignatureType,
    ) -> Result<Parameter, ResolveError> {
        let (ty, is_pointer) = match signature {
            SignatureType::Pointer(inner) => (self.types.resolve(inner)?, true),
            other => (self.types.resolve(other)?, false),
        };
        Ok(Parameter::new(name, ty, is_pointer))
    }
}
