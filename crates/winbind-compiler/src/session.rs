//! Identifier lookup driving the resolvers and the registry.

use tracing::{debug, warn};
use winbind_core::MetadataStore;

use crate::registry::BindingRegistry;
use crate::resolve::{MethodResolver, ResolveError};

/// Outcome of looking up one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Registered as a method.
    Method(String),
    /// Registered as an aggregate type.
    Type(String),
    /// Names a builtin or typedef alias; nothing to register.
    Builtin(String),
    NotFound,
}

/// One generation run over a metadata store.
pub struct Session<'s, S: MetadataStore + ?Sized> {
    resolver: MethodResolver<'s, S>,
    registry: BindingRegistry,
}

impl<'s, S: MetadataStore + ?Sized> Session<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self {
            resolver: MethodResolver::new(store),
            registry: BindingRegistry::new(),
        }
    }

    /// Resolve `identifier` as a method, falling back to a type.
    ///
    /// Only a name that is neither yields `Lookup::NotFound`; any other
    /// resolution failure is returned and leaves the registry untouched.
    pub fn request(&mut self, identifier: &str) -> Result<Lookup, ResolveError> {
        match self.resolver.resolve_by_name(identifier) {
            Ok(method) => {
                let name = method.name.clone();
                self.registry.register_method(method);
                return Ok(Lookup::Method(name));
            }
            Err(ResolveError::MethodNotFound { .. }) => {}
            Err(err) => return Err(err),
        }

        match self.resolver.types().resolve_named(identifier) {
            Ok(ty) if ty.is_builtin => {
                debug!(identifier, builtin = ty.name.as_str(), "identifier is a builtin");
                Ok(Lookup::Builtin(ty.name))
            }
            Ok(ty) => {
                debug!(identifier, properties = ty.properties.len(), "resolved type");
                let name = ty.name.clone();
                self.registry.register_type(ty);
                Ok(Lookup::Type(name))
            }
            Err(ResolveError::TypeNotFound { .. }) => {
                warn!(identifier, "no method or type with this name");
                Ok(Lookup::NotFound)
            }
            Err(err) => Err(err),
        }
    }

    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }

    /// Close the registry over all registered methods and hand it over.
    pub fn finish(mut self) -> BindingRegistry {
        self.registry.close_over_methods();
        self.registry
    }
}
