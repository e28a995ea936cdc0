//! Collection of resolved methods and the aggregate types they need.

use indexmap::IndexMap;
use winbind_core::{Method, Type};

/// Methods and types gathered during one generation run.
///
/// `types` never holds a builtin. Once [`close_over_methods`] has run, every
/// aggregate named directly by a registered method's return or parameter
/// types is present.
///
/// [`close_over_methods`]: BindingRegistry::close_over_methods
#[derive(Debug, Default, Clone)]
pub struct BindingRegistry {
    methods: Vec<Method>,
    types: IndexMap<String, Type>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `method` and register its non-builtin parameter types.
    pub fn register_method(&mut self, method: Method) {
        for param in &method.params {
            self.register_type(param.ty.clone());
        }
        self.methods.push(method);
    }

    /// Insert or replace `ty` by name. Builtins are ignored.
    pub fn register_type(&mut self, ty: Type) {
        if ty.is_builtin {
            return;
        }
        self.types.insert(ty.name.clone(), ty);
    }

    /// Register the return and parameter types of every method, keeping any
    /// entry already present.
    pub fn close_over_methods(&mut self) {
        for method in &self.methods {
            for ty in method.signature_types() {
                if ty.is_builtin {
                    continue;
                }
                self.types
                    .entry(ty.name.clone())
                    .or_insert_with(|| ty.clone());
            }
        }
    }

    /// Every registration, duplicates included.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn types(&self) -> &IndexMap<String, Type> {
        &self.types
    }

    pub fn get_type(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    /// One method per name: the last registered, in order of first
    /// registration.
    pub fn effective_methods(&self) -> Vec<&Method> {
        let mut latest: IndexMap<&str, &Method> = IndexMap::new();
        for method in &self.methods {
            latest.insert(method.name.as_str(), method);
        }
        latest.into_values().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.types.is_empty()
    }
}
