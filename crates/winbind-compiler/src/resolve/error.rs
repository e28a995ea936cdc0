/// Failure to resolve a method or type from metadata.
///
/// Errors abort the whole method or type being resolved; no partial model
/// value is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("method `{name}` not found")]
    MethodNotFound { name: String },

    #[error("type `{}` not found", qualified(.namespace, .name))]
    TypeNotFound { name: String, namespace: String },

    #[error("field `{field}` has no readable signature")]
    FieldSignature { field: String },

    #[error("cannot resolve type of property `{property}`")]
    PropertyType {
        property: String,
        #[source]
        source: Box<ResolveError>,
    },

    /// An aggregate contains itself without an intervening pointer.
    #[error("type `{name}` contains itself by value ({path})")]
    CyclicType { name: String, path: String },

    #[error("unsupported signature element 0x{code:02x}")]
    UnsupportedElement { code: u8 },

    #[error("type reference {index} does not exist")]
    DanglingTypeRef { index: u32 },

    #[error(
        "method `{method}` declares {declared} parameter names but its signature has {signature}"
    )]
    ParameterCountMismatch {
        method: String,
        declared: usize,
        signature: usize,
    },
}

impl ResolveError {
    /// Innermost error below any chain of `PropertyType` wrappers.
    pub fn root_cause(&self) -> &ResolveError {
        let mut current = self;
        while let ResolveError::PropertyType { source, .. } = current {
            current = source;
        }
        current
    }

    /// Property names from the outermost wrapper down to the root cause.
    pub fn property_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let ResolveError::PropertyType { property, source } = current {
            path.push(property.as_str());
            current = source;
        }
        path
    }
}

fn qualified(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_owned()
    } else {
        format!("{namespace}.{name}")
    }
}
