//! Configuration types for Go emission.

/// How aggregate declarations are split across files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeLayout {
    /// `<TypeName>.go` per aggregate
    #[default]
    FilePerType,
    /// Every aggregate in `types.go`
    SingleFile,
}

/// Configuration for Go emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Go package clause for every file
    pub(crate) package: String,
    /// File split for aggregate declarations
    pub(crate) layout: TypeLayout,
    /// Whether to start files with the generated-code marker
    pub(crate) header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: "PInvoke".to_owned(),
            layout: TypeLayout::default(),
            header: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package name.
    pub fn package(mut self, name: impl Into<String>) -> Self {
        self.package = name.into();
        self
    }

    /// Set how aggregates are split across files.
    pub fn layout(mut self, layout: TypeLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set whether to emit the `// Code generated` header.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package
    }
}
