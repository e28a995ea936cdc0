//! Core emitter struct and main emit logic.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;
use winbind_core::Type;

use super::config::{Config, TypeLayout};
use super::render::GoFile;
use crate::registry::BindingRegistry;
use crate::typegen::{EmitError, SourceFile};

/// Name of the file holding aggregates under [`TypeLayout::SingleFile`].
pub const TYPES_FILE: &str = "types.go";

/// Go emitter over a closed registry.
pub struct Emitter<'a> {
    pub(super) registry: &'a BindingRegistry,
    pub(super) config: Config,
}

impl<'a> Emitter<'a> {
    pub fn new(registry: &'a BindingRegistry, config: Config) -> Self {
        Self { registry, config }
    }

    /// Render every aggregate and effective method into Go files.
    ///
    /// Type files come first, in registration order, followed by
    /// `<package>.go` with the wrappers.
    pub fn emit(&self) -> Result<Vec<SourceFile>, EmitError> {
        let mut files = Vec::new();
        let aggregates = self.aggregates();

        match self.config.layout {
            TypeLayout::FilePerType => {
                for ty in &aggregates {
                    let mut file = GoFile::new();
                    self.render_struct(&mut file, ty);
                    files.push(SourceFile::new(
                        format!("{}.go", ty.name),
                        self.finish_file(file),
                    ));
                }
            }
            TypeLayout::SingleFile if !aggregates.is_empty() => {
                let mut file = GoFile::new();
                for ty in &aggregates {
                    self.render_struct(&mut file, ty);
                }
                files.push(SourceFile::new(TYPES_FILE, self.finish_file(file)));
            }
            TypeLayout::SingleFile => {}
        }

        let methods = self.registry.effective_methods();
        if !methods.is_empty() {
            let mut file = GoFile::new();
            self.render_methods(&mut file, &methods)?;
            files.push(SourceFile::new(
                format!("{}.go", self.config.package),
                self.finish_file(file),
            ));
        }

        debug!(
            types = aggregates.len(),
            methods = methods.len(),
            files = files.len(),
            "emitted go sources"
        );
        Ok(files)
    }

    /// Registered aggregates plus every aggregate nested in their
    /// properties, one per name.
    ///
    /// A definition with properties replaces an empty placeholder of the
    /// same name but keeps the placeholder's position.
    pub(super) fn aggregates(&self) -> Vec<&'a Type> {
        let mut by_name: IndexMap<&'a str, &'a Type> = IndexMap::new();
        for ty in self.registry.types().values() {
            offer(&mut by_name, ty);
            for nested in ty.nested_aggregates() {
                offer(&mut by_name, nested);
            }
        }
        by_name.into_values().collect()
    }
}

fn offer<'a>(by_name: &mut IndexMap<&'a str, &'a Type>, ty: &'a Type) {
    match by_name.entry(ty.name.as_str()) {
        Entry::Vacant(slot) => {
            slot.insert(ty);
        }
        Entry::Occupied(mut slot) => {
            if slot.get().properties.is_empty() && !ty.properties.is_empty() {
                slot.insert(ty);
            }
        }
    }
}
