//! Output rendering methods.

use indexmap::IndexMap;
use winbind_core::{Method, Type};

use super::Emitter;
use super::naming::{go_ident, module_var, param_ident, proc_var, unique_ident};
use super::words::{
    BOOL_HELPER, Needs, ReturnConversion, param_word, return_conversion, type_expr,
};
use crate::typegen::EmitError;

pub(crate) const GENERATED_HEADER: &str = "// Code generated by winbind. DO NOT EDIT.";

/// Declarations destined for one Go file.
#[derive(Debug, Default)]
pub(super) struct GoFile {
    needs: Needs,
    decls: Vec<String>,
}

impl GoFile {
    pub(super) fn new() -> Self {
        Self::default()
    }
}

impl Emitter<'_> {
    pub(super) fn finish_file(&self, mut file: GoFile) -> String {
        if file.needs.bool_helper {
            file.decls.push(bool_helper());
        }

        let mut out = String::new();
        if self.config.header {
            out.push_str(GENERATED_HEADER);
            out.push_str("\n\n");
        }
        out.push_str(&format!("package {}\n", self.config.package));

        let imports: Vec<&str> = file.needs.imports.iter().copied().collect();
        match imports.as_slice() {
            [] => {}
            [import] => out.push_str(&format!("\nimport \"{import}\"\n")),
            _ => {
                out.push_str("\nimport (\n");
                for import in &imports {
                    out.push_str(&format!("\t\"{import}\"\n"));
                }
                out.push_str(")\n");
            }
        }

        for decl in &file.decls {
            out.push('\n');
            out.push_str(decl);
        }
        out
    }

    pub(super) fn render_struct(&self, file: &mut GoFile, ty: &Type) {
        if ty.properties.is_empty() {
            file.decls.push(format!("type {} struct{{}}\n", ty.name));
            return;
        }

        let fields: Vec<(String, String)> = ty
            .properties
            .iter()
            .map(|prop| {
                (
                    go_ident(&prop.name),
                    type_expr(&prop.ty, false, &mut file.needs),
                )
            })
            .collect();
        let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        let mut decl = format!("type {} struct {{\n", ty.name);
        for (name, expr) in &fields {
            decl.push_str(&format!("\t{name:width$} {expr}\n"));
        }
        decl.push_str("}\n");
        file.decls.push(decl);
    }

    pub(super) fn render_methods(
        &self,
        file: &mut GoFile,
        methods: &[&Method],
    ) -> Result<(), EmitError> {
        let mut modules: IndexMap<&str, String> = IndexMap::new();
        for method in methods {
            if method.dll_import.is_empty() {
                return Err(EmitError::MissingLibrary {
                    method: method.name.clone(),
                });
            }
            if modules.contains_key(method.dll_import.as_str()) {
                continue;
            }
            // Spellings of one library can reduce to the same variable.
            let taken: Vec<&str> = modules.values().map(String::as_str).collect();
            let var = unique_ident(module_var(&method.dll_import), &taken);
            modules.insert(method.dll_import.as_str(), var);
        }

        file.needs.imports.insert("syscall");
        file.decls.push(render_lazy_vars(&modules, methods));
        for method in methods {
            let decl = render_wrapper(method, &mut file.needs)?;
            file.decls.push(decl);
        }
        Ok(())
    }
}

/// `var` block loading each library once and resolving each procedure.
fn render_lazy_vars(modules: &IndexMap<&str, String>, methods: &[&Method]) -> String {
    let module_width = modules.values().map(String::len).max().unwrap_or(0);
    let procs: Vec<(String, &str, &str)> = methods
        .iter()
        .map(|m| {
            (
                proc_var(&m.name),
                modules[m.dll_import.as_str()].as_str(),
                m.name.as_str(),
            )
        })
        .collect();
    let proc_width = procs.iter().map(|(var, _, _)| var.len()).max().unwrap_or(0);

    let mut out = String::from("var (\n");
    for (library, var) in modules {
        out.push_str(&format!(
            "\t{var:module_width$} = syscall.NewLazyDLL(\"{library}\")\n"
        ));
    }
    out.push('\n');
    for (var, module, name) in &procs {
        out.push_str(&format!(
            "\t{var:proc_width$} = {module}.NewProc(\"{name}\")\n"
        ));
    }
    out.push_str(")\n");
    out
}

fn render_wrapper(method: &Method, needs: &mut Needs) -> Result<String, EmitError> {
    let mut params = Vec::with_capacity(method.params.len());
    let mut words = Vec::with_capacity(method.params.len());
    for (position, param) in method.params.iter().enumerate() {
        let ident = param_ident(&param.name, position);
        let word = param_word(param, &ident, needs).ok_or_else(|| {
            EmitError::UnsupportedParameter {
                method: method.name.clone(),
                param: param.name.clone(),
                ty: param.ty.name.clone(),
            }
        })?;
        params.push(format!(
            "{ident} {}",
            type_expr(&param.ty, param.is_pointer, needs)
        ));
        words.push(word);
    }

    let conversion = return_conversion(&method.return_type, needs).ok_or_else(|| {
        EmitError::UnsupportedReturn {
            method: method.name.clone(),
            ty: method.return_type.name.clone(),
        }
    })?;

    let call = format!("{}.Call({})", proc_var(&method.name), words.join(", "));
    let name = go_ident(&method.name);
    let params = params.join(", ");

    let out = match conversion {
        ReturnConversion::Discard => {
            format!("func {name}({params}) {{\n\t{call}\n}}\n")
        }
        ReturnConversion::Value(expr) => {
            let ret = type_expr(&method.return_type, false, needs);
            format!("func {name}({params}) {ret} {{\n\tr1, _, _ := {call}\n\treturn {expr}\n}}\n")
        }
    };
    Ok(out)
}

fn bool_helper() -> String {
    format!("func {BOOL_HELPER}(v bool) uintptr {{\n\tif v {{\n\t\treturn 1\n\t}}\n\treturn 0\n}}\n")
}
