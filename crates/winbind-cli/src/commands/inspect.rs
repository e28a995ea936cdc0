use std::path::PathBuf;

use winbind_compiler::{Resolution, resolve_identifiers};
use winbind_core::{Colors, Method, Type};

use super::identifiers;
use super::metadata_loader::load_store;
use crate::error::CliError;

pub struct InspectArgs {
    pub metadata: PathBuf,
    pub input: Option<PathBuf>,
    pub identifiers: Vec<String>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: InspectArgs) -> Result<(), CliError> {
    let store = load_store(&args.metadata)?;
    let identifiers = identifiers::collect(args.input.as_deref(), &args.identifiers)?;
    let resolution = resolve_identifiers(&store, &identifiers)?;

    let output = if args.json {
        render_json(&resolution)?
    } else {
        render_text(&resolution, Colors::new(args.color))
    };
    print!("{}", output);
    Ok(())
}

/// Methods, aggregates and unresolved names as an indented listing.
pub fn render_text(resolution: &Resolution, colors: Colors) -> String {
    let registry = &resolution.registry;
    let mut out = String::new();

    let methods = registry.effective_methods();
    if !methods.is_empty() {
        out.push_str(&format!("{}\n", colors.paint(colors.dim, "methods")));
        for method in methods {
            out.push_str(&format!("  {}\n", method_line(method, colors)));
        }
    }

    if !registry.types().is_empty() {
        out.push_str(&format!("{}\n", colors.paint(colors.dim, "types")));
        for ty in registry.types().values() {
            out.push_str(&format!("  {}\n", colors.paint(colors.name, &ty.name)));
            for prop in &ty.properties {
                out.push_str(&format!("    {} {}\n", prop.name, type_ref(&prop.ty, colors)));
            }
        }
    }

    let unresolved = resolution.unresolved();
    if !unresolved.is_empty() {
        out.push_str(&format!("{}\n", colors.paint(colors.dim, "unresolved")));
        for name in unresolved {
            out.push_str(&format!("  {}\n", name));
        }
    }

    out
}

/// The closed model as pretty-printed JSON.
pub fn render_json(resolution: &Resolution) -> Result<String, CliError> {
    let registry = &resolution.registry;
    let value = serde_json::json!({
        "methods": registry.effective_methods(),
        "types": registry.types().values().collect::<Vec<_>>(),
        "unresolved": resolution.unresolved(),
    });
    let mut text = serde_json::to_string_pretty(&value).map_err(CliError::Json)?;
    text.push('\n');
    Ok(text)
}

fn method_line(method: &Method, colors: Colors) -> String {
    let params = method
        .params
        .iter()
        .map(|p| {
            let by_ref = if p.is_pointer { "*" } else { "" };
            format!("{} {}{}", p.name, by_ref, type_ref(&p.ty, colors))
        })
        .collect::<Vec<_>>()
        .join(", ");

    let library = if method.dll_import.is_empty() {
        "?"
    } else {
        method.dll_import.as_str()
    };
    format!(
        "{}({}) {}  {}",
        colors.paint(colors.name, &method.name),
        params,
        type_ref(&method.return_type, colors),
        colors.paint(colors.dim, library),
    )
}

fn type_ref(ty: &Type, colors: Colors) -> String {
    let array = if ty.is_array { "[]" } else { "" };
    let pointer = if ty.is_pointer { "*" } else { "" };
    let color = if ty.is_builtin {
        colors.builtin
    } else {
        colors.name
    };
    format!("{array}{pointer}{}", colors.paint(color, &ty.name))
}
