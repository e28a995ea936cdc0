//! Go identifiers for model names.

const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// `name`, with a trailing underscore when it is a Go keyword.
pub(crate) fn go_ident(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("{name}_")
    } else {
        name.to_owned()
    }
}

/// Parameter name, falling back to a positional one when metadata has none.
pub(crate) fn param_ident(name: &str, position: usize) -> String {
    if name.is_empty() {
        format!("arg{position}")
    } else {
        go_ident(name)
    }
}

/// Package variable holding the lazily loaded library.
///
/// `USER32.dll` becomes `moduser32`.
pub(crate) fn module_var(library: &str) -> String {
    let stem = match library.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case("dll") => stem,
        _ => library,
    };
    let stem: String = stem
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    format!("mod{stem}")
}

/// `base`, or `base` with the first free numeric suffix when `taken`
/// already holds it.
pub(crate) fn unique_ident(base: String, taken: &[&str]) -> String {
    if !taken.contains(&base.as_str()) {
        return base;
    }
    (2..)
        .map(|n| format!("{base}{n}"))
        .find(|candidate| !taken.contains(&candidate.as_str()))
        .unwrap_or(base)
}

pub(crate) fn proc_var(method: &str) -> String {
    format!("proc{method}")
}
