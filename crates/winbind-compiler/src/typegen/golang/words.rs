//! Go type expressions and conversions to and from call words.
//!
//! `(*LazyProc).Call` takes and returns `uintptr`s, so every argument is
//! converted to a word and the first result word back to the return type.

use std::collections::BTreeSet;

use winbind_core::element::VOID;
use winbind_core::{Parameter, Type};

/// Imports and helpers a file needs for the code rendered into it.
#[derive(Debug, Default)]
pub(crate) struct Needs {
    pub imports: BTreeSet<&'static str>,
    pub bool_helper: bool,
}

pub(crate) const BOOL_HELPER: &str = "boolToUintptr";

/// Go spelling of `ty`, with one extra pointer level when `by_address`.
pub(crate) fn type_expr(ty: &Type, by_address: bool, needs: &mut Needs) -> String {
    let pointers = usize::from(ty.is_pointer) + usize::from(by_address);
    let mut expr = if ty.is_builtin && ty.name == VOID {
        match pointers {
            0 => "struct{}".to_owned(),
            n => {
                needs.imports.insert("unsafe");
                format!("{}unsafe.Pointer", "*".repeat(n - 1))
            }
        }
    } else {
        format!("{}{}", "*".repeat(pointers), ty.name)
    };
    if ty.is_array {
        expr.insert_str(0, "[]");
    }
    expr
}

/// Expression converting parameter `ident` to a `uintptr` word, or `None`
/// when the parameter cannot be passed.
pub(crate) fn param_word(param: &Parameter, ident: &str, needs: &mut Needs) -> Option<String> {
    let ty = &param.ty;
    if param.is_pointer || ty.is_pointer {
        needs.imports.insert("unsafe");
        return Some(format!("uintptr(unsafe.Pointer({ident}))"));
    }
    if ty.is_array {
        needs.imports.insert("unsafe");
        return Some(format!("uintptr(unsafe.Pointer(unsafe.SliceData({ident})))"));
    }
    if !ty.is_builtin {
        needs.imports.insert("unsafe");
        return Some(format!("uintptr(unsafe.Pointer(&{ident}))"));
    }

    let word = match ty.name.as_str() {
        "void" => return None,
        "bool" => {
            needs.bool_helper = true;
            format!("{BOOL_HELPER}({ident})")
        }
        "float32" => {
            needs.imports.insert("math");
            format!("uintptr(math.Float32bits({ident}))")
        }
        "float64" => {
            needs.imports.insert("math");
            format!("uintptr(math.Float64bits({ident}))")
        }
        "string" => {
            needs.imports.insert("unsafe");
            format!("uintptr(unsafe.Pointer(unsafe.StringData({ident})))")
        }
        _ => format!("uintptr({ident})"),
    };
    Some(word)
}

/// How the first result word becomes the return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReturnConversion {
    /// `void`: call as a statement.
    Discard,
    /// Expression over `r1`.
    Value(String),
}

/// Conversion of `r1` to `ty`, or `None` when `ty` cannot come back in one
/// word.
pub(crate) fn return_conversion(ty: &Type, needs: &mut Needs) -> Option<ReturnConversion> {
    if ty.is_array {
        return None;
    }
    if ty.is_pointer {
        needs.imports.insert("unsafe");
        let target = type_expr(ty, false, needs);
        let expr = if target == "unsafe.Pointer" {
            "unsafe.Pointer(r1)".to_owned()
        } else {
            format!("({target})(unsafe.Pointer(r1))")
        };
        return Some(ReturnConversion::Value(expr));
    }
    if !ty.is_builtin {
        needs.imports.insert("unsafe");
        return Some(ReturnConversion::Value(format!(
            "*(*{})(unsafe.Pointer(&r1))",
            ty.name
        )));
    }

    let expr = match ty.name.as_str() {
        "void" => return Some(ReturnConversion::Discard),
        "string" => return None,
        "bool" => "r1 != 0".to_owned(),
        "float32" => {
            needs.imports.insert("math");
            "math.Float32frombits(uint32(r1))".to_owned()
        }
        "float64" => {
            needs.imports.insert("math");
            "math.Float64frombits(uint64(r1))".to_owned()
        }
        "uintptr" => "r1".to_owned(),
        other => format!("{other}(r1)"),
    };
    Some(ReturnConversion::Value(expr))
}
