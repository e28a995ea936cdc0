use winbind_core::{Method, Parameter, Property, Type};

use crate::registry::BindingRegistry;

fn point() -> Type {
    Type::aggregate(
        "POINT",
        vec![
            Property::new("x", Type::builtin("int32")),
            Property::new("y", Type::builtin("int32")),
        ],
    )
}

fn method(name: &str, params: Vec<Parameter>, return_type: Type) -> Method {
    Method {
        name: name.to_owned(),
        params,
        return_type,
        dll_import: "USER32.dll".to_owned(),
    }
}

fn type_names(registry: &BindingRegistry) -> Vec<&str> {
    registry.types().keys().map(String::as_str).collect()
}

#[test]
fn register_method_adds_parameter_aggregates() {
    let mut registry = BindingRegistry::new();
    let hmonitor = Type::aggregate("HMONITOR", vec![]);

    registry.register_method(method(
        "MonitorFromPoint",
        vec![
            Parameter::new("pt", point(), false),
            Parameter::new("dwFlags", Type::builtin("uint32"), false),
        ],
        hmonitor,
    ));

    assert_eq!(registry.methods().len(), 1);
    assert_eq!(type_names(&registry), ["POINT"]);
}

#[test]
fn builtins_are_never_stored() {
    let mut registry = BindingRegistry::new();

    registry.register_type(Type::builtin("int32"));
    registry.register_type(Type::builtin("uintptr").into_pointer());

    assert!(registry.types().is_empty());
    assert!(registry.is_empty());
}

#[test]
fn register_type_overwrites_by_name() {
    let mut registry = BindingRegistry::new();
    registry.register_type(Type::aggregate("POINT", vec![]));
    registry.register_type(Type::aggregate("RECT", vec![]));

    registry.register_type(point());

    assert_eq!(type_names(&registry), ["POINT", "RECT"]);
    assert_eq!(registry.get_type("POINT").unwrap().properties.len(), 2);
}

#[test]
fn closure_reaches_return_types() {
    let mut registry = BindingRegistry::new();
    registry.register_method(method(
        "MonitorFromPoint",
        vec![Parameter::new("pt", point(), false)],
        Type::aggregate("HMONITOR", vec![Property::new("Value", Type::builtin("int"))]),
    ));
    assert!(registry.get_type("HMONITOR").is_none());

    registry.close_over_methods();

    for method in registry.methods() {
        for ty in method.signature_types().filter(|ty| !ty.is_builtin) {
            assert!(registry.get_type(&ty.name).is_some(), "{} missing", ty.name);
        }
    }
    assert_eq!(type_names(&registry), ["POINT", "HMONITOR"]);
}

#[test]
fn closure_is_idempotent() {
    let mut registry = BindingRegistry::new();
    registry.register_method(method(
        "GetCursorPos",
        vec![Parameter::new("lpPoint", point(), true)],
        Type::builtin("uint32"),
    ));

    registry.close_over_methods();
    let once = registry.clone();
    registry.close_over_methods();

    assert_eq!(registry.types(), once.types());
    assert_eq!(registry.methods(), once.methods());
}

#[test]
fn closure_keeps_existing_entries() {
    let mut registry = BindingRegistry::new();
    let detailed = point();
    registry.register_type(detailed.clone());
    registry.register_method(method(
        "WindowFromPoint",
        vec![],
        Type::aggregate("POINT", vec![]).into_pointer(),
    ));

    registry.close_over_methods();

    assert_eq!(registry.get_type("POINT"), Some(&detailed));
}

#[test]
fn effective_methods_keep_last_registration() {
    let mut registry = BindingRegistry::new();
    registry.register_method(method("Beep", vec![], Type::builtin("uint32")));
    registry.register_method(method("Sleep", vec![], Type::builtin("void")));
    registry.register_method(method("Beep", vec![], Type::builtin("int32")));

    let effective = registry.effective_methods();

    assert_eq!(registry.methods().len(), 3);
    let summary: Vec<_> = effective
        .iter()
        .map(|m| (m.name.as_str(), m.return_type.name.as_str()))
        .collect();
    assert_eq!(summary, [("Beep", "int32"), ("Sleep", "void")]);
}
