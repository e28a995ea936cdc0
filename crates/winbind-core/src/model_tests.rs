use crate::{Method, Parameter, Property, Type};

fn point() -> Type {
    Type::aggregate(
        "POINT",
        vec![
            Property::new("X", Type::builtin("int32")),
            Property::new("Y", Type::builtin("int32")),
        ],
    )
}

#[test]
fn builtin_has_no_properties() {
    let ty = Type::builtin("int32");

    assert!(ty.is_builtin);
    assert!(ty.properties.is_empty());
    assert!(!ty.is_aggregate());
}

#[test]
fn pointer_and_array_copies_are_independent() {
    let inner = point();

    let mut ptr = inner.to_pointer();
    let arr = inner.to_array();

    assert!(ptr.is_pointer && !ptr.is_array);
    assert!(arr.is_array && !arr.is_pointer);
    assert!(!inner.is_pointer && !inner.is_array);

    ptr.is_array = true;
    ptr.properties.clear();
    assert!(!arr.is_pointer);
    assert_eq!(arr.properties.len(), 2);
    assert_eq!(inner, point());
}

#[test]
fn nested_aggregates_walks_depth_first() {
    let rect = Type::aggregate(
        "RECT_PAIR",
        vec![
            Property::new("a", point()),
            Property::new("n", Type::builtin("uint32")),
            Property::new("b", point().into_pointer()),
        ],
    );

    let names: Vec<_> = rect.nested_aggregates().iter().map(|t| &t.name).collect();
    assert_eq!(names, ["POINT", "POINT"]);
}

#[test]
fn signature_types_lists_return_first() {
    let method = Method {
        name: "GetCursorPos".into(),
        params: vec![Parameter::new("lpPoint", point(), true)],
        return_type: Type::builtin("int32"),
        dll_import: "USER32.dll".into(),
    };

    let names: Vec<_> = method.signature_types().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["int32", "POINT"]);
}

#[test]
fn serializes_type_field_as_type() {
    let prop = Property::new("X", Type::builtin("int32"));
    let json = serde_json::to_value(&prop).unwrap();

    assert_eq!(json["name"], "X");
    assert_eq!(json["type"]["name"], "int32");
    assert_eq!(json["type"]["is_builtin"], true);
}
