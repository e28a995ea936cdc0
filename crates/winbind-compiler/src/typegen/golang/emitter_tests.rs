use winbind_core::{ElementType, Method, Parameter, Property, SnapshotBuilder, Type};

use super::*;
use crate::registry::BindingRegistry;
use crate::session::Session;
use crate::test_utils::{el, ptr, win32_store};
use crate::typegen::{EmitError, SourceFile};

fn registry_for(identifiers: &[&str]) -> BindingRegistry {
    let store = win32_store();
    let mut session = Session::new(&store);
    for identifier in identifiers {
        session.request(identifier).unwrap();
    }
    session.finish()
}

fn render(files: &[SourceFile]) -> String {
    files
        .iter()
        .map(|file| {
            format!(
                "--- {}\n{}",
                file.path.display(),
                file.contents.replace('\t', "    ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bare() -> Config {
    Config::new().header(false)
}

fn method(name: &str, params: Vec<Parameter>, return_type: Type, library: &str) -> Method {
    Method {
        name: name.to_owned(),
        params,
        return_type,
        dll_import: library.to_owned(),
    }
}

#[test]
fn get_cursor_pos() {
    let registry = registry_for(&["GetCursorPos"]);

    let files = emit(&registry, Config::new()).unwrap();

    insta::assert_snapshot!(render(&files), @r#"
    --- POINT.go
    // Code generated by winbind. DO NOT EDIT.

    package PInvoke

    type POINT struct {
        x int32
        y int32
    }

    --- PInvoke.go
    // Code generated by winbind. DO NOT EDIT.

    package PInvoke

    import (
        "syscall"
        "unsafe"
    )

    var (
        moduser32 = syscall.NewLazyDLL("USER32.dll")

        procGetCursorPos = moduser32.NewProc("GetCursorPos")
    )

    func GetCursorPos(lpPoint *POINT) uint32 {
        r1, _, _ := procGetCursorPos.Call(uintptr(unsafe.Pointer(lpPoint)))
        return uint32(r1)
    }
    "#);
}

#[test]
fn libraries_are_loaded_once() {
    let registry = registry_for(&["Beep", "Sleep", "GetCursorPos"]);

    let files = emit(&registry, bare()).unwrap();

    let methods: Vec<_> = files
        .into_iter()
        .filter(|file| file.path.as_os_str() == "PInvoke.go")
        .collect();
    insta::assert_snapshot!(render(&methods), @r#"
    --- PInvoke.go
    package PInvoke

    import (
        "syscall"
        "unsafe"
    )

    var (
        modkernel32 = syscall.NewLazyDLL("KERNEL32.dll")
        moduser32   = syscall.NewLazyDLL("USER32.dll")

        procBeep         = modkernel32.NewProc("Beep")
        procSleep        = modkernel32.NewProc("Sleep")
        procGetCursorPos = moduser32.NewProc("GetCursorPos")
    )

    func Beep(dwFreq uint32, dwDuration uint32) uint32 {
        r1, _, _ := procBeep.Call(uintptr(dwFreq), uintptr(dwDuration))
        return uint32(r1)
    }

    func Sleep(dwMilliseconds uint32) {
        procSleep.Call(uintptr(dwMilliseconds))
    }

    func GetCursorPos(lpPoint *POINT) uint32 {
        r1, _, _ := procGetCursorPos.Call(uintptr(unsafe.Pointer(lpPoint)))
        return uint32(r1)
    }
    "#);
}

#[test]
fn single_types_file_with_nested_aggregates() {
    let registry = registry_for(&["GetWindowPlacement", "MonitorFromPoint"]);
    let config = bare().package("win32").layout(TypeLayout::SingleFile);

    let files = emit(&registry, config).unwrap();

    insta::assert_snapshot!(render(&files), @r#"
    --- types.go
    package win32

    type WINDOWPLACEMENT struct {
        length           uint32
        flags            uint32
        showCmd          uint32
        ptMinPosition    POINT
        ptMaxPosition    POINT
        rcNormalPosition RECT
    }

    type POINT struct {
        x int32
        y int32
    }

    type RECT struct {
        left   int32
        top    int32
        right  int32
        bottom int32
    }

    type HMONITOR struct {
        Value int
    }

    --- win32.go
    package win32

    import (
        "syscall"
        "unsafe"
    )

    var (
        moduser32 = syscall.NewLazyDLL("USER32.dll")

        procGetWindowPlacement = moduser32.NewProc("GetWindowPlacement")
        procMonitorFromPoint   = moduser32.NewProc("MonitorFromPoint")
    )

    func GetWindowPlacement(hWnd uintptr, lpwndpl *WINDOWPLACEMENT) uint32 {
        r1, _, _ := procGetWindowPlacement.Call(uintptr(hWnd), uintptr(unsafe.Pointer(lpwndpl)))
        return uint32(r1)
    }

    func MonitorFromPoint(pt POINT, dwFlags uint32) HMONITOR {
        r1, _, _ := procMonitorFromPoint.Call(uintptr(unsafe.Pointer(&pt)), uintptr(dwFlags))
        return *(*HMONITOR)(unsafe.Pointer(&r1))
    }
    "#);
}

#[test]
fn word_conversions() {
    let mut b = SnapshotBuilder::new();
    b.struct_def(
        "POINT",
        "",
        vec![("x", el(ElementType::I4)), ("y", el(ElementType::I4))],
    );
    let point = b.named("POINT", "");
    b.method(
        "Mix",
        el(ElementType::R8),
        vec![
            ("flag", el(ElementType::Boolean)),
            ("scale", el(ElementType::R4)),
            ("ratio", el(ElementType::R8)),
            ("text", el(ElementType::String)),
            ("data", ptr(el(ElementType::Void))),
            ("type", point),
        ],
    );
    b.import("Mix", "mix.dll");
    let store = b.into_store().unwrap();
    let mut session = Session::new(&store);
    session.request("Mix").unwrap();
    let registry = session.finish();

    let files = emit(&registry, bare()).unwrap();

    insta::assert_snapshot!(render(&files[1..]), @r#"
    --- PInvoke.go
    package PInvoke

    import (
        "math"
        "syscall"
        "unsafe"
    )

    var (
        modmix = syscall.NewLazyDLL("mix.dll")

        procMix = modmix.NewProc("Mix")
    )

    func Mix(flag bool, scale float32, ratio float64, text string, data unsafe.Pointer, type_ POINT) float64 {
        r1, _, _ := procMix.Call(boolToUintptr(flag), uintptr(math.Float32bits(scale)), uintptr(math.Float64bits(ratio)), uintptr(unsafe.Pointer(unsafe.StringData(text))), uintptr(unsafe.Pointer(data)), uintptr(unsafe.Pointer(&type_)))
        return math.Float64frombits(uint64(r1))
    }

    func boolToUintptr(v bool) uintptr {
        if v {
            return 1
        }
        return 0
    }
    "#);
}

#[test]
fn expanded_definition_replaces_placeholder() {
    let placeholder = Type::aggregate("NODE", vec![]).into_pointer();
    let node = Type::aggregate(
        "NODE",
        vec![
            Property::new("value", Type::builtin("int32")),
            Property::new("next", placeholder.clone()),
        ],
    );
    let mut registry = BindingRegistry::new();
    registry.register_type(Type::aggregate(
        "WRAP",
        vec![Property::new("head", placeholder)],
    ));
    registry.register_type(node);
    registry.register_type(Type::aggregate("EMPTY", vec![]));

    let files = emit(&registry, bare().layout(TypeLayout::SingleFile)).unwrap();

    insta::assert_snapshot!(render(&files), @r"
    --- types.go
    package PInvoke

    type WRAP struct {
        head *NODE
    }

    type NODE struct {
        value int32
        next  *NODE
    }

    type EMPTY struct{}
    ");
}

#[test]
fn void_pointer_field_imports_unsafe() {
    let mut registry = BindingRegistry::new();
    registry.register_type(Type::aggregate(
        "BUFFER",
        vec![
            Property::new("data", Type::builtin("void").into_pointer()),
            Property::new("size", Type::builtin("uintptr")),
            Property::new("bytes", Type::builtin("uint8").into_array()),
        ],
    ));

    let files = emit(&registry, bare()).unwrap();

    insta::assert_snapshot!(render(&files), @r#"
    --- BUFFER.go
    package PInvoke

    import "unsafe"

    type BUFFER struct {
        data  unsafe.Pointer
        size  uintptr
        bytes []uint8
    }
    "#);
}

#[test]
fn pointer_return() {
    let point = Type::aggregate("POINT", vec![Property::new("x", Type::builtin("int32"))]);
    let mut registry = BindingRegistry::new();
    registry.register_method(method(
        "GetPoint",
        vec![Parameter::new("count", Type::builtin("uint32"), true)],
        point.into_pointer(),
        "points.dll",
    ));
    registry.close_over_methods();

    let files = emit(&registry, bare()).unwrap();

    let methods = &files[1].contents;
    assert!(methods.contains("func GetPoint(count *uint32) *POINT {"));
    assert!(methods.contains("return (*POINT)(unsafe.Pointer(r1))"));
}

#[test]
fn last_registration_of_a_method_wins() {
    let mut registry = BindingRegistry::new();
    registry.register_method(method("Beep", vec![], Type::builtin("int32"), "OLD.dll"));
    registry.register_method(method("Beep", vec![], Type::builtin("uint32"), "KERNEL32.dll"));

    let files = emit(&registry, bare()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].contents.contains("modkernel32.NewProc(\"Beep\")"));
    assert!(!files[0].contents.contains("OLD.dll"));
    assert!(files[0].contents.contains("return uint32(r1)"));
}

#[test]
fn missing_library() {
    let mut registry = BindingRegistry::new();
    registry.register_method(method("Orphan", vec![], Type::builtin("void"), ""));

    let err = emit(&registry, bare()).unwrap_err();

    assert!(matches!(err, EmitError::MissingLibrary { ref method } if method == "Orphan"));
}

#[test]
fn void_parameter_by_value() {
    let mut registry = BindingRegistry::new();
    registry.register_method(method(
        "Odd",
        vec![Parameter::new("nothing", Type::builtin("void"), false)],
        Type::builtin("void"),
        "odd.dll",
    ));

    let err = emit(&registry, bare()).unwrap_err();

    insta::assert_snapshot!(err, @"parameter `nothing` of `Odd` cannot be passed as a word (void)");
}

#[test]
fn string_return() {
    let mut registry = BindingRegistry::new();
    registry.register_method(method("Name", vec![], Type::builtin("string"), "odd.dll"));

    let err = emit(&registry, bare()).unwrap_err();

    assert!(matches!(err, EmitError::UnsupportedReturn { ref ty, .. } if ty == "string"));
}

#[test]
fn empty_registry_emits_nothing() {
    let registry = BindingRegistry::new();

    assert!(emit(&registry, Config::new()).unwrap().is_empty());
    let single = Config::new().layout(TypeLayout::SingleFile);
    assert!(emit(&registry, single).unwrap().is_empty());
}

#[test]
fn library_spellings_get_distinct_vars() {
    let mut registry = BindingRegistry::new();
    registry.register_method(method("Beep", vec![], Type::builtin("void"), "USER32.dll"));
    registry.register_method(method("Sleep", vec![], Type::builtin("void"), "user32.dll"));
    registry.register_method(method("Other", vec![], Type::builtin("void"), "user-32.dll"));

    let files = emit(&registry, bare()).unwrap();

    let go = &files[0].contents;
    assert!(go.contains("moduser32  = syscall.NewLazyDLL(\"USER32.dll\")"));
    assert!(go.contains("moduser322 = syscall.NewLazyDLL(\"user32.dll\")"));
    assert!(go.contains("moduser323 = syscall.NewLazyDLL(\"user-32.dll\")"));
    assert!(go.contains("procSleep = moduser322.NewProc(\"Sleep\")"));
    assert!(go.contains("procOther = moduser323.NewProc(\"Other\")"));
}
