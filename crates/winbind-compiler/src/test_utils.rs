//! Metadata fixtures shared by the resolver, registry and emitter tests.

use winbind_core::{ElementType, SignatureType, SnapshotBuilder, TableStore};

pub const FOUNDATION: &str = "Windows.Win32.Foundation";
pub const GDI: &str = "Windows.Win32.Graphics.Gdi";
pub const WINDOWS: &str = "Windows.Win32.UI.WindowsAndMessaging";

pub fn el(kind: ElementType) -> SignatureType {
    SignatureType::Element(kind)
}

pub fn ptr(inner: SignatureType) -> SignatureType {
    SignatureType::pointer(inner)
}

/// Slice of the Win32 metadata around cursor and window placement APIs.
pub fn win32_builder() -> SnapshotBuilder {
    let mut b = SnapshotBuilder::new();

    b.struct_def("BOOL", FOUNDATION, vec![("Value", el(ElementType::I4))]);
    b.struct_def("HWND", FOUNDATION, vec![("Value", el(ElementType::ISize))]);
    b.struct_def("HMONITOR", GDI, vec![("Value", el(ElementType::ISize))]);
    b.struct_def(
        "POINT",
        FOUNDATION,
        vec![("x", el(ElementType::I4)), ("y", el(ElementType::I4))],
    );
    b.struct_def(
        "RECT",
        FOUNDATION,
        vec![
            ("left", el(ElementType::I4)),
            ("top", el(ElementType::I4)),
            ("right", el(ElementType::I4)),
            ("bottom", el(ElementType::I4)),
        ],
    );
    let point = b.named("POINT", FOUNDATION);
    let rect = b.named("RECT", FOUNDATION);
    b.struct_def(
        "WINDOWPLACEMENT",
        WINDOWS,
        vec![
            ("length", el(ElementType::U4)),
            ("flags", el(ElementType::U4)),
            ("showCmd", el(ElementType::U4)),
            ("ptMinPosition", point.clone()),
            ("ptMaxPosition", point.clone()),
            ("rcNormalPosition", rect),
        ],
    );

    let bool_ = b.named("BOOL", FOUNDATION);
    let hwnd = b.named("HWND", FOUNDATION);
    let hmonitor = b.named("HMONITOR", GDI);
    let placement = b.named("WINDOWPLACEMENT", WINDOWS);

    b.method(
        "GetCursorPos",
        bool_.clone(),
        vec![("lpPoint", ptr(point.clone()))],
    );
    b.import("GetCursorPos", "USER32.dll");

    b.method(
        "GetWindowPlacement",
        bool_.clone(),
        vec![("hWnd", hwnd), ("lpwndpl", ptr(placement))],
    );
    b.import("GetWindowPlacement", "USER32.dll");

    b.method(
        "MonitorFromPoint",
        hmonitor,
        vec![("pt", point), ("dwFlags", el(ElementType::U4))],
    );
    b.import("MonitorFromPoint", "USER32.dll");

    b.method(
        "Beep",
        bool_,
        vec![
            ("dwFreq", el(ElementType::U4)),
            ("dwDuration", el(ElementType::U4)),
        ],
    );
    b.import("Beep", "KERNEL32.dll");

    b.method(
        "Sleep",
        el(ElementType::Void),
        vec![("dwMilliseconds", el(ElementType::U4))],
    );
    b.import("Sleep", "KERNEL32.dll");

    b
}

pub fn win32_store() -> TableStore {
    win32_builder().into_store().unwrap()
}
