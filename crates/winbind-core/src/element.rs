//! Signature element kinds and the builtin names they map to.
//!
//! Both tables here are compile-time constants. `ElementType::builtin_name`
//! is an exhaustive match, so adding a kind without a builtin name does not
//! build.

use serde::{Deserialize, Serialize};

/// Primitive signature element kinds (ECMA-335 `ELEMENT_TYPE_*` codes).
///
/// Structural kinds (pointers, arrays, value types, classes) are not listed
/// here; they are variants of [`crate::SignatureType`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum ElementType {
    Void = 0x01,
    Boolean = 0x02,
    Char = 0x03,
    I1 = 0x04,
    U1 = 0x05,
    I2 = 0x06,
    U2 = 0x07,
    I4 = 0x08,
    U4 = 0x09,
    I8 = 0x0a,
    U8 = 0x0b,
    R4 = 0x0c,
    R8 = 0x0d,
    String = 0x0e,
    /// Native-sized signed integer.
    ISize = 0x18,
    /// Native-sized unsigned integer.
    USize = 0x19,
}

/// `ELEMENT_TYPE_PTR`.
pub const ELEMENT_PTR: u8 = 0x0f;
/// `ELEMENT_TYPE_VALUETYPE`.
pub const ELEMENT_VALUETYPE: u8 = 0x11;
/// `ELEMENT_TYPE_CLASS`.
pub const ELEMENT_CLASS: u8 = 0x12;
/// `ELEMENT_TYPE_ARRAY`.
pub const ELEMENT_ARRAY: u8 = 0x14;
/// `ELEMENT_TYPE_SZARRAY`.
pub const ELEMENT_SZARRAY: u8 = 0x1d;

/// Builtin name produced for `ElementType::Void`.
pub const VOID: &str = "void";

impl ElementType {
    /// Every primitive kind, in code order.
    pub const ALL: [Self; 16] = [
        Self::Void,
        Self::Boolean,
        Self::Char,
        Self::I1,
        Self::U1,
        Self::I2,
        Self::U2,
        Self::I4,
        Self::U4,
        Self::I8,
        Self::U8,
        Self::R4,
        Self::R8,
        Self::String,
        Self::ISize,
        Self::USize,
    ];

    /// Convert from a raw element type code.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == v)
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Builtin type name for this kind.
    pub fn builtin_name(self) -> &'static str {
        match self {
            Self::Void => VOID,
            Self::Boolean => "bool",
            Self::Char => "uint16",
            Self::I1 => "int8",
            Self::U1 => "uint8",
            Self::I2 => "int16",
            Self::U2 => "uint16",
            Self::I4 => "int32",
            Self::U4 => "uint32",
            Self::I8 => "int64",
            Self::U8 => "uint64",
            Self::R4 => "float32",
            Self::R8 => "float64",
            Self::String => "string",
            Self::ISize => "int",
            Self::USize => "uintptr",
        }
    }

    /// Snapshot spelling (`"I4"`, `"BOOLEAN"`, ...).
    pub fn metadata_name(self) -> &'static str {
        match self {
            Self::Void => "VOID",
            Self::Boolean => "BOOLEAN",
            Self::Char => "CHAR",
            Self::I1 => "I1",
            Self::U1 => "U1",
            Self::I2 => "I2",
            Self::U2 => "U2",
            Self::I4 => "I4",
            Self::U4 => "U4",
            Self::I8 => "I8",
            Self::U8 => "U8",
            Self::R4 => "R4",
            Self::R8 => "R8",
            Self::String => "STRING",
            Self::ISize => "I",
            Self::USize => "U",
        }
    }
}

/// Names declared by `typedef` in the native headers that stand for a
/// builtin rather than an aggregate, with the builtin they map to.
pub const TYPEDEF_ALIASES: &[(&str, &str)] = &[
    ("BOOL", "uint32"),
    ("BOOLEAN", "uint8"),
    ("HRESULT", "int32"),
    ("NTSTATUS", "int32"),
    ("HANDLE", "uintptr"),
    ("HWND", "uintptr"),
    ("HINSTANCE", "uintptr"),
    ("HMODULE", "uintptr"),
    ("WPARAM", "uintptr"),
    ("LPARAM", "uintptr"),
    ("LRESULT", "uintptr"),
];

/// Builtin name for a typedef alias, if `name` is one.
pub fn typedef_alias(name: &str) -> Option<&'static str> {
    TYPEDEF_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, builtin)| *builtin)
}
