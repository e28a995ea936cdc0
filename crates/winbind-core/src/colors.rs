//! ANSI color codes for the `inspect` listing.
//!
//! - Cyan: method and type names
//! - Yellow: builtin type names
//! - Dim: table headers, row indices, library names
//! - Reset: return to default

/// ANSI palette for CLI output. Only standard 16-color codes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub name: &'static str,
    pub builtin: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[36m",
        builtin: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        builtin: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in `color` and a trailing reset.
    pub fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() {
            return text.to_owned();
        }
        format!("{color}{text}{}", self.reset)
    }
}
