//! Identifier list loading.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use crate::error::CliError;

/// Identifiers from one-per-line text.
///
/// Lines are trimmed; blank lines and `#` comments are skipped and repeats
/// keep their first position.
pub fn parse(text: &str) -> IndexSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

/// Identifiers from `input` (a file, or stdin for `-`) followed by the inline
/// ones.
pub fn collect(input: Option<&Path>, inline: &[String]) -> Result<Vec<String>, CliError> {
    let mut identifiers = match input {
        Some(path) => parse(&read_input(path)?),
        None => IndexSet::new(),
    };
    identifiers.extend(inline.iter().map(|s| s.trim().to_owned()).filter(|s| !s.is_empty()));

    if identifiers.is_empty() {
        return Err(CliError::NoIdentifiers);
    }
    Ok(identifiers.into_iter().collect())
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| CliError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}
