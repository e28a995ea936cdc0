//! Output directory preparation.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use tracing::info;

use crate::error::CliError;

/// Make `dir` an existing, empty directory.
///
/// A missing directory is created. A non-empty one is cleared when
/// `force_clean` is set or `confirm` agrees; otherwise nothing is touched.
pub fn prepare<F>(dir: &Path, force_clean: bool, confirm: F) -> Result<(), CliError>
where
    F: FnOnce(&Path) -> bool,
{
    if !dir.exists() {
        info!(path = %dir.display(), "creating output directory");
        return fs::create_dir_all(dir).map_err(|source| CliError::Write {
            path: dir.to_owned(),
            source,
        });
    }

    if is_empty(dir)? {
        return Ok(());
    }
    if !force_clean && !confirm(dir) {
        return Err(CliError::ClearDeclined(dir.to_owned()));
    }
    info!(path = %dir.display(), "clearing output directory");
    clear(dir)
}

/// Ask on the terminal whether to clear `dir`.
///
/// Only an explicit `y` or `yes` counts as consent. Without a terminal on
/// stdin there is nobody to ask, so the answer is no.
pub fn confirm_on_terminal(dir: &Path) -> bool {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return false;
    }
    eprint!(
        "output directory {} is not empty; clear it? [y/N] ",
        dir.display()
    );
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if stdin.lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_yes(&answer)
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn is_empty(dir: &Path) -> Result<bool, CliError> {
    let mut entries = fs::read_dir(dir).map_err(|source| CliError::Read {
        path: dir.to_owned(),
        source,
    })?;
    Ok(entries.next().is_none())
}

/// Remove everything inside `dir`, keeping `dir` itself.
fn clear(dir: &Path) -> Result<(), CliError> {
    let clear_err = |source: io::Error| CliError::Clear {
        path: dir.to_owned(),
        source,
    };
    for entry in fs::read_dir(dir).map_err(clear_err)? {
        let path = entry.map_err(clear_err)?.path();
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|source| CliError::Clear { path, source })?;
    }
    Ok(())
}
