//! Destinations for generated files.

use std::fs;
use std::path::{Path, PathBuf};

use super::EmitError;

/// Generated file, with `path` relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

pub trait OutputSink {
    fn write_file(&mut self, file: &SourceFile) -> Result<(), EmitError>;

    fn write_all(&mut self, files: &[SourceFile]) -> Result<(), EmitError> {
        files.iter().try_for_each(|file| self.write_file(file))
    }
}

/// Writes files below a root directory, creating it on first write.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for DirectorySink {
    fn write_file(&mut self, file: &SourceFile) -> Result<(), EmitError> {
        let path = self.root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| EmitError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &file.contents).map_err(|source| EmitError::Write { path, source })
    }
}

/// Keeps files in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Vec<SourceFile>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.contents.as_str())
    }

    pub fn into_files(self) -> Vec<SourceFile> {
        self.files
    }
}

impl OutputSink for MemorySink {
    fn write_file(&mut self, file: &SourceFile) -> Result<(), EmitError> {
        self.files.push(file.clone());
        Ok(())
    }
}
