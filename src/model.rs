//! Document model.

use crate::detect::{self, DocumentFormat};
use std::path::{Path, PathBuf};

/// A document on disk: its path plus the format inferred from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Location of the file
    pub path: PathBuf,
    /// Built-in format chosen by suffix; `None` for suffixes only a custom
    /// extractor knows about
    pub format: Option<DocumentFormat>,
}

impl Document {
    /// Build a document from a path. The file system is not touched.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = DocumentFormat::from_name(&detect::file_name(&path));
        Self { path, format }
    }

    /// File name used to label the document in batch output.
    pub fn file_name(&self) -> String {
        detect::file_name(&self.path)
    }

    /// Borrow the path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
