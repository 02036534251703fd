//! Text extraction with a pluggable extractor per file format.
//!
//! Each extractor turns one kind of document into a single plain-text
//! string. The registry dispatches on the file-name suffix, compared
//! case-sensitively, and rejects unknown suffixes before touching the file
//! system.
//!
//! # Example
//!
//! ```no_run
//! use docsum::extract::ExtractorRegistry;
//! use std::path::Path;
//!
//! fn main() -> docsum::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let text = registry.read(Path::new("notes.docx"))?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

mod docx;
mod pdf;
mod text;

pub use docx::{paragraph_text, DocxExtractor};
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;

use crate::detect;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Trait for format-specific text extractors.
///
/// Implement this trait to add support for a new document format.
pub trait TextExtractor: Send + Sync {
    /// Get the file extensions handled by this extractor.
    ///
    /// Extensions are given without the leading dot (e.g., `["pdf"]`) and
    /// are matched exactly.
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract text from in-memory file contents.
    fn extract_bytes(&self, bytes: &[u8]) -> Result<String>;

    /// Extract text from a file.
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        self.extract_bytes(&bytes)
    }

    /// Check if this extractor handles the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        self.supported_extensions().iter().any(|e| *e == ext)
    }
}

/// Registry mapping file extensions to extractors.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Create a registry with the plain-text, Word and PDF extractors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextExtractor::new()));
        registry.register(Arc::new(DocxExtractor::new()));
        registry.register(Arc::new(PdfExtractor::new()));
        registry
    }

    /// Register an extractor for all its supported extensions.
    ///
    /// A later registration replaces an earlier one for the same extension.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors.insert(ext.to_string(), extractor.clone());
        }
    }

    /// Get an extractor by extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextExtractor>> {
        self.extractors.get(ext).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(ext)
    }

    /// Check if a file name ends in a supported extension.
    pub fn supports_name(&self, name: &str) -> bool {
        self.extractor_for_name(name).is_some()
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    fn extractor_for_name(&self, name: &str) -> Option<Arc<dyn TextExtractor>> {
        let (_, ext) = name.rsplit_once('.')?;
        self.get_by_extension(ext)
    }

    /// Read a file and return its extracted text.
    ///
    /// Unknown suffixes fail with [`Error::UnsupportedFormat`] without any
    /// file-system access.
    pub fn read(&self, path: &Path) -> Result<String> {
        let name = detect::file_name(path);
        let extractor = self
            .extractor_for_name(&name)
            .ok_or_else(|| Error::UnsupportedFormat(name.clone()))?;

        let text = extractor.extract(path)?;
        log::debug!(
            "Extracted {} chars from {} using {}",
            text.len(),
            name,
            extractor.name()
        );
        Ok(text)
    }

    /// Extract text from bytes, choosing the extractor by extension.
    pub fn read_bytes(&self, bytes: &[u8], ext: &str) -> Result<String> {
        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(format!(".{}", ext)))?;

        extractor.extract_bytes(bytes)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExtractorRegistry::with_defaults();
        assert!(registry.supports("txt"));
        assert!(registry.supports("docx"));
        assert!(registry.supports("pdf"));
        assert!(!registry.supports("PDF"));
        assert!(!registry.supports("csv"));
        assert_eq!(registry.supported_extensions(), vec!["docx", "pdf", "txt"]);
    }

    #[test]
    fn test_registry_get_by_extension() {
        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(registry.get_by_extension("docx").unwrap().name(), "docx");
        assert!(registry.get_by_extension("csv").is_none());
    }

    #[test]
    fn test_supports_name() {
        let registry = ExtractorRegistry::with_defaults();
        assert!(registry.supports_name("report.pdf"));
        assert!(registry.supports_name("archive.tar.txt"));
        assert!(!registry.supports_name("report.PDF"));
        assert!(!registry.supports_name("README"));
    }

    #[test]
    fn test_read_unsupported_never_touches_disk() {
        let registry = ExtractorRegistry::with_defaults();
        let result = registry.read(Path::new("/definitely/not/here/data.csv"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(name)) if name == "data.csv"));
    }

    #[test]
    fn test_read_bytes_dispatch() {
        let registry = ExtractorRegistry::with_defaults();
        assert_eq!(registry.read_bytes(b"plain words", "txt").unwrap(), "plain words");
        assert!(matches!(
            registry.read_bytes(b"x", "rtf"),
            Err(Error::UnsupportedFormat(_))
        ));
    }
}
