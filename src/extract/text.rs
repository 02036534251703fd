//! Plain-text extractor.

use crate::error::{Error, Result};

use super::TextExtractor;

/// Reads `.txt` files as UTF-8.
///
/// Invalid UTF-8 is reported as an extraction error rather than replaced.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    _private: (),
}

impl PlainTextExtractor {
    /// Create a new plain-text extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::Extraction(format!("file is not valid UTF-8: {}", e)))
    }
}
