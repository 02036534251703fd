//! PDF extractor.

use crate::detect::{self, DocumentFormat};
use crate::error::{Error, Result};
use lopdf::Document as LopdfDocument;

use super::TextExtractor;

/// Extracts the text of every page of a PDF, in page order.
///
/// Page texts are concatenated with no separator; page boundaries survive
/// only as whatever whitespace the page text itself ends with.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    _private: (),
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn extract_document(&self, doc: &LopdfDocument) -> Result<String> {
        let mut text = String::new();
        // get_pages is a BTreeMap keyed by 1-based page number
        for page_num in doc.get_pages().keys() {
            let page_text = doc
                .extract_text(&[*page_num])
                .map_err(|e| Error::Extraction(format!("page {}: {}", page_num, e)))?;
            text.push_str(&page_text);
        }
        Ok(text)
    }
}

impl TextExtractor for PdfExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        detect::check_signature(bytes, DocumentFormat::Pdf)?;

        let doc = LopdfDocument::load_mem(bytes)?;
        if doc.is_encrypted() {
            return Err(Error::Extraction("document is password protected".to_string()));
        }

        self.extract_document(&doc)
    }
}
