//! Document format detection.
//!
//! Input formats are chosen strictly by filename suffix, compared
//! case-sensitively. Magic-byte sniffing never overrides the suffix; the
//! binary extractors use it to explain why a file failed to open.

use crate::error::{Error, Result};
use serde::Serialize;
use std::path::Path;

/// Recognized document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// UTF-8 plain text (`.txt`)
    Text,
    /// Word document (`.docx`)
    Word,
    /// PDF document (`.pdf`)
    Pdf,
}

impl DocumentFormat {
    /// All supported formats, in file-picker order.
    pub const ALL: [DocumentFormat; 3] =
        [DocumentFormat::Text, DocumentFormat::Word, DocumentFormat::Pdf];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Text => "txt",
            DocumentFormat::Word => "docx",
            DocumentFormat::Pdf => "pdf",
        }
    }

    /// Human-readable label, as shown in a file-type filter.
    pub fn label(self) -> &'static str {
        match self {
            DocumentFormat::Text => "Text Files",
            DocumentFormat::Word => "Word Documents",
            DocumentFormat::Pdf => "PDF Files",
        }
    }

    /// Detect the format from a file name by its suffix.
    ///
    /// The match is case-sensitive: `notes.TXT` is not recognized.
    ///
    /// # Example
    /// ```
    /// use docsum::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_name("notes.txt"), Some(DocumentFormat::Text));
    /// assert_eq!(DocumentFormat::from_name("notes.TXT"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| name.ends_with(&format!(".{}", format.extension())))
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// ZIP local file header, the container of every .docx.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Guess a binary format from leading bytes.
///
/// Returns `None` for anything that is not a PDF or a ZIP container;
/// plain text has no signature.
pub fn sniff_format(data: &[u8]) -> Option<DocumentFormat> {
    if data.starts_with(PDF_MAGIC) {
        Some(DocumentFormat::Pdf)
    } else if data.starts_with(ZIP_MAGIC) {
        Some(DocumentFormat::Word)
    } else {
        None
    }
}

/// Check that `data` carries the signature of `expected` before it is parsed.
///
/// A file whose contents belong to the other binary format is reported as
/// such, so a renamed PDF is not described as a corrupt Word document.
pub(crate) fn check_signature(data: &[u8], expected: DocumentFormat) -> Result<()> {
    match sniff_format(data) {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(Error::Extraction(format!(
            "contents are a .{} file, not .{}",
            found, expected
        ))),
        None => {
            let header = match expected {
                DocumentFormat::Pdf => "%PDF-",
                DocumentFormat::Word => "ZIP",
                DocumentFormat::Text => return Ok(()),
            };
            Err(Error::Extraction(format!("missing {} header", header)))
        }
    }
}

/// Lossy file name of a path, falling back to the whole path.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_suffix() {
        assert_eq!(DocumentFormat::from_name("a.txt"), Some(DocumentFormat::Text));
        assert_eq!(DocumentFormat::from_name("a.docx"), Some(DocumentFormat::Word));
        assert_eq!(DocumentFormat::from_name("a.pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_name(".txt"), Some(DocumentFormat::Text));
    }

    #[test]
    fn test_detect_is_case_sensitive() {
        assert_eq!(DocumentFormat::from_name("A.TXT"), None);
        assert_eq!(DocumentFormat::from_name("report.Pdf"), None);
    }

    #[test]
    fn test_detect_unsupported() {
        assert_eq!(DocumentFormat::from_name("sheet.csv"), None);
        assert_eq!(DocumentFormat::from_name("archive.doc"), None);
        assert_eq!(DocumentFormat::from_name("txt"), None);
    }

    #[test]
    fn test_sniff() {
        assert_eq!(sniff_format(b"%PDF-1.7\n"), Some(DocumentFormat::Pdf));
        assert_eq!(sniff_format(b"PK\x03\x04rest"), Some(DocumentFormat::Word));
        assert_eq!(sniff_format(b"hello"), None);
        assert_eq!(sniff_format(b""), None);
    }

    #[test]
    fn test_check_signature() {
        assert!(check_signature(b"%PDF-1.4", DocumentFormat::Pdf).is_ok());
        assert!(check_signature(b"PK\x03\x04", DocumentFormat::Word).is_ok());

        let result = check_signature(b"%PDF-1.4", DocumentFormat::Word);
        assert!(matches!(result, Err(Error::Extraction(msg)) if msg == "contents are a .pdf file, not .docx"));
        let result = check_signature(b"plain", DocumentFormat::Word);
        assert!(matches!(result, Err(Error::Extraction(msg)) if msg == "missing ZIP header"));
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = DocumentFormat::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["Text Files", "Word Documents", "PDF Files"]);
    }
}
