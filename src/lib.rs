//! # docsum
//!
//! Document loading and summarization library for Rust.
//!
//! This library extracts plain text from `.txt`, `.docx` and `.pdf` files,
//! hands it to a pretrained summarization model, and writes the resulting
//! summaries back out as text or Word documents. Whole folders can be
//! summarized in one pass.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsum::summarize::{EngineConfig, HttpSummarizer, Summarizer, SummaryParams};
//!
//! fn main() -> docsum::Result<()> {
//!     // Extract the text of a document
//!     let text = docsum::read_file("report.pdf")?;
//!
//!     // Summarize it with the hosted model
//!     let engine = HttpSummarizer::new(EngineConfig::default())?;
//!     let summary = engine.summarize(&text, &SummaryParams::default())?;
//!     println!("{}", summary);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Three input formats**: UTF-8 text, Word paragraphs, PDF pages
//! - **Pluggable extractors**: register a [`extract::TextExtractor`] per extension
//! - **Batch mode**: summarize every supported file in a folder
//! - **Session workflow**: toolkit-independent actions and notices for front ends

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod persist;
pub mod summarize;
pub mod workflow;

// Re-export commonly used types
pub use detect::{sniff_format, DocumentFormat};
pub use error::{Error, Result};
pub use extract::{ExtractorRegistry, TextExtractor};
pub use model::Document;
pub use persist::{save_text, SaveFormat};
pub use summarize::{EngineConfig, HttpSummarizer, Summarizer, SummaryParams};
pub use workflow::{Action, BatchEvent, BatchReport, Notice, NoticeLevel, Session};

use std::path::Path;

/// Extract the text of a `.txt`, `.docx` or `.pdf` file.
///
/// # Example
///
/// ```no_run
/// let text = docsum::read_file("minutes.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    ExtractorRegistry::with_defaults().read(path.as_ref())
}

/// Summarize every supported file directly inside `dir`.
///
/// Returns the report of processed and skipped files, or
/// [`Error::NoDocumentsFound`] when nothing could be summarized.
pub fn summarize_folder<P: AsRef<Path>>(dir: P, engine: &dyn Summarizer) -> Result<BatchReport> {
    let registry = ExtractorRegistry::with_defaults();
    workflow::BatchRunner::new(&registry, engine, SummaryParams::default())
        .run(dir.as_ref(), |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file_unsupported() {
        let result = read_file("slides.pptx");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_read_file_missing() {
        let result = read_file("/no/such/dir/notes.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
