//! Word (`.docx`) extractor.

use crate::detect::{self, DocumentFormat};
use crate::error::{Error, Result};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

use super::TextExtractor;

/// Extracts the text of every top-level paragraph of a `.docx` file.
///
/// Paragraphs are joined with `\n`. Empty paragraphs are kept, so a
/// document with paragraphs `A`, ``, `B` yields `"A\n\nB"`.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor {
    _private: (),
}

impl DocxExtractor {
    /// Create a new Word extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for DocxExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<String> {
        detect::check_signature(bytes, DocumentFormat::Word)?;
        let docx = docx_rs::read_docx(bytes).map_err(|e| Error::Extraction(e.to_string()))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

/// Plain text of one paragraph.
///
/// Runs are concatenated without a separator, including runs nested in
/// hyperlinks. Tabs map to `\t` and line breaks to `\n`.
pub fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    push_children(&para.children, &mut out);
    out
}

fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for rc in &run.children {
        match rc {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
