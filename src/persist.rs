//! Writing summaries back to disk.

use crate::detect;
use crate::error::{Error, Result};
use docx_rs::{BreakType, Docx, Paragraph, Run};
use std::fs::{self, File};
use std::path::Path;

/// Formats a summary can be saved in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    /// UTF-8 plain text
    Text,
    /// Word document with a single paragraph
    Word,
}

impl SaveFormat {
    /// Choose the writer from the path suffix (case-sensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = detect::file_name(path);
        if name.ends_with(".txt") {
            Ok(SaveFormat::Text)
        } else if name.ends_with(".docx") {
            Ok(SaveFormat::Word)
        } else {
            Err(Error::UnsupportedSaveFormat(name))
        }
    }
}

/// Write `text` to `path` in the format named by its suffix.
///
/// Existing files are overwritten. Paths ending in anything other than
/// `.txt` or `.docx` are rejected before any file is created.
pub fn save_text(path: &Path, text: &str) -> Result<SaveFormat> {
    let format = SaveFormat::from_path(path)?;
    match format {
        SaveFormat::Text => fs::write(path, text)?,
        SaveFormat::Word => write_docx(path, text)?,
    }
    log::debug!("Saved {} chars to {}", text.len(), path.display());
    Ok(format)
}

/// Create a `.docx` holding `text` as exactly one paragraph.
///
/// Newlines inside the text become line breaks within that paragraph.
pub fn write_docx(path: &Path, text: &str) -> Result<()> {
    let docx = Docx::new().add_paragraph(single_paragraph(text));
    let file = File::create(path)?;
    docx.build()
        .pack(file)
        .map_err(|e| Error::Other(format!("failed to write {}: {}", path.display(), e)))
}

fn single_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            run = run.add_text(line);
        }
    }
    Paragraph::new().add_run(run)
}
