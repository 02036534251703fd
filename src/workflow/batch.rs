//! Folder-wide summarization.

use crate::error::{Error, Result};
use crate::extract::ExtractorRegistry;
use crate::model::Document;
use crate::summarize::{SummaryParams, Summarizer};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Progress events emitted while a folder is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// Eligible files have been listed.
    Started {
        /// Number of files with a supported suffix
        total: usize,
    },

    /// Extraction of a file is starting.
    Processing { name: String },

    /// A summary was produced for a file.
    Processed { name: String },

    /// A file was left out of the output.
    Skipped { name: String, reason: String },
}

/// One summarized file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    pub name: String,
    pub summary: String,
}

impl BatchEntry {
    /// Labeled block appended to the output pane.
    pub fn render(&self) -> String {
        format!("Summary of {}:\n{}\n\n", self.name, self.summary)
    }
}

/// A file with a supported suffix that produced no summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: String,
}

/// Outcome of a batch run, in directory-listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Folder that was processed
    pub folder: PathBuf,
    /// Summaries, one per processed file
    pub entries: Vec<BatchEntry>,
    /// Eligible files that were skipped
    pub skipped: Vec<SkippedEntry>,
    /// Entries without a supported suffix, and subdirectories
    pub ignored: usize,
}

impl BatchReport {
    /// Number of documents summarized.
    pub fn processed(&self) -> usize {
        self.entries.len()
    }

    /// Concatenated labeled blocks.
    pub fn render(&self) -> String {
        self.entries.iter().map(BatchEntry::render).collect()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Other(e.to_string()))
    }
}

/// Summarizes every supported file directly inside a folder.
pub struct BatchRunner<'a> {
    registry: &'a ExtractorRegistry,
    engine: &'a dyn Summarizer,
    params: SummaryParams,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        registry: &'a ExtractorRegistry,
        engine: &'a dyn Summarizer,
        params: SummaryParams,
    ) -> Self {
        Self {
            registry,
            engine,
            params,
        }
    }

    /// Process `dir`, reporting progress to `on_event`.
    ///
    /// Subdirectories are not descended into. A file whose extraction or
    /// summarization fails, or whose text is empty, is skipped; the run
    /// itself only fails when the folder cannot be listed. A run that
    /// processes nothing returns [`Error::NoDocumentsFound`].
    pub fn run<F>(&self, dir: &Path, mut on_event: F) -> Result<BatchReport>
    where
        F: FnMut(&BatchEvent),
    {
        let mut report = BatchReport {
            folder: dir.to_path_buf(),
            ..Default::default()
        };

        let mut eligible = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir || !self.registry.supports_name(&name) {
                report.ignored += 1;
                continue;
            }
            eligible.push(Document::new(entry.path()));
        }

        on_event(&BatchEvent::Started {
            total: eligible.len(),
        });

        for document in eligible {
            let name = document.file_name();
            let path = document.path();
            on_event(&BatchEvent::Processing { name: name.clone() });
            match self.summarize_file(path) {
                Ok(summary) => {
                    log::info!("Summarized {}", name);
                    on_event(&BatchEvent::Processed { name: name.clone() });
                    report.entries.push(BatchEntry { name, summary });
                }
                Err(reason) => {
                    log::warn!("Skipping '{}': {}", path.display(), reason);
                    on_event(&BatchEvent::Skipped {
                        name: name.clone(),
                        reason: reason.clone(),
                    });
                    report.skipped.push(SkippedEntry { name, reason });
                }
            }
        }

        if report.entries.is_empty() {
            return Err(Error::NoDocumentsFound);
        }
        Ok(report)
    }

    fn summarize_file(&self, path: &Path) -> std::result::Result<String, String> {
        let text = self.registry.read(path).map_err(|e| e.to_string())?;
        if text.is_empty() {
            return Err("no text extracted".to_string());
        }
        self.engine
            .summarize(&text, &self.params)
            .map_err(|e| e.to_string())
    }
}
