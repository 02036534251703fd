//! Load, summarize and save workflow.
//!
//! A [`Session`] owns the state a front end displays: the input pane (raw
//! extracted text), the output pane (summaries) and the format of the last
//! single file loaded. Each user action is a method taking the chosen path,
//! or an [`Action`] passed to [`Session::dispatch`], which turns every outcome
//! into a [`Notice`].
//!
//! # Example
//!
//! ```no_run
//! use docsum::workflow::{Action, Session};
//! use docsum::summarize::{EngineConfig, HttpSummarizer};
//! use std::sync::Arc;
//!
//! fn main() -> docsum::Result<()> {
//!     let engine = HttpSummarizer::new(EngineConfig::default())?;
//!     let mut session = Session::new(Arc::new(engine));
//!
//!     println!("{}", session.dispatch(Action::LoadFile("report.docx".into())));
//!     println!("{}", session.dispatch(Action::GenerateSummary));
//!     println!("{}", session.output());
//!     Ok(())
//! }
//! ```

pub mod batch;
mod notice;

pub use batch::{BatchEntry, BatchEvent, BatchReport, BatchRunner, SkippedEntry};
pub use notice::{Notice, NoticeLevel};

use crate::detect::DocumentFormat;
use crate::error::{Error, Result, NO_INPUT_MESSAGE, NO_SUMMARY_MESSAGE};
use crate::extract::ExtractorRegistry;
use crate::model::Document;
use crate::persist;
use crate::summarize::{SummaryParams, Summarizer};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A user action with its chosen path.
///
/// A cancelled picker never produces an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Load one document into the input pane
    LoadFile(PathBuf),
    /// Summarize every supported document in a folder into the output pane
    LoadFolder(PathBuf),
    /// Summarize the input pane into the output pane
    GenerateSummary,
    /// Write the output pane to a file
    SaveSummary(PathBuf),
}

/// Workflow state shared by all actions.
pub struct Session {
    registry: ExtractorRegistry,
    engine: Arc<dyn Summarizer>,
    params: SummaryParams,
    input: String,
    output: String,
    loaded_format: Option<DocumentFormat>,
}

impl Session {
    /// Create a session with the default extractors and summary bounds.
    pub fn new(engine: Arc<dyn Summarizer>) -> Self {
        Self::with_registry(ExtractorRegistry::with_defaults(), engine)
    }

    /// Create a session with a custom extractor registry.
    pub fn with_registry(registry: ExtractorRegistry, engine: Arc<dyn Summarizer>) -> Self {
        Self {
            registry,
            engine,
            params: SummaryParams::default(),
            input: String::new(),
            output: String::new(),
            loaded_format: None,
        }
    }

    /// Input pane contents.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input pane, as when the user types into it.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Output pane contents.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Empty the output pane.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Format of the last successfully loaded single file.
    pub fn loaded_format(&self) -> Option<DocumentFormat> {
        self.loaded_format
    }

    /// Extension a save dialog should default to.
    pub fn suggested_save_extension(&self) -> Option<&'static str> {
        self.loaded_format.map(DocumentFormat::extension)
    }

    /// Append the suggested extension when `path` has none.
    pub fn resolve_save_path(&self, path: &Path) -> PathBuf {
        match (path.extension(), self.suggested_save_extension()) {
            (None, Some(ext)) => path.with_extension(ext),
            _ => path.to_path_buf(),
        }
    }

    /// Load one document into the input pane.
    ///
    /// Any suffix the registry handles is accepted. A file read by a custom
    /// extractor clears the loaded format, since there is no built-in format
    /// to default a save to. On failure the pane and the loaded format are
    /// left untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<Notice> {
        let document = Document::new(path);
        let text = self.registry.read(document.path())?;

        log::info!("Loaded {} ({} chars)", document.file_name(), text.len());
        self.input = text;
        self.loaded_format = document.format;
        Ok(Notice::info(
            "Loaded",
            format!("{} loaded.", document.file_name()),
        ))
    }

    /// Summarize the whole input pane, replacing the output pane.
    pub fn generate_summary(&mut self) -> Result<Notice> {
        if self.input.trim().is_empty() {
            return Err(Error::EmptyInput(NO_INPUT_MESSAGE));
        }

        let summary = self.engine.summarize(&self.input, &self.params)?;
        log::info!("{} produced a {} char summary", self.engine.name(), summary.len());
        self.output = summary;
        Ok(Notice::info("Summary", "Summary generated."))
    }

    /// Summarize every supported file in `dir`, appending to the output pane.
    pub fn load_folder(&mut self, dir: &Path) -> Result<BatchReport> {
        self.load_folder_with(dir, |_| {})
    }

    /// Like [`Session::load_folder`], reporting progress to `on_event`.
    ///
    /// The labeled summaries are appended to the output pane in one piece
    /// once the whole folder has been processed. The loaded format is not
    /// changed.
    pub fn load_folder_with<F>(&mut self, dir: &Path, mut on_event: F) -> Result<BatchReport>
    where
        F: FnMut(&BatchEvent),
    {
        let runner = BatchRunner::new(&self.registry, self.engine.as_ref(), self.params);
        let report = runner.run(dir, &mut on_event)?;
        self.output.push_str(&report.render());
        Ok(report)
    }

    /// Write the trimmed output pane to `path`.
    pub fn save_summary(&self, path: &Path) -> Result<Notice> {
        let summary = self.output.trim();
        if summary.is_empty() {
            return Err(Error::EmptyInput(NO_SUMMARY_MESSAGE));
        }

        persist::save_text(path, summary)?;
        Ok(Notice::info(
            "Success",
            "The summary has been saved successfully.",
        ))
    }

    /// Run an action, converting any error into a notice.
    pub fn dispatch(&mut self, action: Action) -> Notice {
        let result = match action {
            Action::LoadFile(path) => self.load_file(&path),
            Action::LoadFolder(dir) => self.load_folder(&dir).map(|report| folder_notice(&report)),
            Action::GenerateSummary => self.generate_summary(),
            Action::SaveSummary(path) => self.save_summary(&path),
        };
        result.unwrap_or_else(|e| Notice::from_error(&e))
    }
}

/// Notice shown after a batch run that processed at least one file.
pub fn folder_notice(report: &BatchReport) -> Notice {
    let message = format!(
        "Folder loaded successfully. {} documents processed.",
        report.processed()
    );
    if report.skipped.is_empty() {
        Notice::info("Success", message)
    } else {
        Notice::warning(
            "Success",
            format!("{} {} skipped.", message, report.skipped.len()),
        )
    }
}
