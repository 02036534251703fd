//! Error types for docsum library.

use std::io;
use thiserror::Error;

/// Result type alias for docsum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message used when a summary is requested without any loaded text.
pub const NO_INPUT_MESSAGE: &str = "Please load a text file or folder to generate summaries.";

/// Message used when a save is requested without any summary.
pub const NO_SUMMARY_MESSAGE: &str = "There is no summary to save.";

/// Error types that can occur while loading, summarizing or saving documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file extension is not one of the recognized input formats.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The underlying document library failed to open or decode the file.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// There is no usable text for the requested action.
    #[error("{0}")]
    EmptyInput(&'static str),

    /// A batch run found nothing it could summarize.
    #[error("No supported documents found in the selected folder.")]
    NoDocumentsFound,

    /// The summarization engine failed or returned an unusable response.
    #[error("Summarization error: {0}")]
    Summarize(String),

    /// The chosen save path has an extension no writer handles.
    #[error("Cannot save summary as '{0}': only .txt and .docx are supported")]
    UnsupportedSaveFormat(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this outcome is informational rather than a failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, Error::NoDocumentsFound)
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::Decryption(_) => {
                Error::Extraction("document is encrypted".to_string())
            }
            _ => Error::Extraction(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Summarize(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Summarize(format!("invalid engine response: {}", err))
    }
}
