//! User-facing notices.

use crate::error::Error;
use serde::Serialize;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Informational outcome
    Info,
    /// Partial success
    Warning,
    /// The action failed
    Error,
}

/// A toolkit-independent message for the user, rendered by the shell as a
/// dialog, a colored line, or whatever fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Convert an action's error into the notice shown for it.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::NoDocumentsFound => Notice::info("No Documents Found", err.to_string()),
            Error::UnsupportedFormat(name) => Notice::error(
                "Unsupported Format",
                format!("This file format is not supported: {}", name),
            ),
            Error::Extraction(cause) => {
                Notice::error("Loading Error", format!("Failed to load document: {}", cause))
            }
            Error::Summarize(cause) => Notice::error(
                "Summarization Error",
                format!("Failed to generate summary: {}", cause),
            ),
            _ => Notice::error("Error", err.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
