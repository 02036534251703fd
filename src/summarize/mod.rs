//! Summarization engine interface.
//!
//! The model itself is an external collaborator: docsum only knows how to
//! hand it a string and the output-length bounds and get one summary back.

mod http;

pub use http::{EngineConfig, HttpSummarizer, DEFAULT_ENDPOINT, DEFAULT_MODEL};

use crate::error::Result;
use serde::Serialize;

/// Output-length bounds and decoding mode passed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryParams {
    /// Maximum summary length in model tokens
    pub max_length: usize,
    /// Minimum summary length in model tokens
    pub min_length: usize,
    /// Random sampling during decoding; off means deterministic output
    pub do_sample: bool,
}

impl SummaryParams {
    /// Create params with explicit bounds and deterministic decoding.
    pub fn new(max_length: usize, min_length: usize) -> Self {
        Self {
            max_length,
            min_length,
            do_sample: false,
        }
    }
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self::new(75, 40)
    }
}

/// A synchronous, possibly slow, text-to-summary function.
///
/// Implementations receive the full input text; no truncation or chunking
/// happens before the call.
pub trait Summarizer: Send + Sync {
    /// Get the name of this engine, for logs.
    fn name(&self) -> &str;

    /// Summarize `text` within the given bounds.
    fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SummaryParams::default();
        assert_eq!(params.max_length, 75);
        assert_eq!(params.min_length, 40);
        assert!(!params.do_sample);
    }
}
