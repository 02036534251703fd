//! Hosted inference endpoint engine.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{SummaryParams, Summarizer};

/// Default inference endpoint base URL.
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

/// Default summarization model.
pub const DEFAULT_MODEL: &str = "sshleifer/distilbart-cnn-12-6";

/// Longest slice of a non-JSON error body kept in an error message.
const MAX_ERROR_EXCERPT: usize = 200;

/// Connection settings for [`HttpSummarizer`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL; the model id is appended as a path
    pub endpoint: String,
    /// Model id
    pub model: String,
    /// Bearer token, if the endpoint requires one
    pub api_token: Option<String>,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl EngineConfig {
    /// Create a config for the default endpoint and model.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_token: None,
            timeout: None,
        }
    }

    /// Set the endpoint base URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the bearer token.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Full URL of the model.
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.model.trim_start_matches('/')
        )
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: &'a SummaryParams,
    options: RequestOptions,
}

#[derive(Debug, Serialize)]
struct RequestOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SummaryResponse {
    Summaries(Vec<SummaryText>),
    Failure { error: String },
}

#[derive(Debug, Deserialize)]
struct SummaryText {
    summary_text: String,
}

/// Summarizer backed by a hosted summarization pipeline.
///
/// The request blocks the calling thread until the model answers.
pub struct HttpSummarizer {
    config: EngineConfig,
    client: reqwest::blocking::Client,
}

impl HttpSummarizer {
    /// Create an engine from a config.
    pub fn new(config: EngineConfig) -> Result<Self> {
        // the blocking client defaults to a 30s timeout; None clears it
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// Engine settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Summarizer for HttpSummarizer {
    fn name(&self) -> &str {
        &self.config.model
    }

    fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String> {
        let body = request_body(text, params)?;
        let mut request = self
            .client
            .post(self.config.url())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(ref token) = self.config.api_token {
            request = request.bearer_auth(token);
        }

        log::debug!("Requesting summary of {} chars from {}", text.len(), self.config.url());
        let response = request.send()?;
        let status = response.status();
        let payload = response.text()?;

        if !status.is_success() {
            return Err(Error::Summarize(failure_reason(status, &payload)));
        }

        parse_response(&payload)
    }
}

/// Message for a non-success response; a summary-shaped body is never used.
fn failure_reason(status: reqwest::StatusCode, payload: &str) -> String {
    let body = payload.trim();
    match serde_json::from_str::<SummaryResponse>(body) {
        Ok(SummaryResponse::Failure { error }) => format!("{} ({})", error, status),
        _ if body.is_empty() => format!("engine returned {}", status),
        Ok(SummaryResponse::Summaries(_)) => format!("engine returned {}", status),
        Err(_) => {
            let excerpt: String = body.chars().take(MAX_ERROR_EXCERPT).collect();
            format!("engine returned {}: {}", status, excerpt)
        }
    }
}

fn request_body(text: &str, params: &SummaryParams) -> Result<String> {
    let request = SummaryRequest {
        inputs: text,
        parameters: params,
        options: RequestOptions {
            wait_for_model: true,
        },
    };
    Ok(serde_json::to_string(&request)?)
}

/// Pull the first summary out of an engine response body.
fn parse_response(payload: &str) -> Result<String> {
    match serde_json::from_str::<SummaryResponse>(payload)? {
        SummaryResponse::Summaries(summaries) => summaries
            .into_iter()
            .next()
            .map(|s| s.summary_text)
            .ok_or_else(|| Error::Summarize("engine returned no summary".to_string())),
        SummaryResponse::Failure { error } => Err(Error::Summarize(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::new()
            .with_endpoint("http://localhost:8080/models/")
            .with_model("facebook/bart-large-cnn")
            .with_api_token("secret")
            .with_timeout(Duration::from_secs(90));

        assert_eq!(config.url(), "http://localhost:8080/models/facebook/bart-large-cnn");
        assert_eq!(config.api_token, Some("secret".to_string()));
        assert_eq!(config.timeout, Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_default_config_url() {
        let config = EngineConfig::default();
        assert_eq!(
            config.url(),
            "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6"
        );
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_request_body() {
        let body = request_body("Long text.", &SummaryParams::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["inputs"], "Long text.");
        assert_eq!(value["parameters"]["max_length"], 75);
        assert_eq!(value["parameters"]["min_length"], 40);
        assert_eq!(value["parameters"]["do_sample"], false);
        assert_eq!(value["options"]["wait_for_model"], true);
    }

    #[test]
    fn test_parse_summary() {
        let summary = parse_response(r#"[{"summary_text": "A short summary."}]"#).unwrap();
        assert_eq!(summary, "A short summary.");
    }

    #[test]
    fn test_parse_engine_error() {
        let result = parse_response(r#"{"error": "Model is currently loading"}"#);
        assert!(matches!(result, Err(Error::Summarize(msg)) if msg == "Model is currently loading"));
    }

    #[test]
    fn test_failure_reason() {
        use reqwest::StatusCode;

        assert_eq!(
            failure_reason(StatusCode::SERVICE_UNAVAILABLE, r#"{"error": "Model is loading"}"#),
            "Model is loading (503 Service Unavailable)"
        );
        assert_eq!(
            failure_reason(StatusCode::INTERNAL_SERVER_ERROR, r#"[{"summary_text": "x"}]"#),
            "engine returned 500 Internal Server Error"
        );
        assert_eq!(
            failure_reason(StatusCode::BAD_GATEWAY, "  "),
            "engine returned 502 Bad Gateway"
        );
        let long = "x".repeat(1000);
        let reason = failure_reason(StatusCode::INTERNAL_SERVER_ERROR, &long);
        assert!(reason.ends_with(&"x".repeat(MAX_ERROR_EXCERPT)));
        assert!(reason.len() < 300);
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert!(matches!(parse_response("[]"), Err(Error::Summarize(_))));
        assert!(matches!(parse_response("<html>"), Err(Error::Summarize(_))));
    }
}
