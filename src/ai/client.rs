//! Hosted inference client
//!
//! Sends paragraphs to a text-to-text inference endpoint and returns the raw
//! generated summary.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::generator::{Generator, TokenCounter, estimate_tokens};
use crate::core::config::{AppConfig, DecodingConfig};
use crate::core::models::LengthBudget;
use crate::errors::SummarizerError;

/// Cuts `text` so that its estimated token count stays within `max_tokens`.
#[must_use]
pub fn truncate_to_tokens(text: &str, max_tokens: usize) -> &str {
    if estimate_tokens(text) <= max_tokens {
        return text;
    }
    let keep_chars = max_tokens.saturating_sub(1) * 4;
    match text.char_indices().nth(keep_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Pulls the generated text out of an inference response.
///
/// Accepts a list of candidates or a single candidate object, each carrying
/// `summary_text` or `generated_text`. The first candidate wins.
#[must_use]
pub fn extract_generated_text(response: &Value) -> Option<String> {
    let candidate = match response {
        Value::Array(items) => items.first()?,
        other => other,
    };

    candidate
        .get("summary_text")
        .or_else(|| candidate.get("generated_text"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

/// Inference API client for generating summaries
pub struct InferenceClient {
    http: Client,
    endpoint: String,
    model: String,
    api_token: Option<String>,
    decoding: DecodingConfig,
}

impl InferenceClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        endpoint: String,
        model: String,
        api_token: Option<String>,
        decoding: DecodingConfig,
        timeout: Duration,
    ) -> Result<Self, SummarizerError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            SummarizerError::HttpError(format!("Failed to build inference HTTP client: {e}"))
        })?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model,
            api_token,
            decoding,
        })
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, SummarizerError> {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_token.clone(),
            config.decoding.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    #[must_use]
    pub fn model_url(&self) -> String {
        format!("{}/{}", self.endpoint, self.model)
    }

    #[must_use]
    pub fn build_request_body(&self, input: &str, budget: LengthBudget) -> Value {
        json!({
            "inputs": input,
            "parameters": {
                "min_length": budget.effective_min_length(),
                "max_length": budget.max_length,
                "num_beams": self.decoding.num_beams,
                "do_sample": self.decoding.do_sample,
                "no_repeat_ngram_size": self.decoding.no_repeat_ngram_size,
                "repetition_penalty": self.decoding.repetition_penalty,
                "truncation": "only_first"
            },
            "options": {
                "wait_for_model": true
            }
        })
    }
}

impl TokenCounter for InferenceClient {
    fn count_tokens(&self, text: &str) -> usize {
        estimate_tokens(text)
    }
}

#[async_trait]
impl Generator for InferenceClient {
    async fn generate(&self, input: &str, budget: LengthBudget) -> Result<String, SummarizerError> {
        if budget.is_degenerate() {
            debug!(
                "Budget min {} exceeds max {}, requesting min {}",
                budget.min_length,
                budget.max_length,
                budget.effective_min_length()
            );
        }

        let truncated = truncate_to_tokens(input, self.decoding.max_input_tokens);
        if truncated.len() < input.len() {
            info!(
                "Input of ~{} tokens truncated to {} tokens",
                estimate_tokens(input),
                self.decoding.max_input_tokens
            );
        }
        let input = truncated;

        #[cfg(feature = "debug-logs")]
        info!("Using model input:\n{}", input);

        let request_body = self.build_request_body(input, budget);

        let mut request = self.http.post(self.model_url()).json(&request_body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SummarizerError::HttpError(format!("Inference request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            warn!("Inference endpoint returned {}", status);
            return Err(SummarizerError::ModelError(format!(
                "Inference API error ({status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizerError::ModelError(format!("Failed to parse inference response: {e}"))
        })?;

        if let Some(message) = response_json.get("error").and_then(Value::as_str) {
            return Err(SummarizerError::ModelError(message.to_string()));
        }

        extract_generated_text(&response_json)
            .ok_or_else(|| SummarizerError::ModelError("No text in response".to_string()))
    }
}
