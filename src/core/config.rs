use serde::{Deserialize, Serialize};
use std::env;

use super::budget::BudgetBounds;
use super::models::CompressionRatio;
use crate::errors::SummarizerError;
use crate::normalize::Capitalization;

pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_MODEL: &str = "t5-base";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Decoding parameters forwarded to the generator. Beam search without
/// sampling keeps the raw output reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodingConfig {
    pub num_beams: u32,
    pub do_sample: bool,
    pub no_repeat_ngram_size: u32,
    pub repetition_penalty: f64,
    pub max_input_tokens: usize,
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self {
            num_beams: 6,
            do_sample: false,
            no_repeat_ngram_size: 2,
            repetition_penalty: 2.0,
            max_input_tokens: 512,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub model: String,
    pub api_token: Option<String>,
    pub compression_ratio: CompressionRatio,
    pub concurrency: usize,
    pub timeout_secs: u64,
    pub capitalization: Capitalization,
    pub decoding: DecodingConfig,
    pub budget: BudgetBounds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_token: None,
            compression_ratio: CompressionRatio::DEFAULT,
            concurrency: 1,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            capitalization: Capitalization::default(),
            decoding: DecodingConfig::default(),
            budget: BudgetBounds::default(),
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` naming the variable whose value is invalid.
    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the variable whose value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let compression_ratio = match get("SUMMARIZER_COMPRESSION_RATIO") {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|e| {
                    SummarizerError::ConfigError(format!("SUMMARIZER_COMPRESSION_RATIO: {e}"))
                })
                .and_then(|v| {
                    CompressionRatio::new(v).map_err(|e| {
                        SummarizerError::ConfigError(format!("SUMMARIZER_COMPRESSION_RATIO: {e}"))
                    })
                })?,
            None => defaults.compression_ratio,
        };

        let concurrency = match get("SUMMARIZER_CONCURRENCY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => n,
                Ok(n) => {
                    return Err(SummarizerError::ConfigError(format!(
                        "SUMMARIZER_CONCURRENCY: must be at least 1, got {n}"
                    )));
                }
                Err(e) => {
                    return Err(SummarizerError::ConfigError(format!(
                        "SUMMARIZER_CONCURRENCY: {e}"
                    )));
                }
            },
            None => defaults.concurrency,
        };

        let timeout_secs = match get("SUMMARIZER_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                SummarizerError::ConfigError(format!("SUMMARIZER_TIMEOUT_SECS: {e}"))
            })?,
            None => defaults.timeout_secs,
        };

        let capitalization = match get("SUMMARIZER_CAPITALIZATION") {
            Some(raw) => raw.parse::<Capitalization>().map_err(|e| {
                SummarizerError::ConfigError(format!("SUMMARIZER_CAPITALIZATION: {e}"))
            })?,
            None => defaults.capitalization,
        };

        Ok(Self {
            endpoint: get("SUMMARIZER_ENDPOINT")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
            model: get("SUMMARIZER_MODEL")
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.model),
            api_token: get("SUMMARIZER_API_TOKEN"),
            compression_ratio,
            concurrency,
            timeout_secs,
            capitalization,
            decoding: defaults.decoding,
            budget: defaults.budget,
        })
    }
}
