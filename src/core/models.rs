use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::SummarizerError;

/// One unit of input text. Always non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph(String);

impl Paragraph {
    /// Returns `None` when `text` is blank.
    #[must_use]
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Paragraph {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Target summary length relative to the source, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CompressionRatio(f64);

impl CompressionRatio {
    pub const DEFAULT: CompressionRatio = CompressionRatio(0.5);

    /// # Errors
    ///
    /// Returns `ConfigError` when `value` is not a finite number in `(0, 1]`.
    pub fn new(value: f64) -> Result<Self, SummarizerError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(SummarizerError::ConfigError(format!(
                "compression ratio must be in (0, 1], got {value}"
            )))
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CompressionRatio {
    type Error = SummarizerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CompressionRatio> for f64 {
    fn from(ratio: CompressionRatio) -> Self {
        ratio.0
    }
}

impl Default for CompressionRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Token-length targets handed to the generator for one paragraph.
///
/// `min_length > max_length` is representable on purpose: generators are
/// expected to reconcile it by honouring `max_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBudget {
    pub min_length: usize,
    pub max_length: usize,
}

impl LengthBudget {
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.min_length > self.max_length
    }

    /// Lower bound a generator should actually request, never above `max_length`.
    #[must_use]
    pub fn effective_min_length(&self) -> usize {
        self.min_length.min(self.max_length)
    }
}
