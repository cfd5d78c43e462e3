use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to generate text with the model: {0}")]
    ModelError(String),

    #[error("Failed to read or write stream: {0}")]
    IoError(String),

    #[error("Failed to compile cleanup rule: {0}")]
    InvalidRule(String),

    /// The generator could not summarize one paragraph of the document.
    #[error("Failed to summarize paragraph {paragraph} (\"{preview}\"): {message}")]
    AdapterFailure {
        paragraph: usize,
        preview: String,
        message: String,
    },
}

impl SummarizerError {
    /// Wraps a generator error with the paragraph it was raised for.
    #[must_use]
    pub fn adapter_failure(paragraph: usize, text: &str, source: &SummarizerError) -> Self {
        const PREVIEW_CHARS: usize = 40;

        let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
        if text.chars().count() > PREVIEW_CHARS {
            preview.push('…');
        }

        SummarizerError::AdapterFailure {
            paragraph,
            preview,
            message: source.to_string(),
        }
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::HttpError(error.to_string())
    }
}

impl From<std::io::Error> for SummarizerError {
    fn from(error: std::io::Error) -> Self {
        SummarizerError::IoError(error.to_string())
    }
}

impl From<regex::Error> for SummarizerError {
    fn from(error: regex::Error) -> Self {
        SummarizerError::InvalidRule(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizerError {
    fn from(error: anyhow::Error) -> Self {
        SummarizerError::ModelError(error.to_string())
    }
}
