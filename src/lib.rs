//! Summarizer - condenses paragraphs of text with a sequence-to-sequence model.
//!
//! Each paragraph of a document is sent to a text-to-text model and the raw
//! output is cleaned up by an ordered chain of text rules before the
//! per-paragraph summaries are joined back together.
//!
//! # Architecture
//!
//! The crate is split into:
//! - `core`: paragraphs, length budgets and configuration
//! - `ai`: the `Generator` capability and an HTTP inference client
//! - `normalize`: the cleanup rule catalogue and the normalization pipeline
//! - `worker`: the paragraph orchestrator
//!
//! # Example
//!
//! ```no_run
//! use summarizer::ai::InferenceClient;
//! use summarizer::core::config::AppConfig;
//! use summarizer::worker::Summarizer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     summarizer::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let client = InferenceClient::from_config(&config)?;
//!     let summarizer = Summarizer::from_config(client, &config)?;
//!
//!     let text = "First paragraph of a news story.\n\nSecond paragraph.";
//!     let summary = summarizer
//!         .summarize_document(text, config.compression_ratio)
//!         .await?;
//!     println!("{summary}");
//!
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod core;
pub mod errors;
pub mod normalize;
pub mod worker;

pub use ai::{Generator, TokenCounter, estimate_tokens};
pub use errors::SummarizerError;
pub use normalize::NormalizationPipeline;
pub use worker::Summarizer;

/// Configure structured JSON logging on stderr.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Stdout is left
/// for program output. Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
