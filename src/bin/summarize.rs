//! Command-line entry point: summarize paragraphs typed or piped on stdin.

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::{error, info};

use summarizer::ai::InferenceClient;
use summarizer::core::config::AppConfig;
use summarizer::core::document::split_paragraphs;
use summarizer::errors::SummarizerError;
use summarizer::worker::Summarizer;

const INPUT_PROMPT: &str = "Enter paragraphs to summarize (separate each by a blank line). \
Press Ctrl+D (Linux/Mac) or Ctrl+Z (Windows) when done:";
const OUTPUT_HEADER: &str = "🔹 Summarized Text 🔹";

#[tokio::main]
async fn main() -> Result<()> {
    summarizer::setup_logging();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    info!(
        "Using model {} at {} (ratio {}, concurrency {})",
        config.model,
        config.endpoint,
        config.compression_ratio.value(),
        config.concurrency
    );

    let client = InferenceClient::from_config(&config)?;
    let summarizer = Summarizer::from_config(client, &config)?;

    eprintln!("{INPUT_PROMPT}\n");

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .map_err(SummarizerError::from)
        .context("Failed to read input from stdin")?;

    let paragraphs = split_paragraphs(&input);

    let summary = summarizer
        .summarize_document(paragraphs, config.compression_ratio)
        .await
        .inspect_err(|e| error!("Failed to generate summary: {}", e))?;

    println!("\n{OUTPUT_HEADER}\n");
    println!("{summary}");

    Ok(())
}
