use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use summarizer::ai::{Generator, TASK_PREFIX, TokenCounter, estimate_tokens};
use summarizer::core::models::{CompressionRatio, LengthBudget};
use summarizer::errors::SummarizerError;
use summarizer::normalize::NormalizationPipeline;
use summarizer::worker::Summarizer;

/// Returns the paragraph unchanged. Paragraphs containing `FAIL` error out.
struct EchoGenerator;

impl TokenCounter for EchoGenerator {
    fn count_tokens(&self, text: &str) -> usize {
        estimate_tokens(text)
    }
}

#[async_trait]
impl Generator for EchoGenerator {
    async fn generate(&self, input: &str, _budget: LengthBudget) -> Result<String, SummarizerError> {
        let paragraph = input
            .strip_prefix(TASK_PREFIX)
            .ok_or_else(|| SummarizerError::ModelError("missing task prefix".to_string()))?;
        if paragraph.contains("FAIL") {
            return Err(SummarizerError::ModelError("model crashed".to_string()));
        }
        Ok(paragraph.to_string())
    }
}

/// Echoes after a delay that shrinks for later paragraphs, so completions
/// arrive out of order, and tracks how many calls overlap.
struct SlowGenerator {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl SlowGenerator {
    fn new() -> Self {
        Self {
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }
}

impl TokenCounter for SlowGenerator {
    fn count_tokens(&self, text: &str) -> usize {
        estimate_tokens(text)
    }
}

#[async_trait]
impl Generator for SlowGenerator {
    async fn generate(&self, input: &str, _budget: LengthBudget) -> Result<String, SummarizerError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let paragraph = input.trim_start_matches(TASK_PREFIX);
        let n: u64 = paragraph
            .trim_start_matches("paragraph ")
            .trim_end_matches('.')
            .parse()
            .unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(100 - n * 10)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(paragraph.to_string())
    }
}

fn summarizer<G: Generator>(generator: G) -> Summarizer<G> {
    Summarizer::new(generator, NormalizationPipeline::new().unwrap())
}

#[tokio::test]
async fn test_paragraph_round_trip() {
    let out = summarizer(EchoGenerator)
        .summarize_document("A.\n\nB.", CompressionRatio::DEFAULT)
        .await
        .unwrap();
    assert_eq!(out, "A.\n\nB.");
}

#[tokio::test]
async fn test_empty_document_yields_empty_summary() {
    let s = summarizer(EchoGenerator);
    assert_eq!(
        s.summarize_document("", CompressionRatio::DEFAULT).await.unwrap(),
        ""
    );
    assert_eq!(
        s.summarize_document("\n\n   \n", CompressionRatio::DEFAULT)
            .await
            .unwrap(),
        ""
    );
    assert_eq!(
        s.summarize_document(Vec::<String>::new(), CompressionRatio::DEFAULT)
            .await
            .unwrap(),
        ""
    );
}

#[tokio::test]
async fn test_segmented_input_keeps_each_element() {
    let lines = vec!["first line", "", "  second line  "];
    let out = summarizer(EchoGenerator)
        .summarize_document(lines, CompressionRatio::DEFAULT)
        .await
        .unwrap();
    assert_eq!(out, "First line\n\nSecond line");
}

#[tokio::test]
async fn test_each_summary_is_normalized() {
    let doc = "the talks ended Friday at 5pm -\n\nJulian Zelizer: budget passed .";
    let out = summarizer(EchoGenerator)
        .summarize_document(doc, CompressionRatio::DEFAULT)
        .await
        .unwrap();
    assert_eq!(out, "The talks ended.\n\nBudget passed.");
}

#[tokio::test]
async fn test_failure_identifies_paragraph() {
    let doc = "First is fine.\n\nSecond will FAIL here.\n\nThird is fine.";
    let err = summarizer(EchoGenerator)
        .summarize_document(doc, CompressionRatio::DEFAULT)
        .await
        .unwrap_err();

    match err {
        SummarizerError::AdapterFailure {
            paragraph,
            preview,
            message,
        } => {
            assert_eq!(paragraph, 2);
            assert_eq!(preview, "Second will FAIL here.");
            assert!(message.contains("model crashed"));
        }
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[tokio::test]
async fn test_concurrent_results_keep_paragraph_order() {
    let doc = (1..=5)
        .map(|n| format!("paragraph {n}."))
        .collect::<Vec<_>>()
        .join("\n\n");

    let generator = Arc::new(SlowGenerator::new());
    let s = summarizer(Arc::clone(&generator)).with_concurrency(3);
    let out = s
        .summarize_document(doc.as_str(), CompressionRatio::DEFAULT)
        .await
        .unwrap();

    assert_eq!(
        out,
        "Paragraph 1.\n\nParagraph 2.\n\nParagraph 3.\n\nParagraph 4.\n\nParagraph 5."
    );
    let peak = generator.max_in_flight.load(Ordering::SeqCst);
    assert!(peak > 1, "paragraphs should overlap, peak was {peak}");
    assert!(peak <= 3, "concurrency limit exceeded, peak was {peak}");
}

#[tokio::test]
async fn test_sequential_by_default() {
    let generator = Arc::new(SlowGenerator::new());
    let s = summarizer(Arc::clone(&generator));
    s.summarize_document(["paragraph 1.", "paragraph 2."], CompressionRatio::DEFAULT)
        .await
        .unwrap();
    assert_eq!(generator.max_in_flight.load(Ordering::SeqCst), 1);
}
