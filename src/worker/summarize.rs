use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

use crate::ai::{Generator, build_model_input};
use crate::core::budget::LengthBudgeter;
use crate::core::config::AppConfig;
use crate::core::document::{IntoParagraphs, join_summaries};
use crate::core::models::{CompressionRatio, Paragraph};
use crate::errors::SummarizerError;
use crate::normalize::NormalizationPipeline;

/// Summarizes documents paragraph by paragraph.
///
/// Each paragraph goes through budget → generate → normalize on its own;
/// up to `concurrency` paragraphs are in flight at once and the output keeps
/// the input order.
pub struct Summarizer<G> {
    generator: G,
    pipeline: NormalizationPipeline,
    budgeter: LengthBudgeter,
    concurrency: usize,
}

impl<G: Generator> Summarizer<G> {
    #[must_use]
    pub fn new(generator: G, pipeline: NormalizationPipeline) -> Self {
        Self {
            generator,
            pipeline,
            budgeter: LengthBudgeter::default(),
            concurrency: 1,
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidRule` if the cleanup rules fail to compile.
    pub fn from_config(generator: G, config: &AppConfig) -> Result<Self, SummarizerError> {
        let pipeline = NormalizationPipeline::new()?.with_capitalization(config.capitalization);
        Ok(Self::new(generator, pipeline)
            .with_budgeter(LengthBudgeter::new(config.budget))
            .with_concurrency(config.concurrency))
    }

    #[must_use]
    pub fn with_budgeter(mut self, budgeter: LengthBudgeter) -> Self {
        self.budgeter = budgeter;
        self
    }

    /// Values below 1 are treated as 1.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    #[must_use]
    pub fn pipeline(&self) -> &NormalizationPipeline {
        &self.pipeline
    }

    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Summarizes one paragraph. `position` is 1-based and only used to
    /// identify the paragraph in errors and logs.
    ///
    /// # Errors
    ///
    /// Returns `AdapterFailure` when the generator fails.
    pub async fn summarize_paragraph(
        &self,
        position: usize,
        paragraph: &Paragraph,
        ratio: CompressionRatio,
    ) -> Result<String, SummarizerError> {
        let budget = self.budgeter.compute(paragraph, ratio, &self.generator);
        debug!(
            "Paragraph {} budget: min {} max {}",
            position, budget.min_length, budget.max_length
        );

        let raw = self
            .generator
            .generate(&build_model_input(paragraph.as_str()), budget)
            .await
            .map_err(|e| SummarizerError::adapter_failure(position, paragraph.as_str(), &e))?;

        #[cfg(feature = "debug-logs")]
        info!("Raw summary for paragraph {}:\n{}", position, raw);

        let summary = self.pipeline.normalize(&raw);
        debug!(
            "Paragraph {} normalized: {} chars raw, {} chars clean",
            position,
            raw.len(),
            summary.len()
        );
        Ok(summary)
    }

    /// Splits `input` into paragraphs, summarizes each and joins the results
    /// with a blank line. An input without paragraphs yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns the first `AdapterFailure` in paragraph order; no partial
    /// result is produced.
    pub async fn summarize_document<D>(
        &self,
        input: D,
        ratio: CompressionRatio,
    ) -> Result<String, SummarizerError>
    where
        D: IntoParagraphs,
    {
        let paragraphs = input.into_paragraphs();
        if paragraphs.is_empty() {
            info!("No paragraphs to summarize");
            return Ok(String::new());
        }

        let span = info_span!(
            "summarize_document",
            correlation_id = %Uuid::new_v4(),
            paragraphs = paragraphs.len(),
            concurrency = self.concurrency
        );

        async {
            info!("Summarizing {} paragraphs", paragraphs.len());

            let summaries: Vec<String> = stream::iter(paragraphs.iter().enumerate())
                .map(|(idx, paragraph)| self.summarize_paragraph(idx + 1, paragraph, ratio))
                .buffered(self.concurrency)
                .try_collect()
                .await?;

            info!("Summarized {} paragraphs", summaries.len());
            Ok::<_, SummarizerError>(join_summaries(&summaries))
        }
        .instrument(span)
        .await
    }
}
