//! The text-generation capability the orchestrator depends on.

use async_trait::async_trait;

use crate::core::models::LengthBudget;
use crate::errors::SummarizerError;

/// Instruction prepended to every paragraph before it reaches the model.
pub const TASK_PREFIX: &str = "summarize: ";

/// Rough token estimate, about four characters per token.
#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Counts tokens the same way the generator's tokenizer does.
pub trait TokenCounter {
    fn count_tokens(&self, text: &str) -> usize;
}

/// Character-based estimator, for generators without an exact tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatingCounter;

impl TokenCounter for EstimatingCounter {
    fn count_tokens(&self, text: &str) -> usize {
        estimate_tokens(text)
    }
}

/// Prefixes a paragraph with the summarization instruction.
#[must_use]
pub fn build_model_input(paragraph: &str) -> String {
    format!("{TASK_PREFIX}{paragraph}")
}

/// A sequence-to-sequence model producing one candidate summary per call.
///
/// Implementations decode deterministically and truncate over-long input
/// themselves. When `budget.min_length > budget.max_length` they must honour
/// `max_length`.
#[async_trait]
pub trait Generator: TokenCounter + Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the model cannot produce output for `input`.
    async fn generate(&self, input: &str, budget: LengthBudget) -> Result<String, SummarizerError>;
}

#[async_trait]
impl<G> Generator for std::sync::Arc<G>
where
    G: Generator + ?Sized,
{
    async fn generate(&self, input: &str, budget: LengthBudget) -> Result<String, SummarizerError> {
        (**self).generate(input, budget).await
    }
}

impl<G> TokenCounter for std::sync::Arc<G>
where
    G: TokenCounter + ?Sized,
{
    fn count_tokens(&self, text: &str) -> usize {
        (**self).count_tokens(text)
    }
}
