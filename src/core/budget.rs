//! Summary length budgeting.

use serde::{Deserialize, Serialize};

use super::models::{CompressionRatio, LengthBudget, Paragraph};
use crate::ai::TokenCounter;

pub const DEFAULT_MIN_LENGTH: usize = 40;
pub const DEFAULT_MAX_LENGTH_FLOOR: usize = 60;
pub const DEFAULT_MAX_LENGTH_CEILING: usize = 150;

/// Constants the budget is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBounds {
    pub min_length: usize,
    pub max_length_floor: usize,
    pub max_length_ceiling: usize,
}

impl Default for BudgetBounds {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length_floor: DEFAULT_MAX_LENGTH_FLOOR,
            max_length_ceiling: DEFAULT_MAX_LENGTH_CEILING,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LengthBudgeter {
    bounds: BudgetBounds,
}

impl LengthBudgeter {
    #[must_use]
    pub fn new(bounds: BudgetBounds) -> Self {
        Self { bounds }
    }

    #[must_use]
    pub fn bounds(&self) -> BudgetBounds {
        self.bounds
    }

    /// Budget for a paragraph of `token_count` tokens.
    ///
    /// `max_length` is the rounded scaled count, raised to the floor and then
    /// capped at the ceiling. `min_length` is not adjusted when it ends up
    /// above `max_length`; the generator resolves that case.
    #[must_use]
    pub fn for_token_count(&self, token_count: usize, ratio: CompressionRatio) -> LengthBudget {
        #[allow(clippy::cast_precision_loss)]
        let raw_target = token_count as f64 * ratio.value();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let scaled = raw_target.round() as usize;

        LengthBudget {
            min_length: self.bounds.min_length,
            max_length: scaled
                .max(self.bounds.max_length_floor)
                .min(self.bounds.max_length_ceiling),
        }
    }

    /// Budget for `paragraph`, counted with the generator's own tokenizer.
    #[must_use]
    pub fn compute<C>(&self, paragraph: &Paragraph, ratio: CompressionRatio, counter: &C) -> LengthBudget
    where
        C: TokenCounter + ?Sized,
    {
        self.for_token_count(counter.count_tokens(paragraph.as_str()), ratio)
    }
}

/// Budget for `paragraph` with the default bounds.
#[must_use]
pub fn compute_budget<C>(paragraph: &Paragraph, ratio: CompressionRatio, counter: &C) -> LengthBudget
where
    C: TokenCounter + ?Sized,
{
    LengthBudgeter::default().compute(paragraph, ratio, counter)
}
