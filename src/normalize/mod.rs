//! Normalization of raw generator output

pub mod pipeline;
pub mod rules;

pub use pipeline::{Capitalization, NormalizationPipeline, capitalize_line};
pub use rules::{CleanupRule, Pass, RULE_DEFINITIONS, RuleDefinition, RuleSet};
