//! Turns raw model output into a presentable summary.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use super::rules::{Pass, RuleSet};
use crate::errors::SummarizerError;

/// How each line's first letter is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capitalization {
    /// First character uppercased, the rest of the line lowercased.
    ///
    /// The first character goes through the full uppercase mapping, not a
    /// title-case one, so a leading `ß` becomes `SS` rather than `Ss`.
    #[default]
    Sentence,
    /// First character uppercased, the rest of the line untouched.
    FirstLetter,
}

impl FromStr for Capitalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentence" => Ok(Capitalization::Sentence),
            "first-letter" | "first_letter" | "firstletter" => Ok(Capitalization::FirstLetter),
            other => Err(format!(
                "unknown capitalization mode '{other}', expected 'sentence' or 'first-letter'"
            )),
        }
    }
}

impl fmt::Display for Capitalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capitalization::Sentence => f.write_str("sentence"),
            Capitalization::FirstLetter => f.write_str("first-letter"),
        }
    }
}

/// Trims `line` and uppercases its first character.
///
/// Uses `char::to_uppercase`; characters whose title case differs from
/// their upper case (`ß`, `ǆ`) come out fully uppercased.
#[must_use]
pub fn capitalize_line(line: &str, mode: Capitalization) -> String {
    let line = line.trim();
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(line.len());
    out.extend(first.to_uppercase());
    match mode {
        Capitalization::Sentence => out.push_str(&chars.as_str().to_lowercase()),
        Capitalization::FirstLetter => out.push_str(chars.as_str()),
    }
    out
}

/// The four normalization passes over a compiled [`RuleSet`].
///
/// Built once and shared by reference; `normalize` only reads from it.
#[derive(Debug, Clone)]
pub struct NormalizationPipeline {
    rules: RuleSet,
    capitalization: Capitalization,
}

impl NormalizationPipeline {
    /// # Errors
    ///
    /// Returns `InvalidRule` if a built-in pattern fails to compile.
    pub fn new() -> Result<Self, SummarizerError> {
        Ok(Self::with_rules(RuleSet::standard()?))
    }

    #[must_use]
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            capitalization: Capitalization::default(),
        }
    }

    #[must_use]
    pub fn with_capitalization(mut self, capitalization: Capitalization) -> Self {
        self.capitalization = capitalization;
        self
    }

    #[must_use]
    pub fn capitalization(&self) -> Capitalization {
        self.capitalization
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Runs every pass, in order, over `raw`.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        Pass::ALL
            .iter()
            .fold(raw.to_string(), |text, pass| self.apply_pass(*pass, &text))
    }

    /// Runs a single pass. Regex passes trim their result.
    #[must_use]
    pub fn apply_pass(&self, pass: Pass, text: &str) -> String {
        if pass == Pass::Capitalization {
            return self.capitalize(text);
        }

        let mut out = text.to_string();
        for rule in self.rules.rules_for(pass) {
            let replaced = match rule.apply(&out) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(s) => s,
            };
            out = replaced;
        }
        out.trim().to_string()
    }

    fn capitalize(&self, text: &str) -> String {
        text.split('\n')
            .map(|line| capitalize_line(line, self.capitalization))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
