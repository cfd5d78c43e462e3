//! The ordered catalogue of cleanup rules.
//!
//! Rules are listed in the exact order they run. Their position in
//! [`RULE_DEFINITIONS`] is part of their contract: the incomplete-ending
//! rules repair what the date scrub leaves behind, and the Title-Case rule
//! only runs once month names are gone.

use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::fmt;

use crate::errors::SummarizerError;

/// Stages of normalization, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    DateScrub,
    IncompleteEnding,
    ArtifactCleanup,
    Capitalization,
}

impl Pass {
    pub const ALL: [Pass; 4] = [
        Pass::DateScrub,
        Pass::IncompleteEnding,
        Pass::ArtifactCleanup,
        Pass::Capitalization,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Pass::DateScrub => "date-scrub",
            Pass::IncompleteEnding => "incomplete-ending",
            Pass::ArtifactCleanup => "artifact-cleanup",
            Pass::Capitalization => "capitalization",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source form of a rule: what to match, what to put in its place.
///
/// `replacement` may reference capture groups (`$1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDefinition {
    pub name: &'static str,
    pub pass: Pass,
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub case_insensitive: bool,
}

pub const RULE_DEFINITIONS: &[RuleDefinition] = &[
    // Date/time scrub
    RuleDefinition {
        name: "weekday-time",
        pass: Pass::DateScrub,
        pattern: r"\b(thursday|monday|tuesday|wednesday|friday|saturday|sunday)\b\s*(night|morning|afternoon)?\s*(at)?\s*\d{1,2}(am|pm)?\s*(gmt)?",
        replacement: "",
        case_insensitive: true,
    },
    RuleDefinition {
        name: "clock-time",
        pass: Pass::DateScrub,
        pattern: r"\b\d{1,2}(:\d{2})?\s*(am|pm)\b",
        replacement: "",
        case_insensitive: true,
    },
    RuleDefinition {
        name: "month-day",
        pass: Pass::DateScrub,
        pattern: r"\b(october|november|december|january|february|march|april|may|june|july|august|september)\s*\d{1,2}\b",
        replacement: "",
        case_insensitive: true,
    },
    RuleDefinition {
        name: "hour-meridiem",
        pass: Pass::DateScrub,
        pattern: r"\b\d{1,2}\s*(a\.m\.|p\.m\.|am|pm)\b",
        replacement: "",
        case_insensitive: true,
    },
    // Incomplete-ending repair
    RuleDefinition {
        name: "dash-pm",
        pass: Pass::IncompleteEnding,
        pattern: r"[-–—]\s*p\.m\.$",
        replacement: ".",
        case_insensitive: false,
    },
    RuleDefinition {
        name: "dangling-dash-after-word",
        pass: Pass::IncompleteEnding,
        pattern: r"([^\s.!?\-–—])\s*-\s*$",
        replacement: "$1.",
        case_insensitive: false,
    },
    RuleDefinition {
        name: "dangling-dash",
        pass: Pass::IncompleteEnding,
        pattern: r"\s*-\s*$",
        replacement: "",
        case_insensitive: false,
    },
    // Artifact cleanup
    RuleDefinition {
        name: "byline",
        pass: Pass::ArtifactCleanup,
        pattern: r"\bjulian zelizer\b(\s*:)?",
        replacement: "",
        case_insensitive: true,
    },
    RuleDefinition {
        name: "space-before-punctuation",
        pass: Pass::ArtifactCleanup,
        pattern: r"\s+([.,])",
        replacement: "$1",
        case_insensitive: false,
    },
    RuleDefinition {
        name: "repeated-whitespace",
        pass: Pass::ArtifactCleanup,
        pattern: r"\s{2,}",
        replacement: " ",
        case_insensitive: false,
    },
    RuleDefinition {
        name: "period-colon",
        pass: Pass::ArtifactCleanup,
        pattern: r"\.\s*:",
        replacement: ".",
        case_insensitive: false,
    },
    RuleDefinition {
        name: "colon-spacing",
        pass: Pass::ArtifactCleanup,
        pattern: r"\s*:\s*",
        replacement: ": ",
        case_insensitive: false,
    },
    RuleDefinition {
        name: "colon-period",
        pass: Pass::ArtifactCleanup,
        pattern: r":\s*\.",
        replacement: ".",
        case_insensitive: false,
    },
    RuleDefinition {
        name: "than-ever-before",
        pass: Pass::ArtifactCleanup,
        pattern: r"\bthan ever before\b",
        replacement: "",
        case_insensitive: true,
    },
    RuleDefinition {
        name: "dangling-eg",
        pass: Pass::ArtifactCleanup,
        pattern: r"\s*e\.g\.\s*$",
        replacement: ".",
        case_insensitive: false,
    },
    RuleDefinition {
        name: "title-case-run",
        pass: Pass::ArtifactCleanup,
        pattern: r"-?\s*[A-Z][a-z]+(?:\s[A-Z][a-z]+)+\.?",
        replacement: "",
        case_insensitive: false,
    },
];

/// A compiled rule, applied over the whole string in one go.
#[derive(Debug, Clone)]
pub struct CleanupRule {
    definition: RuleDefinition,
    regex: Regex,
}

impl CleanupRule {
    /// # Errors
    ///
    /// Returns `InvalidRule` if the pattern does not compile.
    pub fn compile(definition: RuleDefinition) -> Result<Self, SummarizerError> {
        let regex = RegexBuilder::new(definition.pattern)
            .case_insensitive(definition.case_insensitive)
            .build()
            .map_err(|e| SummarizerError::InvalidRule(format!("{}: {e}", definition.name)))?;

        Ok(Self { definition, regex })
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    #[must_use]
    pub fn pass(&self) -> Pass {
        self.definition.pass
    }

    #[must_use]
    pub fn is_case_insensitive(&self) -> bool {
        self.definition.case_insensitive
    }

    /// Replaces every match; borrows the input when nothing matched.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.definition.replacement)
    }
}

/// Every cleanup rule, compiled, in execution order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CleanupRule>,
}

impl RuleSet {
    /// Compiles [`RULE_DEFINITIONS`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidRule` naming the first rule that fails to compile.
    pub fn standard() -> Result<Self, SummarizerError> {
        Self::from_definitions(RULE_DEFINITIONS)
    }

    /// # Errors
    ///
    /// Returns `InvalidRule` naming the first rule that fails to compile.
    pub fn from_definitions(definitions: &[RuleDefinition]) -> Result<Self, SummarizerError> {
        let rules = definitions
            .iter()
            .copied()
            .map(CleanupRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CleanupRule> {
        self.rules.iter()
    }

    /// Rules of one pass, in order.
    pub fn rules_for(&self, pass: Pass) -> impl Iterator<Item = &CleanupRule> {
        self.rules.iter().filter(move |rule| rule.pass() == pass)
    }

    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&CleanupRule> {
        self.rules.iter().find(|rule| rule.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
