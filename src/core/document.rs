//! Splitting documents into paragraphs.
//!
//! A raw document is split on blank lines. Input that the caller already
//! segmented (a slice or vector of strings, e.g. one line per element) is
//! taken element by element. Blank segments are dropped in both cases and
//! input order is kept.

use once_cell::sync::Lazy;
use regex::Regex;

use super::models::Paragraph;

/// Separator placed between per-paragraph summaries.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Anything the orchestrator can turn into an ordered list of paragraphs.
pub trait IntoParagraphs {
    fn into_paragraphs(self) -> Vec<Paragraph>;
}

/// Splits a raw document on blank-line boundaries.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<Paragraph> {
    static BLANK_LINE_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\n\s*\n").expect("static regex compile"));

    BLANK_LINE_RE
        .split(text)
        .filter_map(Paragraph::new)
        .collect()
}

/// Splits text on every newline, one paragraph per non-blank line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<Paragraph> {
    text.lines().filter_map(Paragraph::new).collect()
}

/// Joins normalized summaries with a blank line between each.
#[must_use]
pub fn join_summaries<S: AsRef<str>>(summaries: &[S]) -> String {
    summaries
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}

fn collect_segments<I, S>(segments: I) -> Vec<Paragraph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .filter_map(|s| Paragraph::new(s.as_ref()))
        .collect()
}

impl IntoParagraphs for &str {
    fn into_paragraphs(self) -> Vec<Paragraph> {
        split_paragraphs(self)
    }
}

impl IntoParagraphs for &String {
    fn into_paragraphs(self) -> Vec<Paragraph> {
        split_paragraphs(self)
    }
}

impl IntoParagraphs for String {
    fn into_paragraphs(self) -> Vec<Paragraph> {
        split_paragraphs(&self)
    }
}

impl<S: AsRef<str>> IntoParagraphs for &[S] {
    fn into_paragraphs(self) -> Vec<Paragraph> {
        collect_segments(self)
    }
}

impl<S: AsRef<str>> IntoParagraphs for Vec<S> {
    fn into_paragraphs(self) -> Vec<Paragraph> {
        collect_segments(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoParagraphs for [S; N] {
    fn into_paragraphs(self) -> Vec<Paragraph> {
        collect_segments(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(paragraphs: &[Paragraph]) -> Vec<&str> {
        paragraphs.iter().map(Paragraph::as_str).collect()
    }

    #[test]
    fn test_split_paragraphs_on_blank_lines() {
        let doc = "First line\nstill first.\n\nSecond.\n   \n\n\nThird.";
        let paragraphs = split_paragraphs(doc);
        assert_eq!(
            texts(&paragraphs),
            vec!["First line\nstill first.", "Second.", "Third."]
        );
    }

    #[test]
    fn test_split_paragraphs_handles_crlf() {
        let paragraphs = split_paragraphs("A.\r\n\r\nB.");
        assert_eq!(texts(&paragraphs), vec!["A.", "B."]);
    }

    #[test]
    fn test_split_lines_drops_blank_lines() {
        let paragraphs = split_lines("one\n\n  two  \n");
        assert_eq!(texts(&paragraphs), vec!["one", "two"]);
    }

    #[test]
    fn test_segmented_input_is_not_resplit() {
        let segments = vec!["A.\n\nstill A.".to_string(), "   ".to_string(), "B.".to_string()];
        let paragraphs = segments.into_paragraphs();
        assert_eq!(texts(&paragraphs), vec!["A.\n\nstill A.", "B."]);
    }

    #[test]
    fn test_empty_document_has_no_paragraphs() {
        assert!("".into_paragraphs().is_empty());
        assert!("\n\n  \n".into_paragraphs().is_empty());
    }

    #[test]
    fn test_join_summaries() {
        assert_eq!(join_summaries(&["A.", "B."]), "A.\n\nB.");
        assert_eq!(join_summaries::<&str>(&[]), "");
    }
}
