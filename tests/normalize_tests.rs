use summarizer::normalize::{Capitalization, NormalizationPipeline, Pass};

// Tests for the normalization pipeline as a whole.
// Individual rules are covered next to the rule catalogue.

fn pipeline() -> NormalizationPipeline {
    NormalizationPipeline::new().expect("built-in rules compile")
}

#[test]
fn test_dangling_dash_after_time_becomes_period() {
    let p = pipeline();
    let raw = "The committee met Thursday at 3pm -";

    let scrubbed = p.apply_pass(Pass::DateScrub, raw);
    assert_eq!(scrubbed, "The committee met -");

    let repaired = p.apply_pass(Pass::IncompleteEnding, &scrubbed);
    assert!(
        repaired.ends_with('.') && !repaired.ends_with('-'),
        "Sentence should end in a period. Actual: {repaired}"
    );

    assert_eq!(p.normalize(raw), "The committee met.");
}

#[test]
fn test_dash_before_pm_is_repaired() {
    let p = pipeline();
    assert_eq!(
        p.normalize("the vote is due on October 12 . turnout may rise - p.m."),
        "The vote is due on. turnout may rise."
    );
}

#[test]
fn test_byline_removed_in_any_case() {
    let p = pipeline();
    for raw in [
        "Julian Zelizer: the senate passed the bill .",
        "JULIAN ZELIZER: the senate passed the bill .",
        "julian zelizer: the senate passed the bill .",
        "the senate passed the bill, julian zelizer: says .",
    ] {
        let out = p.normalize(raw);
        assert!(
            !out.to_lowercase().contains("julian zelizer"),
            "Byline should be removed from {raw:?}. Actual: {out}"
        );
    }
}

#[test]
fn test_byline_colon_removed_with_name() {
    let p = pipeline();
    for raw in [
        "Julian Zelizer: the senate passed the bill.",
        "JULIAN ZELIZER : the senate passed the bill.",
        "julian zelizer:the senate passed the bill.",
    ] {
        let out = p.normalize(raw);
        assert!(!out.contains(':'), "Colon left behind for {raw:?}. Actual: {out}");
        assert_eq!(out, "The senate passed the bill.");
    }
}

#[test]
fn test_capitalizes_first_letter() {
    assert_eq!(pipeline().normalize("hello world"), "Hello world");
}

#[test]
fn test_capitalizes_each_line() {
    assert_eq!(
        pipeline().normalize("first line\nsecond line"),
        "First line\nSecond line"
    );
}

#[test]
fn test_sentence_mode_lowercases_remainder() {
    let p = pipeline();
    assert_eq!(p.capitalization(), Capitalization::Sentence);
    assert_eq!(p.normalize("the NASA probe landed"), "The nasa probe landed");

    let p = pipeline().with_capitalization(Capitalization::FirstLetter);
    assert_eq!(p.normalize("the NASA probe landed"), "The NASA probe landed");
}

#[test]
fn test_realistic_model_output() {
    let raw = "the u.s. economy grew faster than ever before , officials said on \
               Thursday night at 9pm GMT . growth was driven by exports e.g.";
    assert_eq!(
        pipeline().normalize(raw),
        "The u.s. economy grew faster , officials said on. growth was driven by exports."
    );
}

#[test]
fn test_title_case_fragments_removed() {
    assert_eq!(
        pipeline().normalize("prices rose sharply - Jane Doe. analysts expect more cuts ."),
        "Prices rose sharply  analysts expect more cuts."
    );
}

#[test]
fn test_colon_artifacts() {
    assert_eq!(
        pipeline().normalize("the board said :  results are due . : later"),
        "The board said: results are due. later"
    );
}

#[test]
fn test_clock_times_removed() {
    assert_eq!(
        pipeline().normalize("The match starts at 3:30 pm and ends at 5 p.m. tonight"),
        "The match starts at and ends at 5 p.m. tonight"
    );
}

#[test]
fn test_empty_and_blank_input() {
    let p = pipeline();
    assert_eq!(p.normalize(""), "");
    assert_eq!(p.normalize("   \n  "), "");
    assert_eq!(p.normalize(" - "), "");
}

#[test]
fn test_whitespace_and_punctuation_steps_are_idempotent() {
    let p = pipeline();
    let steps = [
        "space-before-punctuation",
        "repeated-whitespace",
        "period-colon",
        "colon-spacing",
        "colon-period",
    ];
    let run = |text: &str| -> String {
        steps.iter().fold(text.to_string(), |acc, name| {
            p.rules()
                .rule(name)
                .unwrap_or_else(|| panic!("missing rule {name}"))
                .apply(&acc)
                .into_owned()
        })
    };

    for input in [
        "a  .  b ,c",
        "note :x . : y :  .",
        "x. : .",
        "a:,",
        "  lead  : trail  ",
    ] {
        let once = run(input);
        let twice = run(&once);
        assert_eq!(once, twice, "Not idempotent for {input:?}");
    }
}

#[test]
fn test_normalize_is_deterministic() {
    let p = pipeline();
    let raw = "officials met Monday morning at 10am . Julian Zelizer: more than ever before";
    assert_eq!(p.normalize(raw), p.normalize(raw));
}

#[test]
fn test_normalized_output_is_stable() {
    let p = pipeline();
    let once = p.normalize("the board said :  results are due . : later");
    assert_eq!(p.normalize(&once), once);
}
