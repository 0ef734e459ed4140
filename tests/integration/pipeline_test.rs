//! End-to-end tests for single comment processing.

use corpusprep::normalize::{graphemes, Validator};
use corpusprep::{process_comment, EmojiStrategy, Pipeline, ProcessedComment};

fn accepted(text: &str) -> ProcessedComment {
    ProcessedComment::Accepted(text.to_string())
}

// ============================================================================
// Full pipeline
// ============================================================================

#[test]
fn typical_comment_with_separate_strategy() {
    let result = process_comment(
        "@joao    olhaaaa isso!!!!!! 😃😃 http://x.co",
        EmojiStrategy::Separate,
        3,
    );
    assert_eq!(result, accepted("joao olhaa isso!! 😃 😃 <URL>"));
}

#[test]
fn typical_comment_with_none_strategy() {
    let result = process_comment(
        "@joao    olhaaaa isso!!!!!! 😃😃 http://x.co",
        EmojiStrategy::None,
        3,
    );
    assert_eq!(result, accepted("joao olhaa isso!! 😃😃 <URL>"));
}

#[test]
fn flag_survives_separation_intact() {
    let result = process_comment("vamooooo🇧🇷🇧🇷", EmojiStrategy::Separate, 3);
    assert_eq!(result, accepted("vamoo 🇧🇷 🇧🇷"));
}

#[test]
fn pure_punctuation_is_rejected_regardless_of_strategy() {
    for strategy in [
        EmojiStrategy::Separate,
        EmojiStrategy::Demojize,
        EmojiStrategy::None,
    ] {
        assert_eq!(
            process_comment("!!! ... ???", strategy, 3),
            ProcessedComment::Rejected,
            "strategy: {strategy}"
        );
    }
}

#[test]
fn digits_only_is_rejected() {
    assert_eq!(
        process_comment("123456", EmojiStrategy::Separate, 3),
        ProcessedComment::Rejected
    );
}

#[test]
fn empty_and_whitespace_are_rejected() {
    let pipeline = Pipeline::default();
    assert_eq!(pipeline.process(""), ProcessedComment::Rejected);
    assert_eq!(pipeline.process(" \n\t "), ProcessedComment::Rejected);
}

#[test]
fn accepted_text_is_never_empty() {
    let pipeline = Pipeline::new(EmojiStrategy::Separate, 0);
    for raw in ["", "   ", "a", "😃"] {
        if let ProcessedComment::Accepted(text) = pipeline.process(raw) {
            assert!(!text.is_empty(), "raw: {raw:?}");
        }
    }
}

#[test]
fn stretched_laugh_collapses_below_minimum() {
    // "kkkkkk" collapses to "kk", which is then too short.
    assert_eq!(
        process_comment("kkkkkk", EmojiStrategy::Separate, 3),
        ProcessedComment::Rejected
    );
}

// ============================================================================
// Validator boundaries
// ============================================================================

#[test]
fn validator_examples() {
    let validator = Validator::default();
    assert!(!validator.is_valid(""));
    assert!(!validator.is_valid("..."));
    assert!(!validator.is_valid("123"));
    assert!(!validator.is_valid("oi"));
    assert!(validator.is_valid("bom"));
}

// ============================================================================
// Grapheme integrity
// ============================================================================

#[test]
fn composite_emoji_are_single_clusters() {
    for emoji in ["🇧🇷", "👍🏽", "👩\u{200D}💻", "❤\u{FE0F}"] {
        let clusters: Vec<_> = graphemes(emoji).collect();
        assert_eq!(clusters, vec![emoji], "emoji: {emoji:?}");
    }
}
