//! Property-based tests for the rewriter and the emoji strategies.

use proptest::prelude::*;

use corpusprep::normalize::{graphemes, is_emoji, Rewriter};
use corpusprep::{clean_corpus, EmojiStrategy, Pipeline, ProcessedComment, ProcessedEntry};

/// Comment-like text: letters, repeats, punctuation runs, mentions, links.
fn comment_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Zãéç]{1,8}",
        "[a-z]{1}".prop_map(|c| c.repeat(5)),
        "[!?.]{1,7}",
        "[ \t\n]{1,3}",
        "@{1,3}[a-z_]{1,6}",
        Just("http://x.co/a".to_string()),
        Just("htttp://y.z".to_string()),
        Just("www.site.com".to_string()),
        "[0-9]{1,4}",
    ];
    prop::collection::vec(piece, 0..12)
        .prop_map(|pieces| pieces.concat())
}

/// Like [`comment_strategy`] with emoji mixed in.
fn emoji_comment_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        comment_strategy(),
        Just("😃".to_string()),
        Just("👍🏽".to_string()),
        Just("🇧🇷".to_string()),
    ];
    prop::collection::vec(piece, 0..6)
        .prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn rewrite_is_idempotent(text in comment_strategy()) {
        let rewriter = Rewriter::default();
        let once = rewriter.rewrite(&text);
        prop_assert_eq!(rewriter.rewrite(&once), once);
    }

    #[test]
    fn rewrite_is_idempotent_on_arbitrary_text(text in "\\PC{0,40}") {
        let rewriter = Rewriter::default();
        let once = rewriter.rewrite(&text);
        prop_assert_eq!(rewriter.rewrite(&once), once);
    }

    #[test]
    fn strategies_agree_without_emoji(text in comment_strategy()) {
        let rewritten = Rewriter::default().rewrite(&text);
        prop_assume!(!graphemes(&rewritten).any(is_emoji));

        let separate = Pipeline::new(EmojiStrategy::Separate, 3).process(&text);
        let demojize = Pipeline::new(EmojiStrategy::Demojize, 3).process(&text);
        let none = Pipeline::new(EmojiStrategy::None, 3).process(&text);
        prop_assert_eq!(&separate, &demojize);
        prop_assert_eq!(&separate, &none);
    }

    #[test]
    fn accepted_text_meets_minimum_length(text in emoji_comment_strategy(), min in 0usize..6) {
        for strategy in [
            EmojiStrategy::Separate,
            EmojiStrategy::Demojize,
            EmojiStrategy::None,
        ] {
            if let ProcessedComment::Accepted(out) = Pipeline::new(strategy, min).process(&text) {
                prop_assert!(!out.trim().is_empty());
                prop_assert!(out.trim().chars().count() >= min);
            }
        }
    }

    #[test]
    fn separated_emoji_are_never_split(text in emoji_comment_strategy()) {
        // A link swallows anything glued to it, so count after rewriting.
        let rewritten = Rewriter::default().rewrite(&text);
        let processed = Pipeline::new(EmojiStrategy::Separate, 1).process(&text);
        if let ProcessedComment::Accepted(out) = processed {
            let emoji_in: usize = graphemes(&rewritten).filter(|g| is_emoji(g)).count();
            let emoji_out: usize = graphemes(&out).filter(|g| is_emoji(g)).count();
            prop_assert_eq!(emoji_in, emoji_out);
        }
    }

    #[test]
    fn cleaned_corpus_has_unique_texts(texts in prop::collection::vec(comment_strategy(), 0..30)) {
        let pipeline = Pipeline::default();
        let batch: Vec<_> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| ProcessedEntry::new(i, pipeline.process(t)))
            .collect();
        let (corpus, stats) = clean_corpus(batch);

        let mut seen = std::collections::HashSet::new();
        for entry in &corpus {
            prop_assert!(seen.insert(entry.text.clone()));
        }
        prop_assert_eq!(stats.initial_count, texts.len());
        prop_assert_eq!(stats.final_count, corpus.len());
    }
}
