//! Composition of the text transforms into one rewrite pass.

use tracing::trace;

use super::transforms::{
    CollapseRepeatedChars, CollapseRepeatedPunctuation, NormalizeWhitespace, ReplaceUrls,
    StripMentions,
};
use super::Transform;
use crate::config::RewriteConfig;

/// Upper bound on rewrite passes.
///
/// A pass that changes the text either shortens it or consumes a URL, so a
/// fixed point is reached long before this in practice.
const MAX_PASSES: usize = 8;

/// Pure string-to-string normalizer applied to every comment.
///
/// One pass runs, in order:
/// 1. mention stripping (`@joao` -> `joao`)
/// 2. URL substitution (`http://x.co` -> `<URL>`)
/// 3. word-character repeat collapsing
/// 4. punctuation repeat collapsing
/// 5. whitespace collapsing and trimming
///
/// Collapsing can expose new work for an earlier step: `htttp://x.co` only
/// becomes a URL once step 3 has shortened it. [`Rewriter::rewrite`]
/// therefore repeats the pass until the output stops changing, which makes
/// it idempotent.
#[derive(Debug, Clone)]
pub struct Rewriter {
    mentions: StripMentions,
    urls: ReplaceUrls,
    chars: CollapseRepeatedChars,
    punctuation: CollapseRepeatedPunctuation,
    whitespace: NormalizeWhitespace,
}

impl Rewriter {
    /// Create a rewriter from explicit repeat settings.
    pub fn new(config: &RewriteConfig) -> Self {
        Self {
            mentions: StripMentions,
            urls: ReplaceUrls,
            chars: CollapseRepeatedChars::new(config.char_repeat_threshold, config.repeat_keep),
            punctuation: CollapseRepeatedPunctuation::new(
                config.punct_repeat_threshold,
                config.repeat_keep,
            ),
            whitespace: NormalizeWhitespace,
        }
    }

    /// Mention and URL substitution.
    pub fn substitute(&self, text: &mut String) {
        self.mentions.transform(text);
        self.urls.transform(text);
    }

    /// Repeat and whitespace collapsing.
    pub fn normalize(&self, text: &mut String) {
        self.chars.transform(text);
        self.punctuation.transform(text);
        self.whitespace.transform(text);
    }

    /// Rewrite `input` until it reaches a fixed point.
    pub fn rewrite(&self, input: &str) -> String {
        let mut text = input.to_string();
        for pass in 0..MAX_PASSES {
            let before = text.clone();
            self.substitute(&mut text);
            self.normalize(&mut text);
            if text == before {
                break;
            }
            if pass > 0 {
                trace!(pass, "rewrite needed an extra pass");
            }
        }
        text
    }
}

impl Default for Rewriter {
    fn default() -> Self {
        Self::new(&RewriteConfig::default())
    }
}
