//! Emoji handling strategies.
//!
//! Different downstream models want emoji differently: some tokenizers know
//! them and only need them split from the surrounding words, others need a
//! textual description, and some runs leave them alone entirely.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::segment::graphemes;
use super::transforms::collapse_whitespace;

/// Opening delimiter placed before a demojized tag.
pub const TAG_OPEN: &str = " :";

/// Closing delimiter placed after a demojized tag.
pub const TAG_CLOSE: &str = ": ";

/// How emoji are treated after the text has been rewritten.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EmojiStrategy {
    /// Surround every emoji with single spaces (`great👍job` -> `great 👍 job`)
    #[default]
    Separate,
    /// Replace every emoji with a textual tag (`👍` -> ` :thumbs_up: `)
    Demojize,
    /// Leave emoji untouched
    None,
}

impl EmojiStrategy {
    /// Apply the strategy to already rewritten text.
    pub fn apply(self, text: String) -> String {
        match self {
            EmojiStrategy::Separate => separate(&text),
            EmojiStrategy::Demojize => demojize(&text),
            EmojiStrategy::None => text,
        }
    }

    /// Name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmojiStrategy::Separate => "separate",
            EmojiStrategy::Demojize => "demojize",
            EmojiStrategy::None => "none",
        }
    }
}

impl fmt::Display for EmojiStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a grapheme cluster is an emoji according to the Unicode emoji
/// data set.
///
/// Takes a whole cluster, never a bare code point, so skin-tone and ZWJ
/// sequences are recognized as a unit. This is the classifier used for
/// rewriting; validation has its own range-based check
/// (see [`crate::normalize::contains_range_emoji`]).
pub fn is_emoji(cluster: &str) -> bool {
    emojis::get(cluster).is_some()
}

/// Canonical lowercase tag for an emoji cluster, without delimiters.
///
/// `👍` -> `thumbs_up`, `🇧🇷` -> `flag_brazil`.
pub fn emoji_tag(cluster: &str) -> Option<String> {
    emojis::get(cluster).map(|emoji| tag_from_name(emoji.name()))
}

/// Turns a CLDR short name ("flag: Brazil") into a tag ("flag_brazil").
fn tag_from_name(name: &str) -> String {
    let mut tag = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            tag.extend(c.to_lowercase());
        } else if !tag.is_empty() && !tag.ends_with('_') {
            tag.push('_');
        }
    }
    while tag.ends_with('_') {
        tag.pop();
    }
    tag
}

/// `Separate` strategy: isolate emoji clusters with spaces.
pub fn separate(text: &str) -> String {
    let mut padded = String::with_capacity(text.len() + 8);
    for cluster in graphemes(text) {
        if is_emoji(cluster) {
            padded.push(' ');
            padded.push_str(cluster);
            padded.push(' ');
        } else {
            padded.push_str(cluster);
        }
    }
    collapse_whitespace(&padded)
}

/// `Demojize` strategy: replace emoji clusters with delimited tags.
///
/// Whitespace around the delimiters is left as produced.
pub fn demojize(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 16);
    for cluster in graphemes(text) {
        match emoji_tag(cluster) {
            Some(tag) => {
                result.push_str(TAG_OPEN);
                result.push_str(&tag);
                result.push_str(TAG_CLOSE);
            }
            None => result.push_str(cluster),
        }
    }
    result
}
