//! Mention and URL substitution.
//!
//! Usernames carry meaning for the corpus ("joao" is still a word) but the
//! `@` sigil does not, and URLs are noise whose only useful signal is that a
//! link was there.

use once_cell::sync::Lazy;
use regex::Regex;

use super::super::Transform;

/// Placeholder token that replaces every URL.
pub const URL_PLACEHOLDER: &str = "<URL>";

static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@+(\w+)").unwrap());

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+|www\.\S+").unwrap());

/// Drops the leading `@` of a mention, keeping the username.
///
/// A stacked sigil (`@@joao`) is dropped as a whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripMentions;

impl Transform for StripMentions {
    fn transform(&self, text: &mut String) {
        if MENTION.is_match(text) {
            *text = MENTION.replace_all(text, "$1").into_owned();
        }
    }
}

/// Replaces anything starting with `http` or `www.` up to the next
/// whitespace with [`URL_PLACEHOLDER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceUrls;

impl Transform for ReplaceUrls {
    fn transform(&self, text: &mut String) {
        if URL.is_match(text) {
            *text = URL.replace_all(text, URL_PLACEHOLDER).into_owned();
        }
    }
}
