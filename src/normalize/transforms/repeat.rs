//! Repeated character collapsing.
//!
//! Comments stretch words ("lindooooo") and stack punctuation ("!!!!!!") for
//! emphasis. Both are reduced to a short, fixed run so that variants of the
//! same comment normalize to the same text.

use super::super::Transform;

/// Runs of a word character this long or longer are collapsed.
pub const CHAR_REPEAT_THRESHOLD: usize = 3;

/// Runs of `!`, `?` or `.` this long or longer are collapsed.
pub const PUNCT_REPEAT_THRESHOLD: usize = 4;

/// Length a collapsed run is reduced to.
pub const REPEAT_KEEP: usize = 2;

/// Punctuation marks subject to [`CollapseRepeatedPunctuation`].
const REPEATABLE_PUNCTUATION: &[char] = &['!', '?', '.'];

/// Collapses runs of the same word character (letter, digit or `_`).
///
/// Works per code point: `"soooo"` becomes `"soo"`, `"kkk"` becomes `"kk"`.
#[derive(Debug, Clone)]
pub struct CollapseRepeatedChars {
    threshold: usize,
    keep: usize,
}

impl CollapseRepeatedChars {
    pub fn new(threshold: usize, keep: usize) -> Self {
        Self { threshold, keep }
    }
}

impl Default for CollapseRepeatedChars {
    fn default() -> Self {
        Self::new(CHAR_REPEAT_THRESHOLD, REPEAT_KEEP)
    }
}

impl Transform for CollapseRepeatedChars {
    fn transform(&self, text: &mut String) {
        if let Some(collapsed) = collapse_runs(text, self.threshold, self.keep, is_word_char) {
            *text = collapsed;
        }
    }
}

/// Collapses runs of `!`, `?` and `.`.
///
/// `"!!!!!"` becomes `"!!"`, while `"!!!"` and `"..."` are left alone.
#[derive(Debug, Clone)]
pub struct CollapseRepeatedPunctuation {
    threshold: usize,
    keep: usize,
}

impl CollapseRepeatedPunctuation {
    pub fn new(threshold: usize, keep: usize) -> Self {
        Self { threshold, keep }
    }
}

impl Default for CollapseRepeatedPunctuation {
    fn default() -> Self {
        Self::new(PUNCT_REPEAT_THRESHOLD, REPEAT_KEEP)
    }
}

impl Transform for CollapseRepeatedPunctuation {
    fn transform(&self, text: &mut String) {
        if let Some(collapsed) = collapse_runs(text, self.threshold, self.keep, |c| {
            REPEATABLE_PUNCTUATION.contains(&c)
        }) {
            *text = collapsed;
        }
    }
}

/// Word character in the regex `\w` sense.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Rebuilds `text` with every qualifying run shortened to `keep`.
///
/// Returns `None` when nothing had to change so callers can skip the copy.
fn collapse_runs(
    text: &str,
    threshold: usize,
    keep: usize,
    qualifies: impl Fn(char) -> bool,
) -> Option<String> {
    let mut result = String::with_capacity(text.len());
    let mut changed = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }

        let emit = if run >= threshold && qualifies(c) {
            changed = true;
            keep
        } else {
            run
        };
        result.extend(std::iter::repeat(c).take(emit));
    }

    changed.then_some(result)
}
