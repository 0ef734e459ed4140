//! Acceptance rules for a rewritten comment.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default minimum length, in characters, of an accepted comment.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Fixed emoji range table used by validation.
///
/// Deliberately independent of [`crate::normalize::is_emoji`]: the table is
/// coarse (the last range spans enclosed alphanumerics up to the enclosed
/// ideographic supplement) and changing it would change which comments are
/// accepted.
static EMOJI_RANGES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        "\u{1F600}-\u{1F64F}", // emoticons
        "\u{1F300}-\u{1F5FF}", // symbols & pictographs
        "\u{1F680}-\u{1F6FF}", // transport & map symbols
        "\u{1F700}-\u{1F77F}", // alchemical symbols
        "\u{1F780}-\u{1F7FF}", // geometric shapes extended
        "\u{1F800}-\u{1F8FF}", // supplemental arrows-c
        "\u{1F900}-\u{1F9FF}", // supplemental symbols and pictographs
        "\u{1FA00}-\u{1FA6F}", // chess symbols
        "\u{1FA70}-\u{1FAFF}", // symbols and pictographs extended-a
        "\u{2702}-\u{27B0}",   // dingbats
        "\u{24C2}-\u{1F251}",
        "]",
    ))
    .unwrap()
});

/// Letters proper (Lu, Ll, Lt, Lm, Lo). Letter numbers such as `Ⅻ` and
/// circled letters are not letters here.
static LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}").unwrap());

/// Why a comment was turned away. Only surfaced in logs; callers see a plain
/// rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The raw value was not text at all
    InvalidInputType,
    /// Empty, or shorter than the minimum length after trimming
    EmptyOrTooShort,
    /// Neither a letter nor an emoji in the range table
    NoAlphaOrEmojiContent,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInputType => "invalid input type",
            Self::EmptyOrTooShort => "empty or too short",
            Self::NoAlphaOrEmojiContent => "no alphabetic or emoji content",
        }
    }
}

/// Whether `text` contains a character from the fixed emoji range table.
pub fn contains_range_emoji(text: &str) -> bool {
    EMOJI_RANGES.is_match(text)
}

/// Length and content check applied after all rewriting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    min_length: usize,
}

impl Validator {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Check `text`, reporting the first rule it breaks.
    pub fn check(&self, text: &str) -> Result<(), RejectReason> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.chars().count() < self.min_length {
            return Err(RejectReason::EmptyOrTooShort);
        }

        let has_letters = LETTER.is_match(trimmed);
        if has_letters || contains_range_emoji(trimmed) {
            Ok(())
        } else {
            Err(RejectReason::NoAlphaOrEmojiContent)
        }
    }

    pub fn is_valid(&self, text: &str) -> bool {
        self.check(text).is_ok()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}
