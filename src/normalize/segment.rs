//! Grapheme cluster segmentation.
//!
//! Emoji built from several code points (flags, skin-tone modifiers, ZWJ
//! sequences) must never be split, so every emoji-aware step walks the text
//! as extended grapheme clusters rather than as `char`s.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

/// Lazy iterator over the extended grapheme clusters of a string.
///
/// Cloning yields an independent cursor at the same position, so a
/// segmentation can be replayed by cloning it before consuming.
#[derive(Debug, Clone)]
pub struct Graphemes<'a> {
    inner: unicode_segmentation::Graphemes<'a>,
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Graphemes<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

/// Segment `text` into extended grapheme clusters.
pub fn graphemes(text: &str) -> Graphemes<'_> {
    Graphemes {
        inner: text.graphemes(true),
    }
}

/// Decode raw bytes for segmentation.
///
/// Invalid UTF-8 sequences become U+FFFD, which always forms a cluster of its
/// own, so malformed input degrades to one unit per bad sequence instead of
/// failing.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
