//! Whitespace normalization transform.

use super::super::Transform;

/// Collapses every whitespace run (spaces, tabs, newlines) to a single space
/// and trims both ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeWhitespace;

impl Transform for NormalizeWhitespace {
    fn transform(&self, text: &mut String) {
        let mut result = String::with_capacity(text.len());
        for word in text.split_whitespace() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(word);
        }
        *text = result;
    }
}

/// Free-function form used outside the rewriter (the `Separate` emoji pass
/// re-collapses after padding).
pub fn collapse_whitespace(text: &str) -> String {
    let mut owned = text.to_string();
    NormalizeWhitespace.transform(&mut owned);
    owned
}
