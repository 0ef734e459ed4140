//! Individual text cleaning transforms.

mod links;
mod repeat;
mod whitespace;

pub use links::{ReplaceUrls, StripMentions, URL_PLACEHOLDER};
pub use repeat::{
    CollapseRepeatedChars, CollapseRepeatedPunctuation, CHAR_REPEAT_THRESHOLD,
    PUNCT_REPEAT_THRESHOLD, REPEAT_KEEP,
};
pub use whitespace::{collapse_whitespace, NormalizeWhitespace};
