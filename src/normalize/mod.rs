//! Comment normalization building blocks.
//!
//! Everything in this module is a pure function of its input: no I/O, no
//! shared mutable state. Compiled patterns are process-wide statics built on
//! first use and read-only afterwards, so all of it can be called from many
//! threads at once.
//!
//! # Module Structure
//!
//! - [`segment`] - Grapheme cluster segmentation
//! - [`transforms`] - Individual text cleaning transforms
//! - [`rewriter`] - The fixed-order composition of those transforms
//! - [`emoji`] - Emoji classification and the emoji strategies
//! - [`validate`] - Acceptance rules

pub mod emoji;
pub mod rewriter;
pub mod segment;
pub mod transforms;
pub mod validate;

pub use emoji::{demojize, emoji_tag, is_emoji, separate, EmojiStrategy};
pub use rewriter::Rewriter;
pub use segment::{decode_lossy, graphemes, Graphemes};
pub use validate::{contains_range_emoji, RejectReason, Validator, DEFAULT_MIN_LENGTH};

/// An in-place text transform.
///
/// Transforms hold configuration only, never per-call state, so one instance
/// can be shared across worker threads.
pub trait Transform {
    fn transform(&self, text: &mut String);
}
