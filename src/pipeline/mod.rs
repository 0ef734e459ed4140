//! Per-comment processing pipeline.
//!
//! Every comment goes through the same linear sequence, with no way back:
//!
//! ```text
//! raw -> mentions/URLs substituted -> collapsed -> emoji strategy -> validated
//!     -> Accepted(text) | Rejected
//! ```
//!
//! Input that is not text at all is rejected before any transform runs.
//! A [`Pipeline`] holds configuration only, so a batch is processed in
//! parallel and the results come back in input order.

mod result;

pub use result::ProcessedComment;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::batch::RawComment;
use crate::config::{Config, RewriteConfig};
use crate::corpus::ProcessedEntry;
use crate::normalize::{decode_lossy, EmojiStrategy, RejectReason, Rewriter, Validator};

/// Configured per-comment transform.
#[derive(Debug, Clone)]
pub struct Pipeline {
    rewriter: Rewriter,
    strategy: EmojiStrategy,
    validator: Validator,
}

impl Pipeline {
    /// Create a pipeline with default rewrite thresholds.
    pub fn new(strategy: EmojiStrategy, min_length: usize) -> Self {
        Self::with_rewrite(strategy, min_length, &RewriteConfig::default())
    }

    pub fn with_rewrite(
        strategy: EmojiStrategy,
        min_length: usize,
        rewrite: &RewriteConfig,
    ) -> Self {
        debug!(%strategy, min_length, ?rewrite, "building comment pipeline");
        Self {
            rewriter: Rewriter::new(rewrite),
            strategy,
            validator: Validator::new(min_length),
        }
    }

    /// Create a pipeline from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_rewrite(
            config.pipeline.emoji_strategy,
            config.pipeline.min_length,
            &config.rewrite,
        )
    }

    pub fn strategy(&self) -> EmojiStrategy {
        self.strategy
    }

    pub fn min_length(&self) -> usize {
        self.validator.min_length()
    }

    /// Process one comment.
    pub fn process(&self, raw: &str) -> ProcessedComment {
        let rewritten = self.rewriter.rewrite(raw);
        let text = self.strategy.apply(rewritten);

        match self.validator.check(&text) {
            Ok(()) => ProcessedComment::Accepted(text),
            Err(reason) => reject(reason),
        }
    }

    /// Process a value that may not be text. `None` is rejected untouched.
    pub fn process_raw(&self, raw: Option<&str>) -> ProcessedComment {
        match raw {
            Some(text) => self.process(text),
            None => reject(RejectReason::InvalidInputType),
        }
    }

    /// Process a JSON value: strings are comments, anything else is rejected.
    pub fn process_value(&self, value: &serde_json::Value) -> ProcessedComment {
        self.process_raw(value.as_str())
    }

    /// Process bytes that may not be valid UTF-8.
    pub fn process_bytes(&self, bytes: &[u8]) -> ProcessedComment {
        self.process(&decode_lossy(bytes))
    }

    /// Process a whole batch in parallel.
    ///
    /// The output has one entry per input, in input order, carrying the
    /// input's position and source.
    pub fn process_batch(&self, comments: &[RawComment]) -> Vec<ProcessedEntry> {
        debug!(count = comments.len(), strategy = %self.strategy, "processing batch");
        comments
            .par_iter()
            .enumerate()
            .map(|(position, comment)| ProcessedEntry {
                position,
                source: comment.source.clone(),
                result: self.process_raw(comment.text.as_deref()),
            })
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

fn reject(reason: RejectReason) -> ProcessedComment {
    trace!(reason = reason.as_str(), "comment rejected");
    ProcessedComment::Rejected
}

/// Process a single comment with default rewrite thresholds.
pub fn process_comment(raw: &str, strategy: EmojiStrategy, min_length: usize) -> ProcessedComment {
    Pipeline::new(strategy, min_length).process(raw)
}
