//! Comment corpus preparation.
//!
//! Turns raw social-media comments into a clean NLP corpus: each comment is
//! rewritten, has its emoji handled by the configured [`EmojiStrategy`], and
//! is validated into [`ProcessedComment::Accepted`] or
//! [`ProcessedComment::Rejected`]; a processed batch is then reduced by
//! [`clean_corpus`] into a deduplicated [`Corpus`] with [`CleaningStats`].
//!
//! ```no_run
//! use corpusprep::{clean_corpus, Batch, Pipeline};
//!
//! let batch = Batch::from_texts(["boaaaa!!!!", "boaaaa!!!!", "..."]);
//! let pipeline = Pipeline::default();
//! let (corpus, stats) = clean_corpus(pipeline.process_batch(batch.comments()));
//! assert_eq!(corpus.texts().collect::<Vec<_>>(), vec!["boaa!!"]);
//! assert_eq!(stats.removed_duplicate_count, 1);
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod normalize;
pub mod pipeline;

pub use batch::{Batch, BatchError, RawComment};
pub use config::{Config, ConfigError};
pub use corpus::{clean_corpus, CleaningStats, Corpus, CorpusEntry, ProcessedEntry, SourceId};
pub use normalize::EmojiStrategy;
pub use pipeline::{process_comment, Pipeline, ProcessedComment};
