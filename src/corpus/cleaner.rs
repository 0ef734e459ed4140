//! Batch-level reduction of processed comments into a corpus.
//!
//! Runs after every comment has been processed, as a single sequential pass:
//! which of several identical comments survives depends on input order, so
//! this step is never parallelized.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;
use tracing::info;

use super::{Corpus, CorpusEntry, ProcessedEntry};
use crate::pipeline::ProcessedComment;

/// Counters describing one cleaning pass.
///
/// Each removal counter is the size difference across one stage, so
/// `initial_count - removed_total() == final_count` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningStats {
    pub initial_count: usize,
    /// Rejected by the pipeline
    pub rejected_count: usize,
    /// Accepted but blank after trimming
    pub removed_empty_count: usize,
    /// Later occurrences of an already seen text
    pub removed_duplicate_count: usize,
    pub final_count: usize,
}

impl CleaningStats {
    pub fn removed_total(&self) -> usize {
        self.initial_count - self.final_count
    }

    /// Share of the batch that survived, or `None` for an empty batch.
    pub fn retained_ratio(&self) -> Option<f64> {
        (self.initial_count > 0).then(|| self.final_count as f64 / self.initial_count as f64)
    }
}

impl fmt::Display for CleaningStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial:             {}", self.initial_count)?;
        writeln!(f, "Removed (rejected):  {}", self.rejected_count)?;
        writeln!(f, "Removed (empty):     {}", self.removed_empty_count)?;
        writeln!(f, "Removed (duplicate): {}", self.removed_duplicate_count)?;
        writeln!(f, "Removed (total):     {}", self.removed_total())?;
        write!(f, "Final:               {}", self.final_count)?;
        if let Some(ratio) = self.retained_ratio() {
            write!(f, "\nRetained:            {:.1}%", ratio * 100.0)?;
        }
        Ok(())
    }
}

/// Reduces a processed batch into a [`Corpus`].
///
/// **Algorithm**:
/// 1. Keep `Accepted` entries, in input order
/// 2. Drop entries whose text is blank after trimming
/// 3. Drop every later entry whose text equals an earlier one (exact,
///    case-sensitive); the first occurrence wins
#[derive(Debug, Clone, Copy, Default)]
pub struct CorpusCleaner;

impl CorpusCleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean<I>(&self, batch: I) -> (Corpus, CleaningStats)
    where
        I: IntoIterator<Item = ProcessedEntry>,
    {
        let mut stats = CleaningStats::default();
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();

        for entry in batch {
            stats.initial_count += 1;

            let text = match entry.result {
                ProcessedComment::Accepted(text) => text,
                ProcessedComment::Rejected => {
                    stats.rejected_count += 1;
                    continue;
                }
            };

            if text.trim().is_empty() {
                stats.removed_empty_count += 1;
                continue;
            }

            if seen.contains(&text) {
                stats.removed_duplicate_count += 1;
                continue;
            }
            seen.insert(text.clone());

            entries.push(CorpusEntry {
                position: entry.position,
                source: entry.source,
                text,
            });
        }

        stats.final_count = entries.len();

        info!(
            initial = stats.initial_count,
            rejected = stats.rejected_count,
            empty = stats.removed_empty_count,
            duplicates = stats.removed_duplicate_count,
            final_count = stats.final_count,
            "corpus cleaned"
        );

        (Corpus { entries }, stats)
    }
}

/// Clean a processed batch with the default [`CorpusCleaner`].
pub fn clean_corpus<I>(batch: I) -> (Corpus, CleaningStats)
where
    I: IntoIterator<Item = ProcessedEntry>,
{
    CorpusCleaner::new().clean(batch)
}
