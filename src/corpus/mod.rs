//! Corpus types and the batch-level cleaning pass.
//!
//! - [`source`] - Source identifiers (post key + date)
//! - [`cleaner`] - Reduction of processed comments into a deduplicated corpus

mod cleaner;
mod source;

pub use cleaner::{clean_corpus, CleaningStats, CorpusCleaner};
pub use source::SourceId;

use serde::Serialize;

use crate::pipeline::ProcessedComment;

/// One pipeline output together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedEntry {
    /// Ordinal position in the input batch
    pub position: usize,
    pub source: Option<SourceId>,
    pub result: ProcessedComment,
}

impl ProcessedEntry {
    pub fn new(position: usize, result: ProcessedComment) -> Self {
        Self {
            position,
            source: None,
            result,
        }
    }

    pub fn with_source(mut self, source: SourceId) -> Self {
        self.source = Some(source);
        self
    }
}

/// A surviving comment in a cleaned corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusEntry {
    pub position: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceId>,
    pub text: String,
}

impl CorpusEntry {
    /// Length of the text in characters, for length statistics.
    pub fn length(&self) -> usize {
        self.text.chars().count()
    }
}

/// Cleaned, deduplicated comments of one batch, in first-occurrence order.
///
/// Only [`CorpusCleaner`] builds one, which guarantees that no text is empty
/// and no two entries share the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CorpusEntry> {
        self.entries.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }

    /// Character lengths of all entries, in corpus order.
    pub fn lengths(&self) -> Vec<usize> {
        self.entries.iter().map(CorpusEntry::length).collect()
    }

    pub fn into_entries(self) -> Vec<CorpusEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a CorpusEntry;
    type IntoIter = std::slice::Iter<'a, CorpusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
