//! Raw comment batches handed over by the collector.
//!
//! A batch is read from JSON in one of two shapes:
//!
//! - an array of comments: `["gol!", "que jogo", null]`
//! - an object grouping comments by collector label:
//!   `{"fla-x-flu_20.07.2025": ["gol!", "que jogo"]}`
//!
//! Array elements that are not strings are kept as non-text comments so the
//! pipeline can count them as rejected.

use serde_json::Value;

use crate::corpus::SourceId;

/// Errors that can occur while reading a batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Invalid batch JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected an array of comments or an object of comment arrays, found {found}")]
    UnexpectedShape { found: &'static str },

    #[error("Source '{label}' must map to an array of comments, found {found}")]
    InvalidGroup { label: String, found: &'static str },
}

/// A comment as captured, before any processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComment {
    pub source: Option<SourceId>,
    /// `None` when the captured value was not text
    pub text: Option<String>,
}

impl RawComment {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            source: None,
            text: Some(text.into()),
        }
    }

    /// A captured value that is not text (null, number, ...).
    pub fn missing() -> Self {
        Self {
            source: None,
            text: None,
        }
    }

    pub fn with_source(mut self, source: SourceId) -> Self {
        self.source = Some(source);
        self
    }

    fn from_value(value: &Value, source: Option<&SourceId>) -> Self {
        Self {
            source: source.cloned(),
            text: value.as_str().map(str::to_string),
        }
    }
}

/// Ordered raw comments of one collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    comments: Vec<RawComment>,
}

impl Batch {
    pub fn new(comments: Vec<RawComment>) -> Self {
        Self { comments }
    }

    /// Plain texts without source information.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(RawComment::text).collect())
    }

    /// Parse a batch from JSON text.
    pub fn from_json(content: &str) -> Result<Self, BatchError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value)
    }

    /// Build a batch from an already parsed JSON value.
    ///
    /// Object groups keep the document's key order.
    pub fn from_value(value: &Value) -> Result<Self, BatchError> {
        match value {
            Value::Array(items) => {
                let comments = items
                    .iter()
                    .map(|item| RawComment::from_value(item, None))
                    .collect();
                Ok(Self::new(comments))
            }
            Value::Object(groups) => {
                let mut comments = Vec::new();
                for (label, group) in groups {
                    let Value::Array(items) = group else {
                        return Err(BatchError::InvalidGroup {
                            label: label.clone(),
                            found: kind(group),
                        });
                    };
                    let source = SourceId::from_label(label);
                    comments.extend(
                        items
                            .iter()
                            .map(|item| RawComment::from_value(item, Some(&source))),
                    );
                }
                Ok(Self::new(comments))
            }
            other => Err(BatchError::UnexpectedShape { found: kind(other) }),
        }
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn comments(&self) -> &[RawComment] {
        &self.comments
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
