//! Outcome of processing a single comment.

/// Result of running one raw comment through the pipeline.
///
/// `Accepted` text is always validated and never empty; `Rejected` carries
/// no text at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProcessedComment {
    Accepted(String),
    Rejected,
}

impl ProcessedComment {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// The accepted text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Accepted(text) => Some(text),
            Self::Rejected => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Accepted(text) => Some(text),
            Self::Rejected => None,
        }
    }
}
