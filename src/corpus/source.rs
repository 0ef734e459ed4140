//! Source identifiers for collected comments.
//!
//! Comments are collected per post, and the collector labels each group as
//! `<post key>_<date>` (for example `flamengo-x-vasco_20.07.2025`).

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Date format used in collector labels.
const LABEL_DATE_FORMAT: &str = "%d.%m.%Y";

/// ISO date format, also accepted in labels.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Where a comment came from: a post key and, when known, the post date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceId {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl SourceId {
    pub fn new(key: impl Into<String>, date: Option<NaiveDate>) -> Self {
        Self {
            key: key.into(),
            date,
        }
    }

    /// Parse a collector label.
    ///
    /// The part after the last `_` is taken as the date when it parses as
    /// `dd.mm.yyyy` or `yyyy-mm-dd`; otherwise the whole label is the key.
    pub fn from_label(label: &str) -> Self {
        if let Some((key, date)) = label.rsplit_once('_') {
            if !key.is_empty() {
                if let Some(date) = parse_date(date) {
                    return Self::new(key, Some(date));
                }
            }
        }
        Self::new(label, None)
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, LABEL_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(text, ISO_DATE_FORMAT))
        .ok()
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{}_{}", self.key, date.format(LABEL_DATE_FORMAT)),
            None => f.write_str(&self.key),
        }
    }
}
