//! Per-document writing history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Calendar date format used for persisted dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable identifier of a tracked document (usually its vault path)
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Dates on which a document was modified or opened
///
/// The date set only grows: there is no way to remove a date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateHistory {
    dates: BTreeSet<NaiveDate>,
    last_opened: Option<NaiveDate>,
}

impl DateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from already-parsed dates
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
            last_opened: None,
        }
    }

    /// Build a history from persisted `YYYY-MM-DD` strings.
    ///
    /// Entries that fail to parse are dropped with a warning; a malformed
    /// `last_opened` becomes `None`.
    pub fn from_raw<S: AsRef<str>>(dates: &[S], last_opened: Option<&str>) -> Self {
        let dates = dates
            .iter()
            .filter_map(|raw| {
                let raw = raw.as_ref();
                match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                    Ok(date) => Some(date),
                    Err(e) => {
                        tracing::warn!(date = raw, error = %e, "skipping malformed history date");
                        None
                    }
                }
            })
            .collect();
        let last_opened =
            last_opened.and_then(|raw| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok());
        Self { dates, last_opened }
    }

    /// Dates as `YYYY-MM-DD` strings, oldest first
    pub fn to_raw(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect()
    }

    /// Record a visit on `today`: add the date (no-op if present) and mark
    /// it as the last-opened day.
    pub fn touch(&mut self, today: NaiveDate) {
        self.dates.insert(today);
        self.last_opened = Some(today);
    }

    /// Union another history into this one; `last_opened` keeps the later day.
    pub fn merge(&mut self, other: &DateHistory) {
        self.dates.extend(other.dates.iter().copied());
        self.last_opened = self.last_opened.max(other.last_opened);
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn dates(&self) -> &BTreeSet<NaiveDate> {
        &self.dates
    }

    pub fn last_opened(&self) -> Option<NaiveDate> {
        self.last_opened
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
