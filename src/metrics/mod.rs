//! Word-count and writing-streak tracking
//!
//! [`update_metrics`] is a pure function: it takes the document text, the
//! previous word count and the document's [`DateHistory`], and returns
//! the new counts together with the updated history. Loading and saving
//! the history is the caller's job (see [`crate::storage`]).
//!
//! Callers must serialise updates per document. Two interleaved updates
//! for the same document race on both the persisted history and the
//! previous word count.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use screenwright::metrics::{update_metrics, DateHistory};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let update = update_metrics("FADE IN: a quiet street", 0, DateHistory::new(), today);
//! assert_eq!(update.total_words, 5);
//! assert_eq!(update.streak, 1);
//! ```

mod achievements;
mod history;
mod streak;
mod tracker;
mod words;

pub use achievements::{
    achievements_for, Achievement, AchievementGuard, AchievementPolicy, STREAK_7, WORDS_1000,
    WORDS_500,
};
pub use history::{DateHistory, DocumentId, DATE_FORMAT};
pub use streak::streak_length;
pub use tracker::{update_metrics, MetricsUpdate};
pub use words::count_words;

pub(crate) use words::is_word_char;
