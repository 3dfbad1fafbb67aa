//! Metrics update: word counts, session delta, history and streak

use super::history::DateHistory;
use super::streak::streak_length;
use super::words::count_words;
use chrono::NaiveDate;
use serde::Serialize;

/// Result of one metrics update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsUpdate {
    /// `\w+` token count of the current text
    pub total_words: usize,
    /// Words added since the previous count; never negative
    pub session_delta: usize,
    /// History with `today` recorded
    pub history: DateHistory,
    /// Consecutive days ending on `today`, after recording `today`
    pub streak: u32,
}

/// Compute metrics for a document's current text.
///
/// Shrinking text clamps the delta to zero, so deletions never reduce a
/// session's recorded output. The history is taken by value and handed
/// back updated; callers persist it.
pub fn update_metrics(
    text: &str,
    previous_word_count: usize,
    mut history: DateHistory,
    today: NaiveDate,
) -> MetricsUpdate {
    let total_words = count_words(text);
    let session_delta = total_words.saturating_sub(previous_word_count);

    history.touch(today);
    let streak = streak_length(&history, today);

    MetricsUpdate {
        total_words,
        session_delta,
        history,
        streak,
    }
}
