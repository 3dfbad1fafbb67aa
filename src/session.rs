//! Writing session state and the status line
//!
//! A session is owned by its caller and lives only in memory; starting a
//! new one resets the counters.

use crate::metrics::MetricsUpdate;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Word and time targets for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionGoals {
    pub words: usize,
    pub minutes: u64,
}

impl Default for SessionGoals {
    fn default() -> Self {
        Self {
            words: 500,
            minutes: 25,
        }
    }
}

/// In-memory state of the current writing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    started_at: Option<DateTime<Local>>,
    words_written: usize,
    last_word_count: usize,
}

/// What a stopped session amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub minutes: u64,
    pub words_written: usize,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the session at `now`, zeroing the counters
    pub fn start(&mut self, now: DateTime<Local>) {
        self.started_at = Some(now);
        self.words_written = 0;
        self.last_word_count = 0;
        tracing::info!(started_at = %now, "writing session started");
    }

    /// Summarise the session. The state is kept, so the status line keeps
    /// showing the final figures until the next `start`.
    pub fn stop(&self, now: DateTime<Local>) -> SessionSummary {
        let summary = SessionSummary {
            minutes: self.elapsed_minutes(now),
            words_written: self.words_written,
        };
        tracing::info!(
            minutes = summary.minutes,
            words = summary.words_written,
            "writing session stopped"
        );
        summary
    }

    /// Fold a metrics update into the session totals
    pub fn record(&mut self, update: &MetricsUpdate) {
        self.words_written += update.session_delta;
        self.last_word_count = update.total_words;
    }

    /// Whole minutes since the session started, rounded; 0 before any start
    pub fn elapsed_minutes(&self, now: DateTime<Local>) -> u64 {
        let Some(started) = self.started_at else {
            return 0;
        };
        let ms = (now - started).num_milliseconds().max(0) as u64;
        (ms + 30_000) / 60_000
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    pub fn words_written(&self) -> usize {
        self.words_written
    }

    /// Word count seen on the previous update
    pub fn last_word_count(&self) -> usize {
        self.last_word_count
    }
}

/// One-line summary for a status bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub minutes: u64,
    pub words: usize,
    pub streak: u32,
    pub words_written: usize,
    pub goals: Option<SessionGoals>,
}

impl StatusLine {
    pub fn new(session: &SessionState, now: DateTime<Local>, streak: u32) -> Self {
        Self {
            minutes: session.elapsed_minutes(now),
            words: session.last_word_count(),
            streak,
            words_written: session.words_written(),
            goals: None,
        }
    }

    pub fn with_goals(mut self, goals: SessionGoals) -> Self {
        self.goals = Some(goals);
        self
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "⏱ {}min • {} words • streak: {}",
            self.minutes, self.words, self.streak
        )?;
        if let Some(goals) = &self.goals {
            write!(f, " • goal {}/{}", self.words_written, goals.words)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::DateHistory;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
    }

    fn update(total_words: usize, session_delta: usize) -> MetricsUpdate {
        MetricsUpdate {
            total_words,
            session_delta,
            history: DateHistory::new(),
            streak: 1,
        }
    }

    #[test]
    fn test_elapsed_minutes_rounds() {
        let mut session = SessionState::new();
        assert_eq!(session.elapsed_minutes(t0()), 0);

        session.start(t0());
        assert_eq!(session.elapsed_minutes(t0() + Duration::seconds(29)), 0);
        assert_eq!(session.elapsed_minutes(t0() + Duration::seconds(30)), 1);
        assert_eq!(session.elapsed_minutes(t0() + Duration::minutes(25)), 25);
        // Clock going backwards never yields negative minutes
        assert_eq!(session.elapsed_minutes(t0() - Duration::minutes(5)), 0);
    }

    #[test]
    fn test_record_accumulates_deltas() {
        let mut session = SessionState::new();
        session.start(t0());
        session.record(&update(100, 100));
        session.record(&update(80, 0));
        session.record(&update(130, 50));
        assert_eq!(session.words_written(), 150);
        assert_eq!(session.last_word_count(), 130);
    }

    #[test]
    fn test_start_resets_counters() {
        let mut session = SessionState::new();
        session.start(t0());
        session.record(&update(40, 40));
        session.start(t0() + Duration::hours(1));
        assert_eq!(session.words_written(), 0);
        assert_eq!(session.last_word_count(), 0);
    }

    #[test]
    fn test_stop_summary() {
        let mut session = SessionState::new();
        session.start(t0());
        session.record(&update(300, 300));
        let summary = session.stop(t0() + Duration::minutes(12));
        assert_eq!(
            summary,
            SessionSummary {
                minutes: 12,
                words_written: 300
            }
        );
    }

    #[test]
    fn test_status_line_format() {
        let mut session = SessionState::new();
        session.start(t0());
        session.record(&update(250, 120));
        let now = t0() + Duration::minutes(3);

        let line = StatusLine::new(&session, now, 4);
        assert_eq!(line.to_string(), "⏱ 3min • 250 words • streak: 4");

        let line = line.with_goals(SessionGoals::default());
        assert_eq!(
            line.to_string(),
            "⏱ 3min • 250 words • streak: 4 • goal 120/500"
        );
    }
}
