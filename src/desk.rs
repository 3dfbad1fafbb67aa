//! WritingDesk: the caller that ties analyzers, storage and session together
//!
//! The desk owns everything the analyzers leave to their caller: loading
//! and saving histories, the session counters, achievement deduplication
//! and the status line. Methods taking `&mut self` serialise updates, so
//! one desk per process keeps per-document updates ordered.

use crate::clock::{Clock, SystemClock};
use crate::metrics::{
    achievements_for, streak_length, update_metrics, Achievement, AchievementGuard, DocumentId,
    MetricsUpdate,
};
use crate::palette::{palette_for_line, PaletteEntry};
use crate::session::{SessionState, SessionSummary, StatusLine};
use crate::settings::Settings;
use crate::storage::{HistoryStore, StorageError};
use crate::storyboard::{extract_scenes, StoryboardCard};
use crate::templates::{apply_directive_on_open, TemplateError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type DeskResult<T> = Result<T, DeskError>;

/// Outcome of observing a document's text
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    pub document: DocumentId,
    pub metrics: MetricsUpdate,
    /// Achievements to announce, after deduplication
    pub achievements: Vec<Achievement>,
    pub status: StatusLine,
}

/// Outcome of opening a document
#[derive(Debug, Clone, Serialize)]
pub struct Opened {
    /// New document text when a `/script-` directive was applied
    pub rewritten: Option<String>,
    /// Set when the first line names a style with no template; the text
    /// is left as is and still observed
    pub directive_error: Option<TemplateError>,
    pub observation: Observation,
}

pub struct WritingDesk<S: HistoryStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    settings: Settings,
    session: SessionState,
    guard: AchievementGuard,
    active: Option<DocumentId>,
}

impl<S: HistoryStore> WritingDesk<S, SystemClock> {
    pub fn new(store: S, settings: Settings) -> Self {
        Self::with_clock(store, SystemClock, settings)
    }
}

impl<S: HistoryStore, C: Clock> WritingDesk<S, C> {
    pub fn with_clock(store: S, clock: C, settings: Settings) -> Self {
        Self {
            store,
            clock,
            settings,
            session: SessionState::new(),
            guard: AchievementGuard::new(),
            active: None,
        }
    }

    /// Start a new session; achievements may be announced again
    pub fn start_session(&mut self) {
        self.session.start(self.clock.now());
        self.guard.reset();
    }

    pub fn stop_session(&self) -> SessionSummary {
        self.session.stop(self.clock.now())
    }

    /// Record the current text of `doc` (on modify or open).
    pub fn observe(&mut self, doc: &DocumentId, text: &str) -> DeskResult<Observation> {
        let history = self.store.load_history(doc)?.unwrap_or_default();
        let today = self.clock.today();

        let metrics = update_metrics(text, self.session.last_word_count(), history, today);
        self.store.save_history(doc, &metrics.history)?;
        self.session.record(&metrics);
        self.active = Some(doc.clone());

        let achievements =
            self.guard
                .filter(doc, achievements_for(&metrics), self.settings.achievements);
        for achievement in &achievements {
            tracing::info!(document = %doc, ?achievement, "achievement reached");
        }
        tracing::debug!(
            document = %doc,
            words = metrics.total_words,
            delta = metrics.session_delta,
            streak = metrics.streak,
            "metrics updated"
        );

        let status = StatusLine::new(&self.session, self.clock.now(), metrics.streak)
            .with_goals(self.settings.session_goals);

        Ok(Observation {
            document: doc.clone(),
            metrics,
            achievements,
            status,
        })
    }

    /// Handle a document being opened: apply a first-line `/script-`
    /// directive, then observe the resulting text.
    ///
    /// A directive naming an unknown style does not fail the open. The
    /// visit is recorded against the unchanged text and the error comes
    /// back in [`Opened::directive_error`].
    pub fn open(&mut self, doc: &DocumentId, text: &str) -> DeskResult<Opened> {
        let (rewritten, directive_error) = match apply_directive_on_open(text) {
            Ok(rewritten) => (rewritten, None),
            Err(e) => {
                tracing::warn!(document = %doc, error = %e, "script directive ignored");
                (None, Some(e))
            }
        };
        if rewritten.is_some() {
            tracing::info!(document = %doc, "script directive applied on open");
        }
        let observation = self.observe(doc, rewritten.as_deref().unwrap_or(text))?;
        Ok(Opened {
            rewritten,
            directive_error,
            observation,
        })
    }

    pub fn storyboard(&self, text: &str) -> Vec<StoryboardCard> {
        extract_scenes(text)
    }

    /// Current streak of `doc`, without recording a visit
    pub fn streak_for(&self, doc: &DocumentId) -> DeskResult<u32> {
        let streak = match self.store.load_history(doc)? {
            Some(history) => streak_length(&history, self.clock.today()),
            None => 0,
        };
        Ok(streak)
    }

    /// Status line for the active document (streak 0 when none)
    pub fn status(&self) -> DeskResult<StatusLine> {
        let streak = match &self.active {
            Some(doc) => self.streak_for(doc)?,
            None => 0,
        };
        Ok(StatusLine::new(&self.session, self.clock.now(), streak)
            .with_goals(self.settings.session_goals))
    }

    pub fn palette_for_line(&self, line: &str) -> Option<&'static [PaletteEntry]> {
        palette_for_line(line, &self.settings)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn active_document(&self) -> Option<&DocumentId> {
        self.active.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
