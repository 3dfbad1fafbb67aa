//! Event dispatch for a WritingDesk
//!
//! Host notifications (file opened, text modified, storyboard requested,
//! session start/stop) are sent as [`DeskEvent`]s over a channel and
//! handled one at a time by a single worker that owns the desk. Because
//! there is exactly one consumer, updates to the same document can never
//! interleave.
//!
//! Failures are reported as [`DeskOutcome::Failed`] and the worker keeps
//! going: a storage hiccup must never stop the writer.
//!
//! Only the event side is bounded. Outcomes go out on an unbounded
//! channel so the worker never blocks on a caller that is still busy
//! sending events.

use crate::clock::Clock;
use crate::desk::{Observation, Opened, WritingDesk};
use crate::metrics::DocumentId;
use crate::session::SessionSummary;
use crate::storage::HistoryStore;
use crate::storyboard::StoryboardCard;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskEvent {
    /// A document was opened
    Opened { document: DocumentId, text: String },
    /// A document's text changed
    Modified { document: DocumentId, text: String },
    /// The storyboard view wants cards for `text`
    StoryboardRequested { text: String },
    StartSession,
    StopSession,
}

#[derive(Debug, Clone)]
pub enum DeskOutcome {
    Opened(Opened),
    Observed(Observation),
    Storyboard(Vec<StoryboardCard>),
    SessionStarted,
    SessionStopped(SessionSummary),
    Failed {
        document: Option<DocumentId>,
        error: String,
    },
}

/// Handle one event against the desk
pub fn handle_event<S: HistoryStore, C: Clock>(
    desk: &mut WritingDesk<S, C>,
    event: DeskEvent,
) -> DeskOutcome {
    match event {
        DeskEvent::Opened { document, text } => match desk.open(&document, &text) {
            Ok(opened) => DeskOutcome::Opened(opened),
            Err(e) => failed(Some(document), e),
        },
        DeskEvent::Modified { document, text } => match desk.observe(&document, &text) {
            Ok(observation) => DeskOutcome::Observed(observation),
            Err(e) => failed(Some(document), e),
        },
        DeskEvent::StoryboardRequested { text } => DeskOutcome::Storyboard(desk.storyboard(&text)),
        DeskEvent::StartSession => {
            desk.start_session();
            DeskOutcome::SessionStarted
        }
        DeskEvent::StopSession => DeskOutcome::SessionStopped(desk.stop_session()),
    }
}

fn failed(document: Option<DocumentId>, error: impl std::fmt::Display) -> DeskOutcome {
    let error = error.to_string();
    tracing::warn!(document = ?document, %error, "desk event failed");
    DeskOutcome::Failed { document, error }
}

/// Channel ends for talking to a spawned desk
pub struct DeskChannels {
    pub events: mpsc::Sender<DeskEvent>,
    pub outcomes: mpsc::UnboundedReceiver<DeskOutcome>,
}

/// Move `desk` onto a blocking worker and return its channels.
///
/// `capacity` bounds the queued events (a capacity of 0 is raised to 1).
/// Outcomes are unbounded, so a caller may send any number of events
/// before draining. The worker stops when every event sender is dropped
/// (or the outcome receiver is), and hands the desk back through the
/// join handle.
pub fn spawn_desk<S, C>(
    mut desk: WritingDesk<S, C>,
    capacity: usize,
) -> (DeskChannels, JoinHandle<WritingDesk<S, C>>)
where
    S: HistoryStore + 'static,
    C: Clock + 'static,
{
    let (event_tx, mut event_rx) = mpsc::channel::<DeskEvent>(capacity.max(1));
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<DeskOutcome>();

    let worker = tokio::task::spawn_blocking(move || {
        while let Some(event) = event_rx.blocking_recv() {
            let outcome = handle_event(&mut desk, event);
            if outcome_tx.send(outcome).is_err() {
                tracing::debug!("outcome receiver dropped, stopping desk worker");
                break;
            }
        }
        desk
    });

    (
        DeskChannels {
            events: event_tx,
            outcomes: outcome_rx,
        },
        worker,
    )
}
