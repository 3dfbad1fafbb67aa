//! Screenwright: screenwriting aids for note vaults
//!
//! Two stateless analyzers over a document's full text, plus the caller
//! machinery around them.
//!
//! # Core Concepts
//!
//! - **Storyboard**: scene headings (`INT.`, `EXT.`, `FADE IN:`, ...) turned
//!   into cards with a short excerpt and the heading's line index
//! - **Metrics**: word counts, clamped session deltas and consecutive-day
//!   writing streaks over a per-document date history
//! - **Desk**: loads and saves histories, keeps the session, deduplicates
//!   achievements and renders the status line
//!
//! # Example
//!
//! ```
//! use screenwright::{extract_scenes, update_metrics, DateHistory};
//! use chrono::NaiveDate;
//!
//! let text = "INT. HOUSE - DAY\nShe walks in.\nHe waits.\n";
//! let cards = extract_scenes(text);
//! assert_eq!(cards[0].heading, "INT. HOUSE - DAY");
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let update = update_metrics(text, 0, DateHistory::new(), today);
//! assert_eq!(update.total_words, 8);
//! ```

pub mod clock;
pub mod desk;
pub mod dispatch;
pub mod metrics;
pub mod palette;
pub mod session;
pub mod settings;
pub mod storage;
pub mod storyboard;
pub mod templates;

pub use clock::{Clock, FixedClock, SystemClock};
pub use desk::{DeskError, DeskResult, Observation, Opened, WritingDesk};
pub use dispatch::{spawn_desk, DeskChannels, DeskEvent, DeskOutcome};
pub use metrics::{
    update_metrics, Achievement, AchievementPolicy, DateHistory, DocumentId, MetricsUpdate,
};
pub use session::{SessionGoals, SessionState, SessionSummary, StatusLine};
pub use settings::{Settings, SettingsError, SettingsStore};
pub use storage::{HistoryStore, OpenStore, SqliteStore, StorageError, StorageResult};
pub use storyboard::{extract_scenes, StoryboardCard};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
