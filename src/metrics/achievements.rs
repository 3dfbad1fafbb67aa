//! Writing achievements
//!
//! [`achievements_for`] reports every threshold an update meets, on every
//! call. [`AchievementGuard`] is the caller-side filter that turns this
//! into once-per-document notifications.

use super::history::DocumentId;
use super::tracker::MetricsUpdate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const WORDS_500: usize = 500;
pub const WORDS_1000: usize = 1000;
pub const STREAK_7: u32 = 7;

/// A milestone reached by a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    Words500,
    Words1000,
    Streak7,
}

impl Achievement {
    pub fn message(&self) -> &'static str {
        match self {
            Achievement::Words500 => "🎉 You wrote 500 words today!",
            Achievement::Words1000 => "🔥 One thousand words, keep going!",
            Achievement::Streak7 => "🌙 You kept a 7-day streak, congrats!",
        }
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Every achievement whose threshold `update` meets or exceeds
pub fn achievements_for(update: &MetricsUpdate) -> Vec<Achievement> {
    let mut fired = Vec::new();
    if update.total_words >= WORDS_500 {
        fired.push(Achievement::Words500);
    }
    if update.total_words >= WORDS_1000 {
        fired.push(Achievement::Words1000);
    }
    if update.streak >= STREAK_7 {
        fired.push(Achievement::Streak7);
    }
    fired
}

/// How repeated achievements are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementPolicy {
    /// Report on every qualifying update
    Always,
    /// Report each achievement once per document per session
    #[default]
    OncePerDocument,
}

/// Remembers which achievements were already reported per document
#[derive(Debug, Clone, Default)]
pub struct AchievementGuard {
    shown: HashMap<DocumentId, HashSet<Achievement>>,
}

impl AchievementGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the achievements that should be reported under `policy`
    pub fn filter(
        &mut self,
        doc: &DocumentId,
        fired: Vec<Achievement>,
        policy: AchievementPolicy,
    ) -> Vec<Achievement> {
        match policy {
            AchievementPolicy::Always => fired,
            AchievementPolicy::OncePerDocument => {
                let shown = self.shown.entry(doc.clone()).or_default();
                fired.into_iter().filter(|a| shown.insert(*a)).collect()
            }
        }
    }

    pub fn reset(&mut self) {
        self.shown.clear();
    }
}
