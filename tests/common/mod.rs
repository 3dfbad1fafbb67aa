//! Shared helpers for screenwright integration tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use screenwright::{FixedClock, OpenStore, Settings, SqliteStore, WritingDesk};
use std::path::Path;

/// A short screenplay with three scene headings (lines 1, 3 and 6)
pub const PILOT: &str = "\
PILOT
FADE IN:

EXT. HARBOR - NIGHT
Fog rolls over the water.
A lamp swings.
INT. WAREHOUSE - CONTINUOUS
Crates, stacked high.

MARA
(whispering)
Someone's here.
";

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A desk on an in-memory store, pinned to `today`, session started
pub fn memory_desk(today: NaiveDate) -> WritingDesk<SqliteStore, FixedClock> {
    let store = SqliteStore::open_in_memory().expect("in-memory store");
    let mut desk = WritingDesk::with_clock(store, FixedClock::on(today), Settings::default());
    desk.start_session();
    desk
}

/// A desk on an on-disk store, pinned to `today`, session started
pub fn disk_desk(db: &Path, today: NaiveDate) -> WritingDesk<SqliteStore, FixedClock> {
    let store = SqliteStore::open(db).expect("on-disk store");
    let mut desk = WritingDesk::with_clock(store, FixedClock::on(today), Settings::default());
    desk.start_session();
    desk
}

/// `n` consecutive days ending on `end`, oldest first
pub fn run_of_days(end: NaiveDate, n: i64) -> Vec<NaiveDate> {
    (0..n).rev().map(|back| end - Duration::days(back)).collect()
}

/// Random multi-line text mixing prose, punctuation and scene headings
pub fn random_document(rng: &mut StdRng, lines: usize) -> String {
    const PIECES: &[&str] = &[
        "INT. KITCHEN - DAY",
        "ext. roof - night",
        "  FADE IN:",
        "TEASER",
        "TEASERS",
        "She runs.",
        "two-three, four_five!",
        "(beat)",
        "",
        "   ",
        "Diálogo rápido.",
        "INSERT: PHOTO",
        "CUT TO:",
        "42 ways... 7",
        "teaser_2",
        "Fade out.",
        "INT HOUSE",
        "MATCH CUT: TO BLACK",
    ];
    (0..lines)
        .map(|_| PIECES[rng.gen_range(0..PIECES.len())])
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
