//! Word counts and streaks checked against independent oracles

mod common;

use chrono::Duration;
use common::{day, random_document, run_of_days, seeded_rng};
use rand::Rng;
use regex_lite::Regex;
use screenwright::metrics::{count_words, streak_length, update_metrics, DateHistory};

#[test]
fn test_word_count_matches_word_regex() {
    let word = Regex::new(r"\b\w+\b").unwrap();
    let mut rng = seeded_rng(11);
    for _ in 0..200 {
        let doc = random_document(&mut rng, 30);
        assert_eq!(count_words(&doc), word.find_iter(&doc).count(), "{doc:?}");
    }
}

#[test]
fn test_shrinking_text_never_yields_a_delta() {
    let mut rng = seeded_rng(23);
    let today = day(2024, 7, 4);
    for _ in 0..100 {
        let doc = random_document(&mut rng, 20);
        let extra = rng.gen_range(1..100);
        let update = update_metrics(&doc, count_words(&doc) + extra, DateHistory::new(), today);
        assert_eq!(update.session_delta, 0);
    }
}

#[test]
fn test_same_day_updates_do_not_grow_history() {
    let today = day(2024, 7, 4);
    let once = update_metrics("a b", 0, DateHistory::new(), today);
    let twice = update_metrics("a b c", 2, once.history.clone(), today);
    assert_eq!(once.history.dates().len(), twice.history.dates().len());
}

#[test]
fn test_week_long_streak_and_gap() {
    let today = day(2024, 1, 3);
    let week = run_of_days(today, 7);
    assert_eq!(week.first(), Some(&day(2023, 12, 28)));

    let history = DateHistory::from_dates(week.iter().copied());
    assert_eq!(streak_length(&history, today), 7);

    // Drop yesterday: only today counts, however many older days remain
    let yesterday = today - Duration::days(1);
    let gapped = DateHistory::from_dates(week.iter().copied().filter(|d| *d != yesterday));
    assert_eq!(streak_length(&gapped, today), 1);
}

#[test]
fn test_streak_equals_trailing_run_for_random_histories() {
    let mut rng = seeded_rng(5);
    let today = day(2024, 10, 1);
    for _ in 0..200 {
        let days: Vec<_> = (0..30)
            .filter(|_| rng.gen_bool(0.7))
            .map(|back| today - Duration::days(back))
            .collect();
        let history = DateHistory::from_dates(days.iter().copied());

        let mut expected = 0;
        while days.contains(&(today - Duration::days(expected as i64))) {
            expected += 1;
        }
        assert_eq!(streak_length(&history, today), expected);
    }
}

#[test]
fn test_empty_input_boundary() {
    let today = day(2024, 2, 29);
    let update = update_metrics("", 0, DateHistory::new(), today);
    assert_eq!(update.total_words, 0);
    assert_eq!(update.session_delta, 0);
    assert_eq!(update.streak, 1);
}
