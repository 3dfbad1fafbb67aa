//! Consecutive-day writing streaks

use super::history::DateHistory;
use chrono::NaiveDate;

/// Length of the run of consecutive days ending on `today`.
///
/// Walks backward from `today` one day at a time and stops at the first
/// day missing from the history, so the cost is proportional to the
/// streak, not to the history size. Zero when `today` is absent.
pub fn streak_length(history: &DateHistory, today: NaiveDate) -> u32 {
    let mut len = 0;
    let mut cursor = Some(today);
    while let Some(day) = cursor {
        if !history.contains(day) {
            break;
        }
        len += 1;
        cursor = day.pred_opt();
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn days_back(n: i64) -> NaiveDate {
        today() - Duration::days(n)
    }

    #[test]
    fn test_seven_consecutive_days() {
        let history = DateHistory::from_dates((0..7).map(days_back));
        assert_eq!(streak_length(&history, today()), 7);
    }

    #[test]
    fn test_gap_before_today_resets_to_one() {
        let history = DateHistory::from_dates((0..7).filter(|&n| n != 1).map(days_back));
        assert_eq!(streak_length(&history, today()), 1);
    }

    #[test]
    fn test_zero_without_today() {
        let history = DateHistory::from_dates((1..30).map(days_back));
        assert_eq!(streak_length(&history, today()), 0);
        assert_eq!(streak_length(&DateHistory::new(), today()), 0);
    }

    #[test]
    fn test_crosses_month_and_leap_day() {
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let history = DateHistory::from_dates([
            end,
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
        ]);
        assert_eq!(streak_length(&history, end), 3);
    }

    #[test]
    fn test_future_dates_are_ignored() {
        let history = DateHistory::from_dates([today(), days_back(-1), days_back(-2)]);
        assert_eq!(streak_length(&history, today()), 1);
    }
}
