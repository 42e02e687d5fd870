use chrono::{Duration, Local, NaiveDate};

/// Canonical storage key for a calendar day, zero-padded `YYYY-MM-DD`.
/// Lexicographic order of keys matches chronological order, so the check-in
/// map iterates oldest-first for free.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Inverse of [`date_key`]. Keys are plain civil dates with no timezone
/// component; a formatted key always parses back to the same date.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Whole days from `a` to `b` (negative when `b` is earlier).
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// The local calendar date. All streak math anchors here.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(date_key(date), "2024-03-07");
    }

    #[test]
    fn parse_round_trips_key() {
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(parse_date_key(&date_key(date)), Some(date));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_date_key("not-a-date"), None);
        assert_eq!(parse_date_key("2024-13-01"), None);
        assert_eq!(parse_date_key(""), None);
    }

    #[test]
    fn day_arithmetic_crosses_month_boundaries() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(add_days(date, 1), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(days_between(date, add_days(date, 45)), 45);
        assert_eq!(days_between(add_days(date, 3), date), -3);
    }
}
