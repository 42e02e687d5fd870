use crate::dates::{add_days, date_key, days_between, parse_date_key, today};
use crate::models::{BADGES, BadgeStatus, CheckinRecord, GOAL_DAYS, ProfileState, StatsResponse};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub fn build_stats(profile: &ProfileState) -> StatsResponse {
    build_stats_at(today(), profile)
}

/// Pure snapshot of the derived statistics. The longest streak reported is
/// the stored watermark maxed against the longest run actually present, so
/// deleting days never lowers what a reader sees.
pub fn build_stats_at(today: NaiveDate, profile: &ProfileState) -> StatsResponse {
    let total = profile.checkins.len() as u64;
    let goal = f64::from(GOAL_DAYS);
    let weekly_avg = if total == 0 { 0.0 } else { total as f64 / goal * 7.0 };
    let progress_pct = (total as f64 / goal * 100.0).min(100.0);

    StatsResponse {
        total_checkins: total,
        current_streak: current_streak_at(today, &profile.checkins),
        longest_streak: profile.longest_streak.max(longest_run(&profile.checkins)),
        weekly_avg,
        progress_pct,
        badges: BADGES
            .iter()
            .map(|badge| BadgeStatus {
                id: badge.id,
                label: badge.label,
                threshold: badge.threshold,
                unlocked: profile.has_badge(badge.id),
            })
            .collect(),
    }
}

/// Consecutive checked days ending at `today`, or at yesterday when today is
/// not yet logged. Zero when neither is checked.
pub fn current_streak_at(today: NaiveDate, checkins: &BTreeMap<String, CheckinRecord>) -> u32 {
    let mut pointer = if checkins.contains_key(&date_key(today)) {
        today
    } else {
        add_days(today, -1)
    };

    let mut streak = 0;
    while checkins.contains_key(&date_key(pointer)) {
        streak += 1;
        pointer = add_days(pointer, -1);
    }
    streak
}

/// Longest run of consecutive days anywhere in history. Keys iterate in
/// chronological order; a one-day gap extends the run, anything larger
/// resets it. Unparseable keys are skipped rather than breaking the scan.
pub fn longest_run(checkins: &BTreeMap<String, CheckinRecord>) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for date in checkins.keys().filter_map(|key| parse_date_key(key)) {
        run = match prev {
            Some(prev) => match days_between(prev, date) {
                1 => run + 1,
                0 => run,
                _ => 1,
            },
            None => 1,
        };
        best = best.max(run);
        prev = Some(date);
    }
    best
}

/// Badge ids whose threshold `total_checkins` now meets, excluding those
/// already unlocked. Catalogue order. Idempotent: once reported and
/// recorded, a rerun with the same total yields an empty diff.
pub fn newly_unlocked(total_checkins: u64, unlocked: &[String]) -> Vec<&'static str> {
    BADGES
        .iter()
        .filter(|badge| {
            total_checkins >= u64::from(badge.threshold)
                && !unlocked.iter().any(|id| id == badge.id)
        })
        .map(|badge| badge.id)
        .collect()
}

/// The one place derived state is written back: advance the watermark, fold
/// in any newly crossed milestones, and hand the caller the fresh snapshot
/// plus the diff. Celebration is the caller's concern.
pub fn refresh_profile_at(
    today: NaiveDate,
    profile: &mut ProfileState,
) -> (StatsResponse, Vec<&'static str>) {
    profile.longest_streak = profile.longest_streak.max(longest_run(&profile.checkins));

    let newly = newly_unlocked(profile.checkins.len() as u64, &profile.unlocked_badges);
    profile
        .unlocked_badges
        .extend(newly.iter().map(|id| (*id).to_string()));

    (build_stats_at(today, profile), newly)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkins::{fast_start_at, log_checkin, mark_range_at, remove_checkin};
    use crate::models::NEUTRAL_MOOD;

    fn day(s: &str) -> NaiveDate {
        parse_date_key(s).unwrap()
    }

    fn profile_with_run(end: &str, len: u32) -> ProfileState {
        let mut profile = ProfileState::default();
        for offset in 0..len {
            log_checkin(&mut profile, add_days(day(end), -i64::from(offset)), "", NEUTRAL_MOOD);
        }
        profile
    }

    #[test]
    fn consecutive_days_ending_today_count_fully() {
        let today = day("2024-01-05");
        for k in 1..=10 {
            let profile = profile_with_run("2024-01-05", k);
            assert_eq!(current_streak_at(today, &profile.checkins), k);
        }
    }

    #[test]
    fn streak_anchors_at_yesterday_when_today_unlogged() {
        let profile = profile_with_run("2024-01-04", 3);
        assert_eq!(current_streak_at(day("2024-01-05"), &profile.checkins), 3);
    }

    #[test]
    fn streak_is_zero_after_a_two_day_gap() {
        let profile = profile_with_run("2024-01-02", 6);
        assert_eq!(current_streak_at(day("2024-01-04"), &profile.checkins), 0);
    }

    #[test]
    fn deleting_today_reanchors_instead_of_zeroing() {
        let today = day("2024-01-05");
        let mut profile = profile_with_run("2024-01-05", 4);
        assert_eq!(current_streak_at(today, &profile.checkins), 4);

        remove_checkin(&mut profile, today);
        assert_eq!(current_streak_at(today, &profile.checkins), 3);
    }

    #[test]
    fn longest_run_spans_gaps_and_resets() {
        let mut profile = profile_with_run("2024-01-05", 5);
        mark_range_at(day("2024-02-01"), &mut profile, day("2024-01-10"), day("2024-01-12"), None);

        assert_eq!(longest_run(&profile.checkins), 5);
        assert_eq!(longest_run(&ProfileState::default().checkins), 0);
    }

    #[test]
    fn watermark_survives_deletions() {
        let today = day("2024-01-05");
        let mut profile = profile_with_run("2024-01-05", 5);
        let (stats, _) = refresh_profile_at(today, &mut profile);
        assert_eq!(stats.longest_streak, 5);

        for key in ["2024-01-03", "2024-01-04", "2024-01-05"] {
            remove_checkin(&mut profile, day(key));
            let (stats, _) = refresh_profile_at(today, &mut profile);
            assert_eq!(stats.longest_streak, 5);
        }
        assert_eq!(profile.longest_streak, 5);
    }

    #[test]
    fn milestone_evaluation_is_idempotent() {
        let today = day("2024-01-10");
        let mut profile = profile_with_run("2024-01-10", 7);

        let (_, first_pass) = refresh_profile_at(today, &mut profile);
        assert_eq!(first_pass, vec!["first_checkin", "week_streak"]);

        let (_, second_pass) = refresh_profile_at(today, &mut profile);
        assert!(second_pass.is_empty());
    }

    #[test]
    fn five_day_run_yields_first_badge_only() {
        let today = day("2024-01-05");
        let mut profile = ProfileState::default();
        mark_range_at(today, &mut profile, day("2024-01-01"), day("2024-01-05"), None);

        let (stats, newly) = refresh_profile_at(today, &mut profile);
        assert_eq!(stats.total_checkins, 5);
        assert_eq!(stats.current_streak, 5);
        assert_eq!(stats.longest_streak, 5);
        assert_eq!(newly, vec!["first_checkin"]);
        assert_eq!(profile.unlocked_badges, vec!["first_checkin"]);
    }

    #[test]
    fn fast_start_thirty_reearns_three_badges() {
        let today = day("2024-03-15");
        let mut profile = ProfileState::default();
        profile.longest_streak = 45;

        fast_start_at(today, &mut profile, 30);
        let (stats, newly) = refresh_profile_at(today, &mut profile);

        assert_eq!(stats.total_checkins, 30);
        assert_eq!(stats.current_streak, 30);
        assert_eq!(stats.longest_streak, 30);
        assert_eq!(newly, vec!["first_checkin", "week_streak", "month_streak"]);
    }

    #[test]
    fn weekly_average_and_progress_track_the_goal() {
        let today = day("2024-01-05");
        let empty = build_stats_at(today, &ProfileState::default());
        assert_eq!(empty.weekly_avg, 0.0);
        assert_eq!(empty.progress_pct, 0.0);

        let mut profile = ProfileState::default();
        fast_start_at(today, &mut profile, 45);
        let stats = build_stats_at(today, &profile);
        assert!((stats.weekly_avg - 3.5).abs() < 1e-9);
        assert!((stats.progress_pct - 50.0).abs() < 1e-9);

        fast_start_at(today, &mut profile, 120);
        let stats = build_stats_at(today, &profile);
        assert_eq!(stats.progress_pct, 100.0);
    }

    #[test]
    fn build_stats_never_mutates() {
        let today = day("2024-01-10");
        let profile = profile_with_run("2024-01-10", 7);
        let before = profile.clone();

        let _ = build_stats_at(today, &profile);
        assert_eq!(profile, before);
    }
}
