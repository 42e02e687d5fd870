use crate::dates::{add_days, date_key};
use crate::models::{CheckinRecord, NEUTRAL_MOOD, ProfileState};
use chrono::NaiveDate;

/// Note written by range marking when the user leaves it blank.
pub const BULK_NOTE: &str = "Bulk check-in";

/// Note tagged onto fast-start seed entries.
pub const SEED_NOTE: &str = "Fast-start (initial log)";

/// Upsert one day. An existing record for the same date is replaced whole.
pub fn log_checkin(profile: &mut ProfileState, date: NaiveDate, note: &str, mood: u8) {
    let key = date_key(date);
    profile.checkins.insert(
        key.clone(),
        CheckinRecord {
            date: key,
            note: note.to_string(),
            mood,
        },
    );
}

/// Delete one day. Returns whether a record existed.
pub fn remove_checkin(profile: &mut ProfileState, date: NaiveDate) -> bool {
    profile.checkins.remove(&date_key(date)).is_some()
}

/// Mark every day in the inclusive span between `a` and `b` (either order)
/// with a shared note and neutral mood. Days after `today` are skipped, not
/// errors. Returns the number of days actually written.
pub fn mark_range_at(
    today: NaiveDate,
    profile: &mut ProfileState,
    a: NaiveDate,
    b: NaiveDate,
    note: Option<&str>,
) -> u64 {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let note = note
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .unwrap_or(BULK_NOTE);

    let mut marked = 0;
    let mut day = start;
    while day <= end {
        if day <= today {
            log_checkin(profile, day, note, NEUTRAL_MOOD);
            marked += 1;
        }
        day = add_days(day, 1);
    }
    marked
}

/// Reseed the profile with `days` consecutive check-ins ending at `today`.
/// This is an explicit restart: the store is cleared first, the longest
/// streak watermark is overwritten (not maxed) to exactly `days`, and badges
/// are cleared so the next evaluation pass re-earns them. `days == 0` is a
/// no-op; the HTTP layer rejects non-positive input before calling in.
pub fn fast_start_at(today: NaiveDate, profile: &mut ProfileState, days: u32) {
    if days == 0 {
        return;
    }

    profile.checkins.clear();
    for offset in 0..days {
        log_checkin(profile, add_days(today, -i64::from(offset)), SEED_NOTE, NEUTRAL_MOOD);
    }
    profile.longest_streak = days;
    profile.unlocked_badges.clear();
}
