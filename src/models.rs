use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mood score written when the user did not pick one (bulk and seed entries).
pub const NEUTRAL_MOOD: u8 = 3;

pub const DEFAULT_CHALLENGE_NAME: &str = "My 90-Day Challenge";

/// Length of the challenge the progress bar and weekly average are scaled to.
pub const GOAL_DAYS: u32 = 90;

/// One logged day. Records are replaced wholesale, never field-edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinRecord {
    pub date: String,
    #[serde(default)]
    pub note: String,
    #[serde(default = "neutral_mood")]
    pub mood: u8,
}

fn neutral_mood() -> u8 {
    NEUTRAL_MOOD
}

/// The whole persisted state. Field names stay camelCase on disk so blobs
/// exported by earlier versions of the widget import cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileState {
    pub checkins: BTreeMap<String, CheckinRecord>,
    pub longest_streak: u32,
    pub unlocked_badges: Vec<String>,
    pub challenge_name: String,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            checkins: BTreeMap::new(),
            longest_streak: 0,
            unlocked_badges: Vec::new(),
            challenge_name: DEFAULT_CHALLENGE_NAME.to_string(),
        }
    }
}

impl ProfileState {
    pub fn has_badge(&self, id: &str) -> bool {
        self.unlocked_badges.iter().any(|unlocked| unlocked == id)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BadgeDefinition {
    pub id: &'static str,
    pub threshold: u32,
    pub label: &'static str,
}

/// Milestone catalogue. Evaluation order is declaration order; ids are
/// stable and persist in `unlockedBadges`.
pub const BADGES: [BadgeDefinition; 5] = [
    BadgeDefinition { id: "first_checkin", threshold: 1, label: "First Blood" },
    BadgeDefinition { id: "week_streak", threshold: 7, label: "Weekly Win" },
    BadgeDefinition { id: "month_streak", threshold: 30, label: "One Month" },
    BadgeDefinition { id: "high_achiever", threshold: 60, label: "60 Days" },
    BadgeDefinition { id: "ninety_percent", threshold: 81, label: "90% Done" },
];

#[derive(Debug, Deserialize)]
pub struct CheckinRequest {
    pub date: String,
    #[serde(default)]
    pub note: String,
    #[serde(default = "neutral_mood")]
    pub mood: u8,
}

#[derive(Debug, Deserialize)]
pub struct RemoveRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct RangeRequest {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FastStartRequest {
    pub days: i64,
}

#[derive(Debug, Deserialize)]
pub struct ChallengeRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct BadgeStatus {
    pub id: &'static str,
    pub label: &'static str,
    pub threshold: u32,
    pub unlocked: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_checkins: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub weekly_avg: f64,
    pub progress_pct: f64,
    pub badges: Vec<BadgeStatus>,
}

/// Every mutating route answers with fresh stats plus the badge diff so the
/// page can re-render and celebrate without a second round-trip.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub stats: StatsResponse,
    pub newly_unlocked: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RangeResponse {
    pub marked: u64,
    pub stats: StatsResponse,
    pub newly_unlocked: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
    pub stats: StatsResponse,
    pub newly_unlocked: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub challenge_name: String,
    pub checkins: BTreeMap<String, CheckinRecord>,
    pub unlocked_badges: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChallengeResponse {
    pub challenge_name: String,
}
