use crate::dates::date_key;
use crate::errors::AppError;
use crate::models::{DEFAULT_CHALLENGE_NAME, ProfileState};
use chrono::NaiveDate;
use serde_json::Value;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("STREAK_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/profile.json"))
}

/// Load the profile blob. A missing file is a fresh start; an unreadable or
/// unparseable one is logged and treated the same way. Fields absent from
/// the blob take their defaults.
pub async fn load_profile(path: &Path) -> ProfileState {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(profile) => profile,
            Err(err) => {
                error!("failed to parse profile file: {err}");
                ProfileState::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ProfileState::default(),
        Err(err) => {
            error!("failed to read profile file: {err}");
            ProfileState::default()
        }
    }
}

pub async fn persist_profile(path: &Path, profile: &ProfileState) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(profile).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

/// The whole profile as indented JSON, the same shape `load_profile` reads.
pub fn export_snapshot(profile: &ProfileState) -> Result<String, AppError> {
    serde_json::to_string_pretty(profile).map_err(AppError::internal)
}

pub fn export_filename_at(today: NaiveDate) -> String {
    format!("streak_profile_{}.json", date_key(today))
}

/// Validate an import payload. Unparseable JSON and a parseable document
/// without a `checkins` field are distinct caller-visible errors; on either
/// one the previous state stays untouched. Everything beyond `checkins` is
/// best-effort: a malformed or missing field falls back to its default.
pub fn parse_import(payload: &str) -> Result<ProfileState, AppError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|err| AppError::bad_request(format!("could not parse import payload: {err}")))?;

    profile_from_value(&value).ok_or_else(|| {
        AppError::bad_request("invalid import structure: missing \"checkins\" field")
    })
}

fn profile_from_value(value: &Value) -> Option<ProfileState> {
    let map = value.as_object()?;
    let checkins = map.get("checkins")?;

    let field = |key: &str| map.get(key).cloned();
    Some(ProfileState {
        checkins: serde_json::from_value(checkins.clone()).unwrap_or_default(),
        longest_streak: field("longestStreak")
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default(),
        unlocked_badges: field("unlockedBadges")
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default(),
        challenge_name: field("challengeName")
            .and_then(|v| serde_json::from_value::<String>(v).ok())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_CHALLENGE_NAME.to_string()),
    })
}
