use crate::checkins::{fast_start_at, log_checkin, mark_range_at, remove_checkin};
use crate::dates::{parse_date_key, today};
use crate::errors::AppError;
use crate::models::{
    ChallengeRequest, ChallengeResponse, CheckinRequest, DEFAULT_CHALLENGE_NAME, FastStartRequest,
    MutationResponse, ProfileResponse, ProfileState, RangeRequest, RangeResponse, RemoveRequest,
    RemoveResponse, StatsResponse,
};
use crate::state::AppState;
use crate::stats::{build_stats, refresh_profile_at};
use crate::storage::{export_filename_at, export_snapshot, parse_import, persist_profile};
use crate::ui::render_index;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::NaiveDate;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let profile = state.profile.lock().await;
    Html(render_index(&profile.challenge_name))
}

pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    let profile = state.profile.lock().await;
    Json(ProfileResponse {
        challenge_name: profile.challenge_name.clone(),
        checkins: profile.checkins.clone(),
        unlocked_badges: profile.unlocked_badges.clone(),
    })
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let profile = state.profile.lock().await;
    Json(build_stats(&profile))
}

pub async fn post_checkin(
    State(state): State<AppState>,
    Json(payload): Json<CheckinRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let date = parse_checkin_date(&payload.date)?;
    if !(1..=5).contains(&payload.mood) {
        return Err(AppError::bad_request("mood must be between 1 and 5"));
    }
    if date > today() {
        return Err(AppError::bad_request("cannot log a check-in for a future date"));
    }

    let mut profile = state.profile.lock().await;
    log_checkin(&mut profile, date, payload.note.trim(), payload.mood);
    let (stats, newly_unlocked) = finish_mutation(&state, &mut profile).await?;

    Ok(Json(MutationResponse { stats, newly_unlocked }))
}

pub async fn post_remove(
    State(state): State<AppState>,
    Json(payload): Json<RemoveRequest>,
) -> Result<Json<RemoveResponse>, AppError> {
    let date = parse_checkin_date(&payload.date)?;

    let mut profile = state.profile.lock().await;
    let removed = remove_checkin(&mut profile, date);
    if !removed {
        return Err(AppError::bad_request(format!(
            "no check-in recorded for {}",
            payload.date
        )));
    }
    let (stats, newly_unlocked) = finish_mutation(&state, &mut profile).await?;

    Ok(Json(RemoveResponse { removed, stats, newly_unlocked }))
}

pub async fn post_range(
    State(state): State<AppState>,
    Json(payload): Json<RangeRequest>,
) -> Result<Json<RangeResponse>, AppError> {
    let start = parse_checkin_date(&payload.start)?;
    let end = parse_checkin_date(&payload.end)?;

    let mut profile = state.profile.lock().await;
    let marked = mark_range_at(today(), &mut profile, start, end, payload.note.as_deref());
    let (stats, newly_unlocked) = finish_mutation(&state, &mut profile).await?;

    Ok(Json(RangeResponse { marked, stats, newly_unlocked }))
}

pub async fn post_fast_start(
    State(state): State<AppState>,
    Json(payload): Json<FastStartRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let days = u32::try_from(payload.days)
        .ok()
        .filter(|days| *days >= 1)
        .ok_or_else(|| AppError::bad_request("fast-start days must be a positive number"))?;

    let mut profile = state.profile.lock().await;
    fast_start_at(today(), &mut profile, days);
    let (stats, newly_unlocked) = finish_mutation(&state, &mut profile).await?;

    Ok(Json(MutationResponse { stats, newly_unlocked }))
}

pub async fn post_challenge(
    State(state): State<AppState>,
    Json(payload): Json<ChallengeRequest>,
) -> Result<Json<ChallengeResponse>, AppError> {
    let name = payload.name.trim();
    let name = if name.is_empty() { DEFAULT_CHALLENGE_NAME } else { name };

    let mut profile = state.profile.lock().await;
    profile.challenge_name = name.to_string();
    persist_profile(&state.data_path, &profile).await?;

    Ok(Json(ChallengeResponse {
        challenge_name: profile.challenge_name.clone(),
    }))
}

pub async fn post_reset(
    State(state): State<AppState>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut profile = state.profile.lock().await;
    *profile = ProfileState::default();
    persist_profile(&state.data_path, &profile).await?;

    Ok(Json(MutationResponse {
        stats: build_stats(&profile),
        newly_unlocked: Vec::new(),
    }))
}

pub async fn get_export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let profile = state.profile.lock().await;
    let payload = export_snapshot(&profile)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename_at(today())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload,
    ))
}

pub async fn post_import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<MutationResponse>, AppError> {
    let imported = parse_import(&body)?;

    let mut profile = state.profile.lock().await;
    *profile = imported;
    let (stats, newly_unlocked) = finish_mutation(&state, &mut profile).await?;

    Ok(Json(MutationResponse { stats, newly_unlocked }))
}

/// Shared tail of every store mutation: refresh derived state (watermark,
/// badge diff), persist the blob, return what the page needs.
async fn finish_mutation(
    state: &AppState,
    profile: &mut ProfileState,
) -> Result<(StatsResponse, Vec<&'static str>), AppError> {
    let (stats, newly_unlocked) = refresh_profile_at(today(), profile);
    persist_profile(&state.data_path, profile).await?;
    Ok((stats, newly_unlocked))
}

fn parse_checkin_date(raw: &str) -> Result<NaiveDate, AppError> {
    parse_date_key(raw.trim())
        .ok_or_else(|| AppError::bad_request(format!("'{raw}' is not a valid YYYY-MM-DD date")))
}
