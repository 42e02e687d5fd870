use crate::models::ProfileState;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Shared handle over the single in-memory profile. One local user, one
/// process; the mutex only serializes overlapping HTTP requests.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub profile: Arc<Mutex<ProfileState>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, profile: ProfileState) -> Self {
        Self {
            data_path,
            profile: Arc::new(Mutex::new(profile)),
        }
    }
}
