use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::scoring::repository::MatchRepository;
use crate::scoring::ScoringError;
use crate::snapshot::SnapshotStore;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub match_repository: Arc<MatchRepository>,
    pub snapshot_store: Arc<dyn SnapshotStore>,
}

impl AppState {
    pub fn new(
        match_repository: Arc<MatchRepository>,
        snapshot_store: Arc<dyn SnapshotStore>,
    ) -> Self {
        Self {
            match_repository,
            snapshot_store,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl From<ScoringError> for AppError {
    fn from(error: ScoringError) -> Self {
        match error {
            ScoringError::PlayerNotInRoster(_) | ScoringError::UnknownTeam(_) => {
                AppError::NotFound(error.to_string())
            }
            _ => AppError::BadRequest(error.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
