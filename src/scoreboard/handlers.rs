use axum::{
    extract::{Path, State},
    Json,
};
use tracing::instrument;

use super::view::LiveScoreboard;
use crate::shared::{AppError, AppState};

/// HTTP handler for the public live scoreboard
///
/// GET /match/{id}/scoreboard
/// Returns the derived read model for the current match state
#[instrument(name = "get_scoreboard", skip(state), fields(match_id = %match_id))]
pub async fn get_scoreboard(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<LiveScoreboard>, AppError> {
    let match_state = state
        .match_repository
        .get_match(&match_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Match not found: {}", match_id)))?;

    Ok(Json(LiveScoreboard::of(&match_state)))
}
