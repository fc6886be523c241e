use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    core::ManualState,
    service::{CommandOutcome, ScoringService},
    types::{
        BatsmanSelectRequest, BowlerSelectRequest, CommandResponse, DeliveryRequest,
        MatchCreateRequest, MatchCreateResponse, OversRequest, RetireRequest, TossRequest,
        WicketRequest,
    },
};
use crate::scoreboard::LiveScoreboard;
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> ScoringService {
    ScoringService::new(
        Arc::clone(&state.match_repository),
        Arc::clone(&state.snapshot_store),
    )
}

fn command_response(outcome: CommandOutcome) -> Json<CommandResponse> {
    Json(CommandResponse {
        scoreboard: LiveScoreboard::of(&outcome.state),
        notices: outcome.notices,
    })
}

/// HTTP handler for creating a new match
///
/// POST /match
/// Returns match information with generated ID
#[instrument(name = "create_match", skip(state, request))]
pub async fn create_match(
    State(state): State<AppState>,
    Json(request): Json<MatchCreateRequest>,
) -> Result<Json<MatchCreateResponse>, AppError> {
    info!(
        home = %request.home.name,
        away = %request.away.name,
        "Creating new match"
    );

    let total_overs = request.total_overs();
    let created = service(&state)
        .create_match(
            request.home.into_roster(),
            request.away.into_roster(),
            total_overs,
        )
        .await?;

    info!(match_id = %created.id(), "Match created successfully");

    Ok(Json(MatchCreateResponse {
        id: created.id().to_string(),
        home_team: created.home().name.clone(),
        away_team: created.away().name.clone(),
        total_overs: created.total_overs(),
    }))
}

/// POST /match/{id}/toss
#[instrument(name = "submit_toss", skip(state), fields(match_id = %match_id))]
pub async fn submit_toss(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<TossRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    info!(winner = %request.winner_team, "Submitting toss");
    let outcome = service(&state)
        .submit_toss(&match_id, &request.winner_team, request.decision)
        .await?;
    Ok(command_response(outcome))
}

/// POST /match/{id}/overs
#[instrument(name = "set_total_overs", skip(state), fields(match_id = %match_id))]
pub async fn set_total_overs(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<OversRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    let outcome = service(&state)
        .set_total_overs(&match_id, request.total_overs)
        .await?;
    Ok(command_response(outcome))
}

/// POST /match/{id}/batsman
#[instrument(name = "select_batsman", skip(state), fields(match_id = %match_id))]
pub async fn select_batsman(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<BatsmanSelectRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    let outcome = service(&state)
        .select_batsman(&match_id, &request.name, request.is_striker)
        .await?;
    Ok(command_response(outcome))
}

/// POST /match/{id}/bowler
#[instrument(name = "select_bowler", skip(state), fields(match_id = %match_id))]
pub async fn select_bowler(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<BowlerSelectRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    let outcome = service(&state)
        .select_bowler(&match_id, &request.name)
        .await?;
    Ok(command_response(outcome))
}

/// POST /match/{id}/delivery
#[instrument(name = "add_delivery", skip(state), fields(match_id = %match_id))]
pub async fn add_delivery(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<DeliveryRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    info!(runs = request.runs, extra = ?request.extra, "Scoring delivery");
    let outcome = service(&state)
        .add_delivery(&match_id, request.runs, request.extra)
        .await?;
    Ok(command_response(outcome))
}

/// POST /match/{id}/wicket
#[instrument(name = "record_wicket", skip(state), fields(match_id = %match_id))]
pub async fn record_wicket(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<WicketRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    info!(kind = ?request.kind, "Recording wicket");
    let outcome = service(&state)
        .record_wicket(&match_id, request.kind)
        .await?;
    Ok(command_response(outcome))
}

/// POST /match/{id}/retire
#[instrument(name = "retire_hurt", skip(state), fields(match_id = %match_id))]
pub async fn retire_hurt(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<RetireRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    let outcome = service(&state)
        .retire_hurt(&match_id, &request.name)
        .await?;
    Ok(command_response(outcome))
}

/// POST /match/{id}/manual
#[instrument(name = "apply_manual_state", skip(state, request), fields(match_id = %match_id))]
pub async fn apply_manual_state(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<ManualState>,
) -> Result<Json<CommandResponse>, AppError> {
    info!("Importing manual match state");
    let outcome = service(&state)
        .apply_manual_state(&match_id, request)
        .await?;
    Ok(command_response(outcome))
}

/// POST /match/{id}/reset
#[instrument(name = "reset_innings", skip(state), fields(match_id = %match_id))]
pub async fn reset_innings(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<CommandResponse>, AppError> {
    info!("Resetting innings");
    let outcome = service(&state).reset_innings(&match_id).await?;
    Ok(command_response(outcome))
}

/// POST /match/{id}/restore
#[instrument(name = "restore_match", skip(state), fields(match_id = %match_id))]
pub async fn restore_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<CommandResponse>, AppError> {
    info!("Restoring match from snapshot");
    let restored = service(&state).restore_match(&match_id).await?;
    Ok(Json(CommandResponse {
        notices: vec!["Match restored from snapshot".to_string()],
        scoreboard: LiveScoreboard::of(&restored),
    }))
}
