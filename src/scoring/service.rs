use std::sync::Arc;

use tracing::warn;

use crate::{
    scoring::{
        core::{ManualState, MatchState, ScoringError, TeamRoster, TossDecision},
        deliveries::{ExtraKind, WicketKind},
        repository::MatchRepository,
    },
    shared::AppError,
    snapshot::{MatchSnapshot, SnapshotStore},
};

/// What every command hands back to the caller: the refreshed state and the
/// user-facing notices the engine produced.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub state: MatchState,
    pub notices: Vec<String>,
}

pub struct ScoringService {
    match_repository: Arc<MatchRepository>,
    snapshot_store: Arc<dyn SnapshotStore>,
}

impl ScoringService {
    pub fn new(
        match_repository: Arc<MatchRepository>,
        snapshot_store: Arc<dyn SnapshotStore>,
    ) -> Self {
        Self {
            match_repository,
            snapshot_store,
        }
    }

    /// Create a new match and persist its opening snapshot
    pub async fn create_match(
        &self,
        home: TeamRoster,
        away: TeamRoster,
        total_overs: u32,
    ) -> Result<MatchState, AppError> {
        if home.name.trim().is_empty() || away.name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Team names cannot be empty".to_string(),
            ));
        }
        let state = self
            .match_repository
            .create_match(home, away, total_overs)
            .await?;
        self.persist(&state);
        Ok(state)
    }

    /// Get the current match state (read-only access)
    pub async fn get_match(&self, match_id: &str) -> Option<MatchState> {
        self.match_repository.get_match(match_id).await
    }

    pub async fn add_delivery(
        &self,
        match_id: &str,
        runs: u32,
        extra: Option<ExtraKind>,
    ) -> Result<CommandOutcome, AppError> {
        self.apply(match_id, |state| state.add_delivery(runs, extra))
            .await
    }

    pub async fn record_wicket(
        &self,
        match_id: &str,
        kind: Option<WicketKind>,
    ) -> Result<CommandOutcome, AppError> {
        self.apply(match_id, |state| state.record_wicket(kind)).await
    }

    pub async fn select_batsman(
        &self,
        match_id: &str,
        name: &str,
        as_striker: bool,
    ) -> Result<CommandOutcome, AppError> {
        self.apply(match_id, |state| state.select_batsman(name, as_striker))
            .await
    }

    pub async fn select_bowler(
        &self,
        match_id: &str,
        name: &str,
    ) -> Result<CommandOutcome, AppError> {
        self.apply(match_id, |state| state.select_bowler(name)).await
    }

    pub async fn retire_hurt(
        &self,
        match_id: &str,
        name: &str,
    ) -> Result<CommandOutcome, AppError> {
        self.apply(match_id, |state| state.retire_hurt(name)).await
    }

    pub async fn set_total_overs(
        &self,
        match_id: &str,
        overs: u32,
    ) -> Result<CommandOutcome, AppError> {
        self.apply(match_id, |state| state.set_total_overs(overs))
            .await
    }

    pub async fn submit_toss(
        &self,
        match_id: &str,
        winner_team: &str,
        decision: TossDecision,
    ) -> Result<CommandOutcome, AppError> {
        self.apply(match_id, |state| state.submit_toss(winner_team, decision))
            .await
    }

    pub async fn apply_manual_state(
        &self,
        match_id: &str,
        setup: ManualState,
    ) -> Result<CommandOutcome, AppError> {
        self.apply(match_id, |state| state.apply_manual_state(setup))
            .await
    }

    pub async fn reset_innings(&self, match_id: &str) -> Result<CommandOutcome, AppError> {
        self.apply(match_id, |state| state.reset_innings()).await
    }

    /// Re-hydrate a match from its stored snapshot, replacing whatever the
    /// repository currently holds for it.
    pub async fn restore_match(&self, match_id: &str) -> Result<MatchState, AppError> {
        let snapshot = self
            .snapshot_store
            .load(match_id)
            .await
            .map_err(|error| {
                warn!(%error, match_id, "Failed to load match snapshot");
                AppError::Internal
            })?
            .ok_or_else(|| {
                AppError::NotFound(format!("No snapshot stored for match: {}", match_id))
            })?;
        self.match_repository
            .update_match(match_id, snapshot.state.clone())
            .await;
        Ok(snapshot.state)
    }

    /// Runs one engine command against the stored state. Commands either
    /// fully apply or fully reject; on success the repository is updated and
    /// a snapshot write is fired.
    async fn apply<F>(&self, match_id: &str, command: F) -> Result<CommandOutcome, AppError>
    where
        F: FnOnce(&mut MatchState) -> Result<Vec<String>, ScoringError>,
    {
        let mut state = self
            .match_repository
            .get_match(match_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Match not found: {}", match_id)))?;

        let notices = command(&mut state)?;

        self.match_repository
            .update_match(match_id, state.clone())
            .await;
        self.persist(&state);

        Ok(CommandOutcome { state, notices })
    }

    /// Fire-and-forget snapshot write; scoring never waits on storage.
    fn persist(&self, state: &MatchState) {
        let store = Arc::clone(&self.snapshot_store);
        let snapshot = MatchSnapshot::of(state);
        tokio::spawn(async move {
            if let Err(error) = store.save(snapshot).await {
                warn!(%error, "Failed to persist match snapshot");
            }
        });
    }
}
