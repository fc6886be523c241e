use std::sync::Arc;

use scorebox::scoring::repository::MatchRepository;
use scorebox::scoring::{
    CommandOutcome, ExtraKind, MatchState, ScoringService, TeamRoster, TossDecision, WicketKind,
};
use scorebox::shared::AppState;
use scorebox::snapshot::InMemorySnapshotStore;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub const HOME_TEAM: &str = "Lions";
pub const AWAY_TEAM: &str = "Tigers";

pub const HOME_PLAYERS: [&str; 11] = [
    "asha", "bina", "chand", "dev", "esha", "farid", "gita", "hari", "indra", "jai", "kiran",
];
pub const AWAY_PLAYERS: [&str; 11] = [
    "noor", "omar", "priya", "qadir", "rana", "sara", "tarun", "uma", "vik", "wasim", "yash",
];

pub struct TestSetup {
    pub scoring_service: ScoringService,
    pub match_repository: Arc<MatchRepository>,
    pub snapshot_store: Arc<InMemorySnapshotStore>,
    pub match_id: String,
}

impl TestSetup {
    pub fn app_state(&self) -> AppState {
        AppState::new(
            Arc::clone(&self.match_repository),
            self.snapshot_store.clone(),
        )
    }

    pub async fn state(&self) -> MatchState {
        self.scoring_service
            .get_match(&self.match_id)
            .await
            .expect("match should exist")
    }

    /// Puts an opening pair and a bowler in place.
    pub async fn open_batting(&self, striker: &str, non_striker: &str, bowler: &str) {
        self.scoring_service
            .select_batsman(&self.match_id, striker, true)
            .await
            .unwrap();
        self.scoring_service
            .select_batsman(&self.match_id, non_striker, false)
            .await
            .unwrap();
        self.scoring_service
            .select_bowler(&self.match_id, bowler)
            .await
            .unwrap();
    }

    pub async fn score(&self, runs: u32) -> CommandOutcome {
        self.scoring_service
            .add_delivery(&self.match_id, runs, None)
            .await
            .unwrap()
    }

    pub async fn score_extra(&self, runs: u32, extra: ExtraKind) -> CommandOutcome {
        self.scoring_service
            .add_delivery(&self.match_id, runs, Some(extra))
            .await
            .unwrap()
    }

    pub async fn wicket(&self) -> CommandOutcome {
        self.scoring_service
            .record_wicket(&self.match_id, Some(WicketKind::Bowled))
            .await
            .unwrap()
    }

    pub async fn bowl_dots(&self, balls: usize) {
        for _ in 0..balls {
            self.score(0).await;
        }
    }

    /// Lets queued fire-and-forget snapshot tasks run.
    pub async fn drain_background_tasks(&self) {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }
}

pub struct TestSetupBuilder {
    total_overs: u32,
    toss_winner: String,
    toss_decision: TossDecision,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            total_overs: 20,
            toss_winner: HOME_TEAM.to_string(),
            toss_decision: TossDecision::Bat,
        }
    }

    pub fn with_total_overs(mut self, overs: u32) -> Self {
        self.total_overs = overs;
        self
    }

    pub fn with_toss(mut self, winner: &str, decision: TossDecision) -> Self {
        self.toss_winner = winner.to_string();
        self.toss_decision = decision;
        self
    }

    pub async fn build(self) -> TestSetup {
        let match_repository = Arc::new(MatchRepository::new());
        let snapshot_store = Arc::new(InMemorySnapshotStore::new());
        let scoring_service =
            ScoringService::new(Arc::clone(&match_repository), snapshot_store.clone());

        let created = scoring_service
            .create_match(
                TeamRoster::new(
                    HOME_TEAM,
                    HOME_PLAYERS.iter().map(|p| p.to_string()).collect(),
                ),
                TeamRoster::new(
                    AWAY_TEAM,
                    AWAY_PLAYERS.iter().map(|p| p.to_string()).collect(),
                ),
                self.total_overs,
            )
            .await
            .unwrap();
        let match_id = created.id().to_string();

        scoring_service
            .submit_toss(&match_id, &self.toss_winner, self.toss_decision)
            .await
            .unwrap();

        TestSetup {
            scoring_service,
            match_repository,
            snapshot_store,
            match_id,
        }
    }
}

impl Default for TestSetupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
