use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::scoring::core::{MatchState, ScoringError, TeamRoster};

/// In-memory home of every live match, keyed by the generated match id.
pub struct MatchRepository {
    /// A mapping from match ID to match state
    matches: Arc<RwLock<HashMap<String, MatchState>>>,
}

impl Default for MatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRepository {
    pub fn new() -> Self {
        Self {
            matches: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a match under a fresh two-word id and returns its state.
    pub async fn create_match(
        &self,
        home: TeamRoster,
        away: TeamRoster,
        total_overs: u32,
    ) -> Result<MatchState, ScoringError> {
        let match_id = petname::Petnames::default().generate_one(2, "-");
        let state = MatchState::new(match_id.clone(), home, away, total_overs)?;
        let mut matches = self.matches.write().await;
        matches.insert(match_id, state.clone());
        Ok(state)
    }

    pub async fn update_match(&self, match_id: &str, state: MatchState) {
        let mut matches = self.matches.write().await;
        matches.insert(match_id.to_string(), state);
    }

    pub async fn get_match(&self, match_id: &str) -> Option<MatchState> {
        let matches = self.matches.read().await;
        matches.get(match_id).cloned()
    }

    pub async fn remove_match(&self, match_id: &str) -> Option<MatchState> {
        let mut matches = self.matches.write().await;
        matches.remove(match_id)
    }

    pub async fn has_match(&self, match_id: &str) -> bool {
        let matches = self.matches.read().await;
        matches.contains_key(match_id)
    }
}
