use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::scoring::core::MatchState;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot storage error: {0}")]
    Storage(String),
}

/// One persisted state of a match. The full `MatchState` is embedded, so a
/// snapshot round-trips losslessly through serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub match_id: String,
    pub saved_at: DateTime<Utc>,
    pub state: MatchState,
}

impl MatchSnapshot {
    pub fn of(state: &MatchState) -> Self {
        Self {
            match_id: state.id().to_string(),
            saved_at: Utc::now(),
            state: state.clone(),
        }
    }
}

/// Session-scoped key-value persistence. A snapshot is written after every
/// command; only the newest write per match is kept.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn save(&self, snapshot: MatchSnapshot) -> Result<(), SnapshotError>;
    async fn load(&self, match_id: &str) -> Result<Option<MatchSnapshot>, SnapshotError>;
    async fn delete(&self, match_id: &str) -> Result<(), SnapshotError>;
}

pub struct InMemorySnapshotStore {
    snapshots: RwLock<HashMap<String, MatchSnapshot>>,
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn save(&self, snapshot: MatchSnapshot) -> Result<(), SnapshotError> {
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(snapshot.match_id.clone(), snapshot);
        Ok(())
    }

    async fn load(&self, match_id: &str) -> Result<Option<MatchSnapshot>, SnapshotError> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots.get(match_id).cloned())
    }

    async fn delete(&self, match_id: &str) -> Result<(), SnapshotError> {
        let mut snapshots = self.snapshots.write().await;
        snapshots.remove(match_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::core::{MatchState, TeamRoster, TossDecision};

    fn sample_state() -> MatchState {
        let mut state = MatchState::new(
            "stored-match".to_string(),
            TeamRoster::new("Lions", vec!["A".to_string(), "B".to_string()]),
            TeamRoster::new("Tigers", vec!["X".to_string()]),
            20,
        )
        .unwrap();
        state.submit_toss("Lions", TossDecision::Bat).unwrap();
        state.select_batsman("A", true).unwrap();
        state.select_batsman("B", false).unwrap();
        state.select_bowler("X").unwrap();
        state.add_delivery(4, None).unwrap();
        state
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = InMemorySnapshotStore::new();
        let state = sample_state();
        store.save(MatchSnapshot::of(&state)).await.unwrap();

        let loaded = store.load("stored-match").await.unwrap().unwrap();
        assert_eq!(loaded.state, state);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = InMemorySnapshotStore::new();
        let mut state = sample_state();
        store.save(MatchSnapshot::of(&state)).await.unwrap();
        state.add_delivery(6, None).unwrap();
        store.save(MatchSnapshot::of(&state)).await.unwrap();

        let loaded = store.load("stored-match").await.unwrap().unwrap();
        assert_eq!(loaded.state.innings().total_runs, 10);
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let store = InMemorySnapshotStore::new();
        assert!(store.load("nowhere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_snapshot_round_trips_through_json() {
        let state = sample_state();
        let snapshot = MatchSnapshot::of(&state);
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.state, state);
        assert_eq!(restored.match_id, "stored-match");
    }
}
