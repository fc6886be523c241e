// Library crate for the scorebox live cricket scoring server
// This file exposes the public API for integration tests

pub mod scoreboard;
pub mod scoring;
pub mod shared;
pub mod snapshot;

// Re-export commonly used types for easier access in tests
pub use scoreboard::LiveScoreboard;
pub use scoring::{
    ExtraKind, InningsPhase, ManualState, MatchState, ScoringError, ScoringService, TeamRoster,
    TossDecision, WicketKind,
};
pub use shared::{AppError, AppState};
pub use snapshot::{InMemorySnapshotStore, MatchSnapshot, SnapshotStore};
