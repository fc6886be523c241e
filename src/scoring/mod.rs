// Public API
pub use core::{
    FirstInningsRecord, ManualState, MatchState, ScoringError, TeamRoster, TossDecision,
    TossResult,
};
pub use deliveries::{DeliveryToken, ExtraKind, WicketKind};
pub use innings::{InningsPhase, InningsScore, MAX_WICKETS};
pub use service::{CommandOutcome, ScoringService};
pub use stats::{BatsmanStats, BowlerStats};

// Internal modules
pub mod core;
pub mod deliveries;
pub mod handlers;
pub mod innings;
pub mod repository;
pub mod service;
pub mod stats;
pub mod types;
