use serde::{Deserialize, Serialize};

use crate::scoreboard::LiveScoreboard;
use crate::scoring::core::{TeamRoster, TossDecision, DEFAULT_TOTAL_OVERS};
use crate::scoring::deliveries::{ExtraKind, WicketKind};

/// One team as supplied at match creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSetup {
    pub name: String,
    pub logo_url: Option<String>,
    #[serde(default)]
    pub players: Vec<String>,
}

impl TeamSetup {
    /// Duplicate player names collapse to one roster entry.
    pub fn into_roster(self) -> TeamRoster {
        let mut roster = TeamRoster::new(self.name, Vec::new());
        roster.logo_url = self.logo_url;
        for player in self.players {
            roster.add_player(player);
        }
        roster
    }
}

/// Request payload for creating a new match
#[derive(Debug, Deserialize)]
pub struct MatchCreateRequest {
    pub home: TeamSetup,
    pub away: TeamSetup,
    pub total_overs: Option<u32>,
}

impl MatchCreateRequest {
    pub fn total_overs(&self) -> u32 {
        self.total_overs.unwrap_or(DEFAULT_TOTAL_OVERS)
    }
}

/// Response for match creation
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchCreateResponse {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub total_overs: u32,
}

/// Request payload for scoring one delivery
#[derive(Debug, Deserialize)]
pub struct DeliveryRequest {
    pub runs: u32,
    pub extra: Option<ExtraKind>,
}

/// Request payload for recording a dismissal
#[derive(Debug, Deserialize)]
pub struct WicketRequest {
    pub kind: Option<WicketKind>,
}

#[derive(Debug, Deserialize)]
pub struct BatsmanSelectRequest {
    pub name: String,
    pub is_striker: bool,
}

#[derive(Debug, Deserialize)]
pub struct BowlerSelectRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RetireRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct OversRequest {
    pub total_overs: u32,
}

#[derive(Debug, Deserialize)]
pub struct TossRequest {
    pub winner_team: String,
    pub decision: TossDecision,
}

/// Every command responds with the engine's notices plus a refreshed
/// scoreboard so the admin view can re-render from one payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub notices: Vec<String>,
    pub scoreboard: LiveScoreboard,
}
