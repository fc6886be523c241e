use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::deliveries::WicketKind;
use crate::scoring::stats::overs_display;

/// An innings closes at ten wickets no matter the over limit.
pub const MAX_WICKETS: u32 = 10;

/// Explicit match phase. Transitions only run forward and only through
/// `MatchState::advance_phase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InningsPhase {
    FirstInnings,
    SecondInnings,
    MatchComplete,
}

impl InningsPhase {
    pub fn is_second_innings(&self) -> bool {
        matches!(self, InningsPhase::SecondInnings)
    }
}

impl fmt::Display for InningsPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InningsPhase::FirstInnings => "first innings",
                InningsPhase::SecondInnings => "second innings",
                InningsPhase::MatchComplete => "match complete",
            }
        )
    }
}

/// Score and crease bookkeeping for the innings in progress. `total_balls`
/// counts legal deliveries only and is the authoritative ball count; the
/// recent-balls log is display material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningsScore {
    pub total_runs: u32,
    pub total_balls: u32,
    pub wickets: u32,
    pub striker: Option<String>,
    pub non_striker: Option<String>,
    pub current_bowler: Option<String>,
    pub is_over_complete: bool,
    pub out_players: HashSet<String>,
    pub retired_hurt: HashSet<String>,
    pub last_wicket: Option<WicketKind>,
}

impl InningsScore {
    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }

    pub fn at_crease(&self, name: &str) -> bool {
        self.striker.as_deref() == Some(name) || self.non_striker.as_deref() == Some(name)
    }

    /// Vacates whichever crease slot the named batsman occupies.
    pub fn clear_slot_of(&mut self, name: &str) {
        if self.striker.as_deref() == Some(name) {
            self.striker = None;
        }
        if self.non_striker.as_deref() == Some(name) {
            self.non_striker = None;
        }
    }

    pub fn is_complete(&self, balls_limit: u32) -> bool {
        self.wickets >= MAX_WICKETS || self.total_balls >= balls_limit
    }

    pub fn overs_display(&self) -> String {
        overs_display(self.total_balls)
    }

    pub fn run_rate(&self) -> String {
        if self.total_balls == 0 {
            return "0.00".to_string();
        }
        format!(
            "{:.2}",
            self.total_runs as f64 / (self.total_balls as f64 / 6.0)
        )
    }
}
