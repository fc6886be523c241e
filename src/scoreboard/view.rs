use serde::{Deserialize, Serialize};

use crate::scoring::core::MatchState;
use crate::scoring::deliveries::DeliveryToken;
use crate::scoring::innings::InningsPhase;
use crate::scoring::stats::{best_bowler, top_scorer, BatsmanStats, BowlerStats};

/// How many trailing delivery tokens the scoreboard shows.
pub const RECENT_BALL_WINDOW: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatsmanCard {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: String,
    pub on_strike: bool,
}

impl BatsmanCard {
    fn of(stats: &BatsmanStats, on_strike: bool) -> Self {
        Self {
            name: stats.name.clone(),
            runs: stats.runs,
            balls: stats.balls,
            fours: stats.fours,
            sixes: stats.sixes,
            strike_rate: stats.strike_rate(),
            on_strike,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BowlerCard {
    pub name: String,
    pub overs: String,
    pub runs: u32,
    pub wickets: u32,
    pub maidens: u32,
    pub economy: String,
}

impl BowlerCard {
    fn of(stats: &BowlerStats) -> Self {
        Self {
            name: stats.name.clone(),
            overs: stats.overs_display(),
            runs: stats.runs,
            wickets: stats.wickets,
            maidens: stats.maidens,
            economy: stats.economy(),
        }
    }
}

/// Combined runs and balls of the two batsmen at the crease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partnership {
    pub runs: u32,
    pub balls: u32,
}

/// Chase figures, present once the first innings has closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaseSummary {
    pub target: u32,
    pub runs_remaining: u32,
    pub balls_remaining: u32,
    pub required_run_rate: String,
}

/// Everything the public view renders, derived afresh from the match state
/// on every read. The view never mutates anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveScoreboard {
    pub match_id: String,
    pub phase: InningsPhase,
    pub batting_team: Option<String>,
    pub bowling_team: Option<String>,
    pub total_runs: u32,
    pub wickets: u32,
    pub overs: String,
    pub total_overs: u32,
    pub current_run_rate: String,
    pub first_innings_score: Option<u32>,
    pub first_innings_batting_team: Option<String>,
    pub chase: Option<ChaseSummary>,
    pub batsmen: Vec<BatsmanCard>,
    pub bowler: Option<BowlerCard>,
    pub partnership: Partnership,
    pub last_wicket: Option<String>,
    pub top_scorer: Option<BatsmanCard>,
    pub best_bowler: Option<BowlerCard>,
    pub recent_overs: Vec<Vec<String>>,
}

impl LiveScoreboard {
    pub fn of(state: &MatchState) -> Self {
        let innings = state.innings();

        let find_batsman = |slot: &Option<String>| {
            slot.as_deref()
                .and_then(|name| state.batsmen().iter().find(|b| b.name == name))
        };
        let striker = find_batsman(&innings.striker);
        let non_striker = find_batsman(&innings.non_striker);

        let mut batsmen = Vec::new();
        if let Some(stats) = striker {
            batsmen.push(BatsmanCard::of(stats, true));
        }
        if let Some(stats) = non_striker {
            batsmen.push(BatsmanCard::of(stats, false));
        }

        let partnership = Partnership {
            runs: striker.map_or(0, |b| b.runs) + non_striker.map_or(0, |b| b.runs),
            balls: striker.map_or(0, |b| b.balls) + non_striker.map_or(0, |b| b.balls),
        };

        let bowler = innings
            .current_bowler
            .as_deref()
            .and_then(|name| state.bowlers().iter().find(|b| b.name == name))
            .map(BowlerCard::of);

        let chase = state.target().map(|target| {
            let runs_remaining = target.saturating_sub(innings.total_runs);
            let balls_remaining = state.balls_limit().saturating_sub(innings.total_balls);
            let required_run_rate = if balls_remaining > 0 {
                format!(
                    "{:.2}",
                    runs_remaining as f64 / (balls_remaining as f64 / 6.0)
                )
            } else {
                "0.00".to_string()
            };
            ChaseSummary {
                target,
                runs_remaining,
                balls_remaining,
                required_run_rate,
            }
        });

        Self {
            match_id: state.id().to_string(),
            phase: state.phase(),
            batting_team: state.batting_team().map(|t| t.name.clone()),
            bowling_team: state.bowling_team().map(|t| t.name.clone()),
            total_runs: innings.total_runs,
            wickets: innings.wickets,
            overs: innings.overs_display(),
            total_overs: state.total_overs(),
            current_run_rate: innings.run_rate(),
            first_innings_score: state.first_innings().map(|r| r.score),
            first_innings_batting_team: state.first_innings().map(|r| r.batting_team.clone()),
            chase,
            batsmen,
            bowler,
            partnership,
            last_wicket: innings.last_wicket.map(|k| k.to_string()),
            top_scorer: top_scorer(state.batsmen()).map(|b| {
                BatsmanCard::of(b, innings.striker.as_deref() == Some(b.name.as_str()))
            }),
            best_bowler: best_bowler(state.bowlers()).map(BowlerCard::of),
            recent_overs: group_recent_overs(state.recent_balls()),
        }
    }
}

/// Takes the trailing window of the innings log and groups it by over.
/// Over boundaries are found by counting legal balls from the start of the
/// log, so a wide bowled after a completed over lands in the next group.
fn group_recent_overs(tokens: &[DeliveryToken]) -> Vec<Vec<String>> {
    let mut over_index = Vec::with_capacity(tokens.len());
    let mut legal_balls = 0u32;
    for token in tokens {
        over_index.push(legal_balls / 6);
        if token.counts_ball() {
            legal_balls += 1;
        }
    }

    let start = tokens.len().saturating_sub(RECENT_BALL_WINDOW);
    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut current_over = None;
    for (idx, token) in tokens.iter().enumerate().skip(start) {
        if current_over != Some(over_index[idx]) {
            groups.push(Vec::new());
            current_over = Some(over_index[idx]);
        }
        if let Some(group) = groups.last_mut() {
            group.push(token.to_string());
        }
    }
    groups
}
