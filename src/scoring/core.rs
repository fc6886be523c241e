// The match structure is owned by the repository and passed through the
// service layer; every mutation goes through the command methods below.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::scoring::deliveries::{DeliveryToken, ExtraKind, WicketKind, MAX_BALL_RUNS};
use crate::scoring::innings::{InningsPhase, InningsScore, MAX_WICKETS};
use crate::scoring::stats::{BatsmanStats, BowlerStats};

pub const MIN_TOTAL_OVERS: u32 = 1;
pub const MAX_TOTAL_OVERS: u32 = 50;
pub const DEFAULT_TOTAL_OVERS: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("Toss has not been submitted yet")]
    TossNotTaken,
    #[error("Toss cannot change once the first ball is bowled")]
    TossAlreadySettled,
    #[error("Unknown team: {0}")]
    UnknownTeam(String),
    #[error("Both batsmen must be at the crease before scoring")]
    BatsmenNotSelected,
    #[error("A bowler must be selected before scoring")]
    BowlerNotSelected,
    #[error("The match is already complete")]
    MatchOver,
    #[error("Runs per delivery cannot exceed {MAX_BALL_RUNS}, got {0}")]
    InvalidRuns(u32),
    #[error("Total overs must be between {MIN_TOTAL_OVERS} and {MAX_TOTAL_OVERS}, got {0}")]
    InvalidOvers(u32),
    #[error("Player not in the roster: {0}")]
    PlayerNotInRoster(String),
    #[error("{0} is already out and cannot bat again")]
    PlayerAlreadyOut(String),
    #[error("{0} is already at the crease")]
    AlreadyAtCrease(String),
    #[error("{0} is not at the crease")]
    NotAtCrease(String),
    #[error("Striker and non-striker must be different players")]
    StrikerConflict,
    #[error("Declared total of {stated} does not match the batsmen total of {computed}")]
    TotalsMismatch { stated: u32, computed: u32 },
    #[error("Wickets cannot exceed {MAX_WICKETS}, got {0}")]
    TooManyWickets(u32),
    #[error("Balls within the over must be 0-5, got {0}")]
    InvalidBallsThisOver(u32),
    #[error("Team names must be different")]
    DuplicateTeamNames,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRoster {
    pub name: String,
    pub logo_url: Option<String>,
    pub players: Vec<String>,
}

impl TeamRoster {
    pub fn new(name: impl Into<String>, players: Vec<String>) -> Self {
        Self {
            name: name.into(),
            logo_url: None,
            players,
        }
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn add_player(&mut self, name: String) {
        if !self.has_player(&name) {
            self.players.push(name);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TossResult {
    pub winner_team: String,
    pub decision: TossDecision,
}

/// Closed first innings, kept so the chase can be scored against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstInningsRecord {
    pub score: u32,
    pub batting_team: String,
}

/// Operator-supplied innings snapshot for the manual import command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualState {
    pub total_runs: u32,
    pub wickets: u32,
    pub overs: u32,
    pub balls_this_over: u32,
    pub batsmen: Vec<BatsmanStats>,
    pub bowlers: Vec<BowlerStats>,
    pub striker: String,
    pub non_striker: String,
    pub current_bowler: String,
    pub out_players: Vec<String>,
}

/// The whole scoring aggregate for one match. All state lives here and is
/// only mutated through the command methods, each of which either fully
/// applies and returns user-facing notices or rejects with a `ScoringError`
/// leaving the state untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    id: String,
    home: TeamRoster,
    away: TeamRoster,
    total_overs: u32,
    toss: Option<TossResult>,
    phase: InningsPhase,
    first_innings: Option<FirstInningsRecord>,
    batsmen: Vec<BatsmanStats>,
    bowlers: Vec<BowlerStats>,
    innings: InningsScore,
    recent_balls: Vec<DeliveryToken>,
}

impl MatchState {
    pub fn new(
        id: String,
        home: TeamRoster,
        away: TeamRoster,
        total_overs: u32,
    ) -> Result<Self, ScoringError> {
        if home.name == away.name {
            return Err(ScoringError::DuplicateTeamNames);
        }
        if !(MIN_TOTAL_OVERS..=MAX_TOTAL_OVERS).contains(&total_overs) {
            return Err(ScoringError::InvalidOvers(total_overs));
        }
        Ok(Self {
            id,
            home,
            away,
            total_overs,
            toss: None,
            phase: InningsPhase::FirstInnings,
            first_innings: None,
            batsmen: Vec::new(),
            bowlers: Vec::new(),
            innings: InningsScore::default(),
            recent_balls: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn home(&self) -> &TeamRoster {
        &self.home
    }

    pub fn away(&self) -> &TeamRoster {
        &self.away
    }

    pub fn total_overs(&self) -> u32 {
        self.total_overs
    }

    pub fn toss(&self) -> Option<&TossResult> {
        self.toss.as_ref()
    }

    pub fn phase(&self) -> InningsPhase {
        self.phase
    }

    pub fn first_innings(&self) -> Option<&FirstInningsRecord> {
        self.first_innings.as_ref()
    }

    pub fn batsmen(&self) -> &[BatsmanStats] {
        &self.batsmen
    }

    pub fn bowlers(&self) -> &[BowlerStats] {
        &self.bowlers
    }

    pub fn innings(&self) -> &InningsScore {
        &self.innings
    }

    pub fn recent_balls(&self) -> &[DeliveryToken] {
        &self.recent_balls
    }

    pub fn balls_limit(&self) -> u32 {
        self.total_overs * 6
    }

    /// Chase target once the first innings has closed.
    pub fn target(&self) -> Option<u32> {
        self.first_innings.as_ref().map(|record| record.score + 1)
    }

    /// Which side bats right now, derived from the toss and the phase.
    pub fn batting_team(&self) -> Option<&TeamRoster> {
        let toss = self.toss.as_ref()?;
        let home_bats_first = match toss.decision {
            TossDecision::Bat => toss.winner_team == self.home.name,
            TossDecision::Bowl => toss.winner_team != self.home.name,
        };
        let home_bats_now = match self.phase {
            InningsPhase::FirstInnings => home_bats_first,
            _ => !home_bats_first,
        };
        Some(if home_bats_now { &self.home } else { &self.away })
    }

    pub fn bowling_team(&self) -> Option<&TeamRoster> {
        let batting = self.batting_team()?;
        Some(if batting.name == self.home.name {
            &self.away
        } else {
            &self.home
        })
    }

    // ---- Commands ---------------------------------------------------------

    pub fn submit_toss(
        &mut self,
        winner_team: &str,
        decision: TossDecision,
    ) -> Result<Vec<String>, ScoringError> {
        if self.phase != InningsPhase::FirstInnings || self.innings.total_balls > 0 {
            return Err(ScoringError::TossAlreadySettled);
        }
        if winner_team != self.home.name && winner_team != self.away.name {
            return Err(ScoringError::UnknownTeam(winner_team.to_string()));
        }
        self.toss = Some(TossResult {
            winner_team: winner_team.to_string(),
            decision,
        });
        let choice = match decision {
            TossDecision::Bat => "bat",
            TossDecision::Bowl => "bowl",
        };
        Ok(vec![format!(
            "{} won the toss and elected to {}",
            winner_team, choice
        )])
    }

    pub fn set_total_overs(&mut self, overs: u32) -> Result<Vec<String>, ScoringError> {
        if !(MIN_TOTAL_OVERS..=MAX_TOTAL_OVERS).contains(&overs) {
            return Err(ScoringError::InvalidOvers(overs));
        }
        self.total_overs = overs;
        let mut notices = vec![format!("Match format set to {} overs", overs)];
        // Shortening the match can close the innings in progress.
        if let Some(notice) = self.advance_phase() {
            notices.push(notice);
        }
        Ok(notices)
    }

    pub fn select_batsman(
        &mut self,
        name: &str,
        as_striker: bool,
    ) -> Result<Vec<String>, ScoringError> {
        if self.phase == InningsPhase::MatchComplete {
            return Err(ScoringError::MatchOver);
        }
        let batting = self.batting_team().ok_or(ScoringError::TossNotTaken)?;
        if !batting.has_player(name) {
            return Err(ScoringError::PlayerNotInRoster(name.to_string()));
        }
        if self.innings.out_players.contains(name) {
            return Err(ScoringError::PlayerAlreadyOut(name.to_string()));
        }
        if self.innings.at_crease(name) {
            return Err(ScoringError::AlreadyAtCrease(name.to_string()));
        }
        if !self.batsmen.iter().any(|b| b.name == name) {
            self.batsmen.push(BatsmanStats::new(name));
        }
        // A batsman returning after retiring hurt resumes their innings.
        self.innings.retired_hurt.remove(name);
        let end = if as_striker {
            self.innings.striker = Some(name.to_string());
            "striker"
        } else {
            self.innings.non_striker = Some(name.to_string());
            "non-striker"
        };
        Ok(vec![format!("{} comes in as {}", name, end)])
    }

    pub fn select_bowler(&mut self, name: &str) -> Result<Vec<String>, ScoringError> {
        if self.phase == InningsPhase::MatchComplete {
            return Err(ScoringError::MatchOver);
        }
        let bowling = self.bowling_team().ok_or(ScoringError::TossNotTaken)?;
        if !bowling.has_player(name) {
            return Err(ScoringError::PlayerNotInRoster(name.to_string()));
        }
        if !self.bowlers.iter().any(|b| b.name == name) {
            self.bowlers.push(BowlerStats::new(name));
        }
        self.innings.current_bowler = Some(name.to_string());
        self.innings.is_over_complete = false;
        Ok(vec![format!("{} comes on to bowl", name)])
    }

    /// Scores one delivery. Wides and no-balls add their penalty run without
    /// advancing the over; leg byes and overthrows are legal deliveries that
    /// route runs past the bat (overthrows still credit the striker, leg
    /// byes do not).
    pub fn add_delivery(
        &mut self,
        runs: u32,
        extra: Option<ExtraKind>,
    ) -> Result<Vec<String>, ScoringError> {
        self.guard_live()?;
        let striker = self
            .innings
            .striker
            .clone()
            .ok_or(ScoringError::BatsmenNotSelected)?;
        if self.innings.non_striker.is_none() {
            return Err(ScoringError::BatsmenNotSelected);
        }
        let bowler = self
            .innings
            .current_bowler
            .clone()
            .ok_or(ScoringError::BowlerNotSelected)?;
        if runs > MAX_BALL_RUNS {
            return Err(ScoringError::InvalidRuns(runs));
        }

        let mut notices = Vec::new();
        match extra {
            None => {
                self.batsman_mut(&striker)?.record_bat(runs);
                let bowler_stats = self.bowler_mut(&bowler)?;
                bowler_stats.concede(runs);
                bowler_stats.record_legal_ball();
                self.innings.total_runs += runs;
                self.innings.total_balls += 1;
                self.recent_balls.push(DeliveryToken::Runs(runs));
                notices.push(match runs {
                    0 => "Dot ball".to_string(),
                    1 => "1 run added".to_string(),
                    4 => "Four! 4 runs added".to_string(),
                    6 => "Six! 6 runs added".to_string(),
                    n => format!("{} runs added", n),
                });
                self.settle_legal_ball(runs, &bowler, &mut notices)?;
            }
            Some(kind @ (ExtraKind::Wide | ExtraKind::NoBall)) => {
                // Fixed one-run penalty; nothing is charged to the striker
                // and the over does not advance.
                self.bowler_mut(&bowler)?.concede(1);
                self.innings.total_runs += 1;
                self.recent_balls.push(DeliveryToken::Extra(kind));
                notices.push(match kind {
                    ExtraKind::Wide => "Wide ball: +1 run added".to_string(),
                    _ => "No ball: +1 run added".to_string(),
                });
            }
            Some(kind @ (ExtraKind::LegBye | ExtraKind::OverThrow)) => {
                let credited = if kind == ExtraKind::OverThrow { runs } else { 0 };
                self.batsman_mut(&striker)?.face_ball(credited);
                let bowler_stats = self.bowler_mut(&bowler)?;
                bowler_stats.concede(runs);
                bowler_stats.record_legal_ball();
                self.innings.total_runs += runs;
                self.innings.total_balls += 1;
                self.recent_balls.push(DeliveryToken::Extra(kind));
                notices.push(match kind {
                    ExtraKind::LegBye => format!("Leg byes: +{} runs added", runs),
                    _ => format!("Overthrows: +{} runs to {}", runs, striker),
                });
                self.settle_legal_ball(runs, &bowler, &mut notices)?;
            }
        }

        if let Some(notice) = self.advance_phase() {
            notices.push(notice);
        }
        Ok(notices)
    }

    pub fn record_wicket(
        &mut self,
        kind: Option<WicketKind>,
    ) -> Result<Vec<String>, ScoringError> {
        self.guard_live()?;
        let striker = self
            .innings
            .striker
            .clone()
            .ok_or(ScoringError::BatsmenNotSelected)?;
        let bowler = self
            .innings
            .current_bowler
            .clone()
            .ok_or(ScoringError::BowlerNotSelected)?;

        self.batsman_mut(&striker)?.face_ball(0);
        let bowler_stats = self.bowler_mut(&bowler)?;
        bowler_stats.record_wicket();
        bowler_stats.record_legal_ball();
        self.innings.wickets += 1;
        self.innings.total_balls += 1;
        self.innings.out_players.insert(striker.clone());
        self.innings.last_wicket = kind;
        self.recent_balls.push(DeliveryToken::Wicket);

        let mut notices = vec![match kind {
            Some(k) => format!("Wicket! {} is out ({})", striker, k),
            None => format!("Wicket! {} is out", striker),
        }];

        // The striker slot is vacated first; if the over also finished, the
        // slot labels still swap so the surviving batsman takes strike and
        // the empty slot waits as non-striker.
        self.innings.striker = None;
        self.innings.is_over_complete = false;
        if self.bowler_mut(&bowler)?.over_finished() {
            self.bowler_mut(&bowler)?.close_over();
            self.innings.is_over_complete = true;
            self.innings.swap_strike();
            notices.push(format!(
                "Over {} complete",
                self.innings.total_balls / 6
            ));
        }

        if let Some(notice) = self.advance_phase() {
            notices.push(notice);
        }
        Ok(notices)
    }

    pub fn retire_hurt(&mut self, name: &str) -> Result<Vec<String>, ScoringError> {
        if self.phase == InningsPhase::MatchComplete {
            return Err(ScoringError::MatchOver);
        }
        if !self.innings.at_crease(name) {
            return Err(ScoringError::NotAtCrease(name.to_string()));
        }
        self.innings.retired_hurt.insert(name.to_string());
        self.innings.clear_slot_of(name);
        Ok(vec![format!("{} retires hurt", name)])
    }

    /// Replaces the innings in progress with an operator-supplied snapshot.
    /// Phase, toss, and rosters are untouched; the transition machine runs
    /// once afterwards so an imported finished innings hands over at once.
    pub fn apply_manual_state(&mut self, setup: ManualState) -> Result<Vec<String>, ScoringError> {
        self.guard_live()?;
        if setup.wickets > MAX_WICKETS {
            return Err(ScoringError::TooManyWickets(setup.wickets));
        }
        if setup.balls_this_over >= 6 {
            return Err(ScoringError::InvalidBallsThisOver(setup.balls_this_over));
        }
        if setup.overs > self.total_overs {
            return Err(ScoringError::InvalidOvers(setup.overs));
        }
        let computed: u32 = setup.batsmen.iter().map(|b| b.runs).sum();
        if computed != setup.total_runs {
            return Err(ScoringError::TotalsMismatch {
                stated: setup.total_runs,
                computed,
            });
        }
        if setup.striker == setup.non_striker {
            return Err(ScoringError::StrikerConflict);
        }
        for name in [&setup.striker, &setup.non_striker] {
            if !setup.batsmen.iter().any(|b| &b.name == name) {
                return Err(ScoringError::PlayerNotInRoster(name.clone()));
            }
            if setup.out_players.contains(name) {
                return Err(ScoringError::PlayerAlreadyOut(name.clone()));
            }
        }
        if !setup.bowlers.iter().any(|b| b.name == setup.current_bowler) {
            return Err(ScoringError::PlayerNotInRoster(setup.current_bowler.clone()));
        }

        self.batsmen = setup.batsmen;
        self.bowlers = setup.bowlers;
        self.innings = InningsScore {
            total_runs: setup.total_runs,
            total_balls: setup.overs * 6 + setup.balls_this_over,
            wickets: setup.wickets,
            striker: Some(setup.striker),
            non_striker: Some(setup.non_striker),
            current_bowler: Some(setup.current_bowler),
            is_over_complete: false,
            out_players: setup.out_players.into_iter().collect::<HashSet<_>>(),
            retired_hurt: HashSet::new(),
            last_wicket: None,
        };
        self.recent_balls.clear();

        let mut notices = vec!["Match state imported".to_string()];
        if let Some(notice) = self.advance_phase() {
            notices.push(notice);
        }
        Ok(notices)
    }

    /// Zeroes the innings in progress, keeping rosters, toss, phase, and the
    /// first-innings record.
    pub fn reset_innings(&mut self) -> Result<Vec<String>, ScoringError> {
        self.batsmen.clear();
        self.bowlers.clear();
        self.innings = InningsScore::default();
        self.recent_balls.clear();
        Ok(vec!["Innings reset".to_string()])
    }

    // ---- Internals --------------------------------------------------------

    fn guard_live(&self) -> Result<(), ScoringError> {
        if self.phase == InningsPhase::MatchComplete {
            return Err(ScoringError::MatchOver);
        }
        if self.toss.is_none() {
            return Err(ScoringError::TossNotTaken);
        }
        Ok(())
    }

    fn batsman_mut(&mut self, name: &str) -> Result<&mut BatsmanStats, ScoringError> {
        self.batsmen
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| ScoringError::PlayerNotInRoster(name.to_string()))
    }

    fn bowler_mut(&mut self, name: &str) -> Result<&mut BowlerStats, ScoringError> {
        self.bowlers
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| ScoringError::PlayerNotInRoster(name.to_string()))
    }

    /// Strike rotation and over bookkeeping shared by every legal delivery.
    /// The odd-run swap and the end-of-over swap are independent and both
    /// apply when both conditions hold.
    fn settle_legal_ball(
        &mut self,
        runs: u32,
        bowler: &str,
        notices: &mut Vec<String>,
    ) -> Result<(), ScoringError> {
        self.innings.is_over_complete = false;
        if runs % 2 == 1 {
            self.innings.swap_strike();
        }
        if self.bowler_mut(bowler)?.over_finished() {
            self.bowler_mut(bowler)?.close_over();
            self.innings.is_over_complete = true;
            self.innings.swap_strike();
            notices.push(format!(
                "Over {} complete",
                self.innings.total_balls / 6
            ));
        }
        Ok(())
    }

    /// The one place phase transitions happen, run once after each mutating
    /// command. First innings hands over to the second with the role swap;
    /// the second innings closes the match.
    fn advance_phase(&mut self) -> Option<String> {
        match self.phase {
            InningsPhase::FirstInnings => {
                if self.innings.total_balls == 0
                    || !self.innings.is_complete(self.balls_limit())
                {
                    return None;
                }
                let batting_team = self.batting_team()?.name.clone();
                let score = self.innings.total_runs;
                self.first_innings = Some(FirstInningsRecord {
                    score,
                    batting_team,
                });
                // The bowling side now bats: bowlers become batsmen and
                // batsmen become bowlers, stats zeroed.
                let next_batsmen: Vec<BatsmanStats> = self
                    .bowlers
                    .iter()
                    .map(|b| BatsmanStats::new(b.name.as_str()))
                    .collect();
                let next_bowlers: Vec<BowlerStats> = self
                    .batsmen
                    .iter()
                    .map(|b| BowlerStats::new(b.name.as_str()))
                    .collect();
                self.batsmen = next_batsmen;
                self.bowlers = next_bowlers;
                self.innings = InningsScore::default();
                self.recent_balls.clear();
                self.phase = InningsPhase::SecondInnings;
                Some(format!(
                    "First innings closed at {}; target is {}",
                    score,
                    score + 1
                ))
            }
            InningsPhase::SecondInnings => {
                let chased = self
                    .target()
                    .is_some_and(|target| self.innings.total_runs >= target);
                let exhausted = self.innings.total_balls > 0
                    && self.innings.is_complete(self.balls_limit());
                if chased || exhausted {
                    self.phase = InningsPhase::MatchComplete;
                    Some("Match complete".to_string())
                } else {
                    None
                }
            }
            InningsPhase::MatchComplete => None,
        }
    }
}
