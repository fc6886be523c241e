use serde::{Deserialize, Serialize};

/// Renders a ball count as the conventional overs figure, e.g. 26 balls
/// becomes "4.2".
pub fn overs_display(balls: u32) -> String {
    format!("{}.{}", balls / 6, balls % 6)
}

/// Batting record for one player in the innings in progress. Created when
/// the player first walks to the crease and kept for the whole innings,
/// including across retirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatsmanStats {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
}

impl BatsmanStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: 0,
            balls: 0,
            fours: 0,
            sixes: 0,
        }
    }

    /// A normal scoring shot: runs credited, ball faced, boundaries counted.
    pub fn record_bat(&mut self, runs: u32) {
        self.runs += runs;
        self.balls += 1;
        if runs == 4 {
            self.fours += 1;
        }
        if runs == 6 {
            self.sixes += 1;
        }
    }

    /// A legal delivery faced that was not a scoring shot: dismissals and leg
    /// byes credit no runs, overthrows credit runs without a boundary count.
    pub fn face_ball(&mut self, credited_runs: u32) {
        self.runs += credited_runs;
        self.balls += 1;
    }

    pub fn strike_rate(&self) -> String {
        if self.balls == 0 {
            return "0.0".to_string();
        }
        format!("{:.1}", (self.runs as f64 / self.balls as f64) * 100.0)
    }
}

/// Bowling record for one player in the innings in progress. `over_runs`
/// accumulates runs conceded in the over being bowled so maidens can be
/// credited when it closes; overs are always derived from `balls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlerStats {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub wickets: u32,
    pub maidens: u32,
    pub over_runs: u32,
}

impl BowlerStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runs: 0,
            balls: 0,
            wickets: 0,
            maidens: 0,
            over_runs: 0,
        }
    }

    pub fn concede(&mut self, runs: u32) {
        self.runs += runs;
        self.over_runs += runs;
    }

    pub fn record_legal_ball(&mut self) {
        self.balls += 1;
    }

    pub fn record_wicket(&mut self) {
        self.wickets += 1;
    }

    /// True immediately after the sixth legal ball of an over.
    pub fn over_finished(&self) -> bool {
        self.balls > 0 && self.balls % 6 == 0
    }

    /// Settles the over in progress: a wicket-maiden or plain maiden is an
    /// over conceding nothing.
    pub fn close_over(&mut self) {
        if self.over_runs == 0 {
            self.maidens += 1;
        }
        self.over_runs = 0;
    }

    pub fn overs_display(&self) -> String {
        overs_display(self.balls)
    }

    pub fn economy(&self) -> String {
        if self.balls == 0 {
            return "0.0".to_string();
        }
        format!("{:.1}", self.economy_value())
    }

    fn economy_value(&self) -> f64 {
        self.runs as f64 / (self.balls as f64 / 6.0)
    }
}

/// Highest run scorer so far; the first listed wins a tie.
pub fn top_scorer(batsmen: &[BatsmanStats]) -> Option<&BatsmanStats> {
    let mut best: Option<&BatsmanStats> = None;
    for batsman in batsmen {
        if best.map_or(true, |b| batsman.runs > b.runs) {
            best = Some(batsman);
        }
    }
    best
}

/// Lowest economy among bowlers with at least a full over bowled; the first
/// listed wins a tie.
pub fn best_bowler(bowlers: &[BowlerStats]) -> Option<&BowlerStats> {
    let mut best: Option<&BowlerStats> = None;
    for bowler in bowlers.iter().filter(|b| b.balls >= 6) {
        if best.map_or(true, |b| bowler.economy_value() < b.economy_value()) {
            best = Some(bowler);
        }
    }
    best
}
