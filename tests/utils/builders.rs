use scorebox::scoring::{BatsmanStats, BowlerStats, ManualState};

// ============================================================================
// Manual State Construction Utilities
// ============================================================================

/// Builds the payload for the manual state import command.
pub struct ManualStateBuilder {
    total_runs: u32,
    wickets: u32,
    overs: u32,
    balls_this_over: u32,
    batsmen: Vec<BatsmanStats>,
    bowlers: Vec<BowlerStats>,
    striker: String,
    non_striker: String,
    current_bowler: String,
    out_players: Vec<String>,
}

impl ManualStateBuilder {
    pub fn new() -> Self {
        Self {
            total_runs: 0,
            wickets: 0,
            overs: 0,
            balls_this_over: 0,
            batsmen: vec![],
            bowlers: vec![],
            striker: String::new(),
            non_striker: String::new(),
            current_bowler: String::new(),
            out_players: vec![],
        }
    }

    pub fn score(mut self, total_runs: u32, wickets: u32, overs: u32, balls: u32) -> Self {
        self.total_runs = total_runs;
        self.wickets = wickets;
        self.overs = overs;
        self.balls_this_over = balls;
        self
    }

    pub fn with_batsman(mut self, name: &str, runs: u32, balls: u32) -> Self {
        let mut stats = BatsmanStats::new(name);
        stats.runs = runs;
        stats.balls = balls;
        self.batsmen.push(stats);
        self
    }

    pub fn with_bowler(mut self, name: &str, runs: u32, balls: u32, wickets: u32) -> Self {
        let mut stats = BowlerStats::new(name);
        stats.runs = runs;
        stats.balls = balls;
        stats.wickets = wickets;
        self.bowlers.push(stats);
        self
    }

    pub fn at_crease(mut self, striker: &str, non_striker: &str) -> Self {
        self.striker = striker.to_string();
        self.non_striker = non_striker.to_string();
        self
    }

    pub fn bowling(mut self, name: &str) -> Self {
        self.current_bowler = name.to_string();
        self
    }

    pub fn with_out(mut self, name: &str) -> Self {
        self.out_players.push(name.to_string());
        self
    }

    pub fn build(self) -> ManualState {
        ManualState {
            total_runs: self.total_runs,
            wickets: self.wickets,
            overs: self.overs,
            balls_this_over: self.balls_this_over,
            batsmen: self.batsmen,
            bowlers: self.bowlers,
            striker: self.striker,
            non_striker: self.non_striker,
            current_bowler: self.current_bowler,
            out_players: self.out_players,
        }
    }
}

impl Default for ManualStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
