use std::fmt;
use strum_macros::EnumIter;

/// Highest number of runs a single delivery can be scored for.
pub const MAX_BALL_RUNS: u32 = 7;

/// Extra delivery outcomes. Wides and no-balls are illegal deliveries and do
/// not advance the over; leg byes and overthrows are legal deliveries that
/// route runs differently from a normal scoring shot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum ExtraKind {
    Wide,
    NoBall,
    LegBye,
    OverThrow,
}

impl ExtraKind {
    /// Whether this extra still counts as a legal delivery of the over.
    pub fn counts_ball(&self) -> bool {
        matches!(self, ExtraKind::LegBye | ExtraKind::OverThrow)
    }
}

impl fmt::Display for ExtraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ExtraKind::Wide => "WD",
                ExtraKind::NoBall => "NB",
                ExtraKind::LegBye => "LB",
                ExtraKind::OverThrow => "OT",
            }
        )
    }
}

impl TryFrom<&str> for ExtraKind {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "WD" => Ok(ExtraKind::Wide),
            "NB" => Ok(ExtraKind::NoBall),
            "LB" => Ok(ExtraKind::LegBye),
            "OT" => Ok(ExtraKind::OverThrow),
            _ => Err(s.to_string()),
        }
    }
}

/// How a batsman got out. Kept for display on the scoreboard only; the
/// engine treats every dismissal the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WicketKind {
    Bowled,
    Caught,
    Lbw,
    RunOut,
    Stumped,
    HitWicket,
}

impl fmt::Display for WicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WicketKind::Bowled => "bowled",
                WicketKind::Caught => "caught",
                WicketKind::Lbw => "lbw",
                WicketKind::RunOut => "run out",
                WicketKind::Stumped => "stumped",
                WicketKind::HitWicket => "hit wicket",
            }
        )
    }
}

/// One entry of the recent-balls log, serialized as its short code so the
/// log reads as `["1", "4", "WD", "W", ...]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum DeliveryToken {
    Runs(u32),
    Wicket,
    Extra(ExtraKind),
}

impl DeliveryToken {
    /// Legal deliveries advance the ball count; wides and no-balls do not.
    pub fn counts_ball(&self) -> bool {
        match self {
            DeliveryToken::Runs(_) | DeliveryToken::Wicket => true,
            DeliveryToken::Extra(extra) => extra.counts_ball(),
        }
    }
}

impl fmt::Display for DeliveryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryToken::Runs(runs) => write!(f, "{}", runs),
            DeliveryToken::Wicket => write!(f, "W"),
            DeliveryToken::Extra(extra) => write!(f, "{}", extra),
        }
    }
}

impl From<DeliveryToken> for String {
    fn from(token: DeliveryToken) -> Self {
        token.to_string()
    }
}

impl TryFrom<String> for DeliveryToken {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == "W" {
            return Ok(DeliveryToken::Wicket);
        }
        if let Ok(extra) = ExtraKind::try_from(s.as_str()) {
            return Ok(DeliveryToken::Extra(extra));
        }
        match s.parse::<u32>() {
            Ok(runs) if runs <= MAX_BALL_RUNS => Ok(DeliveryToken::Runs(runs)),
            _ => Err(s),
        }
    }
}
