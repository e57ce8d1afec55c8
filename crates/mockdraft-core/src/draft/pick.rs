// Positions and individual pick records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fantasy football roster positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DST,
    K,
}

impl Position {
    /// Every position, in display order.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::DST,
        Position::K,
    ];

    /// Parse a position string into a Position enum.
    ///
    /// Case-insensitive. Accepts the common aliases data providers use:
    /// - "D/ST", "DEF", "D" -> DST
    /// - "PK" -> K
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::QB),
            "RB" => Some(Position::RB),
            "WR" => Some(Position::WR),
            "TE" => Some(Position::TE),
            "DST" | "D/ST" | "DEF" | "D" => Some(Position::DST),
            "K" | "PK" => Some(Position::K),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DST => "DST",
            Position::K => "K",
        }
    }

    /// Whether this position can fill the FLEX starting slot.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(self, Position::RB | Position::WR | Position::TE)
    }

    /// Deterministic ordering index for display and array storage.
    pub fn sort_order(&self) -> usize {
        match self {
            Position::QB => 0,
            Position::RB => 1,
            Position::WR => 2,
            Position::TE => 3,
            Position::DST => 4,
            Position::K => 5,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// One drafted player. Created once by the orchestrator and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimPick {
    /// Overall pick number across the whole draft (1-indexed).
    pub overall_pick: u32,
    pub round: u32,
    /// Position of this pick within its round (1-indexed, in snake order).
    pub pick_in_round: u32,
    pub team_slot: u32,
    pub is_user: bool,
    pub player_name: String,
    pub player_team: String,
    pub position: Position,
    pub adp: f64,
    /// Overall pick minus ADP. Positive means the player fell (value).
    pub adp_diff: f64,
    /// Projection under the draft's scoring format.
    pub projection: f64,
    pub reason: String,
}
