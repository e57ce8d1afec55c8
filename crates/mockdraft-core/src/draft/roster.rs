// Roster shapes: per-position counts, round-based targets, and the hard
// eligibility rules (position caps and earliest draftable round).

use serde::{Deserialize, Serialize};

use super::pick::Position;

/// A fixed-key count per position.
///
/// Used both as the target end-state for a roster and as a team's running
/// count during the draft. Every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMap {
    #[serde(rename = "QB")]
    pub qb: u32,
    #[serde(rename = "RB")]
    pub rb: u32,
    #[serde(rename = "WR")]
    pub wr: u32,
    #[serde(rename = "TE")]
    pub te: u32,
    #[serde(rename = "DST")]
    pub dst: u32,
    #[serde(rename = "K")]
    pub k: u32,
}

impl RosterMap {
    pub fn get(&self, pos: Position) -> u32 {
        match pos {
            Position::QB => self.qb,
            Position::RB => self.rb,
            Position::WR => self.wr,
            Position::TE => self.te,
            Position::DST => self.dst,
            Position::K => self.k,
        }
    }

    fn slot_mut(&mut self, pos: Position) -> &mut u32 {
        match pos {
            Position::QB => &mut self.qb,
            Position::RB => &mut self.rb,
            Position::WR => &mut self.wr,
            Position::TE => &mut self.te,
            Position::DST => &mut self.dst,
            Position::K => &mut self.k,
        }
    }

    pub fn increment(&mut self, pos: Position) {
        *self.slot_mut(pos) += 1;
    }

    /// Sum over all positions.
    pub fn total(&self) -> u32 {
        Position::ALL.iter().map(|&p| self.get(p)).sum()
    }

    /// (position, count) pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        Position::ALL.iter().map(move |&p| (p, self.get(p)))
    }
}

// ---------------------------------------------------------------------------
// Target model
// ---------------------------------------------------------------------------

/// Desired end-of-draft roster shape for a given draft length.
pub fn roster_targets(rounds: u32) -> RosterMap {
    if rounds <= 12 {
        RosterMap { qb: 1, rb: 4, wr: 4, te: 2, dst: 1, k: 0 }
    } else if rounds <= 15 {
        RosterMap { qb: 1, rb: 5, wr: 5, te: 2, dst: 1, k: 1 }
    } else {
        RosterMap { qb: 2, rb: 6, wr: 6, te: 2, dst: 1, k: 1 }
    }
}

/// Maximum number of players a team may roster at `pos`.
///
/// RB and WR get two slots of slack over target, everything else one.
/// A position with a zero target is closed entirely.
pub fn hard_cap(pos: Position, targets: &RosterMap) -> u32 {
    let target = targets.get(pos);
    if target == 0 {
        return 0;
    }
    match pos {
        Position::RB | Position::WR => target + 2,
        _ => target + 1,
    }
}

/// First round in which a position may be drafted.
pub fn earliest_round(pos: Position) -> u32 {
    match pos {
        Position::DST => 11,
        Position::K => 13,
        _ => 1,
    }
}

/// How far below target a team is at `pos`, in [0, 1]. Zero when the
/// position has no target.
pub fn need_score(pos: Position, counts: &RosterMap, targets: &RosterMap) -> f64 {
    let target = targets.get(pos);
    if target == 0 {
        return 0.0;
    }
    let missing = target.saturating_sub(counts.get(pos));
    f64::from(missing) / f64::from(target)
}
