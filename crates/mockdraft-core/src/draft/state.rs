// Per-team state during one simulated draft.

use serde::Serialize;

use super::pick::SimPick;
use super::roster::RosterMap;
use crate::players::Player;
use crate::settings::Strategy;

/// The state of a single simulated team. Lives for one orchestration run.
#[derive(Debug, Clone, Serialize)]
pub struct TeamDraftState {
    /// Draft slot, 1..=teams.
    pub team_slot: u32,
    pub strategy: Strategy,
    /// Players drafted so far, in pick order.
    pub roster: Vec<Player>,
    /// Running count per position.
    pub counts: RosterMap,
    /// This team's picks, in pick order.
    pub picks: Vec<SimPick>,
}

impl TeamDraftState {
    pub fn new(team_slot: u32, strategy: Strategy) -> Self {
        TeamDraftState {
            team_slot,
            strategy,
            roster: Vec::new(),
            counts: RosterMap::default(),
            picks: Vec::new(),
        }
    }

    /// Record a drafted player. Roster, counts, and pick list move together.
    pub fn record_pick(&mut self, player: Player, pick: SimPick) {
        self.counts.increment(player.position);
        self.roster.push(player);
        self.picks.push(pick);
    }
}
