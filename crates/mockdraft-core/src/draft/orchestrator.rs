// Draft orchestrator: the snake-order pick loop.
//
// One run owns the RNG, the shrinking pool, and every team's state. Picks are
// strictly sequential because each one depends on the pool left by the last.

use tracing::{debug, warn};

use super::pick::SimPick;
use super::roster::{roster_targets, RosterMap};
use super::select::{pick_reason, select_pick, PickContext, ProjectionCeilings};
use super::state::TeamDraftState;
use crate::players::Player;
use crate::rng::DraftRng;
use crate::settings::{Settings, Strategy};

/// Everything a finished draft produced.
#[derive(Debug, Clone)]
pub struct DraftOutcome {
    /// One entry per draft slot, ordered by slot (index = slot - 1).
    pub teams: Vec<TeamDraftState>,
    /// Every pick in the order it was made.
    pub picks: Vec<SimPick>,
    pub targets: RosterMap,
    /// Picks that found no eligible player.
    pub skipped_picks: u32,
}

impl DraftOutcome {
    pub fn team(&self, slot: u32) -> Option<&TeamDraftState> {
        self.teams.iter().find(|t| t.team_slot == slot)
    }
}

/// Team slots in the order they pick in `round` (1-indexed).
///
/// Odd rounds run 1..=teams, even rounds run teams..=1.
pub fn snake_order(round: u32, teams: u32) -> Vec<u32> {
    if round % 2 == 1 {
        (1..=teams).collect()
    } else {
        (1..=teams).rev().collect()
    }
}

/// Build one state per slot. The user keeps their strategy; every other slot
/// draws one uniformly from `Strategy::ALL`.
fn build_teams(settings: &Settings, rng: &mut DraftRng) -> Vec<TeamDraftState> {
    (1..=settings.teams)
        .map(|slot| {
            let strategy = if slot == settings.draft_slot {
                settings.strategy
            } else {
                Strategy::ALL[rng.next_index(Strategy::ALL.len())]
            };
            TeamDraftState::new(slot, strategy)
        })
        .collect()
}

/// Run a complete draft over a working copy of `players`.
pub fn run_draft(settings: &Settings, players: &[Player]) -> DraftOutcome {
    let mut rng = DraftRng::new(settings.seed);
    let targets = roster_targets(settings.rounds);
    let ceilings = ProjectionCeilings::from_pool(players, settings.scoring);

    let mut available: Vec<Player> = players.to_vec();
    let mut teams = build_teams(settings, &mut rng);
    let mut picks: Vec<SimPick> = Vec::with_capacity(settings.total_picks() as usize);
    let mut skipped_picks = 0;

    for round in 1..=settings.rounds {
        for (i, slot) in snake_order(round, settings.teams).into_iter().enumerate() {
            let pick_in_round = i as u32 + 1;
            let overall_pick = (round - 1) * settings.teams + pick_in_round;
            let team = &mut teams[(slot - 1) as usize];

            let ctx = PickContext {
                settings,
                targets: &targets,
                ceilings: &ceilings,
                round,
                overall_pick,
            };

            let Some(selection) = select_pick(&available, team, &ctx, &mut rng) else {
                warn!(
                    "no eligible player for slot {} at pick {} (round {}), skipping",
                    slot, overall_pick, round
                );
                skipped_picks += 1;
                continue;
            };

            let player = available.remove(selection.index);
            let b = selection.breakdown;
            let pick = SimPick {
                overall_pick,
                round,
                pick_in_round,
                team_slot: slot,
                is_user: slot == settings.draft_slot,
                player_name: player.name.clone(),
                player_team: player.team.clone(),
                position: player.position,
                adp: player.adp,
                adp_diff: b.adp_diff,
                projection: player.projection(settings.scoring),
                reason: pick_reason(b.adp_diff, b.need, b.strategy).to_string(),
            };
            debug!(
                "pick {} (R{}.{}): slot {} takes {} {} (score {:.3})",
                overall_pick, round, pick_in_round, slot, pick.position, pick.player_name, selection.score
            );

            picks.push(pick.clone());
            team.record_pick(player, pick);
        }
    }

    DraftOutcome {
        teams,
        picks,
        targets,
        skipped_picks,
    }
}
