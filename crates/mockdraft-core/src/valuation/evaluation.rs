// Post-draft team evaluation.
//
// Four numbers per team: the projected points of its best starting lineup,
// how much ADP value it collected, how close it landed to the target roster
// shape, and how much upside it carries.

use serde::Serialize;

use crate::draft::pick::Position;
use crate::draft::roster::RosterMap;
use crate::draft::state::TeamDraftState;
use crate::players::Player;
use crate::settings::Scoring;

// ---------------------------------------------------------------------------
// Starting lineup shape
// ---------------------------------------------------------------------------

const STARTING_QB: usize = 1;
const STARTING_RB: usize = 2;
const STARTING_WR: usize = 2;
const STARTING_TE: usize = 1;

/// Derived per-team statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEvaluation {
    pub team_slot: u32,
    /// Projected points of the optimal starting lineup.
    pub starter_projection: f64,
    /// Mean `adp_diff` across the team's picks.
    pub value_index: f64,
    /// 1 minus mean relative deviation from the roster targets, in [0, 1].
    pub balance_index: f64,
    /// Mean `upside` across drafted players.
    pub upside_index: f64,
}

/// Projections at `pos`, best first.
fn sorted_projections(roster: &[Player], pos: Position, scoring: Scoring) -> Vec<f64> {
    let mut values: Vec<f64> = roster
        .iter()
        .filter(|p| p.position == pos)
        .map(|p| p.projection(scoring))
        .collect();
    values.sort_by(|a, b| b.total_cmp(a));
    values
}

/// Sum of the optimal lineup: 1 QB, 2 RB, 2 WR, 1 TE, 1 FLEX (best leftover
/// RB/WR/TE), 1 DST and 1 K when rostered.
pub fn starter_projection(roster: &[Player], scoring: Scoring) -> f64 {
    let qb = sorted_projections(roster, Position::QB, scoring);
    let rb = sorted_projections(roster, Position::RB, scoring);
    let wr = sorted_projections(roster, Position::WR, scoring);
    let te = sorted_projections(roster, Position::TE, scoring);
    let dst = sorted_projections(roster, Position::DST, scoring);
    let k = sorted_projections(roster, Position::K, scoring);

    let take = |values: &[f64], n: usize| -> f64 { values.iter().take(n).sum() };

    let flex = rb
        .iter()
        .skip(STARTING_RB)
        .chain(wr.iter().skip(STARTING_WR))
        .chain(te.iter().skip(STARTING_TE))
        .copied()
        .fold(None, |best: Option<f64>, v| Some(best.map_or(v, |b| b.max(v))))
        .unwrap_or(0.0);

    take(&qb, STARTING_QB)
        + take(&rb, STARTING_RB)
        + take(&wr, STARTING_WR)
        + take(&te, STARTING_TE)
        + flex
        + take(&dst, 1)
        + take(&k, 1)
}

/// How closely `counts` matches `targets`, in [0, 1].
pub fn balance_index(counts: &RosterMap, targets: &RosterMap) -> f64 {
    let deviations: Vec<f64> = Position::ALL
        .iter()
        .filter(|&&pos| targets.get(pos) > 0)
        .map(|&pos| {
            let target = f64::from(targets.get(pos));
            (f64::from(counts.get(pos)) - target).abs() / target
        })
        .collect();
    (1.0 - mean(&deviations)).clamp(0.0, 1.0)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Evaluate one team's finished draft.
pub fn evaluate_team(team: &TeamDraftState, targets: &RosterMap, scoring: Scoring) -> TeamEvaluation {
    let adp_diffs: Vec<f64> = team.picks.iter().map(|p| p.adp_diff).collect();
    let upsides: Vec<f64> = team.roster.iter().map(|p| p.upside).collect();

    TeamEvaluation {
        team_slot: team.team_slot,
        starter_projection: starter_projection(&team.roster, scoring),
        value_index: mean(&adp_diffs),
        balance_index: balance_index(&team.counts, targets),
        upside_index: mean(&upsides),
    }
}

/// Evaluate every team, preserving slot order.
pub fn evaluate_all(teams: &[TeamDraftState], targets: &RosterMap, scoring: Scoring) -> Vec<TeamEvaluation> {
    teams
        .iter()
        .map(|team| evaluate_team(team, targets, scoring))
        .collect()
}
