// Pick selection engine.
//
// Given the remaining pool and the team on the clock, score every eligible
// player and take the best one. The score blends projection, roster need,
// ADP value, strategy bias, upside, tier, and a small seeded jitter, minus
// penalties for reaching far ahead of ADP or piling onto a filled position.

use serde::Serialize;

use super::pick::Position;
use super::roster::{earliest_round, hard_cap, need_score, RosterMap};
use super::state::TeamDraftState;
use crate::players::Player;
use crate::rng::DraftRng;
use crate::settings::{Scoring, Settings, Strategy};

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

const PROJECTION_WEIGHT: f64 = 2.15;
const NEED_WEIGHT: f64 = 1.65;
const VALUE_WEIGHT: f64 = 1.05;

/// ADP gap (in picks) that maps to one unit of value score.
const VALUE_SCALE: f64 = 18.0;
const VALUE_CLAMP: f64 = 2.0;

const UPSIDE_CHASER_UPSIDE_WEIGHT: f64 = 0.65;
const DEFAULT_UPSIDE_WEIGHT: f64 = 0.28;

const TIER_BASELINE: f64 = 6.0;
const TIER_WEIGHT: f64 = 0.09;

const JITTER_WIDTH: f64 = 0.22;

/// Picking a player more than this many picks before their ADP is a reach.
const REACH_WINDOW: f64 = 8.0;
const REACH_PENALTY: f64 = 1.2;

const OVERFLOW_PENALTY: f64 = 0.55;

// ---------------------------------------------------------------------------
// Projection ceilings
// ---------------------------------------------------------------------------

/// Highest projection seen at each position, used to put projections from
/// different positions on a comparable [0, 1] scale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectionCeilings([f64; 6]);

impl ProjectionCeilings {
    pub fn from_pool(players: &[Player], scoring: Scoring) -> Self {
        let mut ceilings = [0.0_f64; 6];
        for player in players {
            let slot = &mut ceilings[player.position.sort_order()];
            *slot = slot.max(player.projection(scoring));
        }
        ProjectionCeilings(ceilings)
    }

    pub fn get(&self, pos: Position) -> f64 {
        self.0[pos.sort_order()]
    }
}

// ---------------------------------------------------------------------------
// Pick context and score breakdown
// ---------------------------------------------------------------------------

/// Everything about the current pick that is shared by all candidates.
#[derive(Debug, Clone, Copy)]
pub struct PickContext<'a> {
    pub settings: &'a Settings,
    pub targets: &'a RosterMap,
    pub ceilings: &'a ProjectionCeilings,
    pub round: u32,
    pub overall_pick: u32,
}

/// Individual components of a candidate's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub projection: f64,
    pub need: f64,
    pub value: f64,
    pub strategy: f64,
    pub upside: f64,
    pub tier: f64,
    pub jitter: f64,
    pub reach_penalty: f64,
    pub overflow_penalty: f64,
    /// Overall pick minus ADP for this candidate at this pick.
    pub adp_diff: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.projection * PROJECTION_WEIGHT
            + self.need * NEED_WEIGHT
            + self.value * VALUE_WEIGHT
            + self.strategy
            + self.upside
            + self.tier
            + self.jitter
            - self.reach_penalty
            - self.overflow_penalty
    }
}

/// The engine's choice: an index into the available pool and why.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

/// Hard constraints: earliest draftable round and the per-position cap.
pub fn is_eligible(player: &Player, counts: &RosterMap, targets: &RosterMap, round: u32) -> bool {
    let pos = player.position;
    round >= earliest_round(pos) && counts.get(pos) < hard_cap(pos, targets)
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Strategy-specific bonus or penalty, added straight into the score.
pub fn strategy_score(strategy: Strategy, player: &Player, round: u32, adp_diff: f64) -> f64 {
    let pos = player.position;
    match strategy {
        Strategy::Balanced => 0.0,
        Strategy::HeroRb => match pos {
            Position::RB if round <= 4 => 0.85,
            Position::RB if round >= 7 => -0.2,
            _ => 0.0,
        },
        Strategy::ZeroRb => match pos {
            Position::RB if round <= 5 => -1.05,
            Position::RB => 0.55,
            Position::WR | Position::TE if round <= 4 => 0.25,
            _ => 0.0,
        },
        Strategy::EliteQb => match pos {
            Position::QB if (2..=6).contains(&round) => 0.9,
            Position::TE if round <= 3 => 0.2,
            _ => 0.0,
        },
        Strategy::UpsideChaser => {
            let reach_bonus = if adp_diff < 0.0 { 0.15 } else { 0.0 };
            player.upside * 0.9 + reach_bonus
        }
    }
}

/// Score one eligible candidate for `team`. Draws exactly one value from `rng`.
pub fn score_candidate(
    player: &Player,
    team: &TeamDraftState,
    ctx: &PickContext<'_>,
    rng: &mut DraftRng,
) -> ScoreBreakdown {
    let pos = player.position;
    let overall = f64::from(ctx.overall_pick);
    let adp_diff = overall - player.adp;

    let ceiling = ctx.ceilings.get(pos);
    let projection = if ceiling > 0.0 {
        player.projection(ctx.settings.scoring) / ceiling
    } else {
        0.0
    };

    let need = need_score(pos, &team.counts, ctx.targets);
    let value = (adp_diff / VALUE_SCALE).clamp(-VALUE_CLAMP, VALUE_CLAMP);
    let strategy = strategy_score(team.strategy, player, ctx.round, adp_diff);

    let upside_weight = if team.strategy == Strategy::UpsideChaser {
        UPSIDE_CHASER_UPSIDE_WEIGHT
    } else {
        DEFAULT_UPSIDE_WEIGHT
    };
    let upside = player.upside * upside_weight;
    let tier = (TIER_BASELINE - f64::from(player.tier)) * TIER_WEIGHT;
    let jitter = (rng.next_f64() - 0.5) * JITTER_WIDTH;

    let reach_penalty = if player.adp - overall > REACH_WINDOW {
        REACH_PENALTY
    } else {
        0.0
    };

    let current = team.counts.get(pos);
    let target = ctx.targets.get(pos);
    let overflow_penalty = if current > target {
        OVERFLOW_PENALTY * f64::from(current - target + 1)
    } else {
        0.0
    };

    ScoreBreakdown {
        projection,
        need,
        value,
        strategy,
        upside,
        tier,
        jitter,
        reach_penalty,
        overflow_penalty,
        adp_diff,
    }
}

/// Choose the best eligible player for `team`, or `None` when nobody in the
/// pool is eligible. Ties keep the earliest pool index.
pub fn select_pick(
    available: &[Player],
    team: &TeamDraftState,
    ctx: &PickContext<'_>,
    rng: &mut DraftRng,
) -> Option<Selection> {
    let mut best: Option<Selection> = None;

    for (index, player) in available.iter().enumerate() {
        if !is_eligible(player, &team.counts, ctx.targets, ctx.round) {
            continue;
        }
        let breakdown = score_candidate(player, team, ctx, rng);
        let score = breakdown.total();
        if best.map_or(true, |b| score > b.score) {
            best = Some(Selection {
                index,
                score,
                breakdown,
            });
        }
    }

    best
}

// ---------------------------------------------------------------------------
// Pick reasons
// ---------------------------------------------------------------------------

/// Human-readable explanation for a pick. First matching rule wins.
pub fn pick_reason(adp_diff: f64, need: f64, strategy: f64) -> &'static str {
    if adp_diff >= 14.0 {
        "Big value fall versus ADP"
    } else if adp_diff >= 7.0 {
        "Good value at current slot"
    } else if need >= 0.95 {
        "Addresses a major roster need"
    } else if need >= 0.6 {
        "Fills depth at a priority position"
    } else if strategy >= 0.45 {
        "Fits your strategy profile"
    } else if adp_diff <= -10.0 {
        "Aggressive upside reach"
    } else {
        "Best balance of projection and roster fit"
    }
}
