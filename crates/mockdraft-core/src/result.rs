// Result assembly: run a draft, evaluate it, grade the user, and project the
// pick log into the user-facing views.

use serde::Serialize;
use tracing::info;

use crate::draft::orchestrator::{run_draft, DraftOutcome};
use crate::draft::pick::SimPick;
use crate::draft::roster::RosterMap;
use crate::error::SimulationError;
use crate::players::Player;
use crate::settings::{Settings, SettingsInput};
use crate::valuation::evaluation::{evaluate_all, TeamEvaluation};
use crate::valuation::grade::{grade_team, DraftGrade, Percentiles};

const BEST_PICKS: usize = 4;
const USER_REACHES: usize = 3;
const LEAGUE_STEALS: usize = 8;

/// Everything a caller gets back from one mock draft.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockDraftResult {
    /// The normalized settings actually used. Re-running with these
    /// reproduces this result exactly.
    pub settings: Settings,
    pub grade: DraftGrade,
    /// The user's final position counts.
    pub roster: RosterMap,
    /// The roster shape the draft aimed for.
    pub targets: RosterMap,
    /// The user's picks, by overall pick.
    pub user_picks: Vec<SimPick>,
    pub best_picks: Vec<SimPick>,
    pub user_reaches: Vec<SimPick>,
    pub league_steals: Vec<SimPick>,
    pub evaluation: TeamEvaluation,
    pub percentiles: Percentiles,
    /// Scheduled picks that found no eligible player.
    pub skipped_picks: u32,
}

/// Normalize raw input and simulate.
pub fn run_mock_draft(input: &SettingsInput, players: &[Player]) -> Result<MockDraftResult, SimulationError> {
    let settings = Settings::normalize(input);
    simulate(&settings, players)
}

/// Simulate a draft with already-normalized settings.
pub fn simulate(settings: &Settings, players: &[Player]) -> Result<MockDraftResult, SimulationError> {
    let outcome = run_draft(settings, players);
    let result = assemble(settings, &outcome)?;
    info!(
        "mock draft complete: seed={} teams={} rounds={} slot={} strategy={} -> {} ({})",
        settings.seed,
        settings.teams,
        settings.rounds,
        settings.draft_slot,
        settings.strategy,
        result.grade.letter,
        result.grade.score
    );
    Ok(result)
}

/// Evaluate, grade, and slice a finished draft.
pub fn assemble(settings: &Settings, outcome: &DraftOutcome) -> Result<MockDraftResult, SimulationError> {
    let slot = settings.draft_slot;
    let user_team = outcome
        .team(slot)
        .ok_or(SimulationError::MissingUserTeam { slot })?;

    let evaluations = evaluate_all(&outcome.teams, &outcome.targets, settings.scoring);
    let user_eval = evaluations
        .iter()
        .find(|e| e.team_slot == slot)
        .copied()
        .ok_or(SimulationError::MissingUserEvaluation { slot })?;

    let (grade, percentiles) = grade_team(&user_eval, &evaluations);

    let mut user_picks = user_team.picks.clone();
    user_picks.sort_by_key(|p| p.overall_pick);

    Ok(MockDraftResult {
        settings: *settings,
        grade,
        roster: user_team.counts,
        targets: outcome.targets,
        best_picks: best_picks(&user_picks),
        user_reaches: user_reaches(&user_picks),
        league_steals: league_steals(&outcome.picks),
        user_picks,
        evaluation: user_eval,
        percentiles,
        skipped_picks: outcome.skipped_picks,
    })
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Top user picks by ADP value, ties broken by projection.
pub fn best_picks(user_picks: &[SimPick]) -> Vec<SimPick> {
    let mut picks = user_picks.to_vec();
    picks.sort_by(|a, b| {
        b.adp_diff
            .total_cmp(&a.adp_diff)
            .then_with(|| b.projection.total_cmp(&a.projection))
    });
    picks.truncate(BEST_PICKS);
    picks
}

/// The user's biggest reaches (most negative ADP value), ties broken by
/// projection.
pub fn user_reaches(user_picks: &[SimPick]) -> Vec<SimPick> {
    let mut picks = user_picks.to_vec();
    picks.sort_by(|a, b| {
        a.adp_diff
            .total_cmp(&b.adp_diff)
            .then_with(|| b.projection.total_cmp(&a.projection))
    });
    picks.truncate(USER_REACHES);
    picks
}

/// Biggest ADP falls across the whole league. Equal values keep pick order.
pub fn league_steals(all_picks: &[SimPick]) -> Vec<SimPick> {
    let mut picks = all_picks.to_vec();
    picks.sort_by(|a, b| b.adp_diff.total_cmp(&a.adp_diff));
    picks.truncate(LEAGUE_STEALS);
    picks
}
