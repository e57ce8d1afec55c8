// Draft grading: percentile-rank the user's evaluation against the league and
// turn it into a score, a letter, and a short narrative.

use serde::Serialize;

use super::evaluation::TeamEvaluation;

// ---------------------------------------------------------------------------
// Score composition
// ---------------------------------------------------------------------------

const BASE_SCORE: f64 = 66.0;
const STARTER_WEIGHT: f64 = 18.0;
const VALUE_WEIGHT: f64 = 8.0;
const BALANCE_WEIGHT: f64 = 5.0;
const UPSIDE_WEIGHT: f64 = 3.0;

pub const MIN_SCORE: u32 = 58;
pub const MAX_SCORE: u32 = 99;

/// Percentile needed for each metric to count as a strength.
const STARTER_STRENGTH: f64 = 0.65;
const VALUE_STRENGTH: f64 = 0.6;
const BALANCE_STRENGTH: f64 = 0.7;
const UPSIDE_STRENGTH: f64 = 0.7;

const MAX_STRENGTHS: usize = 2;

/// Below this score the no-strength summary turns critical.
const CRITIQUE_BELOW: u32 = 75;

/// Letter cutoffs, highest first. Anything below the last is D-.
const LETTER_CUTOFFS: &[(u32, &str)] = &[
    (97, "A+"),
    (93, "A"),
    (90, "A-"),
    (87, "B+"),
    (83, "B"),
    (80, "B-"),
    (77, "C+"),
    (73, "C"),
    (70, "C-"),
    (67, "D+"),
    (63, "D"),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The user's percentile rank on each evaluation metric, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Percentiles {
    pub starter: f64,
    pub value: f64,
    pub balance: f64,
    pub upside: f64,
}

/// Final verdict on the user's draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftGrade {
    pub letter: String,
    /// Integer score in [58, 99].
    pub score: u32,
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Percentiles
// ---------------------------------------------------------------------------

/// Rank of `value` within `population`: index of the first element >= value
/// in ascending order, divided by `len - 1`. Populations of one (or none)
/// rank everything at 1.
pub fn percentile(value: f64, population: &[f64]) -> f64 {
    if population.len() <= 1 {
        return 1.0;
    }
    let mut sorted = population.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let rank = sorted
        .iter()
        .position(|&v| v >= value)
        .unwrap_or(sorted.len() - 1);
    rank as f64 / (sorted.len() - 1) as f64
}

/// Percentile-rank every metric of `user` against `all`.
pub fn percentiles_for(user: &TeamEvaluation, all: &[TeamEvaluation]) -> Percentiles {
    let column = |f: fn(&TeamEvaluation) -> f64| -> Vec<f64> { all.iter().map(f).collect() };
    Percentiles {
        starter: percentile(user.starter_projection, &column(|e| e.starter_projection)),
        value: percentile(user.value_index, &column(|e| e.value_index)),
        balance: percentile(user.balance_index, &column(|e| e.balance_index)),
        upside: percentile(user.upside_index, &column(|e| e.upside_index)),
    }
}

// ---------------------------------------------------------------------------
// Grading
// ---------------------------------------------------------------------------

/// Weighted, clamped, rounded score from percentiles.
pub fn score_from_percentiles(p: &Percentiles) -> u32 {
    let raw = BASE_SCORE
        + p.starter * STARTER_WEIGHT
        + p.value * VALUE_WEIGHT
        + p.balance * BALANCE_WEIGHT
        + p.upside * UPSIDE_WEIGHT;
    raw.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)).round() as u32
}

pub fn letter_for_score(score: u32) -> &'static str {
    LETTER_CUTOFFS
        .iter()
        .find(|(cutoff, _)| score >= *cutoff)
        .map(|(_, letter)| *letter)
        .unwrap_or("D-")
}

/// Short narrative: up to two strengths, or a generic line keyed off the score.
pub fn summary_for(p: &Percentiles, score: u32) -> String {
    let candidates = [
        (p.starter >= STARTER_STRENGTH, "a top-tier starting lineup"),
        (p.value >= VALUE_STRENGTH, "consistent value against ADP"),
        (p.balance >= BALANCE_STRENGTH, "a well-balanced roster build"),
        (p.upside >= UPSIDE_STRENGTH, "strong weekly upside"),
    ];
    let strengths: Vec<&str> = candidates
        .iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, label)| *label)
        .take(MAX_STRENGTHS)
        .collect();

    if !strengths.is_empty() {
        return format!("Your draft stands out for {}.", strengths.join(" and "));
    }
    if score < CRITIQUE_BELOW {
        "This build leaves points on the table. Lean harder into ADP value and roster balance next time."
            .to_string()
    } else {
        "A solid, steady draft without a single standout edge over the league.".to_string()
    }
}

/// Grade `user` against every team's evaluation (the user's included).
pub fn grade_team(user: &TeamEvaluation, all: &[TeamEvaluation]) -> (DraftGrade, Percentiles) {
    let percentiles = percentiles_for(user, all);
    let score = score_from_percentiles(&percentiles);
    let grade = DraftGrade {
        letter: letter_for_score(score).to_string(),
        score,
        summary: summary_for(&percentiles, score),
    };
    (grade, percentiles)
}
