// Post-draft valuation: per-team evaluation and grading of the user's draft.

pub mod evaluation;
pub mod grade;
