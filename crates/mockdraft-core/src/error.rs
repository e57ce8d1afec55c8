// Fatal simulation errors.
//
// Bad input never lands here (settings fall back to defaults, empty pick slots
// are skipped). These variants only fire on broken internal invariants.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("no team state exists for the user's draft slot {slot}")]
    MissingUserTeam { slot: u32 },

    #[error("no evaluation was produced for the user's draft slot {slot}")]
    MissingUserEvaluation { slot: u32 },
}
