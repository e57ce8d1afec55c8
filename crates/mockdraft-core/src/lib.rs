// Library root: the mock-draft simulation core.
//
// Pure function of (settings, player pool) -> result. No I/O happens during a
// run; the only file access lives in `players`, which callers use to build the
// pool before simulating.

pub mod draft;
pub mod error;
pub mod players;
pub mod result;
pub mod rng;
pub mod settings;
pub mod valuation;

pub use draft::orchestrator::{run_draft, DraftOutcome};
pub use draft::pick::{Position, SimPick};
pub use draft::roster::RosterMap;
pub use error::SimulationError;
pub use players::{pool_for_path, CsvPool, JsonPool, Player, PlayerPool, PoolError, Projections, StaticPool};
pub use result::{run_mock_draft, simulate, MockDraftResult};
pub use settings::{Scoring, SeedInput, Settings, SettingsInput, Strategy};
pub use valuation::evaluation::TeamEvaluation;
pub use valuation::grade::{DraftGrade, Percentiles};
