// Command implementations that sit between the parsed CLI and the core.

use std::path::Path;

use mockdraft_core::players::pool_for_path;
use mockdraft_core::{simulate, DraftGrade, Player, PoolError, Settings, SimulationError, Strategy};
use serde::Serialize;
use tracing::info;

/// Load the player pool, picking the loader from the file extension.
pub fn load_players(path: &Path) -> Result<Vec<Player>, PoolError> {
    let players = pool_for_path(path).load()?;
    info!("loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// One strategy's result in a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRun {
    pub strategy: Strategy,
    pub grade: DraftGrade,
    pub starter_projection: f64,
    pub value_index: f64,
}

/// Draft the same league once per strategy.
///
/// `base` is already normalized, so every run shares one seed and the only
/// thing that changes is the user's strategy. Results come back best first;
/// equal scores keep `Strategy::ALL` order.
pub fn compare_strategies(
    base: &Settings,
    players: &[Player],
) -> Result<Vec<StrategyRun>, SimulationError> {
    let mut runs = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let settings = Settings { strategy, ..*base };
        let result = simulate(&settings, players)?;
        runs.push(StrategyRun {
            strategy,
            grade: result.grade,
            starter_projection: result.evaluation.starter_projection,
            value_index: result.evaluation.value_index,
        });
    }
    runs.sort_by(|a, b| b.grade.score.cmp(&a.grade.score));
    Ok(runs)
}
