// Draft mechanics: positions, roster shapes, per-team state, pick selection,
// and the snake-order orchestrator that ties them together.

pub mod orchestrator;
pub mod pick;
pub mod roster;
pub mod select;
pub mod state;
