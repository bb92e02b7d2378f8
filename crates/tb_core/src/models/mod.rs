//! Data model: positions, players, rosters and scored splits.

pub mod player;
pub mod position;
pub mod roster;
pub mod split;

pub use player::Player;
pub use position::{Position, PositionSet};
pub use roster::{Roster, ROSTER_SIZE, SQUAD_SIZE};
pub use split::Split;
