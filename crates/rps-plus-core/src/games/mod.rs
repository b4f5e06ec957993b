//! Move definitions and the beat relation.

mod moves;

pub use moves::{Move, ParseMoveError, Play};
