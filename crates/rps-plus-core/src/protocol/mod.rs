//! Players, outcomes and round records.

mod types;

pub use types::{GameId, Player, RoundOutcome, RoundRecord};
