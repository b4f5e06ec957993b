//! RPS Plus Core Library
//!
//! This crate provides the rules, state and referee loop for a best-of-three
//! Rock-Paper-Scissors variant with a once-per-player bomb move.

pub mod error;
pub mod games;
pub mod opponent;
pub mod protocol;
pub mod referee;
pub mod session;

pub use error::{MoveRejection, RefereeError};
pub use games::{Move, Play};
pub use opponent::{Opponent, RandomBot};
pub use protocol::{GameId, Player, RoundOutcome, RoundRecord};
pub use referee::{resolve, GameState, KeywordScan, MoveNormalizer, MoveParser, TOTAL_ROUNDS};
pub use session::{GameSummary, Phase, Referee, RoundReport};
