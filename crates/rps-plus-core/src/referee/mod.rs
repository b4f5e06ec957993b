//! The three referee operations: validate, resolve, update.

mod normalizer;
mod resolver;
mod state;

pub use normalizer::{KeywordScan, MoveNormalizer, MoveParser};
pub use resolver::resolve;
pub use state::{GameState, TOTAL_ROUNDS};
