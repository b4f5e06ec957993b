//! Error types.

use crate::protocol::Player;
use thiserror::Error;

/// Why a raw move was rejected. Every variant wastes the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("Empty input")]
    EmptyInput,

    #[error("No valid move found")]
    NoMoveFound,

    #[error("{} already used bomb", .0.label())]
    BombAlreadyUsed(Player),
}

/// Errors that stop the referee loop
#[derive(Debug, Error)]
pub enum RefereeError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(MoveRejection::EmptyInput.to_string(), "Empty input");
        assert_eq!(MoveRejection::NoMoveFound.to_string(), "No valid move found");
        assert_eq!(
            MoveRejection::BombAlreadyUsed(Player::User).to_string(),
            "User already used bomb"
        );
        assert_eq!(
            MoveRejection::BombAlreadyUsed(Player::Bot).to_string(),
            "Bot already used bomb"
        );
    }
}
