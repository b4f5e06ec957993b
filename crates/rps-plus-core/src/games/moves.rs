//! Rock-Paper-Scissors-Plus moves.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A move a player can make in a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// Order in which keywords are searched for in free text
    pub const KEYWORD_PRIORITY: [Move; 4] =
        [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// Moves without the bomb
    pub const STANDARD: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Lowercase keyword for this move
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    pub fn is_bomb(&self) -> bool {
        matches!(self, Move::Bomb)
    }

    /// The standard move this one defeats. `None` for the bomb.
    pub fn target(&self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Scissors => Some(Move::Paper),
            Move::Paper => Some(Move::Rock),
            Move::Bomb => None,
        }
    }

    /// Check if this move beats the other
    pub fn beats(&self, other: &Move) -> bool {
        match (self, other) {
            (Move::Bomb, Move::Bomb) => false,
            (Move::Bomb, _) => true,
            (_, Move::Bomb) => false,
            _ => self.target() == Some(*other),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not exactly a move keyword
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown move: {0}")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Strict, case-insensitive keyword match. Free text goes through the normalizer instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Move::KEYWORD_PRIORITY
            .into_iter()
            .find(|m| m.as_str() == lowered)
            .ok_or_else(|| ParseMoveError(s.to_string()))
    }
}

/// What the user is recorded as having played in a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Play {
    Move(Move),
    /// Input could not be turned into a legal move; the round was wasted
    Invalid,
}

impl Play {
    pub const INVALID: &'static str = "invalid";

    pub fn as_str(&self) -> &'static str {
        match self {
            Play::Move(m) => m.as_str(),
            Play::Invalid => Self::INVALID,
        }
    }

    pub fn as_move(&self) -> Option<Move> {
        match self {
            Play::Move(m) => Some(*m),
            Play::Invalid => None,
        }
    }
}

impl From<Move> for Play {
    fn from(m: Move) -> Self {
        Play::Move(m)
    }
}

impl From<Play> for String {
    fn from(play: Play) -> Self {
        play.as_str().to_string()
    }
}

impl TryFrom<String> for Play {
    type Error = ParseMoveError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == Self::INVALID {
            Ok(Play::Invalid)
        } else {
            s.parse().map(Play::Move)
        }
    }
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
