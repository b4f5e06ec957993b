//! Move validation and normalization.

use super::state::GameState;
use crate::error::MoveRejection;
use crate::games::Move;
use crate::protocol::Player;

/// Turns raw text into a move, without looking at game state
pub trait MoveParser {
    fn parse(&self, raw: &str) -> Result<Move, MoveRejection>;
}

/// Case-insensitive substring search over the move keywords.
///
/// Keywords are tried in `Move::KEYWORD_PRIORITY` order and the first one
/// found anywhere in the text wins, so "paper beats rock" yields rock.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordScan;

impl MoveParser for KeywordScan {
    fn parse(&self, raw: &str) -> Result<Move, MoveRejection> {
        if raw.is_empty() {
            return Err(MoveRejection::EmptyInput);
        }

        let lowered = raw.to_lowercase();
        Move::KEYWORD_PRIORITY
            .into_iter()
            .find(|m| lowered.contains(m.as_str()))
            .ok_or(MoveRejection::NoMoveFound)
    }
}

/// Validates a player's input against the current game state
#[derive(Clone, Debug, Default)]
pub struct MoveNormalizer<P = KeywordScan> {
    parser: P,
}

impl MoveNormalizer<KeywordScan> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: MoveParser> MoveNormalizer<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Extract a legal move for `player` from `raw`.
    ///
    /// A bomb is rejected once that player's bomb flag is set; no other move
    /// is restricted. The state is only read.
    pub fn validate(
        &self,
        state: &GameState,
        player: Player,
        raw: &str,
    ) -> Result<Move, MoveRejection> {
        let candidate = self.parser.parse(raw)?;

        if candidate.is_bomb() && state.bomb_used(player) {
            return Err(MoveRejection::BombAlreadyUsed(player));
        }

        Ok(candidate)
    }
}
