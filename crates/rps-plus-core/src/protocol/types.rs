//! Player, outcome and round record types.

use crate::games::{Move, Play};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique game identifier, used to tag diagnostics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Player identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    User,
    Bot,
}

impl Player {
    /// Lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::User => "user",
            Player::Bot => "bot",
        }
    }

    /// Capitalized name for the start of a message
    pub fn label(&self) -> &'static str {
        match self {
            Player::User => "User",
            Player::Bot => "Bot",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a round, or of the whole game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    User,
    Bot,
    Draw,
}

impl RoundOutcome {
    /// The winning player, if any
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::User => Some(Player::User),
            RoundOutcome::Bot => Some(Player::Bot),
            RoundOutcome::Draw => None,
        }
    }

    /// Final verdict line as shown at the end of a game
    pub fn verdict(&self) -> &'static str {
        match self {
            RoundOutcome::User => "USER WINS",
            RoundOutcome::Bot => "BOT WINS",
            RoundOutcome::Draw => "DRAW",
        }
    }
}

impl From<Player> for RoundOutcome {
    fn from(player: Player) -> Self {
        match player {
            Player::User => RoundOutcome::User,
            Player::Bot => RoundOutcome::Bot,
        }
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundOutcome::User => write!(f, "user"),
            RoundOutcome::Bot => write!(f, "bot"),
            RoundOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Log entry for one finished round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub user_move: Play,
    pub bot_move: Move,
    pub winner: RoundOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_generation() {
        let id1 = GameId::new();
        let id2 = GameId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_player_names() {
        assert_eq!(Player::User.to_string(), "user");
        assert_eq!(Player::Bot.to_string(), Player::Bot.as_str());
        assert_eq!(Player::User.label(), "User");
        assert_eq!(serde_json::to_string(&Player::Bot).unwrap(), "\"bot\"");
        assert_eq!(RoundOutcome::User.to_string(), Player::User.to_string());
    }

    #[test]
    fn test_outcome_winner_and_verdict() {
        assert_eq!(RoundOutcome::User.winner(), Some(Player::User));
        assert_eq!(RoundOutcome::Draw.winner(), None);
        assert_eq!(RoundOutcome::from(Player::Bot), RoundOutcome::Bot);
        assert_eq!(RoundOutcome::User.verdict(), "USER WINS");
        assert_eq!(RoundOutcome::Bot.verdict(), "BOT WINS");
        assert_eq!(RoundOutcome::Draw.verdict(), "DRAW");
    }

    #[test]
    fn test_round_record_serialization() {
        let record = RoundRecord {
            round: 1,
            user_move: Play::Invalid,
            bot_move: Move::Rock,
            winner: RoundOutcome::Bot,
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "round": 1,
                "user_move": "invalid",
                "bot_move": "rock",
                "winner": "bot"
            })
        );
    }
}
