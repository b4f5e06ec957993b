//! Game state and the per-round update.

use crate::games::{Move, Play};
use crate::protocol::{Player, RoundOutcome, RoundRecord};
use serde::{Deserialize, Serialize};

/// Number of rounds in a game
pub const TOTAL_ROUNDS: u32 = 3;

/// Mutable record of one game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current round, 1-based. Past `TOTAL_ROUNDS` once the game is over.
    pub round: u32,
    pub user_score: u32,
    pub bot_score: u32,
    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,
    pub history: Vec<RoundRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            round: 1,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
            history: Vec::new(),
        }
    }

    /// Record a finished round.
    ///
    /// Must be called exactly once per round, wasted rounds included
    /// (`user_move` is then `Play::Invalid` and `winner` is the bot).
    pub fn update(&mut self, user_move: Play, bot_move: Move, winner: RoundOutcome) -> &GameState {
        if user_move == Play::Move(Move::Bomb) {
            self.user_bomb_used = true;
        }
        if bot_move.is_bomb() {
            self.bot_bomb_used = true;
        }

        match winner {
            RoundOutcome::User => self.user_score += 1,
            RoundOutcome::Bot => self.bot_score += 1,
            RoundOutcome::Draw => {}
        }

        self.history.push(RoundRecord {
            round: self.round,
            user_move,
            bot_move,
            winner,
        });
        self.round += 1;

        self
    }

    pub fn bomb_used(&self, player: Player) -> bool {
        match player {
            Player::User => self.user_bomb_used,
            Player::Bot => self.bot_bomb_used,
        }
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::User => self.user_score,
            Player::Bot => self.bot_score,
        }
    }

    pub fn draws(&self) -> usize {
        self.history
            .iter()
            .filter(|r| r.winner == RoundOutcome::Draw)
            .count()
    }

    pub fn is_finished(&self) -> bool {
        self.round > TOTAL_ROUNDS
    }

    /// Compare final scores
    pub fn verdict(&self) -> RoundOutcome {
        use std::cmp::Ordering;

        match self.user_score.cmp(&self.bot_score) {
            Ordering::Greater => RoundOutcome::User,
            Ordering::Less => RoundOutcome::Bot,
            Ordering::Equal => RoundOutcome::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(state: &GameState) {
        assert_eq!(state.history.len() as u32, state.round - 1);
        assert_eq!(
            state.user_score as usize + state.bot_score as usize + state.draws(),
            state.history.len()
        );
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.round, 1);
        assert_eq!(state.score(Player::User), 0);
        assert_eq!(state.score(Player::Bot), 0);
        assert!(!state.bomb_used(Player::User));
        assert!(!state.bomb_used(Player::Bot));
        assert!(state.history.is_empty());
        assert!(!state.is_finished());
        assert_invariants(&state);
    }

    #[test]
    fn test_update_counts_rounds() {
        let mut state = GameState::new();
        let rounds = [
            (Play::Move(Move::Rock), Move::Scissors, RoundOutcome::User),
            (Play::Move(Move::Paper), Move::Paper, RoundOutcome::Draw),
            (Play::Invalid, Move::Rock, RoundOutcome::Bot),
        ];

        for (n, (user, bot, winner)) in rounds.into_iter().enumerate() {
            state.update(user, bot, winner);
            assert_eq!(state.history.len(), n + 1);
            assert_eq!(state.round as usize, n + 2);
            assert_invariants(&state);
        }

        assert!(state.is_finished());
        assert_eq!(state.user_score, 1);
        assert_eq!(state.bot_score, 1);
        assert_eq!(state.draws(), 1);
        assert_eq!(state.verdict(), RoundOutcome::Draw);
    }

    #[test]
    fn test_history_uses_pre_increment_round() {
        let mut state = GameState::new();
        state.update(Play::Move(Move::Rock), Move::Paper, RoundOutcome::Bot);
        state.update(Play::Invalid, Move::Scissors, RoundOutcome::Bot);

        assert_eq!(state.history[0].round, 1);
        assert_eq!(state.history[1].round, 2);
        assert_eq!(state.history[1].user_move, Play::Invalid);
        assert_eq!(state.verdict(), RoundOutcome::Bot);
    }

    #[test]
    fn test_bomb_flags_are_sticky() {
        let mut state = GameState::new();
        state.update(Play::Move(Move::Bomb), Move::Bomb, RoundOutcome::Draw);
        assert!(state.user_bomb_used);
        assert!(state.bot_bomb_used);

        state.update(Play::Move(Move::Rock), Move::Paper, RoundOutcome::Bot);
        assert!(state.bomb_used(Player::User));
        assert!(state.bomb_used(Player::Bot));
    }

    #[test]
    fn test_invalid_round_does_not_set_bomb_flag() {
        let mut state = GameState::new();
        state.update(Play::Invalid, Move::Rock, RoundOutcome::Bot);
        assert!(!state.user_bomb_used);
        assert!(!state.bot_bomb_used);
    }

    #[test]
    fn test_update_returns_updated_state() {
        let mut state = GameState::new();
        let updated = state.update(Play::Move(Move::Bomb), Move::Rock, RoundOutcome::User);
        assert_eq!(updated.round, 2);
        assert_eq!(updated.user_score, 1);
    }

    #[test]
    fn test_state_serializes_with_snake_case_fields() {
        let mut state = GameState::new();
        state.update(Play::Move(Move::Bomb), Move::Rock, RoundOutcome::User);
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["round"], 2);
        assert_eq!(json["user_score"], 1);
        assert_eq!(json["user_bomb_used"], true);
        assert_eq!(json["bot_bomb_used"], false);
        assert_eq!(json["history"][0]["user_move"], "bomb");

        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
