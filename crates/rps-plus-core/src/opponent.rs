//! Bot move selection.

use crate::games::Move;
use crate::referee::GameState;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses the bot's moves. Every choice must be legal for the current state.
pub trait Opponent {
    /// Move for a round where the user's input was valid
    fn choose_move(&mut self, state: &GameState) -> Move;

    /// Move for a round the user wasted
    fn choose_forfeit_move(&mut self, state: &GameState) -> Move;
}

/// Picks uniformly at random from the legal pool
#[derive(Clone, Debug)]
pub struct RandomBot<R = StdRng> {
    rng: R,
}

impl RandomBot<StdRng> {
    /// Bot seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible bot
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn pick<const N: usize>(&mut self, pool: &[Move; N]) -> Move {
        pool[self.rng.gen_range(0..N)]
    }
}

impl<R: Rng> Opponent for RandomBot<R> {
    fn choose_move(&mut self, state: &GameState) -> Move {
        if state.bot_bomb_used {
            self.pick(&Move::STANDARD)
        } else {
            self.pick(&Move::KEYWORD_PRIORITY)
        }
    }

    // Bomb is never offered here, even while the bot still has it.
    fn choose_forfeit_move(&mut self, _state: &GameState) -> Move {
        self.pick(&Move::STANDARD)
    }
}
