//! The referee loop: three rounds of prompt, validate, resolve, update.

use crate::error::{MoveRejection, RefereeError};
use crate::games::{Move, Play};
use crate::opponent::Opponent;
use crate::protocol::{GameId, Player, RoundOutcome, RoundRecord};
use crate::referee::{resolve, GameState, KeywordScan, MoveNormalizer, MoveParser, TOTAL_ROUNDS};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{debug, info, info_span, warn};

/// Where the game loop currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput(u32),
    Finished,
}

/// What happened in a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundReport {
    /// The user's input was rejected and the bot took the round
    Wasted {
        round: u32,
        reason: MoveRejection,
        bot_move: Move,
    },
    Played {
        round: u32,
        user_move: Move,
        bot_move: Move,
        winner: RoundOutcome,
    },
}

/// Final result of a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub verdict: RoundOutcome,
    pub user_score: u32,
    pub bot_score: u32,
    pub history: Vec<RoundRecord>,
}

/// Owns the game state and drives one game against an opponent
pub struct Referee<O, P = KeywordScan> {
    id: GameId,
    state: GameState,
    normalizer: MoveNormalizer<P>,
    opponent: O,
}

impl<O: Opponent> Referee<O, KeywordScan> {
    pub fn new(opponent: O) -> Self {
        Self::with_normalizer(opponent, MoveNormalizer::new())
    }
}

impl<O: Opponent, P: MoveParser> Referee<O, P> {
    pub fn with_normalizer(opponent: O, normalizer: MoveNormalizer<P>) -> Self {
        Self {
            id: GameId::new(),
            state: GameState::new(),
            normalizer,
            opponent,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_finished() {
            Phase::Finished
        } else {
            Phase::AwaitingInput(self.state.round)
        }
    }

    /// Play the current round from the user's raw text.
    ///
    /// Returns `None` once the game is finished.
    pub fn play_round(&mut self, raw: &str) -> Option<RoundReport> {
        let Phase::AwaitingInput(round) = self.phase() else {
            return None;
        };

        let report = match self.normalizer.validate(&self.state, Player::User, raw) {
            Err(reason) => {
                warn!(round, %reason, "user move rejected");
                let bot_move = self.opponent.choose_forfeit_move(&self.state);
                self.state.update(Play::Invalid, bot_move, RoundOutcome::Bot);
                RoundReport::Wasted {
                    round,
                    reason,
                    bot_move,
                }
            }
            Ok(user_move) => {
                let bot_move = self.opponent.choose_move(&self.state);
                let winner = resolve(user_move, bot_move);
                self.state.update(Play::Move(user_move), bot_move, winner);
                RoundReport::Played {
                    round,
                    user_move,
                    bot_move,
                    winner,
                }
            }
        };

        debug!(
            ?report,
            user_score = self.state.user_score,
            bot_score = self.state.bot_score,
            "round resolved"
        );
        Some(report)
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            verdict: self.state.verdict(),
            user_score: self.state.score(Player::User),
            bot_score: self.state.score(Player::Bot),
            history: self.state.history.clone(),
        }
    }

    /// Run the game to completion over a line-oriented terminal.
    ///
    /// Closed input reads as empty text and lines that are not UTF-8 are
    /// decoded lossily, so bad input only ever wastes a round.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> Result<GameSummary, RefereeError> {
        let span = info_span!("game", game_id = %self.id);
        let _enter = span.enter();
        info!("game started");

        writeln!(output, "Rock-Paper-Scissors-Plus (Best of {})", TOTAL_ROUNDS)?;
        writeln!(output, "Type: rock | paper | scissors | bomb (once)")?;
        writeln!(output)?;

        while let Phase::AwaitingInput(round) = self.phase() {
            writeln!(output, "--- Round {} ---", round)?;
            write!(output, "Your move: ")?;
            output.flush()?;

            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!(round, "input closed");
                writeln!(output)?;
            }
            // Undecodable bytes become U+FFFD and fall through to the normalizer
            let line = String::from_utf8_lossy(&buf);
            let raw = line.trim_end_matches(['\r', '\n']);

            if let Some(report) = self.play_round(raw) {
                self.write_report(&mut output, &report)?;
            }
        }

        let summary = self.summary();
        writeln!(output, "=== Game Over ===")?;
        writeln!(output, "Final Result: {}", summary.verdict.verdict())?;
        output.flush()?;

        info!(
            verdict = %summary.verdict,
            user_score = summary.user_score,
            bot_score = summary.bot_score,
            "game finished"
        );
        Ok(summary)
    }

    fn write_report<W: Write>(&self, output: &mut W, report: &RoundReport) -> std::io::Result<()> {
        match report {
            RoundReport::Wasted {
                reason, bot_move, ..
            } => {
                writeln!(output, "Invalid input ({}). Round wasted.", reason)?;
                writeln!(output, "Bot played: {}", bot_move)?;
                writeln!(output, "Round winner: BOT")?;
            }
            RoundReport::Played {
                user_move,
                bot_move,
                winner,
                ..
            } => {
                writeln!(output, "You played: {}", user_move)?;
                writeln!(output, "Bot played: {}", bot_move)?;
                match winner.winner() {
                    None => writeln!(output, "Round result: Draw")?,
                    Some(player) => {
                        writeln!(output, "Round winner: {}", player.as_str().to_uppercase())?
                    }
                }
            }
        }

        writeln!(
            output,
            "Score: You {} | Bot {}",
            self.state.score(Player::User),
            self.state.score(Player::Bot)
        )?;
        writeln!(output)
    }
}
