//! Round resolution.

use crate::games::Move;
use crate::protocol::RoundOutcome;

/// Decide the winner of a round from both moves.
///
/// Equal moves draw (bomb against bomb included); otherwise `Move::beats`
/// settles it, with a lone bomb winning outright.
pub fn resolve(user_move: Move, bot_move: Move) -> RoundOutcome {
    if user_move == bot_move {
        RoundOutcome::Draw
    } else if user_move.beats(&bot_move) {
        RoundOutcome::User
    } else {
        RoundOutcome::Bot
    }
}
