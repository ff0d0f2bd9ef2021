//! Round resolution.

use crate::moves::Move;
use crate::result::Outcome;

/// Resolves a round from the player's point of view.
///
/// Identical moves draw; otherwise the player wins exactly when their move
/// beats the computer's.
///
/// # Example
///
/// ```
/// use rpsrs::{Move, Outcome, resolve};
///
/// assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::Win);
/// assert_eq!(resolve(Move::Paper, Move::Scissors), Outcome::Lose);
/// assert_eq!(resolve(Move::Paper, Move::Paper), Outcome::Draw);
/// ```
#[must_use]
pub const fn resolve(player: Move, computer: Move) -> Outcome {
    if player.beats(computer) {
        Outcome::Win
    } else if computer.beats(player) {
        Outcome::Lose
    } else {
        Outcome::Draw
    }
}
