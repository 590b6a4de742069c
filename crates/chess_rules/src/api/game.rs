//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use tracing::debug;

use crate::board::Board;
use crate::state::GameState;

/// Create a new game with the initial position
///
/// Returns the board and a fresh state with white to move on turn 0.
pub fn new_game() -> (Board, GameState) {
    (Board::starting_position(), GameState::new())
}

/// Reset a game to the starting position
///
/// Clears the turn counter, en-passant window, pending promotion and history.
pub fn reset_game(board: &mut Board, state: &mut GameState) {
    debug!("[GAME] Resetting after {} moves", state.history.len());
    *board = Board::starting_position();
    *state = GameState::new();
}
