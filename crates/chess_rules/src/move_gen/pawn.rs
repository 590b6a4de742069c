//! Pawn move validation
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent onto an empty square
//! - **Double push**: from the starting row (6 for white, 1 for black), two
//!   squares forward with both the skipped and the destination square empty
//! - **Captures**: one square diagonally forward onto an opposing piece
//! - **En passant**: one square diagonally forward onto the en-passant target,
//!   only on the turn right after the double push that created it
//!
//! Promotion is not a movement rule; it is raised when the move is applied.

use crate::board::Board;
use crate::state::GameState;
use crate::types::{Color, PieceType, Square};

pub fn is_valid_pawn_move(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    state: &GameState,
) -> bool {
    let direction = color.pawn_direction();
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;

    // Forward move
    if d_col == 0 && d_row == direction {
        return board.is_empty(to);
    }

    // Double move from starting row
    if d_col == 0 && d_row == 2 * direction && from.row() == color.pawn_start_row() {
        return match from.offset(direction, 0) {
            Some(between) => board.is_empty(between) && board.is_empty(to),
            None => false,
        };
    }

    // Capture diagonally
    if d_col.abs() == 1 && d_row == direction {
        if let Some(target_color) = board.color_at(to) {
            return target_color != color;
        }
        return state.active_en_passant() == Some(to);
    }

    false
}

/// Whether moving the piece on `from` to `to` takes a pawn en passant
///
/// True for a pawn stepping diagonally onto the active en-passant target. The
/// captured pawn stands beside the mover, on `(from.row, to.col)`.
pub fn is_en_passant_capture(board: &Board, from: Square, to: Square, state: &GameState) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    piece.piece_type == PieceType::Pawn
        && from.col() != to.col()
        && board.is_empty(to)
        && state.active_en_passant() == Some(to)
}

/// Square of the pawn removed by an en-passant capture landing on `to`
pub fn en_passant_victim(from: Square, to: Square) -> Square {
    Square::at(from.row(), to.col())
}

/// Skipped square when a pawn of `color` double-pushes from `from` to `to`
pub fn double_push_target(color: Color, from: Square, to: Square) -> Option<Square> {
    let direction = color.pawn_direction();
    let is_double = from.col() == to.col()
        && from.row() == color.pawn_start_row()
        && to.row() as i8 - from.row() as i8 == 2 * direction;
    if is_double {
        from.offset(direction, 0)
    } else {
        None
    }
}
