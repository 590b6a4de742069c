//! Sliding piece move validation
//!
//! Rooks, bishops and queens move any number of squares along a line until
//! something is in the way. A move is valid when the line matches the piece
//! and every square strictly between origin and destination is empty. The
//! destination itself may hold an opposing piece (a capture).

use crate::board::Board;
use crate::types::Square;

pub fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    // Must move horizontally or vertically
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }

    is_path_clear(board, from, to)
}

pub fn is_valid_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();

    // Must move diagonally
    if d_row != d_col {
        return false;
    }

    is_path_clear(board, from, to)
}

pub fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}

/// Every square strictly between `from` and `to` is empty
///
/// Only meaningful for squares on a shared row, column or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row() as i8 - from.row() as i8).signum();
    let step_col = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step_row, step_col);
    }

    false
}
