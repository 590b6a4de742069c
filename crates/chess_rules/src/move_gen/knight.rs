//! Knight move validation
//!
//! Knights jump in an L-shape: two squares in one direction, then one
//! perpendicular. They ignore anything standing in between, so only the
//! destination matters, and that is already screened for friendly pieces by
//! the dispatcher.

use crate::types::Square;

pub fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
