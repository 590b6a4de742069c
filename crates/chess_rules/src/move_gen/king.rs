//! King move validation
//!
//! One square in any direction. Castling is not supported.

use crate::types::Square;

pub fn is_valid_king_move(from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    d_row <= 1 && d_col <= 1
}
