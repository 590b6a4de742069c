//! Pseudo-legal move validation
//!
//! A move is pseudo-legal when it matches the moving piece's pattern and the
//! blocking and capture rules, without asking whether the mover's own king is
//! left attacked. That second question is layered on by
//! [`crate::api::is_legal`].
//!
//! Every function here is pure: the board and game state are only read.
//!
//! ## Module Structure
//!
//! - `pawn` - pushes, double push, diagonal and en-passant captures
//! - `knight` - L-shaped jumps
//! - `sliding` - rook, bishop and queen rays with path blocking
//! - `king` - single-square steps
//! - `attack` - check detection by ray casting

pub mod attack;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod sliding;


use crate::board::Board;
use crate::state::GameState;
use crate::types::{PieceType, Square};

pub use attack::{is_in_check, is_square_attacked};
pub use pawn::is_en_passant_capture;

/// Check whether the piece on `from` may move to `to` by its movement rules
///
/// Returns `false` when `from` is empty, when `from == to`, or when `to` holds
/// a piece of the mover's color.
pub fn is_pseudo_legal(board: &Board, from: Square, to: Square, state: &GameState) -> bool {
    if from == to {
        return false;
    }

    let Some(piece) = board.get(from) else {
        return false;
    };

    // Can't capture your own pieces
    if board.color_at(to) == Some(piece.color) {
        return false;
    }

    match piece.piece_type {
        PieceType::Pawn => pawn::is_valid_pawn_move(board, piece.color, from, to, state),
        PieceType::Knight => knight::is_valid_knight_move(from, to),
        PieceType::Bishop => sliding::is_valid_bishop_move(board, from, to),
        PieceType::Rook => sliding::is_valid_rook_move(board, from, to),
        PieceType::Queen => sliding::is_valid_queen_move(board, from, to),
        PieceType::King => king::is_valid_king_move(from, to),
    }
}

/// Every square the piece on `from` may reach by its movement rules
pub fn pseudo_legal_moves(board: &Board, from: Square, state: &GameState) -> Vec<Square> {
    Square::all()
        .filter(|&to| is_pseudo_legal(board, from, to, state))
        .collect()
}
