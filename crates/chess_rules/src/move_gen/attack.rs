//! Attack detection and check detection
//!
//! Rather than generating every opposing move, attacks on a square are found
//! by looking outward from it:
//!
//! 1. **Orthogonal rays** - walk north/south/east/west; the first occupied
//!    square either is an opposing rook or queen (attacked) or blocks the ray.
//! 2. **Diagonal rays** - the same walk, attacker must be a bishop or queen.
//! 3. **Knight offsets** - the eight L-shaped squares, no blocking.
//! 4. **Pawn squares** - the two squares from which an opposing pawn would
//!    capture onto the target.
//!
//! Only the nearest piece on a ray matters (opaque blocking). The scan stops
//! at the first attacker found.
//!
//! Kings are not treated as attackers.

use tracing::{trace, warn};

use crate::board::Board;
use crate::constants::{BISHOP_DIRS, KNIGHT_OFFSETS, ROOK_DIRS};
use crate::types::{Color, Piece, PieceType, Square};

/// Check whether `square` is attacked by any piece of `by_color`
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    let ray_hit = |dirs: &[(i8, i8)], sliders: [PieceType; 2]| {
        dirs.iter().any(|&(d_row, d_col)| {
            first_piece_on_ray(board, square, d_row, d_col).is_some_and(|(_, piece)| {
                piece.color == by_color && sliders.contains(&piece.piece_type)
            })
        })
    };

    if ray_hit(&ROOK_DIRS, [PieceType::Rook, PieceType::Queen]) {
        return true;
    }

    if ray_hit(&BISHOP_DIRS, [PieceType::Bishop, PieceType::Queen]) {
        return true;
    }

    let knight_hit = KNIGHT_OFFSETS.iter().any(|&(d_row, d_col)| {
        square
            .offset(d_row, d_col)
            .and_then(|sq| board.get(sq))
            .is_some_and(|p| p.color == by_color && p.piece_type == PieceType::Knight)
    });
    if knight_hit {
        return true;
    }

    // An attacking pawn stands one row behind the target from its own point of view
    let pawn_row = -by_color.pawn_direction();
    [-1, 1].iter().any(|&d_col| {
        square
            .offset(pawn_row, d_col)
            .and_then(|sq| board.get(sq))
            .is_some_and(|p| p.color == by_color && p.piece_type == PieceType::Pawn)
    })
}

/// Check whether the king of `color` is attacked
///
/// A board without a king of `color` breaks the one-king-per-side
/// precondition. That case is logged and reported as "not in check".
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.find_king(color) else {
        warn!("[CHECK] No {:?} king on the board, reporting no check", color);
        return false;
    };

    let attacked = is_square_attacked(board, king, color.opponent());
    if attacked {
        trace!("[CHECK] {:?} king on {} is attacked", color, king);
    }
    attacked
}

/// Nearest occupied square from `origin` (exclusive) along a direction
fn first_piece_on_ray(
    board: &Board,
    origin: Square,
    d_row: i8,
    d_col: i8,
) -> Option<(Square, Piece)> {
    let mut current = origin.offset(d_row, d_col);
    while let Some(square) = current {
        if let Some(piece) = board.get(square) {
            return Some((square, piece));
        }
        current = square.offset(d_row, d_col);
    }
    None
}
