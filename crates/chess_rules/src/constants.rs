//! Board geometry and direction tables
//!
//! Directions are `(d_row, d_col)` pairs. Row 0 is the black back rank, so
//! "north" (toward black) is a negative row delta.

use crate::types::PieceType;

/// Squares per side
pub const BOARD_SIZE: usize = 8;

pub const NORTH: (i8, i8) = (-1, 0);
pub const SOUTH: (i8, i8) = (1, 0);
pub const EAST: (i8, i8) = (0, 1);
pub const WEST: (i8, i8) = (0, -1);
pub const NORTH_EAST: (i8, i8) = (-1, 1);
pub const NORTH_WEST: (i8, i8) = (-1, -1);
pub const SOUTH_EAST: (i8, i8) = (1, 1);
pub const SOUTH_WEST: (i8, i8) = (1, -1);

/// Rook rays
pub const ROOK_DIRS: [(i8, i8); 4] = [NORTH, SOUTH, EAST, WEST];

/// Bishop rays
pub const BISHOP_DIRS: [(i8, i8); 4] = [NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST];

/// Queen and king directions
pub const KING_DIRS: [(i8, i8); 8] = [
    NORTH, SOUTH, EAST, WEST, NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST,
];

/// Knight jumps
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Standard back rank, a-file to h-file
pub const BACK_ROW: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];
