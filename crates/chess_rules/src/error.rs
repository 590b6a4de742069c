//! Error types for the rules engine
//!
//! Rule evaluation itself never fails: pseudo-legality, legality and check
//! queries answer with a plain `bool`. These errors cover the boundary of the
//! engine instead: coordinates that are not on the board, moves submitted for
//! application that the rules reject, and misuse of the promotion protocol.

use thiserror::Error;

use crate::types::{Color, PieceType, Square};

/// Errors that can occur when driving the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessRulesError {
    /// Coordinates outside the 8x8 board
    #[error("Invalid square ({row}, {col}): row and column must be 0-7")]
    InvalidSquare { row: i32, col: i32 },

    /// Square name that is not a file a-h followed by a rank 1-8
    #[error("Invalid square name: {name:?}")]
    InvalidSquareName { name: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} is {found:?} but {expected:?} is to move")]
    WrongPieceColor {
        square: Square,
        expected: Color,
        found: Color,
    },

    /// Move rejected by the movement rules or because it exposes the king
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// A move was submitted while a promotion is still waiting for a choice
    #[error("Promotion pending at {square}: resolve it before moving again")]
    PromotionPending { square: Square },

    /// A promotion choice was supplied but no pawn is waiting for one
    #[error("No promotion is pending")]
    NoPendingPromotion,

    /// Pawns may only become a queen, rook, bishop or knight
    #[error("Cannot promote to {choice:?}")]
    InvalidPromotionChoice { choice: PieceType },

    /// The square named by the promotion request no longer holds the pawn
    #[error("No {color:?} pawn found at {square} to promote")]
    PieceNotFound { square: Square, color: Color },
}

/// Result type alias for rules engine operations
pub type ChessRulesResult<T> = Result<T, ChessRulesError>;
