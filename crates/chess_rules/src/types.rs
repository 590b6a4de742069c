//! Core value types shared by every part of the rules engine
//!
//! ## Coordinates
//!
//! A [`Square`] is a `(row, col)` pair with both components in `0..8`. Row 0 is
//! black's back rank and row 7 is white's back rank, so white pawns move toward
//! row 0 and black pawns toward row 7. Columns run from the a-file (0) to the
//! h-file (7). The only way to build a square from raw integers is
//! [`Square::new`], which rejects anything off the board; every other API takes
//! a `Square`, so the rule functions never see invalid coordinates.
//!
//! ## Pieces
//!
//! A [`Piece`] is just its owner and its kind. It carries no position: the
//! board cell that holds a piece *is* its position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::{ChessRulesError, ChessRulesResult};

/// Owner of a piece, and the side to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Side to move for a turn index (even = white, odd = black)
    #[inline]
    pub fn for_turn(turn: u32) -> Color {
        if turn % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Row delta of a pawn advance
    #[inline]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row pawns of this color start on
    #[inline]
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which pawns of this color promote
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Kind of a chess piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// Whether a pawn may be promoted to this kind
    pub fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Knight
        )
    }

    /// Single-letter symbol, uppercase (`P`, `R`, `N`, `B`, `Q`, `K`)
    pub fn symbol(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Rook => 'R',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

impl FromStr for PieceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "p" | "pawn" => Ok(PieceType::Pawn),
            "r" | "rook" => Ok(PieceType::Rook),
            "n" | "knight" => Ok(PieceType::Knight),
            "b" | "bishop" => Ok(PieceType::Bishop),
            "q" | "queen" => Ok(PieceType::Queen),
            "k" | "king" => Ok(PieceType::King),
            other => Err(format!("unknown piece type: {other}")),
        }
    }
}

/// A piece on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: Color, piece_type: PieceType) -> Self {
        Piece { color, piece_type }
    }

    /// FEN-style letter: uppercase for white, lowercase for black
    pub fn symbol(self) -> char {
        let c = self.piece_type.symbol();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Unicode chess glyph
    pub fn glyph(self) -> char {
        match (self.color, self.piece_type) {
            (Color::White, PieceType::King) => '♔',
            (Color::White, PieceType::Queen) => '♕',
            (Color::White, PieceType::Rook) => '♖',
            (Color::White, PieceType::Bishop) => '♗',
            (Color::White, PieceType::Knight) => '♘',
            (Color::White, PieceType::Pawn) => '♙',
            (Color::Black, PieceType::King) => '♚',
            (Color::Black, PieceType::Queen) => '♛',
            (Color::Black, PieceType::Rook) => '♜',
            (Color::Black, PieceType::Bishop) => '♝',
            (Color::Black, PieceType::Knight) => '♞',
            (Color::Black, PieceType::Pawn) => '♟',
        }
    }
}

/// A board coordinate, always on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "SquareRepr", into = "SquareRepr")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square, rejecting coordinates outside `0..8`
    pub fn new(row: i32, col: i32) -> ChessRulesResult<Self> {
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessRulesError::InvalidSquare { row, col })
        }
    }

    /// Infallible constructor for compile-time known coordinates
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 8 or greater.
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Square { row, col }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Square displaced by `(d_row, d_col)`, or `None` when that leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, row by row
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    /// Algebraic name: row 7 is rank 1, column 0 is file a
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE as u8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessRulesError::InvalidSquareName {
            name: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        let col = (file - b'a') as i32;
        let row = BOARD_SIZE as i32 - (rank - b'0') as i32;
        Square::new(row, col)
    }
}

/// Wire form of a square: `[row, col]`
#[derive(Serialize, Deserialize)]
struct SquareRepr(i32, i32);

impl TryFrom<SquareRepr> for Square {
    type Error = ChessRulesError;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Square::new(repr.0, repr.1)
    }
}

impl From<Square> for SquareRepr {
    fn from(sq: Square) -> Self {
        SquareRepr(sq.row as i32, sq.col as i32)
    }
}
