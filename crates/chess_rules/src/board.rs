//! Board representation
//!
//! The board is a fixed 8x8 grid of optional pieces and is the single source
//! of truth for occupancy and for where each piece stands. Pieces carry no
//! position of their own, so a piece's location can never disagree with the
//! grid.
//!
//! Mutation goes through two primitives:
//! - [`Board::set`] - overwrite one cell
//! - [`Board::move_piece`] - clear the origin and occupy the destination in one call

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BACK_ROW, BOARD_SIZE};
use crate::types::{Color, Piece, PieceType, Square};

/// 8x8 grid indexed by `(row, col)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Board::default()
    }

    /// Standard initial position
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (col, &piece_type) in BACK_ROW.iter().enumerate() {
            let col = col as u8;
            board.set(Square::at(0, col), Some(Piece::new(Color::Black, piece_type)));
            board.set(
                Square::at(1, col),
                Some(Piece::new(Color::Black, PieceType::Pawn)),
            );
            board.set(
                Square::at(6, col),
                Some(Piece::new(Color::White, PieceType::Pawn)),
            );
            board.set(Square::at(7, col), Some(Piece::new(Color::White, piece_type)));
        }
        board
    }

    /// Build a board from explicit placements
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> Self {
        let mut board = Board::empty();
        for &(square, piece) in pieces {
            board.set(square, Some(piece));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Move whatever stands on `from` to `to`, returning the previous occupant of `to`
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.get(from);
        let displaced = self.get(to);
        self.set(from, None);
        self.set(to, moving);
        displaced
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|p| p.color)
    }

    /// Locate the king of `color` by linear scan
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.color == color && p.piece_type == PieceType::King)
            .map(|(sq, _)| sq)
    }

    /// Every occupied square with its piece, row by row
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Text diagram, white at the bottom unless `flipped`
    pub fn render(&self, flipped: bool, unicode: bool) -> String {
        let mut out = String::new();
        let rows: Vec<u8> = if flipped {
            (0..BOARD_SIZE as u8).rev().collect()
        } else {
            (0..BOARD_SIZE as u8).collect()
        };
        let cols = rows.clone();
        for &row in &rows {
            out.push_str(&format!("{} ", BOARD_SIZE as u8 - row));
            for &col in &cols {
                let cell = match self.get(Square::at(row, col)) {
                    Some(p) if unicode => p.glyph(),
                    Some(p) => p.symbol(),
                    None => '.',
                };
                out.push(cell);
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str("  ");
        for &col in &cols {
            out.push((b'a' + col) as char);
            out.push(' ');
        }
        out.push('\n');
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false, false))
    }
}

/// Canonical initial position
pub fn create_starting_board() -> Board {
    Board::starting_position()
}
