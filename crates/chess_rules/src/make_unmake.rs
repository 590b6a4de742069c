//! Scoped move simulation
//!
//! Legality is decided by playing the move on the real board, asking whether
//! the mover's king is attacked, and putting everything back. The putting-back
//! lives in [`SimulatedMove`]'s `Drop`, so it runs on every exit path,
//! including an early return or an unwinding panic. While the guard is alive
//! it holds the only mutable borrow of the board, so nothing else can observe
//! the simulated position.
//!
//! Only the destination occupant is displaced. A pawn taken en passant stands
//! on a different square and stays on the board during simulation.

use crate::board::Board;
use crate::types::{Piece, Square};

/// Information needed to undo a simulated move
#[derive(Clone, Copy, Debug)]
struct UndoInfo {
    from_square_piece: Option<Piece>,
    captured_piece: Option<Piece>,
}

/// A move played on a board for inspection, reverted when dropped
pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    undo: UndoInfo,
}

impl<'a> SimulatedMove<'a> {
    /// Play `from -> to` on `board` until the guard is dropped
    pub fn make(board: &'a mut Board, from: Square, to: Square) -> Self {
        let undo = UndoInfo {
            from_square_piece: board.get(from),
            captured_piece: board.get(to),
        };
        board.move_piece(from, to);
        SimulatedMove {
            board,
            from,
            to,
            undo,
        }
    }

    /// The board with the move applied
    pub fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.from, self.undo.from_square_piece);
        self.board.set(self.to, self.undo.captured_piece);
    }
}
