//! Turn-scoped rule state owned by the caller
//!
//! Everything that changes from one turn to the next and is not piece
//! placement lives here: the turn counter, the en-passant window, a pending
//! promotion and the move history. The rule functions read it through a
//! shared reference; only [`crate::api::apply_move`] and
//! [`crate::api::resolve_promotion`] write to it.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Piece, PieceType, Square};

/// Square a pawn skipped over with a double advance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnPassant {
    /// Square an opposing pawn moves to when capturing en passant
    pub target: Square,
    /// Turn on which the double advance was played
    pub created_turn: u32,
}

impl EnPassant {
    /// Capture is only available on the turn right after the double advance
    #[inline]
    pub fn is_open(&self, turn: u32) -> bool {
        self.created_turn.checked_add(1) == Some(turn)
    }
}

/// A pawn reached the far rank and waits for its owner's choice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionRequest {
    pub color: Color,
    pub square: Square,
}

/// One applied move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub turn: u32,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub promoted_to: Option<PieceType>,
    /// Opponent's king is attacked after the move (and promotion, if any)
    pub is_check: bool,
}

/// Caller-owned game state threaded through every rule query
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Even = white to move, odd = black to move
    pub turn: u32,
    pub en_passant: Option<EnPassant>,
    pub pending_promotion: Option<PromotionRequest>,
    #[serde(default)]
    pub history: Vec<MoveRecord>,
}

impl GameState {
    pub fn new() -> Self {
        GameState::default()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        Color::for_turn(self.turn)
    }

    /// En-passant target usable on the current turn
    pub fn active_en_passant(&self) -> Option<Square> {
        self.en_passant
            .filter(|ep| ep.is_open(self.turn))
            .map(|ep| ep.target)
    }

    pub fn is_promotion_pending(&self) -> bool {
        self.pending_promotion.is_some()
    }

    /// Hand the move to the other side; the counter stops at `u32::MAX`
    pub(crate) fn advance_turn(&mut self) {
        self.turn = self.turn.saturating_add(1);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Kinds of `color`'s pieces taken by the opponent, in capture order
    pub fn captured_from(&self, color: Color) -> Vec<PieceType> {
        self.history
            .iter()
            .filter_map(|record| record.captured)
            .filter(|piece| piece.color == color)
            .map(|piece| piece.piece_type)
            .collect()
    }
}
