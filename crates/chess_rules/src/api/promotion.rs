//! Pawn promotion
//!
//! [`super::apply_move`] raises a [`PromotionRequest`] when a pawn lands on
//! the far rank and holds the turn. The owner's choice is applied here by
//! rewriting the pawn's type in place; the piece keeps its square and color
//! and the piece count does not change.

use tracing::info;

use crate::board::Board;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::move_gen::is_square_attacked;
use crate::state::GameState;
use crate::types::{Color, Piece, PieceType, Square};

/// Check if a move to `to` promotes a piece of this type and color
pub fn is_promotion_move(piece_type: PieceType, color: Color, to: Square) -> bool {
    piece_type == PieceType::Pawn && to.row() == color.promotion_row()
}

/// Apply the owner's choice to the pending promotion and advance the turn
///
/// Returns the promoted piece.
///
/// # Errors
///
/// - [`ChessRulesError::NoPendingPromotion`] if no pawn is waiting
/// - [`ChessRulesError::InvalidPromotionChoice`] for a pawn or king choice
/// - [`ChessRulesError::PieceNotFound`] if the requested square no longer holds
///   the pawn
///
/// On error the board and state are untouched and the request stays pending.
pub fn resolve_promotion(
    board: &mut Board,
    state: &mut GameState,
    choice: PieceType,
) -> ChessRulesResult<Piece> {
    let request = state
        .pending_promotion
        .ok_or(ChessRulesError::NoPendingPromotion)?;

    if !choice.is_promotion_choice() {
        return Err(ChessRulesError::InvalidPromotionChoice { choice });
    }

    let pawn = Piece::new(request.color, PieceType::Pawn);
    if board.get(request.square) != Some(pawn) {
        return Err(ChessRulesError::PieceNotFound {
            square: request.square,
            color: request.color,
        });
    }

    let promoted = Piece::new(request.color, choice);
    board.set(request.square, Some(promoted));

    let opponent = request.color.opponent();
    if let Some(record) = state.history.last_mut() {
        record.promoted_to = Some(choice);
        record.is_check = board
            .find_king(opponent)
            .is_some_and(|king| is_square_attacked(board, king, request.color));
    }

    info!(
        "[PROMOTION] {:?} pawn on {} promoted to {:?}",
        request.color, request.square, choice
    );

    state.pending_promotion = None;
    state.advance_turn();

    Ok(promoted)
}
