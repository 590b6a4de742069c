//! Move legality and execution
//!
//! Functions for checking move legality and applying moves.

use tracing::{debug, info};

use crate::board::Board;
use crate::error::{ChessRulesError, ChessRulesResult};
use crate::make_unmake::SimulatedMove;
use crate::move_gen::pawn::{double_push_target, en_passant_victim};
use crate::move_gen::{
    is_en_passant_capture, is_in_check, is_pseudo_legal, is_square_attacked, pseudo_legal_moves,
};
use crate::state::{EnPassant, GameState, MoveRecord, PromotionRequest};
use crate::types::{PieceType, Square};

use super::promotion::is_promotion_move;

/// Result of a successfully applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// What was played, as appended to the history
    pub record: MoveRecord,
    /// Set when a pawn reached the far rank; the turn does not advance until
    /// [`super::resolve_promotion`] is called
    pub promotion: Option<PromotionRequest>,
}

/// Check if a move is legal
///
/// A move is legal when it is pseudo-legal and, once played, does not leave
/// the mover's own king attacked. The move is simulated on `board` and always
/// reverted before this function returns, so the board reads the same
/// afterwards whatever the answer.
///
/// The side to move is not checked here; [`apply_move`] does that.
///
/// # Examples
///
/// ```rust
/// use chess_rules::{is_legal, new_game, Square};
///
/// let (mut board, state) = new_game();
/// assert!(is_legal(&mut board, Square::at(6, 4), Square::at(4, 4), &state));
/// assert!(!is_legal(&mut board, Square::at(6, 4), Square::at(3, 4), &state));
/// ```
pub fn is_legal(board: &mut Board, from: Square, to: Square, state: &GameState) -> bool {
    if !is_pseudo_legal(board, from, to, state) {
        return false;
    }

    let Some(piece) = board.get(from) else {
        return false;
    };

    let sim = SimulatedMove::make(board, from, to);
    let exposes_king = is_in_check(sim.board(), piece.color);
    drop(sim);

    !exposes_king
}

/// Every legal destination for the piece on `from`
pub fn legal_moves(board: &mut Board, from: Square, state: &GameState) -> Vec<Square> {
    let mut moves = Vec::new();
    for to in pseudo_legal_moves(board, from, state) {
        if is_legal(board, from, to, state) {
            moves.push(to);
        }
    }
    moves
}

/// Apply a move for the side to move
///
/// Validates the move, updates the board (removing an en-passant victim from
/// its own square), refreshes the en-passant window, records the move and
/// advances the turn. When a pawn reaches the far rank the returned outcome
/// carries a [`PromotionRequest`] and the turn stays put until the promotion
/// is resolved.
///
/// # Errors
///
/// - [`ChessRulesError::PromotionPending`] if an earlier promotion is unresolved
/// - [`ChessRulesError::NoPieceAtSquare`] if `from` is empty
/// - [`ChessRulesError::WrongPieceColor`] if the piece is not the side to move's
/// - [`ChessRulesError::IllegalMove`] if [`is_legal`] rejects the move
///
/// The board and state are untouched when an error is returned.
pub fn apply_move(
    board: &mut Board,
    state: &mut GameState,
    from: Square,
    to: Square,
) -> ChessRulesResult<MoveOutcome> {
    if let Some(request) = state.pending_promotion {
        return Err(ChessRulesError::PromotionPending {
            square: request.square,
        });
    }

    let piece = board
        .get(from)
        .ok_or(ChessRulesError::NoPieceAtSquare { square: from })?;

    let side = state.side_to_move();
    if piece.color != side {
        return Err(ChessRulesError::WrongPieceColor {
            square: from,
            expected: side,
            found: piece.color,
        });
    }

    if !is_legal(board, from, to, state) {
        debug!("[MOVE] Rejected {:?} {} -> {}", piece.piece_type, from, to);
        return Err(ChessRulesError::IllegalMove { from, to });
    }

    let is_en_passant = is_en_passant_capture(board, from, to, state);
    let captured = if is_en_passant {
        let victim = en_passant_victim(from, to);
        let taken = board.get(victim);
        board.set(victim, None);
        debug!("[EN_PASSANT] {:?} pawn takes on {} (victim on {})", piece.color, to, victim);
        taken
    } else {
        board.get(to)
    };

    board.move_piece(from, to);

    // The window closes on every move; a double push reopens it
    state.en_passant = None;
    if piece.piece_type == PieceType::Pawn {
        if let Some(target) = double_push_target(piece.color, from, to) {
            state.en_passant = Some(EnPassant {
                target,
                created_turn: state.turn,
            });
        }
    }

    let promotion = is_promotion_move(piece.piece_type, piece.color, to).then_some(
        PromotionRequest {
            color: piece.color,
            square: to,
        },
    );

    let opponent = piece.color.opponent();
    let record = MoveRecord {
        turn: state.turn,
        piece,
        from,
        to,
        captured,
        is_en_passant,
        promoted_to: None,
        is_check: board
            .find_king(opponent)
            .is_some_and(|king| is_square_attacked(board, king, piece.color)),
    };
    state.history.push(record);

    debug!(
        "[MOVE] Turn {}: {:?} {:?} {} -> {}{}",
        state.turn,
        piece.color,
        piece.piece_type,
        from,
        to,
        if captured.is_some() { " (capture)" } else { "" }
    );

    match promotion {
        Some(request) => {
            info!(
                "[PROMOTION] {:?} pawn on {} awaits a promotion choice",
                request.color, request.square
            );
            state.pending_promotion = Some(request);
        }
        None => state.advance_turn(),
    }

    Ok(MoveOutcome { record, promotion })
}
