//! Game session - the driving loop around the rules engine
//!
//! Owns the board and the game state and feeds moves into the engine one at a
//! time: apply, resolve any promotion straight away, log the result.

use chess_rules::{
    apply_move, is_in_check, is_promotion_move, legal_moves, new_game, resolve_promotion, Board,
    ChessRulesError, Color, GameState, MoveOutcome, Square,
};
use tracing::{debug, info};

use super::script::{MoveScript, ScriptMove};
use crate::core::{CliConfig, CliError, CliResult};

/// A game in progress
pub struct GameSession {
    pub board: Board,
    pub state: GameState,
    config: CliConfig,
}

impl GameSession {
    pub fn new(config: CliConfig) -> Self {
        let (board, state) = new_game();
        Self {
            board,
            state,
            config,
        }
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    /// Apply one move, resolving a promotion with the scripted or configured piece
    ///
    /// The promotion choice is checked before the board is touched, so a
    /// rejected move leaves the session as it was.
    pub fn play(&mut self, mv: &ScriptMove) -> CliResult<MoveOutcome> {
        let choice = mv.promotion.unwrap_or(self.config.auto_promote);
        let promotes = self
            .board
            .get(mv.from)
            .is_some_and(|p| is_promotion_move(p.piece_type, p.color, mv.to));
        if promotes && !choice.is_promotion_choice() {
            return Err(ChessRulesError::InvalidPromotionChoice { choice }.into());
        }

        let mut outcome = apply_move(&mut self.board, &mut self.state, mv.from, mv.to)?;

        if let Some(request) = outcome.promotion {
            debug!(
                "[SESSION] Resolving promotion on {} with {:?}",
                request.square, choice
            );
            resolve_promotion(&mut self.board, &mut self.state, choice)?;
            if let Some(record) = self.state.last_move() {
                outcome.record = *record;
            }
        }

        Ok(outcome)
    }

    /// Replay every move of a script, stopping at the first rejected one
    ///
    /// `on_move` is called after each applied move.
    pub fn play_script<F>(&mut self, script: &MoveScript, mut on_move: F) -> CliResult<usize>
    where
        F: FnMut(&GameSession, &MoveOutcome),
    {
        for (index, mv) in script.moves.iter().enumerate() {
            let outcome = self.play(mv).map_err(|e| match e {
                CliError::Rules(source) => CliError::MoveRejected {
                    index: index + 1,
                    text: mv.to_string(),
                    source,
                },
                other => other,
            })?;
            on_move(self, &outcome);
        }
        info!("[SESSION] Replayed {} moves", script.len());
        Ok(script.len())
    }

    /// Legal destinations for the piece on `from`
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<Square> {
        legal_moves(&mut self.board, from, &self.state)
    }

    /// Every legal move of the side to move, as `(from, to)` pairs
    pub fn all_legal_moves(&mut self) -> Vec<(Square, Square)> {
        let side = self.state.side_to_move();
        let origins: Vec<Square> = self
            .board
            .pieces()
            .filter(|(_, p)| p.color == side)
            .map(|(sq, _)| sq)
            .collect();

        let mut moves = Vec::new();
        for from in origins {
            for to in self.legal_moves_from(from) {
                moves.push((from, to));
            }
        }
        moves
    }

    /// Board diagram oriented per the config
    pub fn render(&self) -> String {
        let flipped = self.config.flip_for_black && self.state.side_to_move() == Color::Black;
        self.board.render(flipped, self.config.unicode_pieces)
    }

    /// One-paragraph status: side to move, check, material taken
    pub fn summary(&self) -> String {
        let side = self.state.side_to_move();
        let mut lines = vec![format!(
            "Turn {}: {:?} to move{}",
            self.state.turn,
            side,
            if is_in_check(&self.board, side) {
                " (in check)"
            } else {
                ""
            }
        )];

        if let Some(target) = self.state.active_en_passant() {
            lines.push(format!("En passant available on {target}"));
        }

        for color in [Color::White, Color::Black] {
            let taken = self.state.captured_from(color.opponent());
            if !taken.is_empty() {
                let symbols: String = taken.iter().map(|t| t.symbol()).collect();
                lines.push(format!("{color:?} has captured: {symbols}"));
            }
        }

        lines.join("\n")
    }
}
