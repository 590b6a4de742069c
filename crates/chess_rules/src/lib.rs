//! # Chess Rules Engine
//!
//! Decides whether a proposed move is allowed in a two-player chess game and
//! tracks the short-lived rule state that spans turns.
//!
//! ## Layers
//!
//! 1. **Move validation** ([`is_pseudo_legal`]) - does the move fit the piece's
//!    pattern, with blocking and capture rules?
//! 2. **Check detection** ([`is_in_check`]) - is a king attacked, found by ray
//!    casting from the king outward?
//! 3. **Legality** ([`is_legal`]) - simulate the move, test the mover's king,
//!    revert. The revert is a drop guard ([`make_unmake::SimulatedMove`]) so
//!    no exit path skips it.
//! 4. **Application** ([`apply_move`], [`resolve_promotion`]) - update the
//!    board and the caller-owned [`GameState`]: en-passant window, pending
//!    promotion, history, turn counter.
//!
//! The engine keeps no state of its own. The board and the game state belong
//! to the caller and are passed into every call; mutating calls must be
//! serialized by the caller.
//!
//! Castling, end-of-game detection and move notation are not supported.
//!
//! ## Example
//!
//! ```rust
//! use chess_rules::{apply_move, new_game, Color, Square};
//!
//! let (mut board, mut state) = new_game();
//! apply_move(&mut board, &mut state, Square::at(6, 4), Square::at(4, 4)).unwrap();
//!
//! assert_eq!(state.side_to_move(), Color::Black);
//! // The skipped square is capturable en passant on black's reply only
//! assert_eq!(state.active_en_passant(), Some(Square::at(5, 4)));
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod make_unmake;
pub mod move_gen;
pub mod state;
pub mod types;

pub use api::{
    apply_move, is_legal, is_promotion_move, legal_moves, new_game, reset_game, resolve_promotion,
    MoveOutcome,
};
pub use board::{create_starting_board, Board};
pub use error::{ChessRulesError, ChessRulesResult};
pub use move_gen::{is_in_check, is_pseudo_legal, is_square_attacked, pseudo_legal_moves};
pub use state::{EnPassant, GameState, MoveRecord, PromotionRequest};
pub use types::{Color, Piece, PieceType, Square};
