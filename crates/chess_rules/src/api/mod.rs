//! Public API for the rules engine
//!
//! Provides the operations a driving loop needs: set up a game, ask whether a
//! move is legal, apply it, and resolve promotions.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Legality filter and move application (is_legal, apply_move)
//! - `promotion` - Promotion detection and resolution

mod game;
mod moves;
mod promotion;

pub use game::{new_game, reset_game};
pub use moves::{apply_move, is_legal, legal_moves, MoveOutcome};
pub use promotion::{is_promotion_move, resolve_promotion};
