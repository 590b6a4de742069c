//! Game driving module
//!
//! Sits between the command line and the rules engine:
//!
//! - `script` - move scripts in JSON or `e2e4`-style text
//! - `session` - `GameSession`, the loop that applies moves and resolves promotions

pub mod script;
pub mod session;

// Re-export the main entry points
pub use script::{MoveScript, ScriptMove};
pub use session::GameSession;
