pub mod cli;
pub mod core;
pub mod game;

pub use game::GameSession;
