//! Error types for the driver
//!
//! Covers configuration persistence, move script parsing and moves the rules
//! engine refuses to apply.

use chess_rules::ChessRulesError;
use thiserror::Error;

/// Errors that can occur while driving a game from the command line
#[derive(Error, Debug)]
pub enum CliError {
    /// Config or script file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config or script (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Move text that is not `<from><to>[promotion]`, e.g. `e2e4` or `e7e8q`
    #[error("Invalid move text {text:?}: {message}")]
    InvalidMoveText { text: String, message: String },

    /// A scripted move was rejected by the rules engine
    #[error("Move {index} ({text}) rejected: {source}")]
    MoveRejected {
        index: usize,
        text: String,
        #[source]
        source: ChessRulesError,
    },

    /// Rules engine error outside a script
    #[error(transparent)]
    Rules(#[from] ChessRulesError),

    /// Refusing to overwrite an existing file
    #[error("{path} already exists (use --force to overwrite)")]
    AlreadyExists { path: String },
}

/// Result type alias for driver operations
pub type CliResult<T> = Result<T, CliError>;
