//! Core module - driver infrastructure
//!
//! - [`error`] - `CliError` and `CliResult`
//! - [`logging`] - tracing subscriber with a reloadable filter
//! - [`promotion_choice`] - serde checks for promotion pieces
//! - [`settings_persistence`] - `CliConfig` load/save

pub mod error;
pub mod logging;
pub mod promotion_choice;
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LogHandle};
pub use settings_persistence::{default_config_path, load_config, save_config, CliConfig};
