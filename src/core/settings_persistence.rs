//! Settings persistence
//!
//! Loads and saves [`CliConfig`] as JSON.
//!
//! # File Location
//!
//! An explicit `--config <path>` wins. Otherwise the file is `config.json` in
//! the user's configuration directory, e.g.
//! `~/.config/chess-rules/config.json` on Linux, falling back to a local
//! `config.json` if the system config dir cannot be found.
//!
//! # Error Handling
//!
//! Loading never fails: a missing file, an unreadable file or invalid JSON all
//! fall back to defaults with a log line. Saving reports errors to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use chess_rules::PieceType;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::{CliError, CliResult};

/// Settings filename
const SETTINGS_FILENAME: &str = "config.json";

/// Driver preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Draw the board from black's side when black is to move
    pub flip_for_black: bool,
    /// Unicode chess glyphs instead of FEN letters
    pub unicode_pieces: bool,
    /// After a replay, list the legal moves of the side to move
    pub show_legal_moves: bool,
    /// Choice used when a scripted promotion does not name a piece
    #[serde(deserialize_with = "super::promotion_choice::deserialize")]
    pub auto_promote: PieceType,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            flip_for_black: false,
            unicode_pieces: false,
            show_legal_moves: false,
            auto_promote: PieceType::Queen,
        }
    }
}

/// Resolve the default settings path
pub fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chess-rules") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path` or the default location, falling back to defaults
pub fn load_config(path: Option<&Path>) -> CliConfig {
    let settings_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    if !settings_path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            settings_path
        );
        return CliConfig::default();
    }

    match fs::read_to_string(&settings_path) {
        Ok(contents) => match serde_json::from_str::<CliConfig>(&contents) {
            Ok(config) => {
                info!("[SETTINGS] Loaded settings from {:?}", settings_path);
                config
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                    settings_path, e
                );
                CliConfig::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                settings_path, e
            );
            CliConfig::default()
        }
    }
}

/// Write `config` to `path`, creating parent directories
pub fn save_config(config: &CliConfig, path: &Path, overwrite: bool) -> CliResult<()> {
    if path.exists() && !overwrite {
        return Err(CliError::AlreadyExists {
            path: path.display().to_string(),
        });
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
