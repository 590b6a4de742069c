//! Move scripts
//!
//! A script is a list of moves in coordinate form. Two file formats are read:
//!
//! - JSON: `{ "moves": [ { "from": "e2", "to": "e4" }, { "from": "a7", "to": "a8", "promotion": "queen" } ] }`
//! - Text: whitespace-separated moves such as `e2e4 e7e5 a7a8q`; `#` starts a comment
//!
//! Squares are named by file (`a`-`h`) and rank (`1`-`8`), white on ranks 1-2.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use chess_rules::{PieceType, Square};
use serde::{Deserialize, Serialize};

use crate::core::{CliError, CliResult};

/// One scripted move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMove {
    #[serde(with = "square_name")]
    pub from: Square,
    #[serde(with = "square_name")]
    pub to: Square,
    /// Promotion choice; the config's `auto_promote` is used when absent
    #[serde(
        default,
        deserialize_with = "crate::core::promotion_choice::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub promotion: Option<PieceType>,
}

impl fmt::Display for ScriptMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(choice) = self.promotion {
            write!(f, "{}", choice.symbol().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl FromStr for ScriptMove {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = |message: String| CliError::InvalidMoveText {
            text: text.to_string(),
            message,
        };

        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid("expected <from><to>[q|r|b|n]".to_string()));
        }

        let from = text[0..2].parse::<Square>().map_err(|e| invalid(e.to_string()))?;
        let to = text[2..4].parse::<Square>().map_err(|e| invalid(e.to_string()))?;
        let promotion = match text.get(4..5) {
            Some(letter) => {
                let choice = letter.parse::<PieceType>().map_err(invalid)?;
                if !choice.is_promotion_choice() {
                    return Err(invalid(format!("cannot promote to {choice:?}")));
                }
                Some(choice)
            }
            None => None,
        };

        Ok(ScriptMove {
            from,
            to,
            promotion,
        })
    }
}

/// A sequence of moves to replay from the starting position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScript {
    pub moves: Vec<ScriptMove>,
}

impl MoveScript {
    /// Parse whitespace-separated move text
    pub fn from_text(text: &str) -> CliResult<Self> {
        let moves = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace)
            .map(str::parse::<ScriptMove>)
            .collect::<CliResult<Vec<_>>>()?;
        Ok(MoveScript { moves })
    }

    /// Parse either JSON or move text, judged by the first character
    pub fn parse(contents: &str) -> CliResult<Self> {
        let trimmed = contents.trim_start();
        if trimmed.starts_with('{') {
            Ok(serde_json::from_str(trimmed)?)
        } else if trimmed.starts_with('[') {
            let moves: Vec<ScriptMove> = serde_json::from_str(trimmed)?;
            Ok(MoveScript { moves })
        } else {
            MoveScript::from_text(contents)
        }
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = fs::read_to_string(path)?;
        MoveScript::parse(&contents)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Serde adapter writing squares by name (`"e4"`)
mod square_name {
    use chess_rules::Square;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(square: &Square, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(square)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
