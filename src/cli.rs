use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "chess-rules",
    version,
    about = "Validate and replay chess moves from the command line"
)]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the starting position
    Show,

    /// Replay moves from a script file and/or the command line
    Replay {
        /// Script file: JSON or whitespace-separated moves like `e2e4 e7e5`
        script: Option<PathBuf>,

        /// Moves to play after the script, e.g. "e2e4 e7e5 g1f3"
        #[arg(long)]
        moves: Option<String>,

        /// Only print the final position
        #[arg(short, long)]
        quiet: bool,
    },

    /// List legal destinations for the piece on a square
    Moves {
        /// Square name such as `g1`
        square: String,

        /// Moves to play first, e.g. "e2e4 e7e5"
        #[arg(long)]
        moves: Option<String>,
    },

    /// Write a config file with default settings
    InitConfig {
        /// Destination (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
