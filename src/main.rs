use std::path::Path;

use anyhow::{Context, Result};
use chess_rules::Square;
use chess_rules_cli::cli::{Cli, Commands};
use chess_rules_cli::core::{
    default_config_path, init_logging, load_config, save_config, CliConfig,
};
use chess_rules_cli::game::{GameSession, MoveScript};
use clap::Parser;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref());
    logging.apply_config_filter(&config.log_filter, cli.verbose);

    match cli.command {
        Commands::Show => {
            let session = GameSession::new(config);
            print!("{}", session.render());
            println!("{}", session.summary());
        }
        Commands::Replay {
            script,
            moves,
            quiet,
        } => replay(config, script.as_deref(), moves.as_deref(), quiet)?,
        Commands::Moves { square, moves } => {
            let from: Square = square
                .parse()
                .with_context(|| format!("invalid square {square:?}"))?;
            let mut session = GameSession::new(config);
            if let Some(text) = moves {
                let script = MoveScript::from_text(&text).context("failed to parse --moves")?;
                session.play_script(&script, |_, _| {})?;
            }

            let targets = session.legal_moves_from(from);
            match session.board.get(from) {
                Some(piece) => {
                    let names: Vec<String> = targets.iter().map(ToString::to_string).collect();
                    println!(
                        "{:?} {:?} on {}: {}",
                        piece.color,
                        piece.piece_type,
                        from,
                        if names.is_empty() {
                            "no legal moves".to_string()
                        } else {
                            names.join(" ")
                        }
                    );
                }
                None => println!("{from} is empty"),
            }
        }
        Commands::InitConfig { path, force } => {
            let path = path.unwrap_or_else(default_config_path);
            save_config(&CliConfig::default(), &path, force)
                .with_context(|| format!("failed to write config to {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn replay(
    config: CliConfig,
    script_path: Option<&Path>,
    extra_moves: Option<&str>,
    quiet: bool,
) -> Result<()> {
    let mut script = match script_path {
        Some(path) => MoveScript::load(path)
            .with_context(|| format!("failed to load script {}", path.display()))?,
        None => MoveScript::default(),
    };
    if let Some(text) = extra_moves {
        let extra = MoveScript::from_text(text).context("failed to parse --moves")?;
        script.moves.extend(extra.moves);
    }
    info!("[REPLAY] Playing {} moves", script.len());

    let mut session = GameSession::new(config);
    let result = session.play_script(&script, |session, outcome| {
        if quiet {
            return;
        }
        let record = &outcome.record;
        println!(
            "{}. {:?} {:?} {} -> {}{}{}{}",
            record.turn + 1,
            record.piece.color,
            record.piece.piece_type,
            record.from,
            record.to,
            if record.is_en_passant {
                " e.p."
            } else if record.captured.is_some() {
                " x"
            } else {
                ""
            },
            record
                .promoted_to
                .map(|t| format!(" ={:?}", t))
                .unwrap_or_default(),
            if record.is_check { " +" } else { "" },
        );
        print!("{}", session.render());
        println!();
    });

    if quiet || result.is_err() {
        print!("{}", session.render());
    }
    println!("{}", session.summary());

    if session.config().show_legal_moves {
        let moves: Vec<String> = session
            .all_legal_moves()
            .iter()
            .map(|(from, to)| format!("{from}{to}"))
            .collect();
        println!("Legal moves: {}", moves.join(" "));
    }

    result.context("replay stopped")?;
    Ok(())
}
