use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use othello_player::logging::init_logging;
use othello_player::{
    config, ui, Controller, HumanController, RandomController, Session, SessionConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::time::Duration;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PlayerType {
    /// Moves typed at the terminal.
    Human,
    /// Uniformly random legal moves.
    Random,
}

/// Play Othello in the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    black: PlayerType,
    #[arg(long, value_enum, default_value_t = PlayerType::Random)]
    white: PlayerType,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Thinking time per player, in seconds")]
    time_limit: Option<u64>,
    #[arg(long, help = "Only print the final result")]
    quiet: bool,
}

fn controller(player: PlayerType, seed: Option<u64>) -> Box<dyn Controller> {
    match player {
        PlayerType::Human => Box::new(HumanController::stdio()),
        PlayerType::Random => {
            let rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            Box::new(RandomController::new(rng))
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = SessionConfig {
        time_limit: cli
            .time_limit
            .map_or(config::DEFAULT_TIME_LIMIT, Duration::from_secs),
        quiet: cli.quiet,
        ..SessionConfig::default()
    };
    info!("starting {:?} (black) vs {:?} (white)", cli.black, cli.white);

    let black = controller(cli.black, cli.seed);
    let white = controller(cli.white, cli.seed.map(|s| s.wrapping_add(1)));
    let outcome = Session::new(black, white, config, io::stdout())
        .run()
        .context("game aborted")?;

    if cli.quiet {
        println!(
            "Black {} - {} White. {}",
            outcome.black,
            outcome.white,
            ui::result_line(outcome.winner)
        );
    }
    Ok(())
}
