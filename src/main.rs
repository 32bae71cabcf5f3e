use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{
    init_logging, ui, AiPlayer, CliPlayer, Match, MatchOptions, Side, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1500, help = "Pause before the computer's move, in ms")]
        delay_ms: u64,
    },
    /// Run headless computer-vs-computer games and print a win tally.
    Sim {
        #[arg(long, default_value_t = 100)]
        games: u32,
        #[arg(long, help = "Base seed; game i uses seed + i")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, delay_ms } => {
            ui::greet();
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let options = MatchOptions {
                pacing: Duration::from_millis(delay_ms),
                verbose: true,
            };
            let mut game = Match::new(
                Box::new(CliPlayer::new()),
                Box::new(AiPlayer::new(BOARD_SIZE)),
                make_rng(seed),
                options,
            );
            game.run();
        }
        Commands::Sim { games, seed } => {
            let mut first_wins = 0u32;
            let mut total_turns = 0u64;
            for i in 0..games {
                let rng = make_rng(seed.map(|s| s.wrapping_add(i as u64)));
                let mut game = Match::new(
                    Box::new(AiPlayer::silent(BOARD_SIZE)),
                    Box::new(AiPlayer::silent(BOARD_SIZE)),
                    rng,
                    MatchOptions::default(),
                );
                if game.run() == Side::First {
                    first_wins += 1;
                }
                total_turns += u64::from(game.turn());
            }
            println!(
                "{} games: first side won {}, second side won {}",
                games,
                first_wins,
                games - first_wins
            );
            if games > 0 {
                println!(
                    "average turns per game: {:.1}",
                    total_turns as f64 / f64::from(games)
                );
            }
        }
    }

    Ok(())
}
