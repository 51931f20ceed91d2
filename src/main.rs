//! uttt: Ultimate Tic-Tac-Toe MCTS engine.
//!
//! ## Usage
//!
//! - `uttt arena` - Play the search against a random opponent and tally results
//! - `uttt selfplay` - Let the search play both sides, printing every position
//!
//! Set `RUST_LOG=debug` to see per-search diagnostics.

use anyhow::Result;
use clap::{Parser, Subcommand};

use uttt_mcts::arena::{run_arena, self_play, ArenaConfig};
use uttt_mcts::core::Player;
use uttt_mcts::mcts::MCTSConfig;

/// uttt: Ultimate Tic-Tac-Toe with a Monte Carlo Tree Search player
#[derive(Parser)]
#[command(name = "uttt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the search against a uniformly random opponent
    Arena {
        /// Number of games
        #[arg(long, default_value_t = 100)]
        games: u32,
        /// Search iterations per move
        #[arg(long, default_value_t = 2000)]
        iterations: u32,
        /// UCB1 exploration constant
        #[arg(long, default_value_t = 1.41)]
        exploration: f64,
        /// Harness seed
        #[arg(long, default_value_t = 7)]
        seed: u64,
        /// Let the search move first instead of second
        #[arg(long)]
        ai_first: bool,
    },
    /// Let the search play against itself
    Selfplay {
        /// Search iterations per move
        #[arg(long, default_value_t = 2000)]
        iterations: u32,
        /// Search seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Arena {
            games,
            iterations,
            exploration,
            seed,
            ai_first,
        } => {
            let search = MCTSConfig::default()
                .with_iterations(iterations)
                .with_exploration(exploration);
            let ai_player = if ai_first { Player::One } else { Player::Two };
            let config = ArenaConfig::default()
                .with_games(games)
                .with_ai_player(ai_player)
                .with_search(search)
                .with_seed(seed);

            let report = run_arena(&config)?;
            println!("{report}");
        }
        Commands::Selfplay { iterations, seed } => {
            let config = MCTSConfig::default()
                .with_iterations(iterations)
                .with_seed(seed);

            let result = self_play(&config, |state, mv| {
                println!("{} played {mv}", state.active_player.opponent());
                println!("{state}");
            })?;
            println!("Result: {result:?}");
        }
    }

    Ok(())
}
