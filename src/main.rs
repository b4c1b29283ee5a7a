use verger::prelude::*;
use verger::stats;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{Level, info};

#[derive(Parser)]
#[command(author, version, about = "Monte-Carlo simulator for the board game Le Verger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args)]
struct BoardArgs {
    /// Number of fruit trees
    #[arg(long, default_value_t = 4)]
    trees: u8,
    /// Fruits on each tree at the start
    #[arg(long, default_value_t = 10)]
    fruits: u8,
    /// Pieces in the raven's puzzle
    #[arg(long, default_value_t = 9)]
    puzzle: u8,
    /// Fruits picked on a basket ("panier") face
    #[arg(long, default_value_t = 2)]
    basket: u8,
    /// Die faces; trees + basket + raven must fit
    #[arg(long, default_value_t = 6)]
    faces: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game with a per-turn narration
    Play {
        #[arg(short, long, default_value = "random")]
        policy: String,
        #[arg(short, long)]
        seed: Option<u64>,
        /// Skip the narration, only report the outcome
        #[arg(short, long)]
        quiet: bool,
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Run a batch of games per policy and compare the outcomes
    Compare {
        #[arg(short, long, default_value = "random,greedy")]
        policies: String,
        #[arg(short = 'n', long, default_value_t = 100_000)]
        games: u32,
        #[arg(short, long)]
        seed: Option<u64>,
        /// Print the summaries as JSON on stdout
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        board: BoardArgs,
    },

    /// List the registered basket policies
    List,
}

fn main() -> Result<()> {
    let program_start = Instant::now();

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Play {
            policy,
            seed,
            quiet,
            board,
        } => {
            play_one_game(&policy, seed, quiet, &board)?;
        }

        Commands::Compare {
            policies,
            games,
            seed,
            json,
            board,
        } => {
            compare_policies(&policies, games, seed, json, &board)?;
        }

        Commands::List => {
            println!("\nAvailable basket policies");

            for policy in PolicyRegistry::global().list() {
                println!("  - {}", policy);
            }

            println!("\nUsage: cargo run -- compare --policies <a,b>");
            println!("Example: cargo run -- play --policy greedy\n");
        }
    }

    let total_time = program_start.elapsed();
    info!("Total runtime: {:.2}s", total_time.as_secs_f64());

    Ok(())
}

fn build_config(board: &BoardArgs, verbose: bool) -> Result<GameConfig> {
    let config = GameConfig {
        nb_trees: board.trees,
        nb_fruits_per_tree: board.fruits,
        puzzle_size: board.puzzle,
        fruits_if_panier: board.basket,
        die_faces: board.faces,
        verbose,
    };
    config.validate()?;
    Ok(config)
}

fn play_one_game(policy_name: &str, seed: Option<u64>, quiet: bool, board: &BoardArgs) -> Result<()> {
    let config = build_config(board, !quiet)?;

    let mut policy = PolicyRegistry::global()
        .create(policy_name)
        .ok_or_else(|| anyhow::anyhow!("Unknown policy: {}", policy_name))?;

    let seed = seed.unwrap_or_else(rand::random);
    let mut random = RngSource(StdRng::seed_from_u64(seed));

    info!("Le Verger: one game, policy '{}', seed {}", policy_name, seed);

    let result = if config.verbose {
        run_game(&config, policy.as_mut(), &mut random, &mut LogTrace)
    } else {
        run_game(&config, policy.as_mut(), &mut random, &mut NullTrace)
    };

    println!(
        "{} wins after {} turns (policy: {}, seed: {})",
        result.winner, result.turns_played, policy_name, seed
    );

    Ok(())
}

fn compare_policies(
    policies_str: &str,
    games: u32,
    seed: Option<u64>,
    json: bool,
    board: &BoardArgs,
) -> Result<()> {
    let policy_names: Vec<&str> = policies_str.split(',').map(|s| s.trim()).collect();
    let config = build_config(board, false)?;
    let base_seed = seed.unwrap_or_else(rand::random);

    info!("Le Verger: policy comparison");
    info!("Policies: {}", policy_names.join(", "));
    info!("Games per policy: {}", games);
    info!("Base seed: {}", base_seed);

    let mut summaries = Vec::new();

    for policy_name in policy_names {
        let batch = run_batch(&config, policy_name, games, base_seed)?;
        let summary = stats::summarize(&batch);

        info!(
            "{}: game decided in {:.2} turns on average, {:.2}% player wins",
            summary.policy_name, summary.mean_turns, summary.player_win_rate
        );

        summaries.push(summary);
    }

    stats::comparison_table(&summaries);

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    }

    Ok(())
}
