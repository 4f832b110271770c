use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use contrarian_bot::ContrarianBot;
use cycle_bot::CycleBot;
use log::info;
use random_bot::RandomBot;
use rps_core::{simulate_rounds, Game, MoveSource, ScoreReport};
use serde::Serialize;

mod input;
mod session;

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Rock Paper Scissors against a computer opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (the default)
    Play {
        /// Computer opponent
        #[arg(long, value_enum, default_value_t = BotKind::Random)]
        bot: BotKind,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run two bots against each other and print the final stats
    Simulate {
        /// Number of rounds to play
        #[arg(long, default_value_t = 100)]
        rounds: u32,

        /// Bot standing in for the player
        #[arg(long, value_enum, default_value_t = BotKind::Random)]
        player: BotKind,

        /// Bot playing the computer side
        #[arg(long, value_enum, default_value_t = BotKind::Random)]
        computer: BotKind,

        /// Seed for random bots
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotKind {
    Random,
    Cycle,
    Contrarian,
}

fn build_bot(kind: BotKind, seed: u64) -> Box<dyn MoveSource> {
    match kind {
        BotKind::Random => Box::new(RandomBot::seeded(seed)),
        BotKind::Cycle => Box::new(CycleBot),
        BotKind::Contrarian => Box::new(ContrarianBot),
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(rand::random);
    info!("using seed {}", seed);
    seed
}

#[derive(Serialize)]
struct SimulationSummary {
    player: &'static str,
    computer: &'static str,
    seed: u64,
    #[serde(flatten)]
    report: ScoreReport,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        bot: BotKind::Random,
        seed: None,
    }) {
        Commands::Play { bot, seed } => {
            let mut game = Game::new(build_bot(bot, resolve_seed(seed)));
            info!("playing against {}", game.opponent_name());

            let stdin = io::stdin();
            session::run_session(stdin.lock(), io::stdout(), &mut game)?;
        }
        Commands::Simulate {
            rounds,
            player,
            computer,
            seed,
            json,
        } => {
            let seed = resolve_seed(seed);
            let mut player = build_bot(player, seed);
            let mut computer = build_bot(computer, seed.wrapping_add(1));
            let scoreboard = simulate_rounds(player.as_mut(), computer.as_mut(), rounds);

            if json {
                let summary = SimulationSummary {
                    player: player.name(),
                    computer: computer.name(),
                    seed,
                    report: scoreboard.report(),
                };
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} vs {}", player.name(), computer.name());
                println!("{}", scoreboard.detailed_stats());
            }
        }
    }

    Ok(())
}
