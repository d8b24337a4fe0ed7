//! CLI frontend for the LifeRPG habit tracker.

mod commands;
mod console;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use lr_core::Attribute;
use lr_progression::{EngineConfig, PenaltyPolicy};
use tracing_subscriber::EnvFilter;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "liferpg",
    about = "LifeRPG: level up by keeping your daily habits",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the saved profile
    #[arg(long, global = true, env = "LIFERPG_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Hit points lost when a new day starts (default: no penalty)
    #[arg(long, global = true)]
    penalty: Option<u32>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new adventurer
    Register {
        /// Display name
        name: String,
    },

    /// Show level, hit points, experience, coins, and attributes
    Status,

    /// List challenges
    List,

    /// Add a challenge
    Add {
        /// Challenge title
        title: String,

        /// Attribute trained (e.g. strength, int, dis)
        #[arg(short, long, default_value = "discipline")]
        attribute: Attribute,

        /// Difficulty: easy, medium, hard (unknown values count as easy)
        #[arg(short, long, default_value = "easy")]
        difficulty: String,

        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },

    /// Complete a challenge for today
    Complete {
        /// List number or id prefix
        challenge: String,
    },

    /// Remove a challenge
    Remove {
        /// List number or id prefix
        challenge: String,
    },

    /// Ask the Guild for quest suggestions
    Suggest {
        /// Attribute to train (default: your weakest)
        #[arg(short, long)]
        focus: Option<Attribute>,
    },

    /// Accept suggested quests as challenges
    Accept {
        /// Suggestion numbers or titles
        #[arg(required = true)]
        quests: Vec<String>,
    },

    /// Ask the Guild Master for advice
    Coach,

    /// Sign out and delete the saved profile
    Logout,

    /// Start the interactive console
    Play,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = Context::new(cli.data_dir, engine_config(cli.penalty)).and_then(|ctx| {
        match cli.command {
            Commands::Register { name } => commands::session::register(&ctx, &name),
            Commands::Status => commands::status::status(&ctx),
            Commands::List => commands::status::list(&ctx),
            Commands::Add {
                title,
                attribute,
                difficulty,
                description,
            } => commands::challenge::add(
                &ctx,
                &title,
                attribute,
                &difficulty,
                description.as_deref(),
            ),
            Commands::Complete { challenge } => commands::challenge::complete(&ctx, &challenge),
            Commands::Remove { challenge } => commands::challenge::remove(&ctx, &challenge),
            Commands::Suggest { focus } => commands::guild::suggest(&ctx, focus),
            Commands::Accept { quests } => commands::guild::accept(&ctx, &quests),
            Commands::Coach => commands::guild::coach(&ctx),
            Commands::Logout => commands::session::logout(&ctx),
            Commands::Play => commands::play::run(&ctx),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn engine_config(penalty: Option<u32>) -> EngineConfig {
    match penalty {
        Some(hp) if hp > 0 => EngineConfig::default().with_penalty(PenaltyPolicy::FlatDamage(hp)),
        _ => EngineConfig::default(),
    }
}
