//! Lifetally CLI - a terminal life and score tracker shell for tabletop games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use env_logger::Env;
use std::process::ExitCode;

/// Lifetally - a terminal life and score tracker shell
#[derive(Parser, Debug)]
#[command(name = "lifetally")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Route to open at startup (e.g. `gameSetup` or `game/4/40`)
    #[arg(short, long)]
    route: Option<String>,

    /// Path to the config file (default: `lifetally.toml`)
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a route string and print the target screen
    Check {
        /// Route string (e.g. `game/4/40`)
        #[arg(required = true)]
        route: String,
    },
}

fn main() -> ExitCode {
    setup_logger();

    let args = Args::parse();

    let result = match args.command {
        Some(Commands::Check { route }) => {
            cli::check::execute(&route);
            Ok(())
        }
        None => cli::play::execute(args.route, args.config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
