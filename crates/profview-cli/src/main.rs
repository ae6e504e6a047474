//! profview CLI
//!
//! Command-line driver for the profview action layer

use clap::{Parser, Subcommand};
use profview_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "profview")]
#[command(about = "profview - Profile viewer action layer tools", long_about = None)]
struct Cli {
    /// Logging profile (development or production); logs go to stderr
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replay recorded UI events through the action layer
    Replay(commands::replay::ReplayArgs),
    /// Apply a single query change and print the result
    Query(commands::query::QueryArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile);
    }

    let result = match cli.command {
        Commands::Replay(args) => commands::replay::execute(args),
        Commands::Query(args) => commands::query::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
