//! Shutter CLI
//!
//! Command-line front end for the snapshot line diff.

use clap::{Parser, Subcommand};
use shutter_core::logging_facility::{init, Profile};

mod commands;

/// Exit status when the snapshots differ.
const EXIT_CHANGED: i32 = 1;
/// Exit status on any error.
const EXIT_ERROR: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "shutter")]
#[command(about = "Shutter - line diffs between accepted and captured snapshots", long_about = None)]
struct Cli {
    /// Human-readable debug logs on stderr
    #[arg(short, long, global = true, conflicts_with = "log_json")]
    verbose: bool,

    /// JSON structured logs on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the line diff between two files
    Diff(commands::diff::DiffArgs),
    /// Print shared/deleted/added counts for two files
    Stats(commands::stats::StatsArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    } else if cli.log_json {
        init(Profile::Production);
    }

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Stats(args) => commands::stats::execute(args),
    };

    match result {
        Ok(stats) if stats.is_unchanged() => {}
        Ok(_) => std::process::exit(EXIT_CHANGED),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_ERROR);
        }
    }
}
