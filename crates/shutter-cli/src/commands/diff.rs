//! Diff command
//!
//! Usage: shutter diff <OLD> <NEW> [--format plain|json] [--timeout-ms <MS>]

use clap::{Args, ValueEnum};
use shutter_core::diff::summary::{render_plain, DiffStats};
use shutter_core::diff::{histogram_with, histogram_within};
use shutter_core::errors::ShutterError;
use std::time::Duration;

use super::InputArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Numbered rows with -/+ markers
    Plain,
    /// JSON array of diff lines
    Json,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Give up if matching takes longer than this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<DiffStats, Box<dyn std::error::Error>> {
    let options = args.input.options()?;
    let (old, new) = args.input.read_pair()?;

    let lines = match args.timeout_ms {
        Some(ms) => histogram_within(&old, &new, &options, Duration::from_millis(ms))?,
        None => histogram_with(&old, &new, &options),
    };
    tracing::debug!(diff_lines = lines.len(), "diff computed");

    match args.format {
        OutputFormat::Plain => print!("{}", render_plain(&lines)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&lines).map_err(|e| {
                ShutterError::EncodeFailed {
                    reason: e.to_string(),
                }
            })?;
            println!("{}", json);
        }
    }

    Ok(DiffStats::from_lines(&lines))
}
