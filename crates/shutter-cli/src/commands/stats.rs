//! Stats command
//!
//! Usage: shutter stats <OLD> <NEW>

use clap::Args;
use shutter_core::diff::summary::{render_summary, DiffStats};
use shutter_core::diff::histogram_with;

use super::InputArgs;

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Execute stats command
pub fn execute(args: StatsArgs) -> Result<DiffStats, Box<dyn std::error::Error>> {
    let options = args.input.options()?;
    let (old, new) = args.input.read_pair()?;

    let stats = DiffStats::from_lines(&histogram_with(&old, &new, &options));
    println!("{}", render_summary(&stats));
    Ok(stats)
}
