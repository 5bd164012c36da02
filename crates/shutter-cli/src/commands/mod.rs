//! Subcommands and the input handling they share

pub mod diff;
pub mod stats;

use clap::Args;
use shutter_core::errors::{ExError, ShutterError};
use shutter_core::policy::{DiffOptions, JunkMode};
use std::path::{Path, PathBuf};

/// Inputs common to every subcommand
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Previously accepted snapshot
    pub old: PathBuf,

    /// Freshly captured snapshot
    pub new: PathBuf,

    /// TOML file with diff options (`auto_junk`, `junk`)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Treat blank and whitespace-only lines as junk
    #[arg(long)]
    pub blank_junk: bool,

    /// Keep frequent lines in the anchor index on long inputs
    #[arg(long)]
    pub no_auto_junk: bool,
}

impl InputArgs {
    /// Options from the config file, with command-line flags taking precedence
    pub fn options(&self) -> Result<DiffOptions, ExError> {
        let mut options = match &self.config {
            Some(path) => DiffOptions::from_toml_str(&read_text(path)?)
                .map_err(|e| e.with_path(path))?,
            None => DiffOptions::default(),
        };
        if self.blank_junk {
            options.junk = JunkMode::BlankLines;
        }
        if self.no_auto_junk {
            options.auto_junk = false;
        }
        Ok(options)
    }

    /// Contents of the old and new files
    pub fn read_pair(&self) -> Result<(String, String), ExError> {
        Ok((read_text(&self.old)?, read_text(&self.new)?))
    }
}

fn read_text(path: &Path) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::from(ShutterError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
        .with_op("read_text")
    })
}
