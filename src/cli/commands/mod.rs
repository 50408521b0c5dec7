//! Subcommands of the `oxo` binary

pub mod analyze;
pub mod play;
pub mod selfplay;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    config::{FirstMover, PlayConfig},
    tictactoe::Player,
};

/// Configuration flags shared by the commands that run sessions
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// JSON configuration file; the flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Who opens each round
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,

    /// Mark the computer plays (`x` or `o`)
    #[arg(long)]
    pub computer_mark: Option<Player>,
}

impl ConfigArgs {
    /// Merge the optional config file with the command-line overrides
    pub fn resolve(&self) -> Result<PlayConfig> {
        let mut config = match &self.config {
            Some(path) => PlayConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => PlayConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(first) = self.first {
            config = config.with_first_mover(first);
        }
        if let Some(mark) = self.computer_mark {
            config = config.with_computer_mark(mark);
        }

        Ok(config)
    }
}
