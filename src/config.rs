//! Session configuration
//!
//! A [`PlayConfig`] can be built in code, loaded from a JSON file, and then
//! overridden by command-line flags.

use std::{fs::File, path::Path};

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Result, tictactoe::Player};

/// Which side opens each round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FirstMover {
    Human,
    Computer,
    /// Pick the opening side uniformly at random every round
    #[default]
    Random,
}

impl FirstMover {
    /// Mark that opens the round, given the computer's mark
    pub fn resolve<R: Rng + ?Sized>(self, computer: Player, rng: &mut R) -> Player {
        match self {
            FirstMover::Human => computer.opponent(),
            FirstMover::Computer => computer,
            FirstMover::Random => {
                if rng.random_bool(0.5) {
                    computer
                } else {
                    computer.opponent()
                }
            }
        }
    }
}

/// Configuration for a run of rounds.
///
/// # Examples
///
/// ```
/// use oxo::config::{FirstMover, PlayConfig};
/// use oxo::tictactoe::Player;
///
/// let config = PlayConfig::new()
///     .with_seed(42)
///     .with_first_mover(FirstMover::Human)
///     .with_computer_mark(Player::X);
/// assert_eq!(config.human_mark(), Player::O);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Who opens each round
    pub first_mover: FirstMover,
    /// The mark the computer plays
    pub computer_mark: Player,
    /// Stop after this many rounds
    pub max_rounds: Option<usize>,
}

impl PlayConfig {
    /// Defaults: computer plays O, random opener, no seed, no round limit.
    pub fn new() -> Self {
        Self {
            seed: None,
            first_mover: FirstMover::default(),
            computer_mark: Player::O,
            max_rounds: None,
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_first_mover(mut self, first_mover: FirstMover) -> Self {
        self.first_mover = first_mover;
        self
    }

    pub fn with_computer_mark(mut self, mark: Player) -> Self {
        self.computer_mark = mark;
        self
    }

    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// The human's mark
    pub fn human_mark(&self) -> Player {
        self.computer_mark.opponent()
    }

    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| crate::Error::io(format!("open config {}", path.display()), e))?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| crate::Error::io(format!("create config {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new()
    }
}
