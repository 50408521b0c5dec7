//! Running win/loss/draw counts across rounds

use std::{fmt, fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    tictactoe::{GameOutcome, Player},
};

/// Round results seen from the human's side of the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
}

impl Tally {
    /// Count one finished round
    pub fn record(&mut self, outcome: GameOutcome, computer: Player) {
        match outcome {
            GameOutcome::Win(winner) if winner == computer => self.computer_wins += 1,
            GameOutcome::Win(_) => self.player_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Total rounds counted
    pub fn rounds(&self) -> usize {
        self.player_wins + self.computer_wins + self.draws
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player Wins: {}, AI Wins: {}, Ties: {}",
            self.player_wins, self.computer_wins, self.draws
        )
    }
}

/// What a finished session reports and exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds: usize,
    pub computer_mark: Player,
    pub seed: Option<u64>,
    pub tally: Tally,
}

impl SessionSummary {
    /// Save summary to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .map_err(|e| crate::Error::io(format!("create summary {}", path.display()), e))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load summary from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| crate::Error::io(format!("open summary {}", path.display()), e))?;
        Ok(serde_json::from_reader(file)?)
    }
}
