//! Observer implementations for batch runs

use indicatif::{ProgressBar, ProgressStyle};

use crate::{Result, pipeline::Tally, ports::Observer, tictactoe::Round};

/// Progress bar observer - shows batch progress with the running tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self { progress_bar: None }
    }

    fn tally_message(tally: &Tally) -> String {
        format!(
            "H:{} AI:{} D:{}",
            tally.player_wins, tally.computer_wins, tally.draws
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_session_start(&mut self, total_rounds: usize) -> Result<()> {
        let pb = ProgressBar::new(total_rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rounds ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_round_end(&mut self, round_num: usize, _round: &Round, tally: &Tally) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(round_num as u64);
            pb.set_message(Self::tally_message(tally));
        }
        Ok(())
    }

    fn on_session_end(&mut self, tally: &Tally) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(Self::tally_message(tally));
        }
        Ok(())
    }
}
