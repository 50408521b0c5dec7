//! Drives rounds between a human seat and the computer seat

use rand::{SeedableRng, random, rngs::StdRng};
use tracing::{debug, info};

use super::tally::{SessionSummary, Tally};
use crate::{
    Result,
    config::PlayConfig,
    ports::{Agent, Observer},
    tictactoe::{GameOutcome, Round},
};

/// A sequence of rounds sharing one configuration and one tally
pub struct Session {
    config: PlayConfig,
    rng: StdRng,
    tally: Tally,
    rounds_played: usize,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Create a new session
    pub fn new(config: PlayConfig) -> Self {
        // Offset from the agents' seed so the opener draw does not mirror
        // the computer's shuffles.
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::seed_from_u64(random()),
        };
        Self {
            config,
            rng,
            tally: Tally::default(),
            rounds_played: 0,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the session
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &PlayConfig {
        &self.config
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// True once `max_rounds` rounds have been played
    pub fn is_finished(&self) -> bool {
        self.config
            .max_rounds
            .is_some_and(|limit| self.rounds_played >= limit)
    }

    /// Play one round to its end.
    ///
    /// `computer` moves for the configured computer mark and `human` for
    /// the other one. The opener is drawn per round from the configured
    /// [`crate::config::FirstMover`].
    pub fn play_round(
        &mut self,
        human: &mut dyn Agent,
        computer: &mut dyn Agent,
    ) -> Result<GameOutcome> {
        let computer_mark = self.config.computer_mark;
        let first = self.config.first_mover.resolve(computer_mark, &mut self.rng);
        let round_num = self.rounds_played + 1;

        for observer in &mut self.observers {
            observer.on_round_start(round_num, first)?;
        }

        let mut round = Round::new(first);
        let outcome = loop {
            for observer in &mut self.observers {
                observer.on_turn(&round)?;
            }

            let mover = round.to_move();
            let agent: &mut dyn Agent = if mover == computer_mark {
                &mut *computer
            } else {
                &mut *human
            };
            let coord = agent.select_move(round.board())?;
            debug!(agent = agent.name(), mark = %mover, %coord, "move played");

            if let Some(outcome) = round.play(coord)? {
                break outcome;
            }
        };

        self.tally.record(outcome, computer_mark);
        self.rounds_played = round_num;
        info!(round = round_num, ?outcome, tally = %self.tally, "round finished");

        for observer in &mut self.observers {
            observer.on_round_end(round_num, &round, &self.tally)?;
        }

        Ok(outcome)
    }

    /// Play a fixed number of rounds and close the session
    pub fn run(
        &mut self,
        rounds: usize,
        human: &mut dyn Agent,
        computer: &mut dyn Agent,
    ) -> Result<SessionSummary> {
        for observer in &mut self.observers {
            observer.on_session_start(rounds)?;
        }

        for _ in 0..rounds {
            self.play_round(human, computer)?;
        }

        self.finish()
    }

    /// Notify observers that the session is over and return its summary
    pub fn finish(&mut self) -> Result<SessionSummary> {
        for observer in &mut self.observers {
            observer.on_session_end(&self.tally)?;
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            rounds: self.rounds_played,
            computer_mark: self.config.computer_mark,
            seed: self.config.seed,
            tally: self.tally,
        }
    }
}
