use crate::{game::Game, io::Io};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Color;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io::{stdin, stdout};
use tracing::{info, instrument};

/// A game of chess between two players taking turns at the terminal.
#[derive(Debug, Default, Parser)]
pub struct Play {
    /// The side that moves first, drawn at random if omitted.
    #[clap(short, long)]
    first: Option<Color>,

    /// Seeds the random draw of the side that moves first.
    #[clap(short, long)]
    seed: Option<u64>,
}

impl Play {
    fn first(&self) -> Color {
        match (self.first, self.seed) {
            (Some(c), _) => c,
            (None, Some(seed)) => StdRng::seed_from_u64(seed).gen(),
            (None, None) => StdRng::from_entropy().gen(),
        }
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let first = self.first();
        info!(%first);

        let mut io = Io::new(stdout(), stdin());
        let aborted = Game::new(first).play(&mut io)?;
        io.send(aborted)?;
        io.flush()?;

        Ok(())
    }
}
