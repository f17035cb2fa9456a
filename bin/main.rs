use anyhow::Error as Anyhow;
use clap::Parser;

mod applet;
mod cli;
mod game;
mod io;

fn main() -> Result<(), Anyhow> {
    cli::Cli::parse().execute()
}
