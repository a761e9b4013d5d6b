//! This crate contains the source code for the binary of the laberinto maze game.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use laberinto::{config, Cli};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    config::init_logging(&cli)?;

    laberinto::run(&cli)
}
