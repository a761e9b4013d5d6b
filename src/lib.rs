//! Terminal maze game with a depth-first and breadth-first search visualizer.
//!
//! The core of the crate parses text mazes into a [`grid::Grid`] and solves them with
//! [`search::solve`], which runs the same search loop over a stack or a queue of frontier nodes
//! depending on the chosen [`search::Algorithm`]. The rest of the crate is the terminal game built
//! on top: the player walks the maze level by level and can replay either search on screen.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

use std::io::{self, Write as _};

use color_eyre::eyre::Result;
use log::info;

pub mod config;
pub mod error;
pub mod frontier;
pub mod grid;
pub mod search;

mod app;
mod events;
mod file_loader;
mod game;
mod map;
mod pathfinding;
mod report;
mod types;
mod ui;

pub use config::Cli;

use crate::app::App;

/// Runs the program selected by the command line.
///
/// In print mode every maze is solved and reported on standard output. Otherwise the terminal is
/// taken over by the game until the user quits.
///
/// # Errors
///
/// This function may return errors if:
/// - The mazes cannot be loaded
/// - Writing the report fails
/// - The terminal cannot be drawn to or read from
pub fn run(cli: &Cli) -> Result<()> {
    let maps = file_loader::load_maps(cli)?;
    info!("{} mazes loaded", maps.len());

    if let Some(algorithm) = cli.print {
        let mut out = io::stdout().lock();
        for map in &maps {
            report::write_report(&mut out, map, algorithm)?;
        }
        out.flush()?;
        return Ok(());
    }

    let mut app = App::new(maps, cli.frame_delay())?;
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
