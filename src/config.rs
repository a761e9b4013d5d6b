//! Command line configuration and logging setup.

use std::{fs::File, path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr as _};
use env_logger::{Builder, Env, Target};

use crate::{pathfinding::ANIMATION_FRAME_DELAY_MS, search::Algorithm};

/// Terminal maze game with a depth-first and breadth-first search visualizer.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Maze files to play, in order. When omitted, the maze directory is scanned instead.
    pub mazes: Vec<PathBuf>,

    /// Directory scanned for `.maze` files when no maze files are given.
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Solve every maze with the given algorithm, print the result and exit.
    #[arg(long, value_enum, value_name = "ALGORITHM")]
    pub print: Option<Algorithm>,

    /// Delay between frames of the search animation, in milliseconds.
    #[arg(long, default_value_t = ANIMATION_FRAME_DELAY_MS, value_name = "MS")]
    pub frame_delay_ms: u64,

    /// Write log records to this file. The level is taken from `RUST_LOG` and defaults to info.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Delay between frames of the search animation.
    #[must_use]
    pub const fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

/// Installs the global logger.
///
/// The terminal interface owns the screen, so records are only written when a log file is given,
/// or to standard error in print mode. Without either, no logger is installed and log macros are
/// no-ops.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global logger has already been installed
pub fn init_logging(cli: &Cli) -> Result<()> {
    let target = match (&cli.log_file, cli.print) {
        (Some(path), _) => Target::Pipe(Box::new(File::create(path).wrap_err_with(|| {
            format!("failed to create log file {}", path.display())
        })?)),
        (None, Some(_)) => Target::Stderr,
        (None, None) => return Ok(()),
    };

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(target)
        .try_init()
        .wrap_err("failed to install logger")
}
