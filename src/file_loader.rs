//! File loading utilities for maze description files.

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr as _};
use log::{info, warn};

use crate::{config::Cli, map::Map};

/// Extension of the maze files picked up when scanning a directory.
pub(crate) const MAZE_EXTENSION: &str = "maze";

/// Loads the mazes selected on the command line.
///
/// Files given explicitly are loaded in order and any failure is returned, since the user asked
/// for those mazes by name. Otherwise the maze directory is scanned, and the built-in mazes are
/// used when it holds no usable maze files.
///
/// # Errors
///
/// This function may return errors if an explicit maze file cannot be read or is malformed, or if
/// the maze directory cannot be listed.
pub(crate) fn load_maps(cli: &Cli) -> Result<Vec<Map>> {
    if !cli.mazes.is_empty() {
        return cli.mazes.iter().map(|path| load_map(path)).collect();
    }

    let maps = fetch_files(&cli.dir)?;
    if maps.is_empty() {
        info!(
            "no .{MAZE_EXTENSION} files found in {}, using the built-in mazes",
            cli.dir.display()
        );
        return Ok(Map::builtin()?);
    }

    Ok(maps)
}

/// Reads and parses a single maze file.
///
/// # Errors
///
/// This function may return errors if the file cannot be read or its contents are malformed.
pub(crate) fn load_map(path: &Path) -> Result<Map> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;

    Map::from_path(path, &contents)
        .wrap_err_with(|| format!("failed to load maze file {}", path.display()))
}

/// Scans a directory for maze files and loads them sorted by file name.
///
/// Files that fail to load are logged and skipped so one broken maze does not hide the others.
///
/// # Errors
///
/// This function may return errors if the directory or one of its entries cannot be read.
pub(crate) fn fetch_files(dir: &Path) -> Result<Vec<Map>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to list maze directory {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_dir()
            && path
                .extension()
                .is_some_and(|extension| extension == MAZE_EXTENSION)
        {
            paths.push(path);
        }
    }
    paths.sort();

    let mut maps = Vec::with_capacity(paths.len());
    for path in paths {
        match load_map(&path) {
            Ok(map) => maps.push(map),
            Err(err) => warn!("skipping maze file {}: {err:#}", path.display()),
        }
    }

    info!("loaded {} maze files from {}", maps.len(), dir.display());

    Ok(maps)
}
