//! Plain text rendering of solved mazes, used by the headless print mode.

use std::io::{self, Write};

use log::debug;

use crate::{
    grid::{Cell, Grid, GOAL_MARKER, OPEN_MARKER, START_MARKER},
    map::Map,
    search::{self, Algorithm, SearchResult},
};

/// Symbol drawn for wall cells.
const WALL_SYMBOL: char = '#';
/// Symbol drawn for cells on the solution path.
const PATH_SYMBOL: char = '*';
/// Symbol drawn for cells the search expanded.
const EXPLORED_SYMBOL: char = '.';

/// Solves `map` with `algorithm` and writes the maze with its search overlay to `out`.
///
/// The report is the maze name, the rendered grid and a summary line, followed by a blank line.
/// An unsolvable maze is reported as such and drawn without overlay.
///
/// # Errors
///
/// This function returns any error raised while writing to `out`.
pub(crate) fn write_report<W: Write>(
    out: &mut W,
    map: &Map,
    algorithm: Algorithm,
) -> io::Result<()> {
    debug!("solving {} with {algorithm}", map.key);

    writeln!(out, "{}", map.key)?;
    match search::solve(&map.grid, algorithm) {
        Ok(result) => {
            writeln!(out, "{}", render_text(&map.grid, Some(&result)))?;
            writeln!(out, "{result}")?;
        }
        Err(err) => {
            writeln!(out, "{}", render_text(&map.grid, None))?;
            writeln!(out, "{err}")?;
        }
    }
    writeln!(out)
}

/// Draws a grid as text, one line per row, with an optional search overlay.
pub(crate) fn render_text(grid: &Grid, result: Option<&SearchResult>) -> String {
    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for cell in grid.cells() {
        if cell.col == 0 && cell.row > 0 {
            text.push('\n');
        }
        text.push(symbol(grid, result, cell));
    }
    text
}

/// Picks the symbol of one cell. Markers win over the path, and the path over explored cells.
fn symbol(grid: &Grid, result: Option<&SearchResult>, cell: Cell) -> char {
    if cell == grid.start() {
        START_MARKER
    } else if cell == grid.goal() {
        GOAL_MARKER
    } else if grid.is_wall(cell) {
        WALL_SYMBOL
    } else if result.is_some_and(|result| result.solution().cells().contains(&cell)) {
        PATH_SYMBOL
    } else if result.is_some_and(|result| result.explored().contains(&cell)) {
        EXPLORED_SYMBOL
    } else {
        OPEN_MARKER
    }
}
