//! In-game session state.
//!
//! A [`Game`] tracks the player on one maze together with the latest search result shown on top
//! of it.

use log::{info, warn};

use crate::{
    grid::{Cell, Direction, Grid},
    search::{self, Algorithm, SearchResult},
};

/// Result of a player movement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveOutcome {
    /// The target cell is a wall or outside the maze; the player stays put.
    Blocked,
    /// The player moved to an open cell.
    Moved,
    /// The player moved onto the goal.
    ReachedGoal,
}

/// State of the maze currently being played.
#[derive(Debug)]
pub(crate) struct Game {
    /// Maze being played.
    pub(crate) grid: Grid,
    /// Current position of the player, starting at the maze start.
    pub(crate) player: Cell,
    /// Latest successful search, drawn as an overlay.
    ///
    /// Each run replaces the previous one, so the explored cells and the path always belong to
    /// the same search.
    pub(crate) result: Option<SearchResult>,
    /// Message describing the latest search outcome.
    pub(crate) status: Option<String>,
}

impl Game {
    /// Starts a session on `grid` with the player on the start cell.
    pub(crate) fn new(grid: Grid) -> Self {
        let player = grid.start();
        Self {
            grid,
            player,
            result: None,
            status: None,
        }
    }

    /// Moves the player one cell if the target is open.
    pub(crate) fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let Some(next) = self.grid.step(self.player, direction) else {
            return MoveOutcome::Blocked;
        };

        self.player = next;
        if next == self.grid.goal() {
            info!("player reached the goal at {next}");
            MoveOutcome::ReachedGoal
        } else {
            MoveOutcome::Moved
        }
    }

    /// Runs a search on the maze and keeps its result for display.
    ///
    /// A maze without a solution is an expected outcome: the overlay is cleared, the status
    /// reports the failure and [`None`] is returned.
    pub(crate) fn solve(&mut self, algorithm: Algorithm) -> Option<&SearchResult> {
        match search::solve(&self.grid, algorithm) {
            Ok(result) => {
                let summary = result.to_string();
                info!("{summary}");
                self.status = Some(summary);
                self.result = Some(result);
                self.result.as_ref()
            }
            Err(err) => {
                warn!("{err}");
                self.status = Some(format!("{algorithm}: no solution"));
                self.result = None;
                None
            }
        }
    }

    /// Removes the search overlay and its status message.
    pub(crate) fn clear_overlay(&mut self) {
        self.result = None;
        self.status = None;
    }
}
