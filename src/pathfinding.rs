//! Search visualization and animation module.
//!
//! This module contains the animation system that replays a search run on screen, and the
//! coordinate transformation used to place maze cells on the rendering canvas.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;

use crate::{
    grid::{Cell, Grid},
    search::SearchResult,
};

/// Animation frame delay in milliseconds.
///
/// This constant is the default time between animation frames in the search visualization. A lower
/// value results in faster animation, while a higher value slows it down to make it easier to
/// follow the order in which the algorithm explores the maze.
pub(crate) const ANIMATION_FRAME_DELAY_MS: u64 = 40;

/// Animation step types for search visualization.
///
/// A replay first reveals every expanded cell in expansion order, then the cells of the path
/// found, from the start towards the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AnimationStep {
    /// Reveal a cell the search expanded.
    Explore(Cell),
    /// Reveal a cell on the solution path.
    Path(Cell),
}

/// Animation state manager for search visualization.
///
/// This structure manages the animation state including timing, current step tracking, and the
/// cells revealed so far during the replay of a search.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Animation steps recorded from the search result.
    pub(crate) steps: Vec<AnimationStep>,
    /// Current step in the animation sequence.
    ///
    /// This field tracks the current position in the [`steps`](AnimationManager::steps) vector to
    /// determine which steps have been rendered and which are still pending.
    pub(crate) current_index: usize,
    /// Timestamp of the last animation frame update.
    pub(crate) last_update_time: Instant,
    /// Minimum time between two animation frames.
    pub(crate) frame_delay: Duration,
    /// Expanded cells revealed so far.
    pub(crate) explored: Vec<Cell>,
    /// Path cells revealed so far.
    pub(crate) path: Vec<Cell>,
}

impl AnimationManager {
    /// Creates an empty animation manager advancing one step every `frame_delay`.
    pub(crate) fn new(frame_delay: Duration) -> Self {
        Self {
            steps: Vec::new(),
            current_index: 0,
            last_update_time: Instant::now(),
            frame_delay,
            explored: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Resets the animation state to the beginning.
    pub(crate) fn reset(&mut self) {
        self.current_index = 0;
        self.explored.clear();
        self.path.clear();
        self.last_update_time = Instant::now();
    }

    /// Clears all animation data and resets state.
    pub(crate) fn clear(&mut self) {
        self.steps.clear();
        self.reset();
    }

    /// Replaces the current animation with the replay of `result`.
    pub(crate) fn start(&mut self, result: &SearchResult) {
        self.steps = record_animation_steps(result);
        self.reset();
    }

    /// Returns whether every recorded step has been revealed.
    pub(crate) fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }

    /// Updates the animation state based on timing and current progress.
    ///
    /// This method reveals the next step of the replay when enough time has passed since the last
    /// one. Once every step has been revealed the full overlay stays on screen.
    pub(crate) fn update(&mut self) {
        if self.is_finished() || self.last_update_time.elapsed() < self.frame_delay {
            return;
        }
        self.last_update_time = Instant::now();

        if let Some(&step) = self.steps.get(self.current_index) {
            match step {
                AnimationStep::Explore(cell) => self.explored.push(cell),
                AnimationStep::Path(cell) => self.path.push(cell),
            }
        }

        self.current_index += 1;
    }
}

/// Records the animation steps replaying a search result.
///
/// Expanded cells come first, in the order the search expanded them, followed by the path cells
/// from the start towards the goal.
pub(crate) fn record_animation_steps(result: &SearchResult) -> Vec<AnimationStep> {
    result
        .explored_order()
        .iter()
        .copied()
        .map(AnimationStep::Explore)
        .chain(
            result
                .solution()
                .cells()
                .iter()
                .copied()
                .map(AnimationStep::Path),
        )
        .collect()
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze cells (row, col) to canvas coordinates (x, y) centered on the maze:
/// y = (n - 1) / 2 - row, so rows further down the maze get lower canvas y values, and
/// x = col - (n - 1) / 2, so columns further right get higher canvas x values.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn transform_maze_to_screen_coords(
    cells: &[Cell],
    grid: &Grid,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(grid.height())?);
    let cols_n = f64::from(u16::try_from(grid.width())?);

    cells
        .iter()
        .map(|&Cell { row, col }| {
            // Row transformation: coordinate[i] = (n - 1) / 2 - i
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);

            // Column transformation: coordinate[i] = i - (n - 1) / 2
            let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
