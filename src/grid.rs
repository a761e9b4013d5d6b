//! Maze grid model.
//!
//! This module contains the [`Grid`] type built from a textual maze description, along with the
//! [`Cell`] coordinates and [`Direction`] tags used to move between its cells.

use std::fmt;

use crate::error::MalformedMazeError;

/// Character marking the start cell in a maze description.
pub const START_MARKER: char = 'A';
/// Character marking the goal cell in a maze description.
pub const GOAL_MARKER: char = 'B';
/// Character marking an open cell in a maze description.
pub const OPEN_MARKER: char = ' ';

/// Position of a cell in the grid.
///
/// Coordinates are zero-indexed with the row growing downwards. Equality is structural, so a cell
/// doubles as the state identifier during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Cell {
    /// Creates a cell from its row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the adjacent cell in the given direction.
    ///
    /// Only the lower bound is checked here, so moving up from row zero or left from column zero
    /// yields [`None`]. The upper bound depends on the grid and is checked by [`Grid::step`].
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Direction::Down => self.row.checked_add(1).map(|row| Self::new(row, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Direction::Right => self.col.checked_add(1).map(|col| Self::new(self.row, col)),
        }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Movement direction between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl Direction {
    /// All directions in the order neighbors are generated.
    ///
    /// Search tie-breaking depends on this order, so depth-first paths in particular change shape
    /// if it is altered.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the direction leading back to where a move in this direction started.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the lowercase name of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rectangular maze of walls and open cells with a single start and goal.
///
/// The grid is immutable once built. Search results are returned by [`crate::search::solve`]
/// rather than stored here, so a grid can be shared freely between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    height: usize,
    /// Number of columns, taken from the longest row of the description.
    width: usize,
    /// Wall table indexed as `walls[row][col]`, `true` meaning impassable.
    walls: Vec<Vec<bool>>,
    /// Cell holding the start marker.
    start: Cell,
    /// Cell holding the goal marker.
    goal: Cell,
}

impl Grid {
    /// Parses a maze description given as a single block of text.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedMazeError`] unless the text has exactly one start and one goal marker.
    pub fn parse(text: &str) -> Result<Self, MalformedMazeError> {
        Self::from_lines(&text.lines().collect::<Vec<_>>())
    }

    /// Builds a grid from maze rows.
    ///
    /// The height is the number of rows and the width the length of the longest row. Start, goal
    /// and space characters are open; every other character is a wall, and so is every position
    /// past the end of a row shorter than the widest one.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedMazeError`] unless the rows hold exactly one start marker and exactly
    /// one goal marker between them.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, MalformedMazeError> {
        let count = |marker: char| {
            lines
                .iter()
                .map(|line| line.as_ref().matches(marker).count())
                .sum::<usize>()
        };
        let malformed = MalformedMazeError {
            starts: count(START_MARKER),
            goals: count(GOAL_MARKER),
        };
        if malformed.starts != 1 || malformed.goals != 1 {
            return Err(malformed);
        }

        let height = lines.len();
        let width = lines
            .iter()
            .map(|line| line.as_ref().chars().count())
            .max()
            .unwrap_or_default();

        let mut start = None;
        let mut goal = None;
        let mut walls = Vec::with_capacity(height);
        for (row, line) in lines.iter().enumerate() {
            let mut chars = line.as_ref().chars();
            let mut wall_row = Vec::with_capacity(width);
            for col in 0..width {
                let wall = match chars.next() {
                    Some(START_MARKER) => {
                        start = Some(Cell::new(row, col));
                        false
                    }
                    Some(GOAL_MARKER) => {
                        goal = Some(Cell::new(row, col));
                        false
                    }
                    Some(OPEN_MARKER) => false,
                    _ => true,
                };
                wall_row.push(wall);
            }
            walls.push(wall_row);
        }

        match (start, goal) {
            (Some(start), Some(goal)) => Ok(Self {
                height,
                width,
                walls,
                start,
                goal,
            }),
            _ => Err(malformed),
        }
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Wall table, one row of flags per grid row.
    #[must_use]
    pub fn walls(&self) -> &[Vec<bool>] {
        &self.walls
    }

    /// Start cell.
    #[must_use]
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// Goal cell.
    #[must_use]
    pub const fn goal(&self) -> Cell {
        self.goal
    }

    /// Returns whether a cell blocks movement. Cells outside the grid count as walls.
    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .unwrap_or(true)
    }

    /// Returns whether a cell lies inside the grid and is open.
    #[must_use]
    pub fn is_passable(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    /// Returns the open cell reached by moving one step from `cell`, if there is one.
    #[must_use]
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.neighbor(direction)
            .filter(|&next| self.is_passable(next))
    }

    /// Returns the open cells adjacent to `cell` together with the direction leading to each.
    ///
    /// Directions are tried in the fixed [`Direction::ALL`] order: up, down, left, right.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> Vec<(Direction, Cell)> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.step(cell, direction).map(|next| (direction, next)))
            .collect()
    }

    /// Iterates over every coordinate of the grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Cell::new(row, col)))
    }
}
