//! Error types raised by the maze model and the search engine.

use thiserror::Error;

use crate::search::Algorithm;

/// Maze description with the wrong number of start or goal markers.
///
/// This error is raised while parsing a maze description whose text does not contain exactly one
/// start marker and exactly one goal marker. No partial grid is produced, so callers should give
/// up on loading that maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("maze must contain exactly one start (A) and one goal (B), found {starts} and {goals}")]
pub struct MalformedMazeError {
    /// Number of start markers found in the description.
    pub starts: usize,
    /// Number of goal markers found in the description.
    pub goals: usize,
}

/// Removal was attempted on a frontier holding no nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("empty frontier")]
pub struct EmptyFrontierError;

/// Search that exhausted its frontier without reaching the goal.
///
/// This is an expected outcome for mazes whose goal is walled off from the start. It carries the
/// algorithm that ran and how many nodes it removed from the frontier before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no solution found by {algorithm} after exploring {explored} nodes")]
pub struct NoSolutionError {
    /// Algorithm that failed to reach the goal.
    pub algorithm: Algorithm,
    /// Number of nodes removed from the frontier during the run.
    pub explored: usize,
}
