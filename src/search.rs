//! Depth-first and breadth-first maze solving.
//!
//! Both algorithms share the same loop in [`solve`]; they only differ in the [`Frontier`] policy
//! used to pick the next node to expand.

use std::{collections::HashSet, fmt};

use clap::ValueEnum;
use log::debug;

use crate::{
    error::{EmptyFrontierError, NoSolutionError},
    frontier::{Frontier, Node, QueueFrontier, StackFrontier},
    grid::{Cell, Direction, Grid},
};

/// Search algorithm used to solve a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Algorithm {
    /// Depth-first search. Finds a path quickly but not necessarily the shortest one.
    Dfs,
    /// Breadth-first search. Always finds a shortest path.
    Bfs,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dfs => "DFS",
            Self::Bfs => "BFS",
        })
    }
}

/// Path from the start to the goal.
///
/// Both sequences run from the cell right after the start up to and including the goal, so
/// `cells[i]` is the cell reached by taking `actions[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    /// Moves to take, in order.
    actions: Vec<Direction>,
    /// Cells visited by those moves, in order.
    cells: Vec<Cell>,
}

impl Solution {
    /// Walks parent links from `goal` back to the root of the search tree.
    fn reconstruct(tree: &[Node], goal: Node) -> Self {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut node = goal;

        while let (Some(action), Some(parent)) = (node.action, node.parent) {
            actions.push(action);
            cells.push(node.state);
            match tree.get(parent) {
                Some(&previous) => node = previous,
                None => break,
            }
        }

        actions.reverse();
        cells.reverse();

        Self { actions, cells }
    }

    /// Moves leading from the start to the goal.
    #[must_use]
    pub fn actions(&self) -> &[Direction] {
        &self.actions
    }

    /// Cells visited on the way from the start to the goal, ending with the goal.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of moves in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns whether the path has no moves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Outcome of a successful search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Algorithm that produced this result.
    algorithm: Algorithm,
    /// Path found from the start to the goal.
    solution: Solution,
    /// Cells whose neighbors were expanded.
    explored: HashSet<Cell>,
    /// The same cells as [`explored`](SearchResult::explored), in expansion order.
    explored_order: Vec<Cell>,
    /// Nodes removed from the frontier, the goal node included.
    num_explored: usize,
}

impl SearchResult {
    /// Algorithm that produced this result.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Path found from the start to the goal.
    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Cells whose neighbors were expanded during the run.
    #[must_use]
    pub const fn explored(&self) -> &HashSet<Cell> {
        &self.explored
    }

    /// Expanded cells in the order the search reached them.
    #[must_use]
    pub fn explored_order(&self) -> &[Cell] {
        &self.explored_order
    }

    /// Number of nodes removed from the frontier, counting the goal node.
    #[must_use]
    pub const fn num_explored(&self) -> usize {
        self.num_explored
    }
}

/// One-line summary shared by the game status line and the text report.
impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} moves, {} nodes explored",
            self.algorithm,
            self.solution.len(),
            self.num_explored
        )
    }
}

/// Finds a path from the grid's start to its goal.
///
/// Depth-first search expands the most recently discovered cell first, breadth-first search the
/// oldest one. Neighbors are discovered in the fixed up, down, left, right order, which makes the
/// result fully deterministic for a given grid and algorithm.
///
/// # Errors
///
/// Returns [`NoSolutionError`] when the goal cannot be reached from the start.
pub fn solve(grid: &Grid, algorithm: Algorithm) -> Result<SearchResult, NoSolutionError> {
    match algorithm {
        Algorithm::Dfs => run(grid, algorithm, StackFrontier::default()),
        Algorithm::Bfs => run(grid, algorithm, QueueFrontier::default()),
    }
}

/// Search loop shared by every frontier policy.
fn run<F: Frontier>(
    grid: &Grid,
    algorithm: Algorithm,
    mut frontier: F,
) -> Result<SearchResult, NoSolutionError> {
    // Expanded nodes; children refer to their parent by index into this list.
    let mut tree: Vec<Node> = Vec::new();
    let mut explored = HashSet::new();
    let mut explored_order = Vec::new();
    let mut num_explored = 0;

    frontier.add(Node::root(grid.start()));

    loop {
        let node = match frontier.remove() {
            Ok(node) => node,
            Err(EmptyFrontierError) => {
                debug!("{algorithm} exhausted the frontier after {num_explored} nodes");
                return Err(NoSolutionError {
                    algorithm,
                    explored: num_explored,
                });
            }
        };
        num_explored += 1;

        if node.state == grid.goal() {
            let solution = Solution::reconstruct(&tree, node);
            debug!(
                "{algorithm} reached the goal in {} moves after {num_explored} nodes",
                solution.len()
            );
            return Ok(SearchResult {
                algorithm,
                solution,
                explored,
                explored_order,
                num_explored,
            });
        }

        if explored.insert(node.state) {
            explored_order.push(node.state);
        }
        let parent = tree.len();
        tree.push(node);

        for (action, state) in grid.neighbors(node.state) {
            if !frontier.contains_state(state) && !explored.contains(&state) {
                frontier.add(Node::child(state, parent, action));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    /// Open 3x3 room with the goal straight below the start.
    const ROOM_GOAL_BELOW: &str = "A  \n   \nB  ";
    /// Open 3x3 room with the goal in the opposite corner.
    const ROOM_GOAL_CORNER: &str = "A  \n   \n  B";
    /// Winding maze where depth-first search takes the long way round.
    const WINDING: &str = "A     #\n #### #\n #    #\n # ## #\n   #  B\n## # ##\n#      ";

    /// Parses a maze that is known to be well formed.
    fn grid(text: &str) -> Grid {
        Grid::parse(text).expect("test maze should parse")
    }

    /// Builds a list of cells from `(row, col)` pairs.
    fn cells(pairs: &[(usize, usize)]) -> Vec<Cell> {
        pairs.iter().copied().map(Cell::from).collect()
    }

    /// Length of the shortest path from start to goal, computed independently by flooding the
    /// grid one distance layer at a time.
    fn shortest_path_len(grid: &Grid) -> Option<usize> {
        let mut seen = HashSet::from([grid.start()]);
        let mut layer = vec![grid.start()];
        let mut distance = 0;

        while !layer.is_empty() {
            if layer.contains(&grid.goal()) {
                return Some(distance);
            }
            let mut next = Vec::new();
            for cell in layer {
                for (_, neighbor) in grid.neighbors(cell) {
                    if seen.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            layer = next;
            distance += 1;
        }

        None
    }

    #[test]
    fn test_bfs_golden_goal_below() {
        let result = solve(&grid(ROOM_GOAL_BELOW), Algorithm::Bfs).expect("maze is solvable");

        assert_eq!(
            result.solution().actions(),
            &[Direction::Down, Direction::Down]
        );
        assert_eq!(result.solution().cells(), cells(&[(1, 0), (2, 0)]));
        assert_eq!(result.explored_order(), cells(&[(0, 0), (1, 0), (0, 1)]));
        assert_eq!(result.num_explored(), 4);
    }

    #[test]
    fn test_dfs_golden_goal_below() {
        let result = solve(&grid(ROOM_GOAL_BELOW), Algorithm::Dfs).expect("maze is solvable");

        assert_eq!(
            result.solution().actions(),
            &[
                Direction::Right,
                Direction::Right,
                Direction::Down,
                Direction::Down,
                Direction::Left,
                Direction::Left,
            ]
        );
        assert_eq!(
            result.solution().cells(),
            cells(&[(0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)])
        );
        assert_eq!(
            result.explored_order(),
            cells(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1)])
        );
        assert_eq!(result.num_explored(), 7);
    }

    #[test]
    fn test_bfs_golden_goal_in_corner() {
        let result = solve(&grid(ROOM_GOAL_CORNER), Algorithm::Bfs).expect("maze is solvable");

        assert_eq!(
            result.solution().actions(),
            &[
                Direction::Down,
                Direction::Down,
                Direction::Right,
                Direction::Right,
            ]
        );
        assert_eq!(
            result.solution().cells(),
            cells(&[(1, 0), (2, 0), (2, 1), (2, 2)])
        );
        assert_eq!(result.explored().len(), 8);
        assert_eq!(result.num_explored(), 9);
    }

    #[test]
    fn test_dfs_golden_goal_in_corner() {
        let result = solve(&grid(ROOM_GOAL_CORNER), Algorithm::Dfs).expect("maze is solvable");

        assert_eq!(
            result.solution().actions(),
            &[
                Direction::Right,
                Direction::Right,
                Direction::Down,
                Direction::Down,
            ]
        );
        assert_eq!(
            result.explored(),
            &cells(&[(0, 0), (0, 1), (0, 2), (1, 2)])
                .into_iter()
                .collect::<HashSet<_>>()
        );
        assert_eq!(result.num_explored(), 5);
    }

    #[test]
    fn test_short_rows_do_not_open_paths() {
        let result = solve(&grid("A\n  B"), Algorithm::Bfs).expect("maze is solvable");

        assert_eq!(
            result.solution().actions(),
            &[Direction::Down, Direction::Right, Direction::Right]
        );
    }

    #[rstest]
    #[case::dfs(Algorithm::Dfs)]
    #[case::bfs(Algorithm::Bfs)]
    fn test_walled_off_goal_has_no_solution(#[case] algorithm: Algorithm) {
        let enclosed = grid("A  \n ##\n #B");

        assert_eq!(
            solve(&enclosed, algorithm),
            Err(NoSolutionError {
                algorithm,
                explored: 5,
            })
        );
    }

    #[rstest]
    #[case::dfs(Algorithm::Dfs)]
    #[case::bfs(Algorithm::Bfs)]
    fn test_start_boxed_in(#[case] algorithm: Algorithm) {
        let result = solve(&grid("A#B"), algorithm);

        assert_eq!(
            result,
            Err(NoSolutionError {
                algorithm,
                explored: 1,
            })
        );
    }

    #[rstest]
    #[case::room_below(ROOM_GOAL_BELOW)]
    #[case::room_corner(ROOM_GOAL_CORNER)]
    #[case::winding(WINDING)]
    fn test_bfs_is_shortest(#[case] text: &str) {
        let grid = grid(text);
        let bfs = solve(&grid, Algorithm::Bfs).expect("maze is solvable");
        let dfs = solve(&grid, Algorithm::Dfs).expect("maze is solvable");

        assert_eq!(Some(bfs.solution().len()), shortest_path_len(&grid));
        assert!(bfs.solution().len() <= dfs.solution().len());
    }

    #[rstest]
    #[case::dfs(Algorithm::Dfs)]
    #[case::bfs(Algorithm::Bfs)]
    fn test_path_walks_from_start_to_goal(#[case] algorithm: Algorithm) {
        let grid = grid(WINDING);
        let result = solve(&grid, algorithm).expect("maze is solvable");
        let solution = result.solution();

        let mut position = grid.start();
        for (&action, &expected) in solution.actions().iter().zip(solution.cells()) {
            position = grid
                .step(position, action)
                .expect("every move should land on an open cell");
            assert_eq!(position, expected);
        }

        assert_eq!(position, grid.goal());
        assert_eq!(solution.actions().len(), solution.cells().len());
        assert!(!result.explored().contains(&grid.goal()));
    }

    #[rstest]
    #[case::dfs(Algorithm::Dfs)]
    #[case::bfs(Algorithm::Bfs)]
    fn test_repeated_runs_are_identical(#[case] algorithm: Algorithm) {
        let grid = grid(WINDING);

        assert_eq!(solve(&grid, algorithm), solve(&grid, algorithm));
    }

    #[test]
    fn test_winding_path_lengths() {
        let grid = grid(WINDING);
        let bfs = solve(&grid, Algorithm::Bfs).expect("maze is solvable");
        let dfs = solve(&grid, Algorithm::Dfs).expect("maze is solvable");

        assert_eq!(bfs.solution().len(), 10);
        assert_eq!(dfs.solution().len(), 20);
    }

    #[test]
    fn test_explored_order_matches_explored_set() {
        let result = solve(&grid(WINDING), Algorithm::Dfs).expect("maze is solvable");

        assert_eq!(result.explored_order().len(), result.explored().len());
        assert!(result
            .explored_order()
            .iter()
            .all(|cell| result.explored().contains(cell)));
        assert_eq!(result.algorithm(), Algorithm::Dfs);
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::Dfs.to_string(), "DFS");
        assert_eq!(Algorithm::Bfs.to_string(), "BFS");
    }

    #[test]
    fn test_summary_counts_removed_nodes() {
        let result = solve(&grid(ROOM_GOAL_BELOW), Algorithm::Bfs).expect("maze is solvable");

        // The goal is removed from the frontier but never expanded.
        assert_eq!(result.explored().len(), 3);
        assert_eq!(result.to_string(), "BFS: 2 moves, 4 nodes explored");
    }
}
