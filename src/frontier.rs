//! Search frontiers.
//!
//! A frontier holds the nodes that have been discovered but not yet expanded. The two policies
//! here are the only difference between depth-first and breadth-first search.

use std::collections::VecDeque;

use crate::{
    error::EmptyFrontierError,
    grid::{Cell, Direction},
};

/// Node of the search tree.
///
/// Nodes are owned by a single search run. The parent link is the position of the parent node in
/// the run's list of expanded nodes, which is enough to walk back to the root once the goal is
/// found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Cell this node stands for.
    pub state: Cell,
    /// Index of the expanded node that generated this one, [`None`] for the root.
    pub parent: Option<usize>,
    /// Move taken from the parent to reach [`state`](Node::state), [`None`] for the root.
    pub action: Option<Direction>,
}

impl Node {
    /// Creates the root node of a search starting at `state`.
    #[must_use]
    pub const fn root(state: Cell) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }

    /// Creates a node reached from the expanded node at index `parent` by moving in `action`.
    #[must_use]
    pub const fn child(state: Cell, parent: usize, action: Direction) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

/// Container of pending search nodes.
pub trait Frontier {
    /// Appends a node to the frontier.
    fn add(&mut self, node: Node);

    /// Takes the next node to expand according to the frontier's policy.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyFrontierError`] when the frontier holds no nodes.
    fn remove(&mut self) -> Result<Node, EmptyFrontierError>;

    /// Returns whether any pending node stands for `state`.
    fn contains_state(&self, state: Cell) -> bool;

    /// Number of pending nodes.
    fn len(&self) -> usize;

    /// Returns whether no nodes are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in first-out frontier driving depth-first search.
#[derive(Debug, Default, Clone)]
pub struct StackFrontier {
    /// Pending nodes, the most recent one last.
    nodes: Vec<Node>,
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Result<Node, EmptyFrontierError> {
        self.nodes.pop().ok_or(EmptyFrontierError)
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

/// First-in first-out frontier driving breadth-first search.
#[derive(Debug, Default, Clone)]
pub struct QueueFrontier {
    /// Pending nodes, the oldest one first.
    nodes: VecDeque<Node>,
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Node) {
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Result<Node, EmptyFrontierError> {
        self.nodes.pop_front().ok_or(EmptyFrontierError)
    }

    fn contains_state(&self, state: Cell) -> bool {
        self.nodes.iter().any(|node| node.state == state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
