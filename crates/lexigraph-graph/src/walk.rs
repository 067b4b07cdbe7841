//! Random walks.
//!
//! A walk starts at a given or uniformly random node and keeps following a
//! uniformly random outgoing edge until it reaches a node without
//! successors. Revisiting nodes or edges does not end a walk. The RNG is
//! injected, so a seeded walker replays the same walks.
//!
//! A walk that enters a region from which no dead end is reachable can never
//! end on its own. Only steps taken inside such a region count against the
//! step bound; a walk that can still reach a dead end is never cut short.

use crate::error::{display_word, QueryError, Result};
use crate::graph::{NodeId, WordGraph};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use petgraph::Direction;
use std::collections::VecDeque;
use std::fmt;

/// Default bound on the edges a walk may follow after it can no longer reach
/// a dead end.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Why a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkEnd {
    /// The last node has no outgoing edges.
    DeadEnd,
    /// No dead end was reachable and the step bound was used up.
    StepLimit,
}

impl fmt::Display for WalkEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkEnd::DeadEnd => write!(f, "dead end"),
            WalkEnd::StepLimit => write!(f, "step limit"),
        }
    }
}

/// One realized random walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Walk {
    /// Visited words in order, starting with the start word.
    pub nodes: Vec<String>,
    pub end: WalkEnd,
}

impl Walk {
    pub fn start(&self) -> &str {
        self.nodes.first().map(String::as_str).unwrap_or_default()
    }

    /// Number of edges followed.
    pub fn steps(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Iterates over the traversed edges as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// The walk as plain space-separated text.
    pub fn to_text(&self) -> String {
        self.nodes.join(" ")
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.nodes.join(" → "), self.end)
    }
}

/// Generates independent random walks over a graph.
#[derive(Debug, Clone)]
pub struct RandomWalker<R = StdRng> {
    rng: R,
    /// Maximum edges followed without any reachable dead end. 0 = unlimited.
    max_steps: usize,
}

impl RandomWalker<StdRng> {
    /// Creates a walker whose walks are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a non-deterministic walker.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Default for RandomWalker<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> RandomWalker<R> {
    /// Creates a walker drawing from the given RNG.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Sets the step bound (0 = unlimited).
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Performs one walk.
    ///
    /// With `start = None` the first node is drawn uniformly from all nodes.
    /// Fails with [`QueryError::EmptyGraph`] on an empty graph and with
    /// [`QueryError::UnknownStart`] if an explicit start is not a node.
    pub fn walk(&mut self, graph: &WordGraph, start: Option<&str>) -> Result<Walk> {
        if graph.is_empty() {
            return Err(QueryError::EmptyGraph);
        }

        let mut current = match start {
            Some(word) => graph
                .lookup(word)
                .ok_or_else(|| QueryError::UnknownStart(display_word(word)))?,
            None => NodeId::new(self.rng.gen_range(0..graph.node_count())),
        };

        let mut nodes = vec![graph.graph[current].clone()];
        let limit = if self.max_steps == 0 {
            usize::MAX
        } else {
            self.max_steps
        };
        let escapes = reaches_dead_end(graph);
        let mut trapped_steps = 0;

        let end = loop {
            let successors: Vec<NodeId> = graph
                .sorted_successors(current)
                .into_iter()
                .map(|(node, _)| node)
                .collect();

            let Some(&next) = successors.choose(&mut self.rng) else {
                break WalkEnd::DeadEnd;
            };
            if !escapes[current.index()] {
                if trapped_steps == limit {
                    break WalkEnd::StepLimit;
                }
                trapped_steps += 1;
            }

            nodes.push(graph.graph[next].clone());
            current = next;
        };

        Ok(Walk { nodes, end })
    }
}

/// Marks every node from which some node without successors is reachable.
///
/// Reverse breadth-first search starting at the dead ends. Indexed by
/// `NodeId::index()`.
fn reaches_dead_end(graph: &WordGraph) -> Vec<bool> {
    let inner = &graph.graph;
    let mut marked = vec![false; inner.node_count()];
    let mut queue: VecDeque<NodeId> = inner
        .node_indices()
        .filter(|&node| {
            inner
                .neighbors_directed(node, Direction::Outgoing)
                .next()
                .is_none()
        })
        .collect();
    for node in &queue {
        marked[node.index()] = true;
    }

    while let Some(node) = queue.pop_front() {
        for previous in inner.neighbors_directed(node, Direction::Incoming) {
            if !marked[previous.index()] {
                marked[previous.index()] = true;
                queue.push_back(previous);
            }
        }
    }

    marked
}
