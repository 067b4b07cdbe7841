//! PageRank over the word graph.
//!
//! Plain power iteration with a uniform start vector:
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)     for every u -> v
//! ```
//!
//! Out-degree counts distinct successors; edge weights play no part. A node
//! without successors passes its rank to nobody, and that mass is not
//! redistributed, so the scores of a graph with dead ends sum to less than 1.

use crate::error::{display_word, QueryError, Result};
use crate::graph::WordGraph;
use lexigraph_core::normalize_word;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Parameters of the power iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Probability of following an edge instead of teleporting.
    pub damping: f64,
    /// Upper bound on the number of iterations.
    pub max_iterations: usize,
    /// Iteration stops once the summed absolute change of all ranks falls below this.
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// A word and its rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub rank: f64,
}

/// PageRank results for every node.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageRankScores {
    scores: HashMap<String, f64>,
    iterations: usize,
    converged: bool,
}

impl PageRankScores {
    /// Gets the rank of a single word. The word is normalized first.
    pub fn get(&self, word: &str) -> Option<f64> {
        let word = normalize_word(word)?;
        self.scores.get(&word).copied()
    }

    /// Gets the rank of a single word under its normalized spelling.
    pub fn rank_of(&self, word: &str) -> Result<RankedWord> {
        normalize_word(word)
            .and_then(|normalized| {
                let rank = *self.scores.get(&normalized)?;
                Some(RankedWord {
                    word: normalized,
                    rank,
                })
            })
            .ok_or_else(|| QueryError::UnknownNode(display_word(word)))
    }

    /// Returns all words ordered by descending rank, ties broken lexicographically.
    pub fn ranked(&self) -> Vec<RankedWord> {
        let mut ranked: Vec<RankedWord> = self
            .scores
            .iter()
            .map(|(word, &rank)| RankedWord {
                word: word.clone(),
                rank,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.rank
                .partial_cmp(&a.rank)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });

        ranked
    }

    /// Number of iterations that were run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the tolerance was reached before the iteration limit.
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all ranks.
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    pub fn into_map(self) -> HashMap<String, f64> {
        self.scores
    }
}

/// Computes PageRank for every node of the graph.
pub fn compute_pagerank(graph: &WordGraph, config: &PageRankConfig) -> PageRankScores {
    let inner = &graph.graph;
    let n = inner.node_count();
    if n == 0 {
        return PageRankScores {
            converged: true,
            ..PageRankScores::default()
        };
    }

    let damping = config.damping;
    let teleport = (1.0 - damping) / n as f64;

    // Node indexes are dense (0..n) because nodes are never removed.
    let out_degree: Vec<usize> = inner
        .node_indices()
        .map(|node| inner.neighbors_directed(node, Direction::Outgoing).count())
        .collect();

    let mut ranks = vec![1.0 / n as f64; n];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        let mut next = vec![0.0; n];
        let mut total_change = 0.0;

        for node in inner.node_indices() {
            // Every predecessor has at least this edge, so its out-degree is non-zero.
            let incoming: f64 = inner
                .neighbors_directed(node, Direction::Incoming)
                .map(|pred| ranks[pred.index()] / out_degree[pred.index()] as f64)
                .sum();

            let rank = teleport + damping * incoming;
            total_change += (rank - ranks[node.index()]).abs();
            next[node.index()] = rank;
        }

        ranks = next;
        iterations += 1;

        if total_change < config.tolerance {
            converged = true;
            break;
        }
    }

    debug!(
        "PageRank over {} nodes: {} iterations, converged = {}",
        n, iterations, converged
    );

    let scores = inner
        .node_indices()
        .map(|node| (inner[node].clone(), ranks[node.index()]))
        .collect();

    PageRankScores {
        scores,
        iterations,
        converged,
    }
}
