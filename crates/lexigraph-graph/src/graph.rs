//! Core graph data structure.
//!
//! The WordGraph wraps petgraph and adds a word index for fast lookups.
//! It's the central data structure that every query works with.

use crate::edge::GraphEdge;
use lexigraph_core::normalize_word;
use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Unique identifier for a node in the graph.
pub type NodeId = NodeIndex;

/// The word adjacency graph.
///
/// Nodes are lowercase words; an edge `a -> b` carries the number of times
/// `a` was immediately followed by `b` in the corpus. Edges are unique per
/// ordered pair. Instances are produced by [`GraphBuilder`](crate::GraphBuilder)
/// and never change afterwards.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// The underlying petgraph graph. Node weights are words, edge weights
    /// are occurrence counts.
    pub(crate) graph: DiGraph<String, u32>,

    /// Maps words to graph node indexes.
    word_index: HashMap<String, NodeId>,
}

impl WordGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a word as a node, returning its index.
    ///
    /// The word goes through the tokenizer's normalization; anything that is
    /// not exactly one token is rejected.
    pub(crate) fn add_word(&mut self, word: &str) -> Option<NodeId> {
        let word = normalize_word(word)?;
        Some(self.insert_word(word))
    }

    fn insert_word(&mut self, word: String) -> NodeId {
        if let Some(&index) = self.word_index.get(&word) {
            return index;
        }

        let index = self.graph.add_node(word.clone());
        self.word_index.insert(word, index);
        index
    }

    /// Records one occurrence of `from` immediately followed by `to`.
    ///
    /// Returns `false` and leaves the graph untouched if either side is not a
    /// single word.
    pub(crate) fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let (Some(from), Some(to)) = (normalize_word(from), normalize_word(to)) else {
            return false;
        };
        let from = self.insert_word(from);
        let to = self.insert_word(to);

        match self.graph.find_edge(from, to) {
            Some(edge) => self.graph[edge] += 1,
            None => {
                self.graph.add_edge(from, to, 1);
            }
        }
        true
    }

    /// Resolves user input to a node, applying the tokenizer's normalization.
    pub fn lookup(&self, word: &str) -> Option<NodeId> {
        let word = normalize_word(word)?;
        self.word_index.get(&word).copied()
    }

    /// Checks whether a word is a node. Case-insensitive.
    pub fn has_node(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Gets the word stored at a node index.
    pub fn word(&self, index: NodeId) -> Option<&str> {
        self.graph.node_weight(index).map(String::as_str)
    }

    /// Returns every node, sorted lexicographically.
    pub fn nodes(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.graph.node_weights().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Returns the outgoing neighbors of a word with their edge weights.
    ///
    /// Unknown words and words without successors both yield an empty map.
    pub fn neighbors(&self, word: &str) -> BTreeMap<&str, u32> {
        self.lookup(word)
            .map(|index| self.successors(index).collect())
            .unwrap_or_default()
    }

    /// Outgoing `(word, weight)` pairs of a node, in no particular order.
    pub(crate) fn successors(&self, index: NodeId) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.graph
            .edges_directed(index, Direction::Outgoing)
            .map(|edge| (self.graph[edge.target()].as_str(), *edge.weight()))
    }

    /// Outgoing neighbor indexes of a node, sorted by word.
    pub(crate) fn sorted_successors(&self, index: NodeId) -> Vec<(NodeId, u32)> {
        let mut successors: Vec<(NodeId, u32)> = self
            .graph
            .edges_directed(index, Direction::Outgoing)
            .map(|edge| (edge.target(), *edge.weight()))
            .collect();
        successors.sort_by(|a, b| self.graph[a.0].cmp(&self.graph[b.0]));
        successors
    }

    /// Gets the weight of the edge `from -> to`, if it exists.
    pub fn weight(&self, from: &str, to: &str) -> Option<u32> {
        let from = self.lookup(from)?;
        let to = self.lookup(to)?;
        let edge = self.graph.find_edge(from, to)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Number of distinct successors of a word (0 for unknown words).
    pub fn out_degree(&self, word: &str) -> usize {
        self.lookup(word)
            .map(|index| self.graph.edges_directed(index, Direction::Outgoing).count())
            .unwrap_or(0)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Returns all edges with their endpoint words, sorted by source then target.
    pub fn edges(&self) -> Vec<GraphEdge> {
        let mut edges: Vec<GraphEdge> = self
            .graph
            .edge_references()
            .map(|edge| GraphEdge {
                source: self.graph[edge.source()].clone(),
                target: self.graph[edge.target()].clone(),
                weight: *edge.weight(),
            })
            .collect();
        edges.sort();
        edges
    }

    /// Renders the graph in Graphviz DOT format for external visualizers.
    pub fn to_dot(&self) -> String {
        let dot = Dot::with_attr_getters(
            &self.graph,
            &[Config::EdgeNoLabel],
            &|_, edge| format!("label = \"w={}\"", edge.weight()),
            &|_, _| String::new(),
        );
        format!("{}", dot)
    }
}

/// Graph statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Sum of all edge weights, i.e. the number of adjacent word pairs ingested.
    pub total_weight: u64,
}

impl WordGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            total_weight: self.graph.edge_weights().map(|&w| u64::from(w)).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(pairs: &[(&str, &str)]) -> WordGraph {
        let mut graph = WordGraph::new();
        for (from, to) in pairs {
            graph.add_edge(from, to);
        }
        graph
    }

    #[test]
    fn test_add_edge_accumulates_weight() {
        let graph = graph_of(&[("a", "b"), ("a", "b"), ("b", "a")]);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight("a", "b"), Some(2));
        assert_eq!(graph.weight("b", "a"), Some(1));
    }

    #[test]
    fn test_edges_are_directed() {
        let graph = graph_of(&[("a", "b")]);
        assert_eq!(graph.weight("a", "b"), Some(1));
        assert_eq!(graph.weight("b", "a"), None);
    }

    #[test]
    fn test_node_identity_is_case_insensitive() {
        let graph = graph_of(&[("The", "cat"), ("the", "CAT")]);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.weight("THE", "Cat"), Some(2));
        assert!(graph.has_node("tHe"));
        assert!(!graph.has_node("dog"));
    }

    #[test]
    fn test_neighbors_sorted_and_empty_for_unknown() {
        let graph = graph_of(&[("a", "c"), ("a", "b"), ("a", "c")]);

        let neighbors: Vec<(&str, u32)> = graph.neighbors("a").into_iter().collect();
        assert_eq!(neighbors, [("b", 1), ("c", 2)]);

        assert!(graph.neighbors("c").is_empty());
        assert!(graph.neighbors("missing").is_empty());
        assert_eq!(graph.out_degree("a"), 2);
        assert_eq!(graph.out_degree("missing"), 0);
    }

    #[test]
    fn test_nodes_sorted() {
        let graph = graph_of(&[("zebra", "apple"), ("mango", "apple")]);
        assert_eq!(graph.nodes(), ["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_non_words_are_rejected() {
        let mut graph = graph_of(&[("a", "b")]);

        assert!(!graph.add_edge("test@word", "x"));
        assert!(!graph.add_edge("a", ""));
        assert_eq!(graph.add_word(""), None);
        assert_eq!(graph.add_word("two words"), None);
        assert_eq!(graph.add_word(" Hello! "), graph.lookup("hello"));

        assert_eq!(graph.nodes(), ["a", "b", "hello"]);
        assert_eq!(graph.edge_count(), 1);
        for node in graph.nodes() {
            assert!(graph.has_node(node));
        }
    }

    #[test]
    fn test_self_loop() {
        let graph = graph_of(&[("go", "go"), ("go", "go")]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.weight("go", "go"), Some(2));
    }

    #[test]
    fn test_edges_export_and_stats() {
        let graph = graph_of(&[("b", "a"), ("a", "c"), ("a", "b"), ("a", "b")]);

        let edges = graph.edges();
        let rendered: Vec<String> = edges.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["a -> b (2)", "a -> c (1)", "b -> a (1)"]);

        let stats = graph.stats();
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.total_weight, 4);
    }

    #[test]
    fn test_dot_contains_weight_labels() {
        let graph = graph_of(&[("data", "team"), ("data", "team")]);
        let dot = graph.to_dot();

        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("\"data\""));
        assert!(dot.contains("w=2"));
    }
}
