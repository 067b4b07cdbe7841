//! Weighted shortest paths.
//!
//! Dijkstra's algorithm over edge weights. The frontier is a min-heap keyed
//! by `(distance, word)`, so nodes at equal distance are settled in
//! lexicographic order, and a tentative distance is only replaced by a
//! strictly smaller one. Together with relaxing neighbors in lexicographic
//! order this makes every result deterministic.

use crate::error::{display_word, QueryError, Result};
use crate::graph::{NodeId, WordGraph};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

/// A minimum-weight path between two words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Words from start to end, inclusive.
    pub nodes: Vec<String>,
    /// Sum of the traversed edge weights.
    pub total_weight: u64,
}

impl ShortestPath {
    pub fn start(&self) -> &str {
        self.nodes.first().map(String::as_str).unwrap_or_default()
    }

    pub fn end(&self) -> &str {
        self.nodes.last().map(String::as_str).unwrap_or_default()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (total weight: {:.2})",
            self.nodes.join(" → "),
            self.total_weight as f64
        )
    }
}

/// Distances and predecessors of one Dijkstra run, local to the call.
struct Search {
    distance: HashMap<NodeId, u64>,
    predecessor: HashMap<NodeId, NodeId>,
}

impl WordGraph {
    /// Finds the minimum-weight path from `start` to `end`.
    ///
    /// `start == end` always yields the single-node path with weight 0,
    /// whether or not a self-loop exists.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<ShortestPath> {
        let source = self
            .lookup(start)
            .ok_or_else(|| QueryError::UnknownStart(display_word(start)))?;
        let target = self
            .lookup(end)
            .ok_or_else(|| QueryError::UnknownEnd(display_word(end)))?;

        if source == target {
            return Ok(ShortestPath {
                nodes: vec![self.graph[source].clone()],
                total_weight: 0,
            });
        }

        let search = self.dijkstra(source, Some(target));
        search
            .path_to(self, target)
            .ok_or_else(|| QueryError::NoPath {
                start: self.graph[source].clone(),
                end: self.graph[target].clone(),
            })
    }

    /// Finds the shortest path from `start` to every other reachable word.
    ///
    /// Paths are sorted by their end word. Unreachable words are omitted.
    pub fn shortest_paths_from(&self, start: &str) -> Result<Vec<ShortestPath>> {
        let source = self
            .lookup(start)
            .ok_or_else(|| QueryError::UnknownStart(display_word(start)))?;

        let search = self.dijkstra(source, None);
        let mut paths: Vec<ShortestPath> = search
            .distance
            .keys()
            .filter(|&&node| node != source)
            .filter_map(|&node| search.path_to(self, node))
            .collect();
        paths.sort_by(|a, b| a.end().cmp(b.end()));

        Ok(paths)
    }

    /// Runs Dijkstra from `source`, stopping early once `target` is settled.
    fn dijkstra(&self, source: NodeId, target: Option<NodeId>) -> Search {
        let mut distance: HashMap<NodeId, u64> = HashMap::new();
        let mut predecessor: HashMap<NodeId, NodeId> = HashMap::new();
        let mut settled: HashSet<NodeId> = HashSet::new();
        let mut frontier = BinaryHeap::new();

        distance.insert(source, 0);
        frontier.push(Reverse((0u64, self.graph[source].as_str(), source)));

        while let Some(Reverse((dist, _, node))) = frontier.pop() {
            // Stale entry for an already settled node
            if !settled.insert(node) {
                continue;
            }
            if Some(node) == target {
                break;
            }

            for (neighbor, weight) in self.sorted_successors(node) {
                if settled.contains(&neighbor) {
                    continue;
                }
                let candidate = dist + u64::from(weight);
                let improves = distance
                    .get(&neighbor)
                    .map_or(true, |&current| candidate < current);

                if improves {
                    distance.insert(neighbor, candidate);
                    predecessor.insert(neighbor, node);
                    frontier.push(Reverse((
                        candidate,
                        self.graph[neighbor].as_str(),
                        neighbor,
                    )));
                }
            }
        }

        Search {
            distance,
            predecessor,
        }
    }
}

impl Search {
    /// Rebuilds the path to `node` by walking predecessors back to the source.
    fn path_to(&self, graph: &WordGraph, node: NodeId) -> Option<ShortestPath> {
        let total_weight = *self.distance.get(&node)?;

        let mut nodes = vec![graph.graph[node].clone()];
        let mut current = node;
        while let Some(&previous) = self.predecessor.get(&current) {
            nodes.push(graph.graph[previous].clone());
            current = previous;
        }
        nodes.reverse();

        Some(ShortestPath {
            nodes,
            total_weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    fn weighted(edges: &[(&str, &str, u32)]) -> WordGraph {
        let mut builder = GraphBuilder::new();
        for &(from, to, weight) in edges {
            for _ in 0..weight {
                builder.add_edge(from, to);
            }
        }
        builder.build()
    }

    #[test]
    fn test_prefers_lighter_indirect_path() {
        let graph = weighted(&[("the", "data", 1), ("the", "team", 5), ("data", "team", 1)]);

        let path = graph.shortest_path("the", "team").unwrap();
        assert_eq!(path.nodes, ["the", "data", "team"]);
        assert_eq!(path.total_weight, 2);
        assert_eq!(path.to_string(), "the → data → team (total weight: 2.00)");
    }

    #[test]
    fn test_start_equals_end() {
        let graph = weighted(&[("x", "x", 3), ("x", "y", 1)]);

        let path = graph.shortest_path("x", "X").unwrap();
        assert_eq!(path.nodes, ["x"]);
        assert_eq!(path.total_weight, 0);
        assert_eq!(path.to_string(), "x (total weight: 0.00)");
    }

    #[test]
    fn test_unknown_endpoints() {
        let graph = weighted(&[("a", "b", 1)]);

        assert_eq!(
            graph.shortest_path("X", "b").unwrap_err(),
            QueryError::UnknownStart("x".to_string())
        );
        assert_eq!(
            graph.shortest_path("a", "Z").unwrap_err(),
            QueryError::UnknownEnd("z".to_string())
        );
    }

    #[test]
    fn test_unreachable_target() {
        let graph = weighted(&[("a", "b", 1), ("c", "a", 1)]);

        assert_eq!(
            graph.shortest_path("a", "c").unwrap_err(),
            QueryError::NoPath {
                start: "a".to_string(),
                end: "c".to_string()
            }
        );
    }

    #[test]
    fn test_direction_matters() {
        let graph = weighted(&[("a", "b", 1)]);
        assert!(graph.shortest_path("a", "b").is_ok());
        assert!(graph.shortest_path("b", "a").is_err());
    }

    #[test]
    fn test_equal_weight_tie_is_lexicographic() {
        // Two paths of weight 2: s -> m -> t and s -> b -> t.
        let graph = weighted(&[("s", "m", 1), ("m", "t", 1), ("s", "b", 1), ("b", "t", 1)]);

        let path = graph.shortest_path("s", "t").unwrap();
        assert_eq!(path.nodes, ["s", "b", "t"]);
        assert_eq!(path.total_weight, 2);
    }

    #[test]
    fn test_longer_chain_beats_heavy_edge() {
        let graph = weighted(&[
            ("a", "b", 1),
            ("b", "c", 1),
            ("c", "d", 1),
            ("d", "e", 1),
            ("a", "e", 10),
            ("b", "e", 5),
        ]);

        let path = graph.shortest_path("a", "e").unwrap();
        assert_eq!(path.nodes, ["a", "b", "c", "d", "e"]);
        assert_eq!(path.total_weight, 4);
        assert_eq!(path.hops(), 4);
    }

    #[test]
    fn test_paths_from_single_source() {
        let graph = weighted(&[("a", "b", 2), ("a", "c", 1), ("c", "b", 3), ("z", "a", 1)]);

        let paths = graph.shortest_paths_from("a").unwrap();
        let rendered: Vec<String> = paths.iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["a → b (total weight: 2.00)", "a → c (total weight: 1.00)"]
        );
    }

    #[test]
    fn test_paths_from_dead_end_is_empty() {
        let graph = weighted(&[("a", "b", 1)]);
        assert!(graph.shortest_paths_from("b").unwrap().is_empty());
        assert!(graph.shortest_paths_from("nope").is_err());
    }

    #[test]
    fn test_corpus_paths() {
        let graph = WordGraph::from_text(
            "The scientist carefully analyzed the data, wrote a detailed report, \
             and shared the report with the team, but the team requested more data, \
             so the scientist analyzed it again.",
        );

        let path = graph.shortest_path("the", "data").unwrap();
        assert_eq!(path.nodes, ["the", "data"]);
        assert_eq!(path.total_weight, 1);

        let path = graph.shortest_path("the", "team").unwrap();
        assert_eq!(path.nodes, ["the", "team"]);
        assert_eq!(path.total_weight, 2);
    }
}
