//! Lexigraph Graph - word adjacency graph and its queries
//!
//! This crate owns the weighted directed graph built from a corpus and
//! answers every query the tools ask of it: bridge words, text enhancement,
//! shortest paths, PageRank and random walks.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with a word index on the side. It is
//! built exactly once through [`GraphBuilder`] and is read-only afterwards,
//! so a `&WordGraph` can be shared freely between concurrent queries.
//!
//! # Example
//!
//! ```
//! use lexigraph_graph::WordGraph;
//!
//! let graph = WordGraph::from_text("the data and the team, the data team");
//!
//! let bridges = graph.bridge_words("the", "team").unwrap();
//! assert_eq!(bridges.bridges, ["data"]);
//!
//! let path = graph.shortest_path("the", "team").unwrap();
//! assert_eq!(path.nodes, ["the", "team"]);
//! ```

mod bridge;
mod builder;
mod edge;
mod enhance;
mod error;
mod graph;
mod path;
mod ranking;
mod walk;

pub use bridge::BridgeWords;
pub use builder::GraphBuilder;
pub use edge::GraphEdge;
pub use error::{QueryError, Result};
pub use graph::{GraphStats, NodeId, WordGraph};
pub use path::ShortestPath;
pub use ranking::{compute_pagerank, PageRankConfig, PageRankScores, RankedWord};
pub use walk::{RandomWalker, Walk, WalkEnd, DEFAULT_MAX_STEPS};
