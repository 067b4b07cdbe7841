//! Bridge-word queries.
//!
//! A bridge word between `word1` and `word2` is any `mid` with edges
//! `word1 -> mid` and `mid -> word2`. Only paths of exactly two hops count;
//! a direct edge `word1 -> word2` is not a bridge.

use crate::error::{display_word, QueryError, Result};
use crate::graph::{NodeId, WordGraph};
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The bridge words found between two words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeWords {
    pub word1: String,
    pub word2: String,
    /// Bridge words in lexicographic order. Empty when none exist.
    pub bridges: Vec<String>,
}

impl BridgeWords {
    pub fn is_empty(&self) -> bool {
        self.bridges.is_empty()
    }
}

impl fmt::Display for BridgeWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bridges.is_empty() {
            write!(f, "No bridge words from {} to {}!", self.word1, self.word2)
        } else {
            write!(
                f,
                "The bridge words from {} to {} are: {}.",
                self.word1,
                self.word2,
                self.bridges.join(", ")
            )
        }
    }
}

impl WordGraph {
    /// Finds the bridge words from `word1` to `word2`.
    ///
    /// Both words are normalized the same way the corpus was. If either is
    /// not a node, returns [`QueryError::UnknownWord`]; if both exist but
    /// nothing connects them, returns an empty result.
    pub fn bridge_words(&self, word1: &str, word2: &str) -> Result<BridgeWords> {
        let (from, to) = match (self.lookup(word1), self.lookup(word2)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                return Err(QueryError::UnknownWord {
                    word1: display_word(word1),
                    word2: display_word(word2),
                })
            }
        };

        Ok(BridgeWords {
            word1: self.graph[from].clone(),
            word2: self.graph[to].clone(),
            bridges: self.bridges_between(from, to),
        })
    }

    /// Collects the bridge words between two resolved nodes, sorted.
    pub(crate) fn bridges_between(&self, from: NodeId, to: NodeId) -> Vec<String> {
        let mut bridges: Vec<String> = self
            .graph
            .neighbors_directed(from, Direction::Outgoing)
            .filter(|&mid| self.graph.find_edge(mid, to).is_some())
            .map(|mid| self.graph[mid].clone())
            .collect();
        bridges.sort_unstable();
        bridges.dedup();
        bridges
    }
}
