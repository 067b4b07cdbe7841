//! Edge records for export and display.

use serde::{Deserialize, Serialize};

/// A weighted edge with its endpoints resolved to words.
///
/// `weight` counts how often `source` was immediately followed by `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

impl std::fmt::Display for GraphEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
