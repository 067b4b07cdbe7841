//! Query errors.
//!
//! These are expected outcomes of valid queries against a particular graph,
//! never faults. Callers decide how to present them.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// One of the two words of a bridge-word query is not a node.
    #[error("No \"{word1}\" or \"{word2}\" in the graph!")]
    UnknownWord { word1: String, word2: String },

    /// A single-word query named a word that is not a node.
    #[error("\"{0}\" is not in the graph")]
    UnknownNode(String),

    #[error("start word \"{0}\" is not in the graph")]
    UnknownStart(String),

    #[error("end word \"{0}\" is not in the graph")]
    UnknownEnd(String),

    /// The end word cannot be reached from the start word.
    #[error("no path from \"{start}\" to \"{end}\"")]
    NoPath { start: String, end: String },

    #[error("the graph has no nodes")]
    EmptyGraph,
}

pub type Result<T> = std::result::Result<T, QueryError>;

/// Renders a raw user word for an error message.
pub(crate) fn display_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}
