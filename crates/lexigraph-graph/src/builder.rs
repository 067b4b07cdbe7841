//! Graph builder for constructing the word graph from a corpus.
//!
//! The builder replays a token stream and records one edge occurrence per
//! consecutive token pair. Building consumes the builder, so a finished
//! [`WordGraph`] can no longer be mutated.

use crate::graph::WordGraph;
use lexigraph_core::{normalize_word, tokenize, Corpus};
use tracing::debug;

/// Builds a WordGraph from tokens.
///
/// Tokens fed in separate calls are chained: the last token of one call and
/// the first token of the next form an adjacent pair.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: WordGraph,
    /// Last token seen, waiting for its successor.
    previous: Option<String>,
    tokens_seen: usize,
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            graph: WordGraph::new(),
            previous: None,
            tokens_seen: 0,
        }
    }

    /// Increments the weight of `from -> to`, creating both nodes if needed.
    ///
    /// Both words are normalized like corpus tokens. Returns `false` without
    /// changing anything if either one is not a single word. This does not
    /// touch the token chain used by [`push_token`](Self::push_token).
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let added = self.graph.add_edge(from, to);
        if !added {
            debug!("Ignoring edge {:?} -> {:?}: not a single word", from, to);
        }
        added
    }

    /// Registers a word as a node without any edge.
    ///
    /// Returns `false` if the input does not normalize to a single word.
    pub fn add_word(&mut self, word: &str) -> bool {
        let added = self.graph.add_word(word).is_some();
        if !added {
            debug!("Ignoring word {:?}: not a single word", word);
        }
        added
    }

    /// Appends one token to the stream.
    ///
    /// Input that is not a single word is dropped and does not break the
    /// chain between its neighbors.
    pub fn push_token(&mut self, token: &str) {
        let Some(token) = normalize_word(token) else {
            debug!("Skipping non-word token {:?}", token);
            return;
        };

        self.tokens_seen += 1;
        match self.previous.take() {
            Some(previous) => {
                self.graph.add_edge(&previous, &token);
            }
            None => {
                // The first token still has to appear as a node.
                self.graph.add_word(&token);
            }
        }
        self.previous = Some(token);
    }

    /// Appends a sequence of tokens.
    pub fn add_tokens<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.push_token(token.as_ref());
        }
    }

    /// Tokenizes raw text and appends its tokens.
    pub fn add_text(&mut self, text: &str) {
        self.add_tokens(tokenize(text));
    }

    /// Appends every token of a corpus.
    pub fn add_corpus(&mut self, corpus: &Corpus) {
        self.add_tokens(corpus.tokens());
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> WordGraph {
        debug!(
            "Built word graph: {} tokens, {} nodes, {} edges",
            self.tokens_seen,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }
}

impl WordGraph {
    /// Builds a graph from a loaded corpus.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let mut builder = GraphBuilder::new();
        builder.add_corpus(corpus);
        builder.build()
    }

    /// Builds a graph from a raw text blob.
    pub fn from_text(text: &str) -> Self {
        let mut builder = GraphBuilder::new();
        builder.add_text(text);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_accumulation() {
        let graph = WordGraph::from_text("a b a b");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.weight("a", "b"), Some(2));
        assert_eq!(graph.weight("b", "a"), Some(1));
    }

    #[test]
    fn test_weight_counts_every_occurrence() {
        let graph = WordGraph::from_text("to be or not to be, to be");

        assert_eq!(graph.weight("to", "be"), Some(3));
        assert_eq!(graph.weight("be", "or"), Some(1));
        assert_eq!(graph.weight("be", "to"), Some(1));
        assert_eq!(graph.weight("not", "to"), Some(1));
        assert_eq!(graph.stats().total_weight, 7);
    }

    #[test]
    fn test_single_token_is_a_node() {
        let graph = WordGraph::from_text("  Hello!  ");

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.has_node("hello"));
        assert!(graph.neighbors("hello").is_empty());
    }

    #[test]
    fn test_empty_text_builds_empty_graph() {
        let graph = WordGraph::from_text("123 ... !!!");
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_tokens_chain_across_calls() {
        let mut builder = GraphBuilder::new();
        builder.add_text("the quick");
        builder.add_text("brown fox");
        let graph = builder.build();

        assert_eq!(graph.weight("quick", "brown"), Some(1));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_corpus_lines_match_blob() {
        let corpus = Corpus::from_lines(vec!["The scientist analyzed", "the data."]);
        let from_lines = WordGraph::from_corpus(&corpus);
        let from_blob = WordGraph::from_text("the scientist analyzed the data");

        assert_eq!(from_lines.edges(), from_blob.edges());
        assert_eq!(from_lines.nodes(), from_blob.nodes());
    }

    #[test]
    fn test_explicit_edges_and_words() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("A", "B");
        builder.add_edge("a", "b");
        builder.add_word("lonely");
        let graph = builder.build();

        assert_eq!(graph.weight("a", "b"), Some(2));
        assert!(graph.has_node("lonely"));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_non_words_never_become_nodes() {
        let mut builder = GraphBuilder::new();
        assert!(!builder.add_edge("test@word", "x"));
        assert!(!builder.add_word(""));
        assert!(builder.add_word("Solo"));
        builder.add_tokens(["one", "???", "", "Two"]);
        let graph = builder.build();

        assert_eq!(graph.nodes(), ["one", "solo", "two"]);
        assert_eq!(graph.weight("one", "two"), Some(1));
        for node in graph.nodes() {
            assert!(graph.has_node(node), "{} listed but not found", node);
        }
    }
}
