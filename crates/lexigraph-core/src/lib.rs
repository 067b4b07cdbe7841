//! Lexigraph Core - corpus tokenization and ingestion
//!
//! This crate turns raw corpus text into the normalized token stream that
//! the word graph is built from. The same normalization is applied to any
//! text a user later queries with, so lookups always agree with the graph.
//!
//! # Example
//!
//! ```
//! use lexigraph_core::{tokenize, Corpus};
//!
//! let tokens: Vec<String> = tokenize("The Cat, the   cat!").collect();
//! assert_eq!(tokens, ["the", "cat", "the", "cat"]);
//!
//! let corpus = Corpus::from_text("Hello world\nhello again");
//! assert_eq!(corpus.token_count(), 4);
//! ```

pub mod corpus;
pub mod error;
pub mod tokenizer;

pub use corpus::Corpus;
pub use error::{CorpusError, Result};
pub use tokenizer::{normalize_word, tokenize};
