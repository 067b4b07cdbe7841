//! Error types for corpus ingestion.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The corpus file could not be read at all.
    #[error("failed to read corpus {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CorpusError>;
