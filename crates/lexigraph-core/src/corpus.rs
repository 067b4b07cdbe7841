//! Corpus loading.
//!
//! A corpus is read completely before it is handed to the graph builder, so
//! a read failure never leaves a half-built graph behind. Individual lines
//! that are not valid UTF-8 are dropped and counted instead of aborting.

use crate::error::{CorpusError, Result};
use crate::tokenizer::tokenize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// An ordered collection of corpus lines.
///
/// Line breaks carry no meaning beyond separating words: the last word of a
/// line and the first word of the next line are adjacent.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    lines: Vec<String>,
    skipped_lines: usize,
}

impl Corpus {
    /// Builds a corpus from an in-memory text blob.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Builds a corpus from an ordered sequence of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            skipped_lines: 0,
        }
    }

    /// Reads a corpus file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut lines = Vec::new();
        let mut skipped_lines = 0;

        for (number, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            match String::from_utf8(raw.to_vec()) {
                Ok(line) => lines.push(line),
                Err(_) => {
                    warn!("Skipping line {} of {}: not valid UTF-8", number + 1, path.display());
                    skipped_lines += 1;
                }
            }
        }

        debug!(
            "Loaded {} lines from {} ({} skipped)",
            lines.len(),
            path.display(),
            skipped_lines
        );

        Ok(Self {
            lines,
            skipped_lines,
        })
    }

    /// Iterates over the normalized token stream of the whole corpus.
    pub fn tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().flat_map(|line| tokenize(line))
    }

    /// Number of lines that were kept.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of lines dropped because they could not be decoded.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Total number of tokens in the corpus.
    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lines_and_blob_agree() {
        let blob = Corpus::from_text("To be, or\nnot to be");
        let lines = Corpus::from_lines(vec!["To be, or", "not to be"]);

        let a: Vec<String> = blob.tokens().collect();
        let b: Vec<String> = lines.tokens().collect();
        assert_eq!(a, b);
        assert_eq!(a, ["to", "be", "or", "not", "to", "be"]);
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "The scientist carefully analyzed the data,").unwrap();
        writeln!(file, "wrote a detailed report.").unwrap();

        let corpus = Corpus::open(file.path()).unwrap();
        assert_eq!(corpus.token_count(), 10);
        assert_eq!(corpus.skipped_lines(), 0);
        assert_eq!(corpus.tokens().last().as_deref(), Some("report"));
    }

    #[test]
    fn test_open_skips_undecodable_lines() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"good line\n\xff\xfe broken\nmore words\n")
            .unwrap();

        let corpus = Corpus::open(file.path()).unwrap();
        assert_eq!(corpus.skipped_lines(), 1);
        let tokens: Vec<String> = corpus.tokens().collect();
        assert_eq!(tokens, ["good", "line", "more", "words"]);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = Corpus::open(&missing).unwrap_err();
        assert!(matches!(err, CorpusError::Read { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::from_text("");
        assert!(corpus.is_empty());
        assert_eq!(corpus.token_count(), 0);
    }
}
