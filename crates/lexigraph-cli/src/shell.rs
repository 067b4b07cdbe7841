//! Interactive numbered menu.
//!
//! Reads one choice per line, then prompts for that choice's arguments.
//! Query errors are printed and the loop continues.

use crate::commands::render_graph;
use crate::config::Config;
use lexigraph_graph::{compute_pagerank, PageRankScores, RandomWalker, WordGraph};
use std::io::{self, BufRead, Write};

const MENU: &str = "\
==== Menu ====
1. Show graph
2. Query bridge words
3. Enhance text
4. Shortest path
5. PageRank
6. Random walk
7. Show formatted graph
0. Quit";

pub struct Shell<'a> {
    graph: &'a WordGraph,
    config: &'a Config,
    walker: RandomWalker,
    /// Computed on first use; the graph never changes.
    ranks: Option<PageRankScores>,
}

impl<'a> Shell<'a> {
    pub fn new(graph: &'a WordGraph, config: &'a Config) -> Self {
        let walker = match config.walk.seed {
            Some(seed) => RandomWalker::seeded(seed),
            None => RandomWalker::from_entropy(),
        }
        .with_max_steps(config.walk.max_steps);

        Self {
            graph,
            config,
            walker,
            ranks: None,
        }
    }

    /// Runs the menu until `0` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> io::Result<()> {
        let mut lines = input.lines();

        loop {
            writeln!(out, "{}", MENU)?;
            write!(out, "Choice: ")?;
            out.flush()?;

            let Some(choice) = lines.next().transpose()? else {
                break;
            };

            match choice.trim() {
                "0" => {
                    writeln!(out, "Bye.")?;
                    break;
                }
                "1" => write!(out, "{}", render_graph(self.graph, false))?,
                "7" => write!(out, "{}", render_graph(self.graph, true))?,
                "2" => {
                    let Some(args) = prompt(&mut lines, &mut out, "Two words (word1 word2): ")?
                    else {
                        break;
                    };
                    match split_pair(&args) {
                        Some((word1, word2)) => match self.graph.bridge_words(word1, word2) {
                            Ok(result) => writeln!(out, "{}", result)?,
                            Err(e) => writeln!(out, "{}", e)?,
                        },
                        None => writeln!(out, "Expected exactly two words.")?,
                    }
                }
                "3" => {
                    let Some(text) = prompt(&mut lines, &mut out, "Text: ")? else {
                        break;
                    };
                    writeln!(out, "{}", self.graph.enhance(&text))?;
                }
                "4" => {
                    let Some(args) = prompt(&mut lines, &mut out, "Start and end (start [end]): ")?
                    else {
                        break;
                    };
                    self.shortest_path(&args, &mut out)?;
                }
                "5" => {
                    let graph = self.graph;
                    let config = self.config;
                    let ranks = self
                        .ranks
                        .get_or_insert_with(|| compute_pagerank(graph, &config.pagerank));
                    for entry in ranks.ranked() {
                        writeln!(out, "{}: {:.4}", entry.word, entry.rank)?;
                    }
                }
                "6" => {
                    let Some(start) = prompt(&mut lines, &mut out, "Start word (blank = random): ")?
                    else {
                        break;
                    };
                    let start = start.trim();
                    let start = (!start.is_empty()).then_some(start);
                    match self.walker.walk(self.graph, start) {
                        Ok(walk) => writeln!(out, "{}", walk)?,
                        Err(e) => writeln!(out, "{}", e)?,
                    }
                }
                other => writeln!(out, "Invalid choice: {}", other)?,
            }
        }

        Ok(())
    }

    fn shortest_path<W: Write>(&self, args: &str, out: &mut W) -> io::Result<()> {
        let words: Vec<&str> = args.split_whitespace().collect();
        match words.as_slice() {
            [start, end] => match self.graph.shortest_path(start, end) {
                Ok(path) => writeln!(out, "{}", path),
                Err(e) => writeln!(out, "{}", e),
            },
            [start] => match self.graph.shortest_paths_from(start) {
                Ok(paths) if paths.is_empty() => {
                    writeln!(out, "No words reachable from \"{}\"", start)
                }
                Ok(paths) => {
                    for path in paths {
                        writeln!(out, "{}", path)?;
                    }
                    Ok(())
                }
                Err(e) => writeln!(out, "{}", e),
            },
            _ => writeln!(out, "Expected one or two words."),
        }
    }
}

/// Prints a prompt and reads one line. `None` at end of input.
fn prompt<I, W>(lines: &mut I, out: &mut W, message: &str) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(out, "{}", message)?;
    out.flush()?;
    lines.next().transpose()
}

fn split_pair(args: &str) -> Option<(&str, &str)> {
    let mut words = args.split_whitespace();
    let pair = (words.next()?, words.next()?);
    match words.next() {
        Some(_) => None,
        None => Some(pair),
    }
}
