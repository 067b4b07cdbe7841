//! CLI command implementations.

use crate::config::Config;
use crate::shell::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use lexigraph_core::Corpus;
use lexigraph_graph::{compute_pagerank, RandomWalker, WordGraph};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Reads a corpus file behind a spinner.
fn load_corpus(path: &Path) -> Result<Corpus> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Reading {}...", path.display()));

    let corpus = Corpus::open(path);
    spinner.finish_and_clear();
    let corpus = corpus?;

    if corpus.skipped_lines() > 0 {
        eprintln!(
            "{} skipped {} undecodable line(s) in {}",
            "⚠".yellow(),
            corpus.skipped_lines(),
            path.display()
        );
    }

    Ok(corpus)
}

/// Loads a corpus and builds its word graph.
fn load_graph(path: &Path) -> Result<WordGraph> {
    let corpus = load_corpus(path)?;
    let graph = WordGraph::from_corpus(&corpus);

    info!(
        "Graph ready: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Renders every node with its successors, nodes and neighbors sorted.
///
/// The plain layout is `word -> next(2) other(1)`; the formatted layout is
/// `word → next(2), other(1)`.
pub fn render_graph(graph: &WordGraph, formatted: bool) -> String {
    let mut out = String::new();

    for node in graph.nodes() {
        let neighbors = graph.neighbors(node);
        let arrow = if formatted { "→" } else { "->" };

        let line = if neighbors.is_empty() {
            format!("{} {} (no successors)", node, arrow)
        } else {
            let entries: Vec<String> = neighbors
                .iter()
                .map(|(word, weight)| format!("{}({})", word, weight))
                .collect();
            let separator = if formatted { ", " } else { " " };
            format!("{} {} {}", node, arrow, entries.join(separator))
        };

        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// The graph as a JSON document for external visualizers.
fn graph_json(graph: &WordGraph) -> serde_json::Value {
    serde_json::json!({
        "version": "1.0",
        "stats": graph.stats(),
        "nodes": graph.nodes(),
        "edges": graph.edges()
    })
}

/// Initialize a config file in a directory.
pub fn init(path: &Path) -> Result<()> {
    if !Config::write_default(path)? {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    println!("{} Initialized Lexigraph in {}", "✓".green(), path.display());
    println!(
        "  Edit {} to tune PageRank and random walks",
        ".lexigraph/config.json".cyan()
    );

    Ok(())
}

/// Print the graph structure.
pub fn show(corpus: &Path, formatted: bool, json: bool) -> Result<()> {
    let graph = load_graph(corpus)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&graph_json(&graph))?);
        return Ok(());
    }

    let title = if formatted {
        "Formatted Word Graph"
    } else {
        "Word Graph"
    };
    println!("{}", title.cyan().bold());
    print!("{}", render_graph(&graph, formatted));

    Ok(())
}

/// Query the bridge words between two words.
pub fn bridge(corpus: &Path, word1: &str, word2: &str, json: bool) -> Result<()> {
    let graph = load_graph(corpus)?;
    let result = graph.bridge_words(word1, word2)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_empty() {
        println!("{}", result.to_string().yellow());
    } else {
        println!("{}", result);
    }

    Ok(())
}

/// Insert bridge words into a new text.
pub fn enhance(corpus: &Path, text: &str) -> Result<()> {
    let graph = load_graph(corpus)?;
    println!("{}", graph.enhance(text));
    Ok(())
}

/// Compute the shortest path between two words, or from one word to all others.
pub fn path(corpus: &Path, start: &str, end: Option<&str>, json: bool) -> Result<()> {
    let graph = load_graph(corpus)?;

    let Some(end) = end else {
        let paths = graph.shortest_paths_from(start)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&paths)?);
        } else if paths.is_empty() {
            println!("{}", format!("No words reachable from \"{}\"", start).yellow());
        } else {
            println!("Found {} reachable words:\n", paths.len().to_string().cyan());
            for path in paths {
                println!("  {}", path);
            }
        }
        return Ok(());
    };

    let path = graph.shortest_path(start, end)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&path)?);
    } else {
        println!(
            "{} {} {}",
            "Shortest path:".cyan(),
            path.nodes.join(" → "),
            format!("(total weight: {:.2})", path.total_weight as f64).dimmed()
        );
    }

    Ok(())
}

/// Compute PageRank for all words.
pub fn rank(
    corpus: &Path,
    config: &Config,
    limit: usize,
    word: Option<&str>,
    json: bool,
) -> Result<()> {
    let graph = load_graph(corpus)?;
    let scores = compute_pagerank(&graph, &config.pagerank);

    if let Some(word) = word {
        let entry = scores.rank_of(word)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&entry)?);
        } else {
            println!("{}: {:.4}", entry.word.cyan(), entry.rank);
        }
        return Ok(());
    }

    let mut ranked = scores.ranked();
    if limit > 0 {
        ranked.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    println!("{}", "PageRank".cyan().bold());
    for entry in &ranked {
        println!("  {:<20} {:.4}", entry.word, entry.rank);
    }
    println!();
    println!(
        "{}",
        format!(
            "{} words, {} iterations{}",
            scores.len(),
            scores.iterations(),
            if scores.converged() {
                ""
            } else {
                " (not converged)"
            }
        )
        .dimmed()
    );

    Ok(())
}

/// Perform one random walk.
pub fn walk(
    corpus: &Path,
    config: &Config,
    start: Option<&str>,
    seed: Option<u64>,
    output: Option<&Path>,
    json: bool,
) -> Result<()> {
    let graph = load_graph(corpus)?;

    let mut walker = match seed.or(config.walk.seed) {
        Some(seed) => RandomWalker::seeded(seed),
        None => RandomWalker::from_entropy(),
    }
    .with_max_steps(config.walk.max_steps);

    let walk = walker.walk(&graph, start)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&walk)?);
    } else {
        println!("{} {}", "Random walk:".cyan(), walk);
    }

    if let Some(out_path) = output {
        fs::write(out_path, walk.to_text())?;
        println!("{} Walk written to {}", "✓".green(), out_path.display());
    }

    Ok(())
}

/// Export the graph for visualization.
pub fn export(corpus: &Path, output: &Path, dot: bool) -> Result<()> {
    let graph = load_graph(corpus)?;

    let contents = if dot {
        graph.to_dot()
    } else {
        serde_json::to_string_pretty(&graph_json(&graph))?
    };

    fs::write(output, contents)?;
    println!("{} Exported to {}", "✓".green(), output.display());

    Ok(())
}

/// Show corpus and graph statistics.
pub fn stats(corpus_path: &Path) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let graph = WordGraph::from_corpus(&corpus);
    let stats = graph.stats();

    println!("{}", "Lexigraph Stats".cyan().bold());
    println!();
    println!("  {} {}", "Lines:".dimmed(), corpus.line_count());
    println!("  {} {}", "Skipped:".dimmed(), corpus.skipped_lines());
    println!("  {} {}", "Tokens:".dimmed(), corpus.token_count());
    println!("  {} {}", "Nodes:".dimmed(), stats.node_count);
    println!("  {} {}", "Edges:".dimmed(), stats.edge_count);
    println!("  {} {}", "Pairs:".dimmed(), stats.total_weight);

    Ok(())
}

/// Run the interactive menu on stdin/stdout.
pub fn shell(corpus: &Path, config: &Config) -> Result<()> {
    let graph = load_graph(corpus)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&graph, config).run(stdin.lock(), stdout.lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_render_plain() {
        let graph = WordGraph::from_text("b a c. b a b");
        assert_eq!(
            render_graph(&graph, false),
            "a -> b(1) c(1)\nb -> a(2)\nc -> b(1)\n"
        );
    }

    #[test]
    fn test_render_formatted_with_dead_end() {
        let graph = WordGraph::from_text("x y x z");
        assert_eq!(
            render_graph(&graph, true),
            "x → y(1), z(1)\ny → x(1)\nz → (no successors)\n"
        );
    }

    #[test]
    fn test_graph_json_shape() {
        let graph = WordGraph::from_text("a b b");
        let value = graph_json(&graph);

        assert_eq!(value["stats"]["node_count"], 2);
        assert_eq!(value["nodes"], serde_json::json!(["a", "b"]));
        assert_eq!(value["edges"][1]["source"], "b");
        assert_eq!(value["edges"][1]["target"], "b");
        assert_eq!(value["edges"][1]["weight"], 1);
    }

    #[test]
    fn test_export_and_walk_write_files() {
        let mut corpus = NamedTempFile::new().unwrap();
        writeln!(corpus, "one two three").unwrap();
        let out = tempdir().unwrap();

        let dot_path = out.path().join("graph.dot");
        export(corpus.path(), &dot_path, true).unwrap();
        assert!(fs::read_to_string(&dot_path).unwrap().contains("w=1"));

        let walk_path = out.path().join("walk.txt");
        walk(
            corpus.path(),
            &Config::default(),
            Some("one"),
            Some(1),
            Some(&walk_path),
            false,
        )
        .unwrap();
        assert_eq!(fs::read_to_string(&walk_path).unwrap(), "one two three");
    }

    #[test]
    fn test_query_errors_propagate() {
        let mut corpus = NamedTempFile::new().unwrap();
        writeln!(corpus, "alpha beta").unwrap();

        assert!(bridge(corpus.path(), "alpha", "gamma", false).is_err());
        assert!(path(corpus.path(), "beta", Some("alpha"), false).is_err());
        assert!(load_graph(Path::new("/definitely/not/here.txt")).is_err());

        let config = Config::default();
        let err = rank(corpus.path(), &config, 10, Some("Gamma!"), false).unwrap_err();
        assert_eq!(err.to_string(), "\"gamma!\" is not in the graph");
        assert!(rank(corpus.path(), &config, 10, Some("ALPHA!"), true).is_ok());
    }
}
