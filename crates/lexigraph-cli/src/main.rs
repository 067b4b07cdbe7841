//! Lexigraph CLI - Command-line interface for Lexigraph
//!
//! This is the main entry point for users interacting with Lexigraph.
//! It builds a word graph from a corpus file and runs one query against it,
//! or drops into an interactive menu.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod shell;

use config::Config;

#[derive(Parser)]
#[command(name = "lexigraph")]
#[command(author = "Lexigraph Contributors")]
#[command(version)]
#[command(about = "Word adjacency graphs from plain-text corpora", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to .lexigraph/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config into a directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print every word with its successors and edge weights
    Show {
        /// Corpus text file
        corpus: PathBuf,

        /// Use the comma-separated layout
        #[arg(long)]
        formatted: bool,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find the bridge words between two words
    Bridge {
        /// Corpus text file
        corpus: PathBuf,

        word1: String,

        word2: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Insert bridge words into a new text
    Enhance {
        /// Corpus text file
        corpus: PathBuf,

        /// Text to enhance
        text: String,
    },

    /// Compute the weighted shortest path between words
    Path {
        /// Corpus text file
        corpus: PathBuf,

        start: String,

        /// Target word (omit for paths to every reachable word)
        end: Option<String>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Rank words by PageRank
    Rank {
        /// Corpus text file
        corpus: PathBuf,

        /// Maximum results to show (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Show the rank of a single word
        #[arg(short, long)]
        word: Option<String>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Take a random walk through the graph
    Walk {
        /// Corpus text file
        corpus: PathBuf,

        /// Start word (random if omitted)
        #[arg(short, long)]
        start: Option<String>,

        /// Seed for a reproducible walk
        #[arg(long)]
        seed: Option<u64>,

        /// Also write the walk text to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Export the graph for visualization
    Export {
        /// Corpus text file
        corpus: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "lexigraph-graph.json")]
        output: PathBuf,

        /// Write Graphviz DOT instead of JSON
        #[arg(long)]
        dot: bool,
    },

    /// Show corpus and graph statistics
    Stats {
        /// Corpus text file
        corpus: PathBuf,
    },

    /// Start the interactive menu
    Shell {
        /// Corpus text file
        corpus: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match Config::load(cli.config.as_deref()) {
        Ok(config) => run(cli.command, &config),
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Init { path } => commands::init(&path),
        Commands::Show {
            corpus,
            formatted,
            json,
        } => commands::show(&corpus, formatted, json),
        Commands::Bridge {
            corpus,
            word1,
            word2,
            json,
        } => commands::bridge(&corpus, &word1, &word2, json),
        Commands::Enhance { corpus, text } => commands::enhance(&corpus, &text),
        Commands::Path {
            corpus,
            start,
            end,
            json,
        } => commands::path(&corpus, &start, end.as_deref(), json),
        Commands::Rank {
            corpus,
            limit,
            word,
            json,
        } => commands::rank(&corpus, config, limit, word.as_deref(), json),
        Commands::Walk {
            corpus,
            start,
            seed,
            output,
            json,
        } => commands::walk(
            &corpus,
            config,
            start.as_deref(),
            seed,
            output.as_deref(),
            json,
        ),
        Commands::Export { corpus, output, dot } => commands::export(&corpus, &output, dot),
        Commands::Stats { corpus } => commands::stats(&corpus),
        Commands::Shell { corpus } => commands::shell(&corpus, config),
    }
}
