//! CLI argument definitions for depviz.
//!
//! Uses `clap` derive macros to define the full command surface. Each
//! command corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use depviz_core::{DEFAULT_MANIFEST_FILE, DEFAULT_OUTPUT_HTML};

#[derive(Parser, Debug)]
#[command(
    name = "depviz",
    version,
    about = "Visualize Python dependency graphs from a requirements file",
    long_about = "depviz resolves the packages declared in a requirements.txt file into a \
                  dependency graph by querying the PyPI JSON API, then renders the graph as \
                  an interactive HTML page, a printable PDF, a Graphviz document, or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve dependencies and render an interactive HTML graph
    Render {
        /// Path to the requirements file
        #[arg(short, long, default_value = DEFAULT_MANIFEST_FILE)]
        file: PathBuf,
        /// Output HTML file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_HTML)]
        output: PathBuf,
        /// Maximum dependency depth (0 = roots only)
        #[arg(short, long)]
        depth: Option<usize>,
        /// Only visualize the top N levels, highlighting shared dependencies
        #[arg(long)]
        levels: Option<usize>,
        /// Also export the graph to this PDF path (requires a Chromium-family browser)
        #[arg(long)]
        pdf: Option<PathBuf>,
        /// Package index URL (defaults to PyPI)
        #[arg(long)]
        index_url: Option<String>,
    },

    /// Print the dependency tree
    Tree {
        /// Path to the requirements file
        #[arg(short, long, default_value = DEFAULT_MANIFEST_FILE)]
        file: PathBuf,
        /// Maximum dependency depth (0 = roots only)
        #[arg(short, long)]
        depth: Option<usize>,
        /// Show the shortest path from a root to this package
        #[arg(long)]
        why: Option<String>,
        /// Package index URL (defaults to PyPI)
        #[arg(long)]
        index_url: Option<String>,
    },

    /// Export the graph as a static document
    Export {
        /// Output format: html, dot, json
        #[arg(long)]
        format: String,
        /// Path to the requirements file
        #[arg(short, long, default_value = DEFAULT_MANIFEST_FILE)]
        file: PathBuf,
        /// Output path, or `-` for stdout
        #[arg(short, long, default_value = "-")]
        output: String,
        /// Maximum dependency depth (0 = roots only)
        #[arg(short, long)]
        depth: Option<usize>,
        /// Package index URL (defaults to PyPI)
        #[arg(long)]
        index_url: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
