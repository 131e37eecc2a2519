//! Operation: print the dependency tree to stdout.

use std::path::PathBuf;

use depviz_core::config::Config;
use depviz_util::errors::DepvizResult;

use crate::{load_roots, resolve_graph};

/// Options for `depviz tree`.
pub struct TreeOptions {
    /// Requirements file to read roots from.
    pub file: PathBuf,
    /// Resolution depth; the configured default applies when unset.
    pub depth: Option<usize>,
    /// Print the shortest root path to this package instead of the tree.
    pub why: Option<String>,
    /// Index URL override.
    pub index_url: Option<String>,
}

/// Resolve and print the dependency forest, one tree per root.
pub async fn tree(opts: &TreeOptions) -> DepvizResult<()> {
    let config = Config::load()?;
    let roots = load_roots(&opts.file)?;
    let depth = opts.depth.unwrap_or(config.resolve.depth);

    let graph = resolve_graph(&roots, depth, opts.index_url.as_deref(), &config).await?;

    if let Some(ref target) = opts.why {
        match graph.find_path(target) {
            Some(path) => {
                println!("Path to {target}:");
                for (i, node) in path.iter().enumerate() {
                    let indent = "  ".repeat(i);
                    println!("{indent}{node}");
                }
            }
            None => println!("Package '{target}' not found in the graph."),
        }
        return Ok(());
    }

    print!("{}", graph.print_tree(None));
    Ok(())
}
