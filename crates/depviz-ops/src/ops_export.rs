//! Operation: export the graph as a static document.

use std::path::PathBuf;

use depviz_core::config::Config;
use depviz_export::{ExportFormat, HtmlOptions};
use depviz_util::errors::{DepvizError, DepvizResult};
use depviz_util::fs::ensure_parent_dir;
use depviz_util::progress::status;

use crate::{load_roots, resolve_graph};

/// Options for `depviz export`.
pub struct ExportOptions {
    /// Requirements file to read roots from.
    pub file: PathBuf,
    /// Output format.
    pub format: ExportFormat,
    /// Output path; stdout when unset.
    pub output: Option<PathBuf>,
    /// Resolution depth; the configured default applies when unset.
    pub depth: Option<usize>,
    /// Index URL override.
    pub index_url: Option<String>,
}

/// Resolve and write the graph in the requested format.
pub async fn export(opts: &ExportOptions) -> DepvizResult<()> {
    let config = Config::load()?;
    let roots = load_roots(&opts.file)?;
    let depth = opts.depth.unwrap_or(config.resolve.depth);

    let graph = resolve_graph(&roots, depth, opts.index_url.as_deref(), &config).await?;

    let html_opts = HtmlOptions {
        width: config.graph.width,
        height: config.graph.height,
    };
    let rendered = depviz_export::render(opts.format, &graph, None, &html_opts)?;

    match &opts.output {
        Some(path) => {
            ensure_parent_dir(path).map_err(DepvizError::Io)?;
            std::fs::write(path, rendered).map_err(DepvizError::Io)?;
            status("Exported", &format!("{} ({})", path.display(), opts.format));
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
