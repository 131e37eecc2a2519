//! Operation: resolve the graph and render the interactive page.

use std::path::PathBuf;

use depviz_core::config::Config;
use depviz_export::pdf::{self, PdfOptions};
use depviz_export::{ExportFormat, HtmlOptions, LevelView};
use depviz_util::errors::{DepvizError, DepvizResult};
use depviz_util::fs::ensure_parent_dir;
use depviz_util::progress::status;

use crate::{load_roots, resolve_graph};

/// Options for `depviz render`.
pub struct RenderOptions {
    /// Requirements file to read roots from.
    pub file: PathBuf,
    /// Output path for the HTML page.
    pub output: PathBuf,
    /// Resolution depth; the configured default applies when unset.
    pub depth: Option<usize>,
    /// Restrict the rendering to the top N levels with shared-node
    /// highlighting.
    pub levels: Option<usize>,
    /// Also print the page to this PDF path.
    pub pdf: Option<PathBuf>,
    /// Index URL override.
    pub index_url: Option<String>,
}

/// Resolve and render the dependency graph.
pub async fn render(opts: &RenderOptions) -> DepvizResult<()> {
    let config = Config::load()?;
    let roots = load_roots(&opts.file)?;
    let depth = opts.depth.unwrap_or(config.resolve.depth);

    let graph = resolve_graph(&roots, depth, opts.index_url.as_deref(), &config).await?;

    let view = opts.levels.map(|levels| LevelView::build(&graph, levels));
    let html_opts = HtmlOptions {
        width: config.graph.width,
        height: config.graph.height,
    };
    let html = depviz_export::render(ExportFormat::Html, &graph, view.as_ref(), &html_opts)?;

    ensure_parent_dir(&opts.output).map_err(DepvizError::Io)?;
    std::fs::write(&opts.output, html).map_err(DepvizError::Io)?;
    status("Rendered", &opts.output.display().to_string());

    if let Some(ref pdf_path) = opts.pdf {
        let pdf_opts = PdfOptions {
            browser: config.pdf.browser.clone(),
            physics_wait_ms: config.pdf.physics_wait_ms,
        };
        pdf::export_pdf(&opts.output, pdf_path, &pdf_opts)?;
        status("Exported", &pdf_path.display().to_string());
    }
    Ok(())
}
