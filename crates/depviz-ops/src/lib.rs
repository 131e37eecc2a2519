//! High-level operations behind the CLI commands.
//!
//! Each `ops_*` module owns one command's wiring: manifest → fetcher →
//! resolver → renderer, with progress UX on stderr. Command handlers in
//! `depviz-cli` stay thin.

pub mod ops_export;
pub mod ops_render;
pub mod ops_tree;

use std::path::Path;
use std::sync::Arc;

use depviz_core::config::Config;
use depviz_core::manifest;
use depviz_core::package::PackageName;
use depviz_pypi::index::PYPI_INDEX_URL;
use depviz_pypi::{PackageIndex, PyPiFetcher};
use depviz_resolver::fetcher::ReleaseFetcher;
use depviz_resolver::graph::{DependencyGraph, FetchStatus};
use depviz_resolver::resolver;
use depviz_util::errors::{DepvizError, DepvizResult};
use depviz_util::progress::{spinner, status, status_warn};
use tracing::debug;

/// Load root package names from a requirements file, rejecting an empty
/// manifest.
pub(crate) fn load_roots(file: &Path) -> DepvizResult<Vec<PackageName>> {
    let roots = manifest::parse_requirements(file)?;
    if roots.is_empty() {
        return Err(DepvizError::Manifest {
            message: format!("No packages found in {}", file.display()),
        }
        .into());
    }
    debug!("parsed {} root package(s) from {}", roots.len(), file.display());
    Ok(roots)
}

/// Resolve the dependency graph for `roots` against the configured index,
/// with a spinner while fetches are in flight and a status summary after.
pub(crate) async fn resolve_graph(
    roots: &[PackageName],
    depth: usize,
    index_url: Option<&str>,
    config: &Config,
) -> DepvizResult<DependencyGraph> {
    let url = index_url.unwrap_or(&config.resolve.index_url);
    let index = if url == PYPI_INDEX_URL {
        PackageIndex::pypi()
    } else {
        PackageIndex::custom(url)
    };
    let fetcher: Arc<dyn ReleaseFetcher> = Arc::new(PyPiFetcher::new(index)?);
    debug!(index = %url, depth, "resolving dependency graph");

    let sp = spinner(&format!(
        "Resolving {} package(s) to depth {depth}...",
        roots.len()
    ));
    let graph = resolver::resolve(roots, depth, fetcher).await?;
    sp.finish_and_clear();

    let failed = graph.count_status(FetchStatus::FetchFailed);
    let cut = graph.count_status(FetchStatus::DepthCut);
    status(
        "Resolved",
        &format!(
            "{} packages, {} edges ({failed} failed, {cut} depth-cut)",
            graph.node_count(),
            graph.edge_count()
        ),
    );
    if failed > 0 {
        status_warn(
            "Warning",
            &format!("{failed} package(s) could not be fetched; shown as unresolved"),
        );
    }
    Ok(graph)
}
