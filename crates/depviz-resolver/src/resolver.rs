//! Core resolution algorithm: level-ordered BFS with per-level parallel
//! prefetch, first-sight deduplication, and depth bounding.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use depviz_core::package::PackageName;
use depviz_util::errors::DepvizError;
use petgraph::graph::NodeIndex;

use crate::fetcher::{FetchError, Release, ReleaseFetcher};
use crate::graph::{DepEdge, DependencyGraph, FetchStatus, PackageNode};
use crate::visited::VisitedSet;

const MAX_CONCURRENT_FETCHES: usize = 8;

/// Entry in the BFS queue.
struct QueueEntry {
    name: PackageName,
    depth: usize,
    parent: Option<NodeIndex>,
}

/// Resolve the dependency graph reachable from `roots`, fetching release
/// metadata through `fetcher`, up to `max_depth` hops.
///
/// `max_depth` of 0 means roots only: every root node is depth-cut and the
/// fetcher is never invoked. Per-package fetch failures are recorded on the
/// affected node and never abort the run; the only fatal error is a
/// malformed root name, raised before any fetch.
///
/// The queue is drained one depth level at a time, so the depth recorded on
/// a node is always the shortest hop count from any root, regardless of the
/// order in which longer paths to it are discovered. Fetches within a level
/// run in parallel; each name is fetched at most once.
pub async fn resolve(
    roots: &[PackageName],
    max_depth: usize,
    fetcher: Arc<dyn ReleaseFetcher>,
) -> miette::Result<DependencyGraph> {
    for root in roots {
        if root.is_empty() {
            return Err(DepvizError::InvalidInput {
                message: "package names must not be empty".to_string(),
            }
            .into());
        }
    }

    let mut graph = DependencyGraph::new();
    let mut visited = VisitedSet::new();
    let mut queue: VecDeque<QueueEntry> = roots
        .iter()
        .map(|name| QueueEntry {
            name: name.clone(),
            depth: 0,
            parent: None,
        })
        .collect();

    let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_FETCHES));

    while !queue.is_empty() {
        // Drain the current depth level from the front of the queue
        let current_depth = queue.front().map(|e| e.depth).unwrap_or(0);
        let mut level: Vec<QueueEntry> = Vec::new();
        while queue.front().is_some_and(|e| e.depth == current_depth) {
            level.push(queue.pop_front().unwrap());
        }

        // Prefetch releases for this level in parallel. Entries at the
        // depth bound are excluded: depth-cut nodes never fetch.
        let mut fetched: HashMap<String, Result<Release, FetchError>> = HashMap::new();
        if current_depth < max_depth {
            let mut to_fetch: Vec<PackageName> = Vec::new();
            for entry in &level {
                if !visited.contains(&entry.name) && !to_fetch.contains(&entry.name) {
                    to_fetch.push(entry.name.clone());
                }
            }

            let mut join_set = JoinSet::new();
            for name in to_fetch {
                let fetcher = Arc::clone(&fetcher);
                let sem = Arc::clone(&semaphore);
                join_set.spawn(async move {
                    let _permit = sem.acquire().await;
                    let result = fetcher.fetch_release(&name).await;
                    (name.as_str().to_string(), result)
                });
            }
            while let Some(joined) = join_set.join_next().await {
                if let Ok((key, result)) = joined {
                    fetched.insert(key, result);
                }
            }
        }

        // Process entries in queue order; node creation order stays
        // deterministic regardless of fetch completion order.
        for entry in level {
            if visited.contains(&entry.name) {
                // Re-encounter: the node exists, only the edge is new.
                if let (Some(parent), Some(idx)) = (entry.parent, graph.find(entry.name.as_str()))
                {
                    let from_root = graph.node(parent).depth == 0;
                    graph.add_edge(parent, idx, DepEdge { from_root });
                }
                continue;
            }
            visited.visit(&entry.name);

            let (status, version, children) = if entry.depth == max_depth {
                (FetchStatus::DepthCut, None, Vec::new())
            } else {
                match fetched.remove(entry.name.as_str()) {
                    Some(Ok(release)) => (FetchStatus::Resolved, release.version, release.requires),
                    Some(Err(err)) => {
                        tracing::warn!(package = %entry.name, error = %err, "failed to fetch release metadata");
                        (FetchStatus::FetchFailed, None, Vec::new())
                    }
                    None => {
                        tracing::warn!(package = %entry.name, "fetch task did not complete");
                        (FetchStatus::FetchFailed, None, Vec::new())
                    }
                }
            };

            let idx = graph.add_node(PackageNode {
                name: entry.name.clone(),
                version,
                depth: entry.depth,
                status,
            });
            match entry.parent {
                Some(parent) => {
                    let from_root = graph.node(parent).depth == 0;
                    graph.add_edge(parent, idx, DepEdge { from_root });
                }
                None => graph.add_root(idx),
            }

            for child in children {
                if child.is_empty() {
                    tracing::debug!(parent = %entry.name, "skipping empty dependency name");
                    continue;
                }
                queue.push_back(QueueEntry {
                    name: child,
                    depth: entry.depth + 1,
                    parent: Some(idx),
                });
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "dependency graph assembled"
    );
    Ok(graph)
}
