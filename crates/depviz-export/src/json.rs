//! Machine-readable JSON export.

use serde::Serialize;

use depviz_resolver::graph::DependencyGraph;
use depviz_util::errors::DepvizError;

#[derive(Serialize)]
struct JsonNode<'a> {
    name: &'a str,
    label: &'a str,
    version: Option<&'a str>,
    status: &'static str,
    depth: usize,
    root: bool,
}

#[derive(Serialize)]
struct JsonEdge<'a> {
    parent: &'a str,
    child: &'a str,
}

#[derive(Serialize)]
struct JsonGraph<'a> {
    nodes: Vec<JsonNode<'a>>,
    edges: Vec<JsonEdge<'a>>,
}

/// Serialize the full graph as `{ "nodes": [...], "edges": [...] }`.
pub fn render_json(graph: &DependencyGraph) -> miette::Result<String> {
    let nodes = graph
        .node_indices()
        .map(|idx| {
            let node = graph.node(idx);
            JsonNode {
                name: node.name.as_str(),
                label: node.name.raw(),
                version: node.version.as_deref(),
                status: node.status.as_str(),
                depth: node.depth,
                root: graph.is_root(idx),
            }
        })
        .collect();
    let edges = graph
        .edges()
        .map(|(from, to, _)| JsonEdge {
            parent: graph.node(from).name.as_str(),
            child: graph.node(to).name.as_str(),
        })
        .collect();

    serde_json::to_string_pretty(&JsonGraph { nodes, edges }).map_err(|e| {
        DepvizError::Export {
            message: format!("Failed to serialize graph: {e}"),
        }
        .into()
    })
}
