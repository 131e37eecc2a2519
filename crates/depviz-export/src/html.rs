//! Interactive HTML rendering via vis-network.

use serde::Serialize;

use depviz_resolver::graph::{DependencyGraph, FetchStatus};
use depviz_util::errors::DepvizError;

use crate::assets::{LOADING_JS, PAGE_CSS, VIS_OPTIONS, ZOOM_JS};
use crate::view::LevelView;

/// Level palette, cycled by level number when a level view is active.
const LEVEL_PALETTE: [&str; 7] = [
    "#1976d2", "#388e3c", "#fbc02d", "#e64a19", "#7b1fa2", "#00838f", "#c2185b",
];
const SHARED_COLOR: &str = "#8e24aa";

const RESOLVED_COLOR: &str = "#81c784";
const FAILED_COLOR: &str = "#e57373";
const DEPTH_CUT_COLOR: &str = "#bdbdbd";

const NODE_SIZE: f64 = 16.0;
/// Roots are pinned on a circle of this radius when a level view is
/// active, so each root's fan-out gets its own sector.
const ROOT_CIRCLE_RADIUS: f64 = 800.0;

/// Canvas options for the rendered page.
#[derive(Debug, Clone, Copy)]
pub struct HtmlOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            width: 2400,
            height: 1600,
        }
    }
}

#[derive(Serialize)]
struct VisFont {
    size: u32,
    face: &'static str,
    color: &'static str,
    bold: bool,
}

impl Default for VisFont {
    fn default() -> Self {
        Self {
            size: 16,
            face: "Arial",
            color: "#111",
            bold: true,
        }
    }
}

#[derive(Serialize)]
struct VisNode {
    id: String,
    label: String,
    title: String,
    color: String,
    size: f64,
    font: VisFont,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fixed: Option<bool>,
}

#[derive(Serialize)]
struct VisEdge {
    from: String,
    to: String,
}

fn status_color(status: FetchStatus) -> &'static str {
    match status {
        FetchStatus::Resolved => RESOLVED_COLOR,
        FetchStatus::FetchFailed => FAILED_COLOR,
        FetchStatus::DepthCut => DEPTH_CUT_COLOR,
    }
}

/// Render the graph as a self-contained interactive page.
///
/// Without a level view, nodes are colored by fetch status. With one, the
/// graph is filtered to the retained levels, colored by level, shared
/// nodes are purple and enlarged, and roots are pinned on a circle.
pub fn render_html(
    graph: &DependencyGraph,
    view: Option<&LevelView>,
    opts: &HtmlOptions,
) -> miette::Result<String> {
    let mut nodes: Vec<VisNode> = Vec::new();
    let mut edges: Vec<VisEdge> = Vec::new();

    match view {
        Some(view) => {
            let roots = graph.roots();
            let n_roots = roots.len().max(1);
            for idx in view.retained() {
                let node = graph.node(idx);
                let level = view.level(idx).unwrap_or(0);
                let color = if view.is_shared(idx) {
                    SHARED_COLOR.to_string()
                } else if level > 0 {
                    LEVEL_PALETTE[(level - 1) % LEVEL_PALETTE.len()].to_string()
                } else {
                    "#888".to_string()
                };
                let size = if view.is_shared(idx) {
                    NODE_SIZE * 1.2
                } else {
                    NODE_SIZE
                };
                let (x, y, fixed) = match roots.iter().position(|&r| r == idx) {
                    Some(i) => {
                        let angle = 2.0 * std::f64::consts::PI * i as f64 / n_roots as f64;
                        (
                            Some(ROOT_CIRCLE_RADIUS * angle.cos()),
                            Some(ROOT_CIRCLE_RADIUS * angle.sin()),
                            Some(true),
                        )
                    }
                    None => (None, None, None),
                };
                nodes.push(VisNode {
                    id: node.name.as_str().to_string(),
                    label: node.name.raw().to_string(),
                    title: tooltip(graph, idx),
                    color,
                    size,
                    font: VisFont::default(),
                    x,
                    y,
                    fixed,
                });
            }
            for (from, to, _edge) in graph.edges() {
                if view.contains(from) && view.contains(to) {
                    edges.push(VisEdge {
                        from: graph.node(from).name.as_str().to_string(),
                        to: graph.node(to).name.as_str().to_string(),
                    });
                }
            }
        }
        None => {
            for idx in graph.node_indices() {
                let node = graph.node(idx);
                nodes.push(VisNode {
                    id: node.name.as_str().to_string(),
                    label: node.name.raw().to_string(),
                    title: tooltip(graph, idx),
                    color: status_color(node.status).to_string(),
                    size: NODE_SIZE,
                    font: VisFont::default(),
                    x: None,
                    y: None,
                    fixed: None,
                });
            }
            for (from, to, _edge) in graph.edges() {
                edges.push(VisEdge {
                    from: graph.node(from).name.as_str().to_string(),
                    to: graph.node(to).name.as_str().to_string(),
                });
            }
        }
    }

    let nodes_json = serde_json::to_string(&nodes).map_err(|e| DepvizError::Export {
        message: format!("Failed to serialize nodes: {e}"),
    })?;
    let edges_json = serde_json::to_string(&edges).map_err(|e| DepvizError::Export {
        message: format!("Failed to serialize edges: {e}"),
    })?;

    let css = PAGE_CSS
        .replace("{width}", &opts.width.to_string())
        .replace("{height}", &opts.height.to_string());

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>depviz — dependency graph</title>
<script src="https://unpkg.com/vis-network@9.1.9/standalone/umd/vis-network.min.js"></script>
{css}</head>
<body>
<div id="minimalLoading">0%</div>
<div id="mynetwork"></div>
<script>
var nodes = new vis.DataSet({nodes_json});
var edges = new vis.DataSet({edges_json});
var container = document.getElementById('mynetwork');
window.network = new vis.Network(container, {{nodes: nodes, edges: edges}}, {VIS_OPTIONS});
</script>
{LOADING_JS}{ZOOM_JS}</body>
</html>
"#
    ))
}

fn tooltip(graph: &DependencyGraph, idx: petgraph::graph::NodeIndex) -> String {
    let node = graph.node(idx);
    format!(
        "{} {}\nstatus: {}\ndepth: {}",
        node.name.raw(),
        node.version.as_deref().unwrap_or("?"),
        node.status,
        node.depth
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use depviz_core::package::PackageName;
    use depviz_resolver::graph::{DepEdge, PackageNode};

    fn sample_graph() -> DependencyGraph {
        let mut g = DependencyGraph::new();
        let a = g.add_node(PackageNode {
            name: PackageName::new("Flask"),
            version: Some("3.0.0".into()),
            depth: 0,
            status: FetchStatus::Resolved,
        });
        g.add_root(a);
        let b = g.add_node(PackageNode {
            name: PackageName::new("werkzeug"),
            version: None,
            depth: 1,
            status: FetchStatus::FetchFailed,
        });
        g.add_edge(a, b, DepEdge { from_root: true });
        g
    }

    #[test]
    fn page_embeds_nodes_edges_and_options() {
        let g = sample_graph();
        let html = render_html(&g, None, &HtmlOptions::default()).unwrap();

        assert!(html.contains(r#""id":"flask""#));
        assert!(html.contains(r#""label":"Flask""#));
        assert!(html.contains(r#""from":"flask","to":"werkzeug""#));
        assert!(html.contains("barnesHut"));
        assert!(html.contains("minimalLoading"));
        assert!(html.contains("2400px"));
    }

    #[test]
    fn status_colors_without_view() {
        let g = sample_graph();
        let html = render_html(&g, None, &HtmlOptions::default()).unwrap();
        assert!(html.contains(RESOLVED_COLOR));
        assert!(html.contains(FAILED_COLOR));
    }

    #[test]
    fn level_view_pins_roots_and_colors_by_level() {
        let g = sample_graph();
        let view = LevelView::build(&g, 2);
        let html = render_html(&g, Some(&view), &HtmlOptions::default()).unwrap();

        assert!(html.contains(r#""fixed":true"#));
        assert!(html.contains(LEVEL_PALETTE[0]));
        assert!(html.contains(LEVEL_PALETTE[1]));
    }

    #[test]
    fn level_view_filters_edges_to_retained_nodes() {
        let g = sample_graph();
        let view = LevelView::build(&g, 1);
        let html = render_html(&g, Some(&view), &HtmlOptions::default()).unwrap();

        assert!(html.contains(r#""id":"flask""#));
        assert!(!html.contains(r#""id":"werkzeug""#));
        assert!(!html.contains(r#""from":"flask""#));
    }
}
