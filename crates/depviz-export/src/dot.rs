//! Static Graphviz document rendering.

use depviz_resolver::graph::{DependencyGraph, FetchStatus};

fn fill_color(status: FetchStatus) -> &'static str {
    match status {
        FetchStatus::Resolved => "#c8e6c9",
        FetchStatus::FetchFailed => "#ffcdd2",
        FetchStatus::DepthCut => "#eeeeee",
    }
}

/// Quote and escape a DOT identifier.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Render the graph as a Graphviz `digraph`, suitable for `dot -Tpdf`.
///
/// Nodes are filled by fetch status; roots get a heavier border, edges out
/// of roots a heavier stroke.
pub fn render_dot(graph: &DependencyGraph) -> String {
    let mut out = String::new();
    out.push_str("digraph deps {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str("    node [shape=box, style=filled, fontname=\"Helvetica\"];\n");

    for idx in graph.node_indices() {
        let node = graph.node(idx);
        let label = match &node.version {
            Some(v) => format!("{}\\n{v}", node.name.raw()),
            None => format!("{}\\n({})", node.name.raw(), node.status),
        };
        let penwidth = if graph.is_root(idx) { 2.0 } else { 1.0 };
        out.push_str(&format!(
            "    {} [label=\"{label}\", fillcolor={}, penwidth={penwidth}];\n",
            quoted(node.name.as_str()),
            quoted(fill_color(node.status)),
        ));
    }

    out.push('\n');
    for (from, to, edge) in graph.edges() {
        let penwidth = if edge.from_root { 1.5 } else { 1.0 };
        out.push_str(&format!(
            "    {} -> {} [penwidth={penwidth}];\n",
            quoted(graph.node(from).name.as_str()),
            quoted(graph.node(to).name.as_str()),
        ));
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use depviz_core::package::PackageName;
    use depviz_resolver::graph::{DepEdge, PackageNode};

    fn node(name: &str, depth: usize, status: FetchStatus) -> PackageNode {
        PackageNode {
            name: PackageName::new(name),
            version: (status == FetchStatus::Resolved).then(|| "1.0".to_string()),
            depth,
            status,
        }
    }

    #[test]
    fn renders_nodes_edges_and_statuses() {
        let mut g = DependencyGraph::new();
        let a = g.add_node(node("flask", 0, FetchStatus::Resolved));
        g.add_root(a);
        let b = g.add_node(node("werkzeug", 1, FetchStatus::FetchFailed));
        let c = g.add_node(node("click", 1, FetchStatus::DepthCut));
        g.add_edge(a, b, DepEdge { from_root: true });
        g.add_edge(a, c, DepEdge { from_root: true });

        let dot = render_dot(&g);
        assert!(dot.starts_with("digraph deps {"));
        assert!(dot.contains("\"flask\" [label=\"flask\\n1.0\""));
        assert!(dot.contains("werkzeug\\n(fetch-failed)"));
        assert!(dot.contains("click\\n(depth-cut)"));
        assert!(dot.contains("\"flask\" -> \"werkzeug\" [penwidth=1.5];"));
        // Root border is heavier.
        assert!(dot.contains("penwidth=2"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn identifiers_are_escaped() {
        assert_eq!(quoted(r#"we"ird"#), r#""we\"ird""#);
        assert_eq!(quoted(r"back\slash"), r#""back\\slash""#);
    }
}
