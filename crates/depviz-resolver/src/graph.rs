//! Dependency graph construction and traversal.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use depviz_core::package::PackageName;

/// How far resolution got for one package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    /// Release metadata was fetched and the node's children were enqueued.
    Resolved,
    /// The fetch failed; the node has no version and no children.
    FetchFailed,
    /// The node sits at the depth bound; its children were deliberately
    /// never fetched. Not a failure.
    DepthCut,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Resolved => "resolved",
            FetchStatus::FetchFailed => "fetch-failed",
            FetchStatus::DepthCut => "depth-cut",
        }
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the resolved dependency graph.
#[derive(Debug, Clone)]
pub struct PackageNode {
    pub name: PackageName,
    /// The index's reported version; `None` when the fetch failed or was
    /// never attempted.
    pub version: Option<String>,
    /// Shortest hop count from any root.
    pub depth: usize,
    pub status: FetchStatus,
}

impl fmt::Display for PackageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.version, self.status) {
            (Some(v), _) => write!(f, "{} v{}", self.name, v),
            (None, FetchStatus::FetchFailed) => write!(f, "{} (fetch failed)", self.name),
            (None, FetchStatus::DepthCut) => write!(f, "{} (depth cut)", self.name),
            (None, _) => write!(f, "{}", self.name),
        }
    }
}

/// Edge label: parent declares a dependency on child.
#[derive(Debug, Clone)]
pub struct DepEdge {
    /// True when the parent is a root, used by renderers to style the
    /// first fan-out differently.
    pub from_root: bool,
}

/// A resolved dependency graph backed by petgraph.
///
/// Nodes are deduplicated by normalized package name; duplicate
/// parent→child declarations collapse to a single edge. Built once by
/// [`crate::resolver::resolve`] and read-only afterwards.
pub struct DependencyGraph {
    graph: DiGraph<PackageNode, DepEdge>,
    /// Lookup from normalized name to node index.
    index: HashMap<String, NodeIndex>,
    /// Root nodes in manifest order.
    roots: Vec<NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            roots: Vec::new(),
        }
    }

    /// Add or retrieve a node. If the name already exists, returns the
    /// existing index without touching the stored node.
    pub fn add_node(&mut self, node: PackageNode) -> NodeIndex {
        let key = node.name.as_str().to_string();
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(node);
        self.index.insert(key, idx);
        idx
    }

    /// Record a node as a root (a package named directly in the manifest).
    pub fn add_root(&mut self, idx: NodeIndex) {
        if !self.roots.contains(&idx) {
            self.roots.push(idx);
        }
    }

    /// Add a dependency edge from `from` to `to`. A duplicate of an
    /// existing edge is dropped; the graph stays simple.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: DepEdge) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            self.graph.add_edge(from, to, edge);
        }
    }

    /// Look up a node by normalized name.
    pub fn find(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    /// Get the node data for an index.
    pub fn node(&self, idx: NodeIndex) -> &PackageNode {
        &self.graph[idx]
    }

    /// Root nodes in manifest order.
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    pub fn is_root(&self, idx: NodeIndex) -> bool {
        self.roots.contains(&idx)
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// All edges as (parent, child, label).
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &DepEdge)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target(), e.weight()))
    }

    /// Direct dependencies of a node.
    pub fn dependencies_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, &DepEdge)> {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), e.weight()))
            .collect()
    }

    /// Reverse dependencies (who declares this node).
    pub fn dependents_of(&self, idx: NodeIndex) -> Vec<(NodeIndex, &DepEdge)> {
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| (e.source(), e.weight()))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Count the nodes carrying a given status.
    pub fn count_status(&self, status: FetchStatus) -> usize {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph[idx].status == status)
            .count()
    }

    /// Print the dependency forest to a string, one tree per root.
    pub fn print_tree(&self, max_depth: Option<usize>) -> String {
        let mut output = String::new();
        for &root in &self.roots {
            output.push_str(&format!("{}\n", self.graph[root]));

            let mut visited = HashSet::new();
            visited.insert(root);

            let deps = self.dependencies_of(root);
            let count = deps.len();
            for (i, (idx, _edge)) in deps.iter().enumerate() {
                let is_last = i == count - 1;
                self.print_subtree(&mut output, *idx, "", is_last, 1, max_depth, &mut visited);
            }
        }
        output
    }

    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let node = &self.graph[idx];
        output.push_str(&format!("{prefix}{connector}{node}\n"));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        // Cycle guard: a node already on the current chain is printed but
        // not expanded again.
        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let deps = self.dependencies_of(idx);
        let count = deps.len();
        for (i, (child, _)) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            self.print_subtree(
                output,
                *child,
                &child_prefix,
                is_last,
                depth + 1,
                max_depth,
                visited,
            );
        }

        visited.remove(&idx);
    }

    /// Find the shortest path from any root to a dependency.
    ///
    /// The target is given as a raw name; it is normalized before lookup.
    pub fn find_path(&self, target: &str) -> Option<Vec<&PackageNode>> {
        let target = self.find(&depviz_core::package::normalize(target))?;

        let mut predecessor: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut seen: HashSet<NodeIndex> = self.roots.iter().copied().collect();
        let mut queue: VecDeque<NodeIndex> = self.roots.iter().copied().collect();

        while let Some(current) = queue.pop_front() {
            if current == target {
                let mut path = vec![current];
                let mut at = current;
                while let Some(&prev) = predecessor.get(&at) {
                    path.push(prev);
                    at = prev;
                }
                path.reverse();
                return Some(path.iter().map(|&idx| &self.graph[idx]).collect());
            }
            for edge in self.graph.edges(current) {
                if seen.insert(edge.target()) {
                    predecessor.insert(edge.target(), current);
                    queue.push_back(edge.target());
                }
            }
        }
        None
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node(name: &str, depth: usize) -> PackageNode {
        PackageNode {
            name: PackageName::new(name),
            version: Some("1.0.0".to_string()),
            depth,
            status: FetchStatus::Resolved,
        }
    }

    #[test]
    fn add_and_find() {
        let mut g = DependencyGraph::new();
        let idx = g.add_node(make_node("flask", 0));
        assert_eq!(g.find("flask"), Some(idx));
        assert_eq!(g.node(idx).version.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn duplicate_add_returns_same_index() {
        let mut g = DependencyGraph::new();
        let idx1 = g.add_node(make_node("flask", 0));
        let idx2 = g.add_node(make_node("Flask", 3));
        assert_eq!(idx1, idx2);
        assert_eq!(g.node_count(), 1);
        // First sight wins; the second add never touches the stored node.
        assert_eq!(g.node(idx1).depth, 0);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut g = DependencyGraph::new();
        let a = g.add_node(make_node("a", 0));
        let b = g.add_node(make_node("b", 1));
        g.add_edge(a, b, DepEdge { from_root: true });
        g.add_edge(a, b, DepEdge { from_root: true });
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn tree_printing_with_cycle() {
        let mut g = DependencyGraph::new();
        let a = g.add_node(make_node("a", 0));
        g.add_root(a);
        let b = g.add_node(make_node("b", 1));
        g.add_edge(a, b, DepEdge { from_root: true });
        g.add_edge(b, a, DepEdge { from_root: false });

        let tree = g.print_tree(None);
        assert!(tree.contains("a v1.0.0"));
        assert!(tree.contains("└── b v1.0.0"));
        // The back edge is printed once and not expanded further.
        assert_eq!(tree.lines().count(), 3);
    }

    #[test]
    fn tree_annotates_failed_and_cut_nodes() {
        let mut g = DependencyGraph::new();
        let a = g.add_node(make_node("a", 0));
        g.add_root(a);
        let b = g.add_node(PackageNode {
            name: PackageName::new("b"),
            version: None,
            depth: 1,
            status: FetchStatus::FetchFailed,
        });
        let c = g.add_node(PackageNode {
            name: PackageName::new("c"),
            version: None,
            depth: 1,
            status: FetchStatus::DepthCut,
        });
        g.add_edge(a, b, DepEdge { from_root: true });
        g.add_edge(a, c, DepEdge { from_root: true });

        let tree = g.print_tree(None);
        assert!(tree.contains("b (fetch failed)"));
        assert!(tree.contains("c (depth cut)"));
    }

    #[test]
    fn find_path_takes_shortest_route() {
        let mut g = DependencyGraph::new();
        let a = g.add_node(make_node("a", 0));
        g.add_root(a);
        let b = g.add_node(make_node("b", 1));
        let c = g.add_node(make_node("c", 1));
        let d = g.add_node(make_node("d", 2));
        g.add_edge(a, b, DepEdge { from_root: true });
        g.add_edge(a, d, DepEdge { from_root: true });
        g.add_edge(b, c, DepEdge { from_root: false });
        g.add_edge(c, d, DepEdge { from_root: false });

        let path = g.find_path("d").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].name.as_str(), "a");
        assert_eq!(path[1].name.as_str(), "d");
    }

    #[test]
    fn find_path_normalizes_target() {
        let mut g = DependencyGraph::new();
        let a = g.add_node(make_node("a", 0));
        g.add_root(a);
        let b = g.add_node(make_node("typing-extensions", 1));
        g.add_edge(a, b, DepEdge { from_root: true });

        assert!(g.find_path("Typing_Extensions").is_some());
    }

    #[test]
    fn find_path_not_found() {
        let mut g = DependencyGraph::new();
        let a = g.add_node(make_node("a", 0));
        g.add_root(a);
        assert!(g.find_path("missing").is_none());
    }
}
