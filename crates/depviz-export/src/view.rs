//! Level-view analysis: restrict the rendered graph to the top N levels
//! and detect dependencies shared between roots.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::graph::NodeIndex;

use depviz_resolver::graph::DependencyGraph;

/// Per-node level assignment for a "top N levels" rendering of the graph.
///
/// Levels are 1-based: roots sit at level 1, their direct dependencies at
/// level 2, and so on. A node reachable from several roots keeps its
/// minimal level; nodes reachable from more than one root at a level
/// beyond the first are flagged as shared so the renderer can call them
/// out.
pub struct LevelView {
    levels: usize,
    node_levels: HashMap<NodeIndex, usize>,
    node_roots: HashMap<NodeIndex, HashSet<NodeIndex>>,
    shared: HashSet<NodeIndex>,
}

impl LevelView {
    /// Run a bounded BFS from every root and record level assignments.
    pub fn build(graph: &DependencyGraph, levels: usize) -> Self {
        let mut node_levels: HashMap<NodeIndex, usize> = HashMap::new();
        let mut node_roots: HashMap<NodeIndex, HashSet<NodeIndex>> = HashMap::new();

        for &root in graph.roots() {
            let mut local_visited: HashSet<(NodeIndex, usize)> = HashSet::new();
            let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::from([(root, 1)]);
            while let Some((idx, level)) = queue.pop_front() {
                if level > levels || !local_visited.insert((idx, level)) {
                    continue;
                }
                node_levels
                    .entry(idx)
                    .and_modify(|l| *l = (*l).min(level))
                    .or_insert(level);
                node_roots.entry(idx).or_default().insert(root);
                if level < levels {
                    for (child, _) in graph.dependencies_of(idx) {
                        queue.push_back((child, level + 1));
                    }
                }
            }
        }

        let shared = node_levels
            .iter()
            .filter(|(idx, level)| {
                **level > 1 && node_roots.get(*idx).is_some_and(|r| r.len() > 1)
            })
            .map(|(idx, _)| *idx)
            .collect();

        Self {
            levels,
            node_levels,
            node_roots,
            shared,
        }
    }

    /// The level bound this view was built with.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Minimal 1-based level of a node, if it is within the bound.
    pub fn level(&self, idx: NodeIndex) -> Option<usize> {
        self.node_levels.get(&idx).copied()
    }

    /// Whether the node survives the level filter.
    pub fn contains(&self, idx: NodeIndex) -> bool {
        self.node_levels.contains_key(&idx)
    }

    /// Whether the node is reachable from more than one root beyond
    /// level 1.
    pub fn is_shared(&self, idx: NodeIndex) -> bool {
        self.shared.contains(&idx)
    }

    /// How many roots reach the node within the bound.
    pub fn roots_reaching(&self, idx: NodeIndex) -> usize {
        self.node_roots.get(&idx).map_or(0, HashSet::len)
    }

    /// The retained node subset, in stable index order.
    pub fn retained(&self) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.node_levels.keys().copied().collect();
        nodes.sort();
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depviz_core::package::PackageName;
    use depviz_resolver::graph::{DepEdge, FetchStatus, PackageNode};

    fn node(name: &str, depth: usize) -> PackageNode {
        PackageNode {
            name: PackageName::new(name),
            version: Some("1.0".into()),
            depth,
            status: FetchStatus::Resolved,
        }
    }

    /// Two roots sharing a transitive dependency:
    /// r1 → a → shared, r2 → shared
    fn shared_graph() -> DependencyGraph {
        let mut g = DependencyGraph::new();
        let r1 = g.add_node(node("r1", 0));
        let r2 = g.add_node(node("r2", 0));
        g.add_root(r1);
        g.add_root(r2);
        let a = g.add_node(node("a", 1));
        let shared = g.add_node(node("shared", 1));
        g.add_edge(r1, a, DepEdge { from_root: true });
        g.add_edge(a, shared, DepEdge { from_root: false });
        g.add_edge(r2, shared, DepEdge { from_root: true });
        g
    }

    #[test]
    fn levels_are_minimal() {
        let g = shared_graph();
        let view = LevelView::build(&g, 3);
        assert_eq!(view.level(g.find("r1").unwrap()), Some(1));
        assert_eq!(view.level(g.find("a").unwrap()), Some(2));
        // Reached at level 3 via r1 and level 2 via r2; the minimum wins.
        assert_eq!(view.level(g.find("shared").unwrap()), Some(2));
    }

    #[test]
    fn shared_detection() {
        let g = shared_graph();
        let view = LevelView::build(&g, 3);
        assert!(view.is_shared(g.find("shared").unwrap()));
        assert!(!view.is_shared(g.find("a").unwrap()));
        assert!(!view.is_shared(g.find("r1").unwrap()));
        assert_eq!(view.roots_reaching(g.find("shared").unwrap()), 2);
    }

    #[test]
    fn level_one_keeps_only_roots() {
        let g = shared_graph();
        let view = LevelView::build(&g, 1);
        let retained = view.retained();
        assert_eq!(retained.len(), 2);
        assert!(view.contains(g.find("r1").unwrap()));
        assert!(view.contains(g.find("r2").unwrap()));
        assert!(!view.contains(g.find("a").unwrap()));
    }

    #[test]
    fn bound_cuts_deep_nodes() {
        let g = shared_graph();
        let view = LevelView::build(&g, 2);
        // "shared" is at level 2 via r2, so it survives even though the
        // r1 chain reaches it at level 3.
        assert!(view.contains(g.find("shared").unwrap()));

        let mut g2 = DependencyGraph::new();
        let r = g2.add_node(node("r", 0));
        g2.add_root(r);
        let a = g2.add_node(node("a", 1));
        let b = g2.add_node(node("b", 2));
        g2.add_edge(r, a, DepEdge { from_root: true });
        g2.add_edge(a, b, DepEdge { from_root: false });
        let view2 = LevelView::build(&g2, 2);
        assert!(!view2.contains(g2.find("b").unwrap()));
    }
}
