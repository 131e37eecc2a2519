//! First-sight tracking for the resolution traversal.

use std::collections::HashSet;

use depviz_core::package::PackageName;

/// Tracks which normalized names have been seen during resolution
/// to prevent infinite loops in circular dependency chains.
#[derive(Debug, Default)]
pub struct VisitedSet {
    visited: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a name as visited. Returns `false` if already visited.
    pub fn visit(&mut self, name: &PackageName) -> bool {
        self.visited.insert(name.as_str().to_string())
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.visited.contains(name.as_str())
    }
}
