//! Dependency resolution core: bounded, deduplicated, cycle-safe graph
//! assembly driven by breadth-first traversal over an injected release
//! fetcher.
//!
//! This crate knows nothing about HTTP or rendering. The registry lives
//! behind the [`fetcher::ReleaseFetcher`] trait; the finished
//! [`graph::DependencyGraph`] is handed wholesale to the exporters.

pub mod fetcher;
pub mod graph;
pub mod resolver;
pub mod visited;
