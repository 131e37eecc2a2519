//! PyPI JSON API integration: the real [`depviz_resolver::fetcher::ReleaseFetcher`]
//! behind the resolver.
//!
//! Retry, backoff, and timeouts live here; the resolver never sees HTTP.

pub mod client;
pub mod fetcher;
pub mod index;
pub mod release;

pub use fetcher::PyPiFetcher;
pub use index::PackageIndex;
