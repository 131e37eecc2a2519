//! The injected metadata-fetch capability the resolver traverses through.

use async_trait::async_trait;
use thiserror::Error;

use depviz_core::package::PackageName;

/// Release metadata for one package, as reported by the index.
#[derive(Debug, Clone, Default)]
pub struct Release {
    /// The index's current version for the package, when it reports one.
    pub version: Option<String>,
    /// Declared dependency names, in declaration order, self-references
    /// already removed.
    pub requires: Vec<PackageName>,
}

/// Per-package fetch failure.
///
/// These never abort a resolution run; the resolver absorbs them into the
/// affected node's status and keeps traversing.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("package not found in the index")]
    NotFound,

    #[error("index returned HTTP {status}")]
    Http { status: u16 },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("could not decode index metadata: {message}")]
    Decode { message: String },
}

/// Capability for looking up one package's release metadata.
///
/// `depviz-pypi` implements this against the PyPI JSON API; tests implement
/// it with in-memory stubs. Retry, backoff, and timeouts are the
/// implementation's responsibility, not the resolver's.
#[async_trait]
pub trait ReleaseFetcher: Send + Sync {
    async fn fetch_release(&self, name: &PackageName) -> Result<Release, FetchError>;
}
