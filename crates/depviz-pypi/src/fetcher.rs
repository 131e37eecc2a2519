//! The network-backed [`ReleaseFetcher`] implementation.

use async_trait::async_trait;
use reqwest::Client;

use depviz_core::package::PackageName;
use depviz_resolver::fetcher::{FetchError, Release, ReleaseFetcher};

use crate::client::{self, get_json};
use crate::index::PackageIndex;
use crate::release::PyPiDocument;

/// Fetches release metadata from a PyPI-compatible index over HTTP.
pub struct PyPiFetcher {
    client: Client,
    index: PackageIndex,
}

impl PyPiFetcher {
    /// Build a fetcher against `index` with a fresh HTTP client.
    pub fn new(index: PackageIndex) -> miette::Result<Self> {
        Ok(Self {
            client: client::build_client()?,
            index,
        })
    }

    /// Build a fetcher reusing an existing client.
    pub fn with_client(client: Client, index: PackageIndex) -> Self {
        Self { client, index }
    }
}

#[async_trait]
impl ReleaseFetcher for PyPiFetcher {
    async fn fetch_release(&self, name: &PackageName) -> Result<Release, FetchError> {
        let url = self.index.metadata_url(name);
        tracing::debug!(package = %name, %url, "fetching release metadata");
        match get_json::<PyPiDocument>(&self.client, &url).await? {
            Some(doc) => Ok(doc.into_release()),
            None => Err(FetchError::NotFound),
        }
    }
}
