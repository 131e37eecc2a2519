//! Package index abstraction: URL layout for the PyPI JSON API.

use depviz_core::package::PackageName;

/// PyPI JSON API base URL.
pub const PYPI_INDEX_URL: &str = "https://pypi.org/pypi";

/// A configured package index speaking the PyPI JSON API.
#[derive(Debug, Clone)]
pub struct PackageIndex {
    pub name: String,
    pub url: String,
}

impl PackageIndex {
    /// Construct the default PyPI index.
    pub fn pypi() -> Self {
        Self {
            name: "pypi".to_string(),
            url: PYPI_INDEX_URL.to_string(),
        }
    }

    /// Construct an index from a mirror URL.
    pub fn custom(url: &str) -> Self {
        Self {
            name: "custom".to_string(),
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// URL of the JSON metadata document for a package.
    ///
    /// The name goes into the path in normalized form; PyPI redirects
    /// unnormalized spellings to the same document anyway.
    pub fn metadata_url(&self, name: &PackageName) -> String {
        format!("{}/{}/json", self.url, name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pypi_metadata_url() {
        let index = PackageIndex::pypi();
        assert_eq!(
            index.metadata_url(&PackageName::new("requests")),
            "https://pypi.org/pypi/requests/json"
        );
    }

    #[test]
    fn metadata_url_uses_normalized_name() {
        let index = PackageIndex::pypi();
        assert_eq!(
            index.metadata_url(&PackageName::new("Typing_Extensions")),
            "https://pypi.org/pypi/typing-extensions/json"
        );
    }

    #[test]
    fn custom_index_trims_trailing_slash() {
        let index = PackageIndex::custom("https://mirror.example.com/pypi/");
        assert_eq!(
            index.metadata_url(&PackageName::new("flask")),
            "https://mirror.example.com/pypi/flask/json"
        );
    }
}
