//! Serde model of the PyPI JSON metadata document and its conversion into
//! the resolver's [`Release`] shape.

use serde::Deserialize;

use depviz_core::package::PackageName;
use depviz_core::requirement::Requirement;
use depviz_resolver::fetcher::Release;

/// The `/pypi/{name}/json` document, reduced to the fields depviz reads.
#[derive(Debug, Deserialize)]
pub struct PyPiDocument {
    pub info: PackageInfo,
}

#[derive(Debug, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: Option<String>,
    pub requires_dist: Option<Vec<String>>,
}

impl PyPiDocument {
    /// Convert the document into a [`Release`].
    ///
    /// Each `requires_dist` entry is parsed as a requirement; entries that
    /// do not parse fall back to splitting off the leading name token the
    /// way pip's own tooling degrades. Self-references and duplicates are
    /// dropped, declaration order is preserved. Requirements confined to
    /// extras by their marker are kept: the graph shows what could be
    /// pulled in, not one environment's install set.
    pub fn into_release(self) -> Release {
        let own_name = PackageName::new(&self.info.name);
        let mut requires: Vec<PackageName> = Vec::new();

        for entry in self.info.requires_dist.unwrap_or_default() {
            let name = match Requirement::parse(&entry) {
                Some(req) => req.name,
                None => match guess_name(&entry) {
                    Some(name) => name,
                    None => {
                        tracing::debug!(entry, "ignoring unparseable requires_dist entry");
                        continue;
                    }
                },
            };
            if name.is_empty() || name == own_name {
                continue;
            }
            if !requires.contains(&name) {
                requires.push(name);
            }
        }

        Release {
            version: self.info.version,
            requires,
        }
    }
}

/// Last-resort name extraction: everything before the first space,
/// semicolon, or parenthesis.
fn guess_name(entry: &str) -> Option<PackageName> {
    let token = entry
        .split([' ', ';', '(', ')'])
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())?;
    Some(PackageName::new(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(name: &str, version: &str, requires_dist: serde_json::Value) -> PyPiDocument {
        serde_json::from_value(json!({
            "info": {
                "name": name,
                "version": version,
                "requires_dist": requires_dist,
            }
        }))
        .unwrap()
    }

    #[test]
    fn plain_names_and_specifiers() {
        let release = doc(
            "requests",
            "2.32.3",
            json!(["charset-normalizer<4,>=2", "idna<4,>=2.5", "urllib3<3,>=1.21.1"]),
        )
        .into_release();

        assert_eq!(release.version.as_deref(), Some("2.32.3"));
        let names: Vec<&str> = release.requires.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["charset-normalizer", "idna", "urllib3"]);
    }

    #[test]
    fn extras_markers_kept_self_refs_dropped() {
        let release = doc(
            "requests",
            "2.32.3",
            json!([
                "PySocks!=1.5.7,>=1.5.6; extra == \"socks\"",
                "Requests>=2.0 ; extra == \"self\"",
                "certifi>=2017.4.17",
            ]),
        )
        .into_release();

        let names: Vec<&str> = release.requires.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["pysocks", "certifi"]);
    }

    #[test]
    fn duplicates_collapse_preserving_order() {
        let release = doc(
            "pkg",
            "1.0",
            json!(["b>=1", "a", "B; python_version < \"3.9\"", "a"]),
        )
        .into_release();

        let names: Vec<&str> = release.requires.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn null_requires_dist_means_no_children() {
        let release = doc("six", "1.16.0", json!(null)).into_release();
        assert!(release.requires.is_empty());
    }

    #[test]
    fn fallback_name_guess() {
        assert_eq!(
            guess_name("weird_token (>=1.0) ; sys_platform == \"win32\"")
                .unwrap()
                .as_str(),
            "weird-token"
        );
        assert!(guess_name("   ").is_none());
    }
}
