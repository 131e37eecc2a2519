use serde::{Deserialize, Serialize};
use std::path::Path;

use depviz_util::errors::DepvizError;

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE: &str = "depviz.toml";

/// Tool configuration loaded from an optional `depviz.toml` in the working
/// directory. Every field has a default; the file only overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub graph: GraphConfig,

    #[serde(default)]
    pub pdf: PdfConfig,
}

/// Resolution settings from `[resolve]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default = "default_index_url", rename = "index-url")]
    pub index_url: String,
    #[serde(default = "default_depth")]
    pub depth: usize,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            depth: default_depth(),
        }
    }
}

fn default_index_url() -> String {
    "https://pypi.org/pypi".to_string()
}

fn default_depth() -> usize {
    2
}

/// Canvas settings for the rendered page from `[graph]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    2400
}

fn default_height() -> u32 {
    1600
}

/// PDF export settings from `[pdf]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Browser binary to drive; `DEPVIZ_BROWSER` and PATH probing apply
    /// when unset.
    #[serde(default)]
    pub browser: Option<String>,
    /// Extra settling time granted to the physics simulation before the
    /// page is printed.
    #[serde(default = "default_physics_wait_ms", rename = "physics-wait-ms")]
    pub physics_wait_ms: u64,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            browser: None,
            physics_wait_ms: default_physics_wait_ms(),
        }
    }
}

fn default_physics_wait_ms() -> u64 {
    2000
}

impl Config {
    /// Load `depviz.toml` from the current directory, or defaults when the
    /// file does not exist.
    pub fn load() -> miette::Result<Self> {
        Self::from_dir(Path::new("."))
    }

    /// Load `depviz.toml` from `dir`, or defaults when the file does not
    /// exist.
    pub fn from_dir(dir: &Path) -> miette::Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|e| DepvizError::Generic {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            toml::from_str(&content).map_err(|e| {
                DepvizError::Generic {
                    message: format!("Failed to parse {}: {e}", path.display()),
                }
                .into()
            })
        } else {
            Ok(Self::default())
        }
    }
}
