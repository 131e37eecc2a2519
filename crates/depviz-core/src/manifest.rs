use std::path::Path;

use depviz_util::errors::DepvizError;

use crate::package::PackageName;
use crate::requirement::Requirement;

/// Load the package names declared in a requirements file.
///
/// Mirrors pip's reading of `requirements.txt`: blank lines and comments
/// are skipped, option lines and lines that do not parse as a requirement
/// are ignored, and duplicate names keep their first occurrence.
pub fn parse_requirements(path: &Path) -> miette::Result<Vec<PackageName>> {
    let content = std::fs::read_to_string(path).map_err(|e| DepvizError::Manifest {
        message: format!("Failed to read {}: {e}", path.display()),
    })?;
    Ok(parse_requirements_str(&content))
}

/// Parse requirement names out of requirements-file content.
pub fn parse_requirements_str(content: &str) -> Vec<PackageName> {
    let mut names: Vec<PackageName> = Vec::new();
    let mut skipped = 0usize;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Requirement::parse(line) {
            Some(req) => {
                if !names.contains(&req.name) {
                    names.push(req.name);
                }
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "ignored lines that are not requirements");
    }
    names
}
