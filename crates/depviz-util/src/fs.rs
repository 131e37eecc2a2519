use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it if needed.
///
/// Writing `reports/graph.html` should not fail just because `reports/`
/// has not been created yet.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
