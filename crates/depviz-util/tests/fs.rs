use depviz_util::fs::ensure_parent_dir;
use tempfile::TempDir;

#[test]
fn test_ensure_parent_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("a").join("b").join("graph.html");
    assert!(!target.parent().unwrap().exists());
    ensure_parent_dir(&target).unwrap();
    assert!(target.parent().unwrap().is_dir());
}

#[test]
fn test_ensure_parent_dir_idempotent() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("out.html");
    ensure_parent_dir(&target).unwrap();
    ensure_parent_dir(&target).unwrap();
    assert!(tmp.path().is_dir());
}

#[test]
fn test_ensure_parent_dir_bare_filename() {
    // A path with no directory component must be a no-op, not an error.
    ensure_parent_dir(std::path::Path::new("just_a_name.html")).unwrap();
}
