use depviz_core::package::{normalize, PackageName};

#[test]
fn normalize_lowercases() {
    assert_eq!(normalize("Flask"), "flask");
    assert_eq!(normalize("SQLAlchemy"), "sqlalchemy");
}

#[test]
fn normalize_collapses_separator_runs() {
    assert_eq!(normalize("foo-_.bar"), "foo-bar");
    assert_eq!(normalize("typing_extensions"), "typing-extensions");
    assert_eq!(normalize("zope.interface"), "zope-interface");
    assert_eq!(normalize("ruamel.yaml.clib"), "ruamel-yaml-clib");
}

#[test]
fn normalize_plain_name_unchanged() {
    assert_eq!(normalize("requests"), "requests");
}

#[test]
fn names_equal_across_spellings() {
    assert_eq!(PackageName::new("Flask"), PackageName::new("flask"));
    assert_eq!(
        PackageName::new("typing_extensions"),
        PackageName::new("Typing.Extensions")
    );
    assert_ne!(PackageName::new("flask"), PackageName::new("flask-cors"));
}

#[test]
fn name_hash_follows_equality() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(PackageName::new("Flask"));
    assert!(set.contains(&PackageName::new("flask")));
    assert!(!set.contains(&PackageName::new("django")));
}

#[test]
fn name_keeps_raw_spelling() {
    let name = PackageName::new("  Flask ");
    assert_eq!(name.raw(), "Flask");
    assert_eq!(name.as_str(), "flask");
    assert_eq!(name.to_string(), "flask");
}

#[test]
fn empty_after_trim_is_empty() {
    assert!(PackageName::new("   ").is_empty());
    assert!(PackageName::new("").is_empty());
    assert!(!PackageName::new("a").is_empty());
}
