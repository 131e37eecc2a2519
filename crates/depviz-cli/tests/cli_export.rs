use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn depviz_cmd() -> Command {
    Command::cargo_bin("depviz").unwrap()
}

#[test]
fn export_json_to_stdout() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("requirements.txt"), "requests\n").unwrap();

    let assert = depviz_cmd()
        .current_dir(tmp.path())
        .args(["export", "--format", "json", "--depth", "0"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["nodes"][0]["name"], "requests");
    assert_eq!(value["nodes"][0]["status"], "depth-cut");
    assert_eq!(value["edges"].as_array().unwrap().len(), 0);
}

#[test]
fn export_dot_to_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("requirements.txt"), "requests\n").unwrap();

    depviz_cmd()
        .current_dir(tmp.path())
        .args([
            "export", "--format", "dot", "--depth", "0", "--output", "deps.dot",
        ])
        .assert()
        .success();

    let dot = fs::read_to_string(tmp.path().join("deps.dot")).unwrap();
    assert!(dot.starts_with("digraph deps {"));
    assert!(dot.contains("\"requests\""));
}

#[test]
fn export_rejects_unknown_format() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("requirements.txt"), "requests\n").unwrap();

    depviz_cmd()
        .current_dir(tmp.path())
        .args(["export", "--format", "svg", "--depth", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}
