//! Tests for the `regelrecht-microdata` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn extract_from_stdin() {
    let mut cmd = cargo_bin_cmd!("regelrecht-microdata");
    cmd.arg("extract")
        .arg("-")
        .write_stdin(r#"<div itemscope itemtype="Person"><span itemprop="name">Alice</span></div>"#);

    cmd.assert()
        .success()
        .stdout("{\"items\":[{\"type\":[\"Person\"],\"properties\":{\"name\":[\"Alice\"]}}]}\n");
}

#[test]
fn extract_from_stdin_with_invalid_utf8() {
    let mut input = br#"<div itemscope><span itemprop="name">Caf"#.to_vec();
    input.push(0xE9);
    input.extend_from_slice(b"</span></div>");

    let mut cmd = cargo_bin_cmd!("regelrecht-microdata");
    cmd.arg("extract").arg("-").write_stdin(input);

    cmd.assert()
        .success()
        .stdout("{\"items\":[{\"properties\":{\"name\":[\"Caf\u{fffd}\"]}}]}\n");
}

#[test]
fn extract_file_with_type_filter() {
    let mut cmd = cargo_bin_cmd!("regelrecht-microdata");
    cmd.arg("extract")
        .arg(fixture_path("recipe.html"))
        .arg("--type")
        .arg("https://schema.org/Organization");

    cmd.assert().success().stdout(
        predicate::str::contains("Kitchen Inc.").and(predicate::str::contains("Pancakes").not()),
    );
}

#[test]
fn extract_to_yaml_file() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("items.yaml");

    let mut cmd = cargo_bin_cmd!("regelrecht-microdata");
    cmd.arg("extract")
        .arg(fixture_path("cycle.html"))
        .arg("--format")
        .arg("yaml")
        .arg("--output")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("1 item(s)"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("ERROR"));
}

#[test]
fn extract_xhtml_input() {
    let mut cmd = cargo_bin_cmd!("regelrecht-microdata");
    cmd.arg("extract")
        .arg("-")
        .arg("--input-format")
        .arg("xml")
        .write_stdin(r#"<html><body><p itemscope=""><b itemprop="x">y</b></p></body></html>"#);

    cmd.assert()
        .success()
        .stdout("{\"items\":[{\"properties\":{\"x\":[\"y\"]}}]}\n");
}

#[test]
fn malformed_xml_fails() {
    let mut cmd = cargo_bin_cmd!("regelrecht-microdata");
    cmd.arg("extract")
        .arg("-")
        .arg("-i")
        .arg("xml")
        .write_stdin("<div itemscope>");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: XML parsing failed"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("regelrecht-microdata");
    cmd.arg("extract").arg("does-not-exist.html");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn missing_output_directory_fails() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("missing").join("items.json");

    let mut cmd = cargo_bin_cmd!("regelrecht-microdata");
    cmd.arg("extract")
        .arg(fixture_path("plain.html"))
        .arg("-o")
        .arg(&output);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));
}
