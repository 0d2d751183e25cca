// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn tilespeak() -> Command {
    Command::cargo_bin("tilespeak").expect("binary")
}

fn write_shard(dir: &Path, name: &str, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).expect("shard");
    path
}

const GREETING: &str =
    r#"{"input":"How are you?","output":"😊 Good, 😐 Okay, 😔 Not great, 💭 Think"}"#;
const FOLLOW_UP: &str =
    r#"{"input":"You picked good! Anything else?","output":"🍕 Pizza, 🥗 Salad, 💧 Water, 🤔 Later"}"#;

#[test]
fn successful_run_exits_zero_and_writes_both_artifacts() {
    let dir = tempdir().expect("tmp");
    let shard = write_shard(dir.path(), "shard.jsonl", &[GREETING, FOLLOW_UP]);
    let corpus = dir.path().join("corpus.jsonl");
    let summary = dir.path().join("summary.json");

    tilespeak()
        .arg("--shard")
        .arg(&shard)
        .arg("--out-corpus")
        .arg(&corpus)
        .arg("--out-summary")
        .arg(&summary)
        .args(["--date", "2026-08-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("corpus: path="))
        .stdout(predicate::str::contains("summary: path="));

    assert!(corpus.exists());
    assert!(summary.exists());
    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary).expect("summary")).expect("json");
    assert_eq!(manifest["dataset_name"], "corpus");
    assert_eq!(manifest["version"], "1");
    assert_eq!(manifest["creation_date"], "2026-08-29");
    assert_eq!(manifest["total_unique_examples"], 2);
}

#[test]
fn graph_prefix_produces_three_graph_artifacts() {
    let dir = tempdir().expect("tmp");
    let shard = write_shard(dir.path(), "shard.jsonl", &[GREETING, FOLLOW_UP]);
    let prefix = dir.path().join("graph");

    tilespeak()
        .arg("--shard")
        .arg(&shard)
        .arg("--out-corpus")
        .arg(dir.path().join("corpus.jsonl"))
        .arg("--out-summary")
        .arg(dir.path().join("summary.json"))
        .arg("--out-graph-prefix")
        .arg(&prefix)
        .args(["--date", "2026-08-29"])
        .assert()
        .success()
        .stdout(predicate::str::contains("graph: nodes=2"));

    assert!(dir.path().join("graph_nodes.jsonl").exists());
    assert!(dir.path().join("graph_edges.jsonl").exists());
    assert!(dir.path().join("graph_starters_and_traces.json").exists());
}

#[test]
fn graph_step_is_skipped_without_prefix() {
    let dir = tempdir().expect("tmp");
    let shard = write_shard(dir.path(), "shard.jsonl", &[GREETING]);

    tilespeak()
        .arg("--shard")
        .arg(&shard)
        .arg("--out-corpus")
        .arg(dir.path().join("corpus.jsonl"))
        .arg("--out-summary")
        .arg(dir.path().join("summary.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("graph:").not());

    assert!(!dir.path().join("graph_nodes.jsonl").exists());
}

#[test]
fn missing_required_flag_is_a_usage_error() {
    tilespeak().assert().code(1);
}

#[test]
fn help_exits_zero() {
    tilespeak()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--out-corpus"));
}

#[test]
fn all_shards_missing_exits_two_and_leaves_no_artifacts() {
    let dir = tempdir().expect("tmp");
    let corpus = dir.path().join("corpus.jsonl");

    tilespeak()
        .arg("--shard")
        .arg(dir.path().join("absent.jsonl"))
        .arg("--out-corpus")
        .arg(&corpus)
        .arg("--out-summary")
        .arg(dir.path().join("summary.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no shards"));

    assert!(!corpus.exists());
}

#[test]
fn unwritable_output_exits_three_and_preserves_prior_artifacts() {
    let dir = tempdir().expect("tmp");
    let shard = write_shard(dir.path(), "shard.jsonl", &[GREETING]);
    // A plain file where the output directory should be makes the write fail.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"not a directory").expect("blocker");

    tilespeak()
        .arg("--shard")
        .arg(&shard)
        .arg("--out-corpus")
        .arg(blocker.join("corpus.jsonl"))
        .arg("--out-summary")
        .arg(dir.path().join("summary.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("write failure"));

    assert_eq!(
        fs::read(&blocker).expect("blocker intact"),
        b"not a directory".to_vec()
    );
}
