use assert_cmd::prelude::*;
use assert_fs::prelude::*;

use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::collections::HashSet;
use std::process::Command;

/// Helper to create a Command for the `generate-prompts` binary running inside `dir`
fn generate_cmd(dir: &assert_fs::TempDir) -> Command {
  let mut cmd = Command::cargo_bin("generate-prompts").expect("binary exists");
  cmd.current_dir(dir.path()).env_remove("RUST_LOG").env("NO_COLOR", "1");
  cmd
}

fn read_json(file: &assert_fs::fixture::ChildPath) -> Value {
  let content = std::fs::read_to_string(file.path()).unwrap();
  serde_json::from_str(&content).unwrap()
}

#[test]
fn test_merges_generated_category_into_existing_file() {
  let temp = assert_fs::TempDir::new().unwrap();
  let prompts = temp.child("prompts.json");
  prompts
    .write_str(r#"{"text_to_image": {"basic": [{"positivePrompt": "a lighthouse"}]}, "audio": {}}"#)
    .unwrap();

  generate_cmd(&temp)
    .args(["--seed", "11"])
    .assert()
    .success()
    .stdout(
      contains("Generating 11300+ prompts...")
        .and(contains("unique prompts"))
        .and(contains("New category: text_to_image.generated_bulk_10k")),
    );

  let data = read_json(&prompts);
  assert_eq!(data["text_to_image"]["basic"][0]["positivePrompt"], "a lighthouse");
  assert!(data["audio"].as_object().unwrap().is_empty());

  let generated = data["text_to_image"]["generated_bulk_10k"].as_array().unwrap();
  assert!(!generated.is_empty());
  assert!(generated.len() <= 11_300);

  let unique: HashSet<&str> =
    generated.iter().map(|r| r["positivePrompt"].as_str().unwrap()).collect();
  assert_eq!(unique.len(), generated.len());
  assert!(unique.iter().all(|p| !p.is_empty()));

  temp.close().unwrap();
}

#[test]
fn test_config_file_controls_counts_and_target() {
  let temp = assert_fs::TempDir::new().unwrap();
  temp.child("prompts.json").write_str(r#"{"bench": {}}"#).unwrap();
  temp
    .child("promptgen.json")
    .write_str(
      r#"{
        "section": "bench",
        "category": "tiny",
        "counts": {
          "simple": 0, "descriptive": 40, "contextual": 0, "action": 0, "styled": 0,
          "complex": 0, "quality": 0, "weather_time": 0, "ultra_detailed": 0, "scenario": 0
        },
        "vocabulary": { "adjectives": ["red"], "subjects": ["cat"] }
      }"#,
    )
    .unwrap();

  generate_cmd(&temp)
    .assert()
    .success()
    .stdout(contains("Generating 40+ prompts...").and(contains("New category: bench.tiny")));

  let data = read_json(&temp.child("prompts.json"));
  assert_eq!(data["bench"]["tiny"], serde_json::json!([{ "positivePrompt": "a red cat" }]));

  temp.close().unwrap();
}

#[test]
fn test_same_seed_produces_identical_files() {
  let temp = assert_fs::TempDir::new().unwrap();
  let first = temp.child("first.json");
  let second = temp.child("second.json");
  first.write_str(r#"{"text_to_image": {}}"#).unwrap();
  second.write_str(r#"{"text_to_image": {}}"#).unwrap();

  for file in ["first.json", "second.json"] {
    generate_cmd(&temp).args(["--seed", "5", "--prompts-file", file]).assert().success();
  }

  let a = std::fs::read_to_string(first.path()).unwrap();
  let b = std::fs::read_to_string(second.path()).unwrap();
  assert_eq!(a, b);

  temp.close().unwrap();
}

#[test]
fn test_missing_prompts_file_fails() {
  let temp = assert_fs::TempDir::new().unwrap();

  generate_cmd(&temp).assert().failure().stderr(contains("prompts.json"));

  temp.close().unwrap();
}

#[test]
fn test_missing_section_fails_without_touching_file() {
  let temp = assert_fs::TempDir::new().unwrap();
  let prompts = temp.child("prompts.json");
  prompts.write_str(r#"{"image_to_image": {}}"#).unwrap();

  generate_cmd(&temp).args(["--seed", "1"]).assert().failure().stderr(contains("text_to_image"));

  prompts.assert(r#"{"image_to_image": {}}"#);

  temp.close().unwrap();
}

#[test]
fn test_malformed_prompts_file_fails() {
  let temp = assert_fs::TempDir::new().unwrap();
  temp.child("prompts.json").write_str("{ not json").unwrap();

  generate_cmd(&temp).assert().failure().stderr(contains("Failed to parse"));

  temp.close().unwrap();
}
