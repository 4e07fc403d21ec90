use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{PromptError, Result};
use crate::record::PromptRecord;

/// A prompts file held in memory: a JSON object of sections, each mapping
/// category names to lists of prompt records. Key order is kept as read.
#[derive(Debug, Clone)]
pub struct PromptStore {
  path: PathBuf,
  data: Map<String, Value>,
}

impl PromptStore {
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PromptError::read(path, e))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| PromptError::parse(path, e))?;

    match value {
      Value::Object(data) => {
        debug!(path = %path.display(), sections = data.len(), "loaded prompts file");
        Ok(Self { path: path.to_path_buf(), data })
      }
      _ => Err(PromptError::not_an_object(path)),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn data(&self) -> &Map<String, Value> {
    &self.data
  }

  /// Set `section.category` to `records`, replacing any previous list.
  /// The section must already exist.
  pub fn merge(&mut self, section: &str, category: &str, records: &[PromptRecord]) -> Result<()> {
    let target = self
      .data
      .get_mut(section)
      .and_then(Value::as_object_mut)
      .ok_or_else(|| PromptError::missing_section(section))?;

    let list = serde_json::to_value(records).map_err(PromptError::Serialize)?;

    if target.insert(category.to_string(), list).is_some() {
      debug!(section, category, "replaced existing category");
    }
    Ok(())
  }

  /// Rewrite the file as two-space indented JSON
  pub fn save(&self) -> Result<()> {
    let content = serde_json::to_string_pretty(&self.data).map_err(PromptError::Serialize)?;
    write_atomically(&self.path, content.as_bytes())
      .map_err(|e| PromptError::write(&self.path, e))
  }
}

/// Write `content` to a temp file beside the target, then rename it over the
/// target. A symlinked target is resolved first so the link itself survives.
fn write_atomically(path: &Path, content: &[u8]) -> std::io::Result<()> {
  let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
  let dir = match target.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let mut file = NamedTempFile::new_in(dir)?;
  if let Ok(existing) = fs::metadata(&target) {
    file.as_file().set_permissions(existing.permissions())?;
  }
  file.write_all(content)?;
  file.persist(&target).map_err(|e| e.error)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  const EXISTING: &str = r#"{
  "text_to_image": {
    "basic": [
      { "positivePrompt": "a lighthouse" }
    ],
    "generated_bulk_10k": [
      { "positivePrompt": "stale" }
    ]
  },
  "image_to_image": {
    "edits": []
  }
}"#;

  fn store_with(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("prompts.json");
    fs::write(&path, content).unwrap();
    (temp_dir, path)
  }

  #[test]
  fn test_merge_replaces_category_and_keeps_the_rest() {
    let (_dir, path) = store_with(EXISTING);

    let mut store = PromptStore::load(&path).unwrap();
    store
      .merge("text_to_image", "generated_bulk_10k", &[PromptRecord::new("a red cat")])
      .unwrap();
    store.save().unwrap();

    let saved: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["text_to_image"]["basic"][0]["positivePrompt"], "a lighthouse");
    assert_eq!(saved["text_to_image"]["generated_bulk_10k"].as_array().unwrap().len(), 1);
    assert_eq!(saved["text_to_image"]["generated_bulk_10k"][0]["positivePrompt"], "a red cat");
    assert!(saved["image_to_image"]["edits"].as_array().unwrap().is_empty());
  }

  #[test]
  fn test_save_keeps_key_order_and_indentation() {
    let (_dir, path) = store_with(r#"{"zeta": {}, "alpha": {"x": []}}"#);

    let mut store = PromptStore::load(&path).unwrap();
    store.merge("zeta", "new", &[PromptRecord::new("café au lait")]).unwrap();
    store.save().unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let expected = concat!(
      "{\n",
      "  \"zeta\": {\n",
      "    \"new\": [\n",
      "      {\n",
      "        \"positivePrompt\": \"café au lait\"\n",
      "      }\n",
      "    ]\n",
      "  },\n",
      "  \"alpha\": {\n",
      "    \"x\": []\n",
      "  }\n",
      "}"
    );
    assert_eq!(written, expected);
  }

  #[test]
  fn test_merge_into_missing_section_fails() {
    let (_dir, path) = store_with(r#"{"other": {}}"#);

    let mut store = PromptStore::load(&path).unwrap();
    let err = store.merge("text_to_image", "bulk", &[]).unwrap_err();
    let PromptError::MissingSection { section } = err else {
      panic!("expected MissingSection, got {err:?}");
    };
    assert_eq!(section, "text_to_image");
  }

  #[test]
  fn test_merged_records_use_record_serialization() {
    let (_dir, path) = store_with(r#"{"text_to_image": {}}"#);
    let records = vec![PromptRecord::new("a red cat"), PromptRecord::new("a blue dog")];

    let mut store = PromptStore::load(&path).unwrap();
    store.merge("text_to_image", "bulk", &records).unwrap();

    let merged = &store.data()["text_to_image"]["bulk"];
    assert_eq!(*merged, serde_json::to_value(&records).unwrap());
    assert_eq!(merged[1]["positivePrompt"], "a blue dog");
  }

  #[cfg(unix)]
  #[test]
  fn test_save_writes_through_symlink() {
    let (dir, real) = store_with(EXISTING);
    let link = dir.path().join("linked.json");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let mut store = PromptStore::load(&link).unwrap();
    store.merge("text_to_image", "generated_bulk_10k", &[PromptRecord::new("a fox")]).unwrap();
    store.save().unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    let saved: Value = serde_json::from_str(&fs::read_to_string(&real).unwrap()).unwrap();
    assert_eq!(saved["text_to_image"]["generated_bulk_10k"][0]["positivePrompt"], "a fox");
  }

  #[test]
  fn test_save_to_unwritable_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    let sub = temp_dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let path = sub.join("prompts.json");
    fs::write(&path, EXISTING).unwrap();

    let store = PromptStore::load(&path).unwrap();
    fs::remove_dir_all(&sub).unwrap();
    fs::write(&sub, b"not a directory").unwrap();

    let err = store.save().unwrap_err();
    assert!(matches!(err, PromptError::Write { .. }), "got {err:?}");
    assert_eq!(fs::read(&sub).unwrap(), b"not a directory");
  }

  #[test]
  fn test_load_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = PromptStore::load(temp_dir.path().join("missing.json"));
    assert!(matches!(missing, Err(PromptError::Read { .. })));

    let (_dir, bad) = store_with("{ not json");
    assert!(matches!(PromptStore::load(&bad), Err(PromptError::Parse { .. })));

    let (_dir, list) = store_with("[1, 2, 3]");
    assert!(matches!(PromptStore::load(&list), Err(PromptError::NotAnObject { .. })));
  }
}
