//! Configuration for media discovery
//!
//! Handles the remote base URL, the extension allow-lists and the set of
//! directory names that are never scanned.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, ScanError};

const CONFIG_PATHS: [&str; 2] = [".pathscan.json", "pathscan.json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
  /// Prefix for every generated URL
  #[serde(default = "default_base_url")]
  pub base_url: String,
  /// Manifest location, relative to the scan root
  #[serde(default = "default_output_file")]
  pub output_file: PathBuf,
  #[serde(default = "default_image_extensions", deserialize_with = "extension_list")]
  pub image_extensions: Vec<String>,
  #[serde(default = "default_audio_extensions", deserialize_with = "extension_list")]
  pub audio_extensions: Vec<String>,
  /// Names that exclude a path when they appear as any of its components
  #[serde(default = "default_exclude_dirs")]
  pub exclude_dirs: Vec<String>,
}

fn default_base_url() -> String {
  "https://raw.githubusercontent.com/adilentiq/test-images/refs/heads/main".to_string()
}
fn default_output_file() -> PathBuf {
  PathBuf::from("image-paths.json")
}
fn default_image_extensions() -> Vec<String> {
  ["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff", "svg"].map(String::from).to_vec()
}
fn default_audio_extensions() -> Vec<String> {
  ["mp3", "wav", "aiff", "mp2", "ogg", "flac", "m4a", "aac"].map(String::from).to_vec()
}
fn default_exclude_dirs() -> Vec<String> {
  [".git", "node_modules", "__pycache__", ".vscode", "temp"].map(String::from).to_vec()
}

/// Lowercase and strip the leading dot, so ".PNG" and "png" are the same entry
pub fn normalize_extension(ext: &str) -> String {
  ext.trim_start_matches('.').to_lowercase()
}

fn extension_list<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
  let raw = Vec::<String>::deserialize(deserializer)?;
  Ok(raw.iter().map(|e| normalize_extension(e)).collect())
}

impl Default for ScanConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url(),
      output_file: default_output_file(),
      image_extensions: default_image_extensions(),
      audio_extensions: default_audio_extensions(),
      exclude_dirs: default_exclude_dirs(),
    }
  }
}

impl ScanConfig {
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ScanError::config_read(path, e))?;
    serde_json::from_str(&content).map_err(|e| ScanError::config_parse(path, e))
  }

  /// Load `.pathscan.json` or `pathscan.json` from `root`, or use defaults
  pub fn load(root: &Path) -> Result<Self> {
    for name in CONFIG_PATHS {
      let candidate = root.join(name);
      if candidate.exists() {
        return Self::load_from_file(candidate);
      }
    }

    Ok(ScanConfig::default())
  }

  /// Whether the file's extension is on either allow-list, ignoring case
  pub fn is_supported(&self, path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
      return false;
    };
    let ext = normalize_extension(ext);
    self.image_extensions.contains(&ext) || self.audio_extensions.contains(&ext)
  }

  /// Whether any component of `relative`, the file name included, is an
  /// excluded name
  pub fn is_excluded(&self, relative: &Path) -> bool {
    relative.components().any(|component| match component {
      Component::Normal(name) => self.exclude_dirs.iter().any(|ex| name == ex.as_str()),
      _ => false,
    })
  }
}
