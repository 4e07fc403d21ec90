use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::{Result, ScanError};

/// One discovered media file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
  /// Relative to the scan root, always `/`-separated
  pub path: String,
  pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
  pub images: Vec<FileEntry>,
}

impl Manifest {
  pub fn new(images: Vec<FileEntry>) -> Self {
    Self { images }
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }

  /// Replace `path` with this manifest. The old file stays intact if the
  /// write fails part way. A symlinked `path` is written through, leaving the
  /// link in place.
  pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    let path = path.as_ref();
    let content = self.to_json().map_err(|e| ScanError::write(path, e.into()))?;

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let persist = || -> std::io::Result<()> {
      let mut file = NamedTempFile::new_in(dir)?;
      if let Ok(existing) = fs::metadata(&target) {
        file.as_file().set_permissions(existing.permissions())?;
      }
      file.write_all(content.as_bytes())?;
      file.persist(&target).map_err(|e| e.error)?;
      Ok(())
    };

    persist().map_err(|e| ScanError::write(path, e))
  }
}
