use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::manifest::FileEntry;

/// Recursively collect supported media files under `root`.
///
/// Returned paths are relative to `root` and sorted. Excluded directories
/// are pruned rather than walked. Entries below the root that cannot be
/// read are skipped with a warning; an unreadable root is an error.
pub fn scan_files(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
  if !root.is_dir() {
    return Err(ScanError::invalid_root(root));
  }

  let walker = WalkDir::new(root)
    .min_depth(1)
    .into_iter()
    .filter_entry(|entry| !config.is_excluded(relative_to(root, entry.path())));

  let mut files = Vec::new();
  for entry in walker {
    let entry = match entry {
      Ok(entry) => entry,
      Err(err) if err.depth() == 0 => return Err(ScanError::walk(root, err)),
      Err(err) => {
        warn!(error = %err, "skipping unreadable entry");
        continue;
      }
    };

    let path = entry.path();
    if path.is_file() && config.is_supported(path) {
      files.push(relative_to(root, path).to_path_buf());
    }
  }

  files.sort();
  debug!(root = %root.display(), count = files.len(), "scan finished");
  Ok(files)
}

fn relative_to<'a>(root: &Path, path: &'a Path) -> &'a Path {
  path.strip_prefix(root).unwrap_or(path)
}

/// Join the components of a relative path with forward slashes
pub fn to_url_path(relative: &Path) -> Result<String> {
  let mut parts = Vec::new();
  for component in relative.components() {
    if let Component::Normal(part) = component {
      parts.push(part.to_str().ok_or_else(|| ScanError::non_utf8_path(relative))?);
    }
  }
  Ok(parts.join("/"))
}

pub fn build_entries(files: &[PathBuf], base_url: &str) -> Result<Vec<FileEntry>> {
  let base = base_url.trim_end_matches('/');
  files
    .iter()
    .map(|file| {
      let path = to_url_path(file)?;
      let url = format!("{base}/{path}");
      Ok(FileEntry { path, url })
    })
    .collect()
}
