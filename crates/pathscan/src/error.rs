use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
  #[error("Scan root {} is not a readable directory", path.display())]
  InvalidRoot { path: PathBuf },

  #[error("Failed to walk {}: {source}", path.display())]
  Walk { path: PathBuf, source: walkdir::Error },

  #[error("{} is not valid UTF-8 and cannot be used in a URL", path.display())]
  NonUtf8Path { path: PathBuf },

  #[error("Failed to read config {}: {source}", path.display())]
  ConfigRead { path: PathBuf, source: std::io::Error },

  #[error("Failed to parse config {}: {source}", path.display())]
  ConfigParse { path: PathBuf, source: serde_json::Error },

  #[error("Failed to write manifest {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },
}

impl ScanError {
  pub fn invalid_root(path: impl AsRef<Path>) -> Self {
    Self::InvalidRoot { path: path.as_ref().to_path_buf() }
  }

  pub fn walk(path: impl AsRef<Path>, source: walkdir::Error) -> Self {
    Self::Walk { path: path.as_ref().to_path_buf(), source }
  }

  pub fn non_utf8_path(path: impl AsRef<Path>) -> Self {
    Self::NonUtf8Path { path: path.as_ref().to_path_buf() }
  }

  pub fn config_read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::ConfigRead { path: path.as_ref().to_path_buf(), source }
  }

  pub fn config_parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
    Self::ConfigParse { path: path.as_ref().to_path_buf(), source }
  }

  pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::Write { path: path.as_ref().to_path_buf(), source }
  }
}

pub type Result<T> = std::result::Result<T, ScanError>;
