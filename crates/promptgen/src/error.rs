use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
  #[error("Vocabulary table '{0}' is empty")]
  EmptyTable(&'static str),

  #[error("Failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("Failed to parse {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("{} does not contain a top-level JSON object", path.display())]
  NotAnObject { path: PathBuf },

  #[error("Section '{section}' is missing or is not a JSON object")]
  MissingSection { section: String },

  #[error("Failed to serialize prompts: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("Failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },
}

impl PromptError {
  pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::Read { path: path.as_ref().to_path_buf(), source }
  }

  pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
    Self::Parse { path: path.as_ref().to_path_buf(), source }
  }

  pub fn not_an_object(path: impl AsRef<Path>) -> Self {
    Self::NotAnObject { path: path.as_ref().to_path_buf() }
  }

  pub fn missing_section(section: impl Into<String>) -> Self {
    Self::MissingSection { section: section.into() }
  }

  pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
    Self::Write { path: path.as_ref().to_path_buf(), source }
  }
}

pub type Result<T> = std::result::Result<T, PromptError>;
