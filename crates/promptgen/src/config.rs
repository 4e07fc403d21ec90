//! Configuration for prompt generation
//!
//! Every field is optional in the config file. Without any file the
//! generator writes 11,300 draws into `text_to_image.generated_bulk_10k`
//! of `prompts.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PromptError, Result};
use crate::generator::CategoryCounts;
use crate::vocabulary::Vocabulary;

const CONFIG_PATHS: [&str; 2] = [".promptgen.json", "promptgen.json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
  /// Prompts file to merge into
  #[serde(default = "default_prompts_file")]
  pub prompts_file: PathBuf,
  /// Top-level section holding the category
  #[serde(default = "default_section")]
  pub section: String,
  /// Category key that receives the generated prompts
  #[serde(default = "default_category")]
  pub category: String,
  #[serde(default)]
  pub counts: CategoryCounts,
  #[serde(default)]
  pub vocabulary: Vocabulary,
}

fn default_prompts_file() -> PathBuf {
  PathBuf::from("prompts.json")
}
fn default_section() -> String {
  "text_to_image".to_string()
}
fn default_category() -> String {
  "generated_bulk_10k".to_string()
}

impl Default for GeneratorConfig {
  fn default() -> Self {
    Self {
      prompts_file: default_prompts_file(),
      section: default_section(),
      category: default_category(),
      counts: CategoryCounts::default(),
      vocabulary: Vocabulary::default(),
    }
  }
}

impl GeneratorConfig {
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| PromptError::read(path, e))?;
    serde_json::from_str(&content).map_err(|e| PromptError::parse(path, e))
  }

  /// Load configuration from the current directory or fall back to defaults
  pub fn load() -> Result<Self> {
    Self::load_from_dir(Path::new("."))
  }

  pub fn load_from_dir(dir: &Path) -> Result<Self> {
    for name in CONFIG_PATHS {
      let candidate = dir.join(name);
      if candidate.exists() {
        return Self::load_from_file(candidate);
      }
    }

    Ok(GeneratorConfig::default())
  }

  /// "section.category", as shown to the user
  pub fn target(&self) -> String {
    format!("{}.{}", self.section, self.category)
  }
}
