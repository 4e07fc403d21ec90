use serde::{Deserialize, Serialize};

/// A generated prompt as stored in the prompts file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
  pub positive_prompt: String,
}

impl PromptRecord {
  pub fn new(positive_prompt: impl Into<String>) -> Self {
    Self { positive_prompt: positive_prompt.into() }
  }
}

impl From<String> for PromptRecord {
  fn from(positive_prompt: String) -> Self {
    Self { positive_prompt }
  }
}
