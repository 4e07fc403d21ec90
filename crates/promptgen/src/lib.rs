//! Promptgen - bulk prompt generation for text-to-image testing
//!
//! Fills fixed sentence templates from vocabulary tables, deduplicates the
//! results and merges them into one category of an existing prompts file.

pub mod config;
pub mod error;
pub mod generator;
pub mod record;
pub mod store;
pub mod template;
pub mod vocabulary;

pub use config::GeneratorConfig;
pub use error::{PromptError, Result};
pub use generator::{CategoryCounts, GenerationReport, PromptGenerator};
pub use record::PromptRecord;
pub use store::PromptStore;
pub use template::Template;
pub use vocabulary::Vocabulary;
