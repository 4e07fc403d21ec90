//! Bulk prompt generation
//!
//! Each category is generated on its own, the results are concatenated in
//! [`Template::ALL`] order and then deduplicated keeping the first
//! occurrence of every string.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::error::Result;
use crate::record::PromptRecord;
use crate::template::Template;
use crate::vocabulary::Vocabulary;

/// How many prompts to draw for each category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
  #[serde(default = "default_simple")]
  pub simple: usize,
  #[serde(default = "default_descriptive")]
  pub descriptive: usize,
  #[serde(default = "default_contextual")]
  pub contextual: usize,
  #[serde(default = "default_action")]
  pub action: usize,
  #[serde(default = "default_styled")]
  pub styled: usize,
  #[serde(default = "default_complex")]
  pub complex: usize,
  #[serde(default = "default_quality")]
  pub quality: usize,
  #[serde(default = "default_weather_time")]
  pub weather_time: usize,
  #[serde(default = "default_ultra_detailed")]
  pub ultra_detailed: usize,
  #[serde(default = "default_scenario")]
  pub scenario: usize,
}

// Default count functions
fn default_simple() -> usize {
  500
}
fn default_descriptive() -> usize {
  1000
}
fn default_contextual() -> usize {
  1500
}
fn default_action() -> usize {
  1000
}
fn default_styled() -> usize {
  1500
}
fn default_complex() -> usize {
  2000
}
fn default_quality() -> usize {
  1000
}
fn default_weather_time() -> usize {
  800
}
fn default_ultra_detailed() -> usize {
  1500
}
fn default_scenario() -> usize {
  500
}

impl Default for CategoryCounts {
  fn default() -> Self {
    Self {
      simple: default_simple(),
      descriptive: default_descriptive(),
      contextual: default_contextual(),
      action: default_action(),
      styled: default_styled(),
      complex: default_complex(),
      quality: default_quality(),
      weather_time: default_weather_time(),
      ultra_detailed: default_ultra_detailed(),
      scenario: default_scenario(),
    }
  }
}

impl CategoryCounts {
  /// All counts zero; handy as a base for generating a single category
  pub fn none() -> Self {
    Self {
      simple: 0,
      descriptive: 0,
      contextual: 0,
      action: 0,
      styled: 0,
      complex: 0,
      quality: 0,
      weather_time: 0,
      ultra_detailed: 0,
      scenario: 0,
    }
  }

  pub fn get(&self, template: Template) -> usize {
    match template {
      Template::Simple => self.simple,
      Template::Descriptive => self.descriptive,
      Template::Contextual => self.contextual,
      Template::Action => self.action,
      Template::Styled => self.styled,
      Template::Complex => self.complex,
      Template::Quality => self.quality,
      Template::WeatherTime => self.weather_time,
      Template::UltraDetailed => self.ultra_detailed,
      Template::Scenario => self.scenario,
    }
  }

  pub fn total(&self) -> usize {
    Template::ALL.iter().map(|t| self.get(*t)).sum()
  }
}

/// Render `template` exactly `count` times; duplicates are kept
pub fn generate_category<R: Rng + ?Sized>(
  template: Template,
  count: usize,
  vocab: &Vocabulary,
  rng: &mut R,
) -> Result<Vec<String>> {
  (0..count).map(|_| template.render(vocab, rng)).collect()
}

pub fn generate_all<R: Rng + ?Sized>(
  counts: &CategoryCounts,
  vocab: &Vocabulary,
  rng: &mut R,
) -> Result<Vec<String>> {
  let mut prompts = Vec::with_capacity(counts.total());

  for template in Template::ALL {
    let count = counts.get(template);
    let batch = generate_category(template, count, vocab, rng)?;
    debug!(category = template.key(), count, "generated category");
    prompts.extend(batch);
  }

  Ok(prompts)
}

/// Drop repeated strings, keeping the first occurrence of each
pub fn dedup_preserving_order(prompts: Vec<String>) -> Vec<String> {
  let mut seen = HashSet::with_capacity(prompts.len());
  prompts.into_iter().filter(|p| seen.insert(p.clone())).collect()
}

/// Outcome of one generation run
#[derive(Debug, Clone)]
pub struct GenerationReport {
  /// Number of prompts drawn before deduplication
  pub generated: usize,
  pub prompts: Vec<PromptRecord>,
}

impl GenerationReport {
  pub fn unique(&self) -> usize {
    self.prompts.len()
  }
}

pub struct PromptGenerator {
  vocab: Vocabulary,
  counts: CategoryCounts,
  rng: StdRng,
}

impl PromptGenerator {
  /// Without a seed the generator is seeded from OS entropy
  pub fn new(vocab: Vocabulary, counts: CategoryCounts, seed: Option<u64>) -> Self {
    let rng = match seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    Self { vocab, counts, rng }
  }

  pub fn counts(&self) -> &CategoryCounts {
    &self.counts
  }

  pub fn run(&mut self) -> Result<GenerationReport> {
    let all = generate_all(&self.counts, &self.vocab, &mut self.rng)?;
    let generated = all.len();
    let prompts: Vec<PromptRecord> =
      dedup_preserving_order(all).into_iter().map(PromptRecord::from).collect();

    debug!(generated, unique = prompts.len(), "deduplicated prompts");
    Ok(GenerationReport { generated, prompts })
  }
}
