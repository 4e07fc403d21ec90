//! Word lists used to fill prompt templates.
//!
//! The built-in tables are compiled in. A config file may replace any of
//! them; tables it does not name keep their built-in contents.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PromptError, Result};

pub const SUBJECTS: &[&str] = &[
  "cat", "dog", "bird", "horse", "elephant", "lion", "tiger", "bear", "wolf", "fox",
  "person", "woman", "man", "child", "elderly person",
  "businessman", "artist", "chef", "doctor", "teacher",
  "tree", "flower", "rose", "sunflower",
  "cactus", "bonsai", "oak tree", "pine tree", "cherry blossom",
  "mountain", "forest", "beach", "desert", "valley",
  "canyon", "waterfall", "river", "lake", "ocean",
  "building", "house", "castle", "temple", "church",
  "skyscraper", "cabin", "mansion", "cottage", "tower",
  "car", "truck", "bicycle", "motorcycle", "airplane", "helicopter", "boat", "ship", "train", "bus",
  "robot", "dragon", "unicorn", "phoenix", "mermaid", "fairy", "elf", "dwarf", "wizard", "knight",
  "apple", "orange", "banana", "strawberry", "grape",
  "watermelon", "pineapple", "mango", "peach", "cherry",
  "laptop", "phone", "camera", "book", "guitar", "piano", "violin", "drum", "trumpet", "flute",
  "planet", "star", "moon", "sun", "comet",
  "asteroid", "galaxy", "nebula", "black hole", "constellation",
];

pub const SETTINGS: &[&str] = &[
  "in a forest", "on a beach", "in a city", "in the mountains", "in a desert", "underwater",
  "in space", "in a garden", "in a park", "on a street", "in a room", "in a studio",
  "at sunset", "at sunrise", "at night", "during the day", "at dawn", "at dusk",
  "in winter", "in spring", "in summer", "in autumn", "in the rain", "in the snow",
  "in a fantasy world", "in a futuristic city", "in medieval times", "in ancient Rome",
  "on Mars", "on the moon", "in a jungle", "in a cave", "on a cliff", "by a river",
  "in a valley", "on a hilltop", "in a field", "in a meadow", "in a clearing",
  "inside a castle", "inside a temple", "inside a spaceship", "inside a laboratory",
  "at the beach", "at the mountains", "at a lake", "at the ocean", "at a waterfall",
];

pub const STYLES: &[&str] = &[
  "photorealistic", "oil painting", "watercolor", "pencil sketch", "digital art",
  "anime style", "cartoon style", "3D render", "pixel art", "vector art",
  "abstract art", "surrealist style", "impressionist style", "cubist style", "art deco",
  "minimalist", "maximalist", "vintage photograph", "retro style", "cyberpunk style",
  "steampunk style", "gothic style", "baroque style", "renaissance style", "modern art",
  "pop art", "graffiti art", "street art", "concept art", "matte painting",
  "illustration", "comic book style", "manga style", "cinematic", "dramatic lighting",
  "soft lighting", "neon lighting", "natural lighting", "studio lighting", "golden hour",
];

pub const QUALITIES: &[&str] = &[
  "highly detailed", "ultra realistic", "8k resolution", "professional photography",
  "masterpiece", "award winning", "trending on artstation", "featured on pixiv",
  "stunning", "beautiful", "gorgeous", "elegant", "majestic", "epic",
  "dramatic", "atmospheric", "moody", "vibrant", "colorful", "monochrome",
  "high contrast", "soft focus", "sharp focus", "bokeh", "depth of field",
  "wide angle", "close-up", "macro photography", "aerial view", "bird's eye view",
  "cinematic composition", "rule of thirds", "symmetrical", "asymmetrical",
];

pub const ADJECTIVES: &[&str] = &[
  "red", "blue", "green", "yellow", "purple", "orange", "pink", "black", "white", "golden",
  "silver", "bronze", "copper", "emerald", "sapphire", "ruby", "amber", "violet", "turquoise",
  "large", "small", "tiny", "huge", "massive", "giant", "miniature", "colossal",
  "old", "ancient", "modern", "futuristic", "vintage", "antique", "new", "weathered",
  "beautiful", "elegant", "majestic", "grand", "magnificent", "stunning", "gorgeous",
  "dark", "bright", "dim", "glowing", "shimmering", "sparkling", "radiant", "luminous",
  "mysterious", "magical", "enchanted", "mystical", "ethereal", "surreal", "dreamlike",
  "peaceful", "serene", "calm", "tranquil", "quiet", "still", "silent",
  "busy", "crowded", "bustling", "lively", "vibrant", "energetic", "dynamic",
  "lonely", "isolated", "abandoned", "desolate", "empty", "barren", "deserted",
];

pub const ACTIONS: &[&str] = &[
  "sitting", "standing", "running", "walking", "flying", "swimming", "jumping",
  "sleeping", "resting", "playing", "working", "reading", "writing", "painting",
  "dancing", "singing", "playing music", "cooking", "eating", "drinking",
  "looking at camera", "looking away", "smiling", "laughing", "crying", "thinking",
  "meditating", "exercising", "stretching", "climbing", "exploring", "discovering",
  "creating", "building", "destroying", "fighting", "embracing", "celebrating",
];

pub const WEATHER: &[&str] = &[
  "sunny", "cloudy", "rainy", "snowy", "foggy", "misty", "stormy", "windy",
  "clear sky", "overcast", "partly cloudy", "thunderstorm", "blizzard", "drizzle",
];

pub const TIMES: &[&str] = &[
  "morning", "afternoon", "evening", "night", "midnight", "dawn", "dusk",
  "sunrise", "sunset", "golden hour", "blue hour", "twilight", "noon",
];

pub const SCENARIOS: &[&str] = &[
  "a cozy coffee shop interior with people reading books",
  "a bustling marketplace with vendors and colorful stalls",
  "a peaceful zen garden with koi pond and stone path",
  "a high-tech laboratory with holographic displays",
  "a medieval tavern with wooden tables and fireplace",
  "a futuristic cityscape with flying vehicles",
  "a mystical forest clearing with glowing mushrooms",
  "a desert oasis with palm trees and clear water",
  "a mountain temple at sunrise with prayer flags",
  "an underwater coral reef with tropical fish",
];

/// Names one of the vocabulary tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
  Subjects,
  Settings,
  Styles,
  Qualities,
  Adjectives,
  Actions,
  Weather,
  Times,
  Scenarios,
}

impl Table {
  pub fn name(self) -> &'static str {
    match self {
      Table::Subjects => "subjects",
      Table::Settings => "settings",
      Table::Styles => "styles",
      Table::Qualities => "qualities",
      Table::Adjectives => "adjectives",
      Table::Actions => "actions",
      Table::Weather => "weather",
      Table::Times => "times",
      Table::Scenarios => "scenarios",
    }
  }
}

/// The full set of tables a generator draws from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
  #[serde(default = "default_subjects")]
  pub subjects: Vec<String>,
  #[serde(default = "default_settings")]
  pub settings: Vec<String>,
  #[serde(default = "default_styles")]
  pub styles: Vec<String>,
  #[serde(default = "default_qualities")]
  pub qualities: Vec<String>,
  #[serde(default = "default_adjectives")]
  pub adjectives: Vec<String>,
  #[serde(default = "default_actions")]
  pub actions: Vec<String>,
  #[serde(default = "default_weather")]
  pub weather: Vec<String>,
  #[serde(default = "default_times")]
  pub times: Vec<String>,
  #[serde(default = "default_scenarios")]
  pub scenarios: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
  words.iter().map(|w| w.to_string()).collect()
}

fn default_subjects() -> Vec<String> {
  owned(SUBJECTS)
}
fn default_settings() -> Vec<String> {
  owned(SETTINGS)
}
fn default_styles() -> Vec<String> {
  owned(STYLES)
}
fn default_qualities() -> Vec<String> {
  owned(QUALITIES)
}
fn default_adjectives() -> Vec<String> {
  owned(ADJECTIVES)
}
fn default_actions() -> Vec<String> {
  owned(ACTIONS)
}
fn default_weather() -> Vec<String> {
  owned(WEATHER)
}
fn default_times() -> Vec<String> {
  owned(TIMES)
}
fn default_scenarios() -> Vec<String> {
  owned(SCENARIOS)
}

impl Default for Vocabulary {
  fn default() -> Self {
    Self {
      subjects: default_subjects(),
      settings: default_settings(),
      styles: default_styles(),
      qualities: default_qualities(),
      adjectives: default_adjectives(),
      actions: default_actions(),
      weather: default_weather(),
      times: default_times(),
      scenarios: default_scenarios(),
    }
  }
}

impl Vocabulary {
  pub fn table(&self, table: Table) -> &[String] {
    match table {
      Table::Subjects => &self.subjects,
      Table::Settings => &self.settings,
      Table::Styles => &self.styles,
      Table::Qualities => &self.qualities,
      Table::Adjectives => &self.adjectives,
      Table::Actions => &self.actions,
      Table::Weather => &self.weather,
      Table::Times => &self.times,
      Table::Scenarios => &self.scenarios,
    }
  }

  /// Pick one entry of `table` uniformly at random
  pub fn pick<R: Rng + ?Sized>(&self, table: Table, rng: &mut R) -> Result<&str> {
    self
      .table(table)
      .choose(rng)
      .map(String::as_str)
      .ok_or(PromptError::EmptyTable(table.name()))
  }
}
