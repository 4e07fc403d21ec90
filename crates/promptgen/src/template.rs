use rand::Rng;

use crate::error::Result;
use crate::vocabulary::{Table, Vocabulary};

/// One prompt category and the sentence shape it fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
  /// `a {subject}`
  Simple,
  /// `a {adjective} {subject}`
  Descriptive,
  /// `a {subject} {setting}`
  Contextual,
  /// `a {subject} {action}`
  Action,
  /// `a {subject}, {style}`
  Styled,
  /// `a {adjective} {subject} {action} {setting}`
  Complex,
  /// `a {subject}, {quality}`
  Quality,
  /// `a {subject} during {weather} weather at {time}`
  WeatherTime,
  /// `{adjective} {adjective} {subject} {action} {setting}, {style}, {quality}`
  UltraDetailed,
  /// `{scenario}, {style}`
  Scenario,
}

impl Template {
  /// Every category, in generation order
  pub const ALL: [Template; 10] = [
    Template::Simple,
    Template::Descriptive,
    Template::Contextual,
    Template::Action,
    Template::Styled,
    Template::Complex,
    Template::Quality,
    Template::WeatherTime,
    Template::UltraDetailed,
    Template::Scenario,
  ];

  pub fn key(self) -> &'static str {
    match self {
      Template::Simple => "simple",
      Template::Descriptive => "descriptive",
      Template::Contextual => "contextual",
      Template::Action => "action",
      Template::Styled => "styled",
      Template::Complex => "complex",
      Template::Quality => "quality",
      Template::WeatherTime => "weather_time",
      Template::UltraDetailed => "ultra_detailed",
      Template::Scenario => "scenario",
    }
  }

  /// Fill this template with one random draw per slot
  pub fn render<R: Rng + ?Sized>(self, vocab: &Vocabulary, rng: &mut R) -> Result<String> {
    let prompt = match self {
      Template::Simple => {
        let subject = vocab.pick(Table::Subjects, rng)?;
        format!("a {subject}")
      }
      Template::Descriptive => {
        let adjective = vocab.pick(Table::Adjectives, rng)?;
        let subject = vocab.pick(Table::Subjects, rng)?;
        format!("a {adjective} {subject}")
      }
      Template::Contextual => {
        let subject = vocab.pick(Table::Subjects, rng)?;
        let setting = vocab.pick(Table::Settings, rng)?;
        format!("a {subject} {setting}")
      }
      Template::Action => {
        let subject = vocab.pick(Table::Subjects, rng)?;
        let action = vocab.pick(Table::Actions, rng)?;
        format!("a {subject} {action}")
      }
      Template::Styled => {
        let subject = vocab.pick(Table::Subjects, rng)?;
        let style = vocab.pick(Table::Styles, rng)?;
        format!("a {subject}, {style}")
      }
      Template::Complex => {
        let adjective = vocab.pick(Table::Adjectives, rng)?;
        let subject = vocab.pick(Table::Subjects, rng)?;
        let action = vocab.pick(Table::Actions, rng)?;
        let setting = vocab.pick(Table::Settings, rng)?;
        format!("a {adjective} {subject} {action} {setting}")
      }
      Template::Quality => {
        let subject = vocab.pick(Table::Subjects, rng)?;
        let quality = vocab.pick(Table::Qualities, rng)?;
        format!("a {subject}, {quality}")
      }
      Template::WeatherTime => {
        let subject = vocab.pick(Table::Subjects, rng)?;
        let weather = vocab.pick(Table::Weather, rng)?;
        let time = vocab.pick(Table::Times, rng)?;
        format!("a {subject} during {weather} weather at {time}")
      }
      Template::UltraDetailed => {
        let first = vocab.pick(Table::Adjectives, rng)?;
        let second = vocab.pick(Table::Adjectives, rng)?;
        let subject = vocab.pick(Table::Subjects, rng)?;
        let action = vocab.pick(Table::Actions, rng)?;
        let setting = vocab.pick(Table::Settings, rng)?;
        let style = vocab.pick(Table::Styles, rng)?;
        let quality = vocab.pick(Table::Qualities, rng)?;
        format!("{first} {second} {subject} {action} {setting}, {style}, {quality}")
      }
      Template::Scenario => {
        let scenario = vocab.pick(Table::Scenarios, rng)?;
        let style = vocab.pick(Table::Styles, rng)?;
        format!("{scenario}, {style}")
      }
    };

    Ok(prompt)
  }
}
