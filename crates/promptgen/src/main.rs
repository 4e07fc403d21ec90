use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use promptgen::{GeneratorConfig, PromptGenerator, PromptStore};

#[derive(Parser)]
#[command(name = "generate-prompts")]
#[command(
  about = concat!(
    "Generate bulk text-to-image prompts\n",
    "Fills vocabulary templates and merges the unique results into a prompts file"
  )
)]
#[command(version)]
struct Cli {
  /// Configuration file path
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Prompts file to update (overrides the config)
  #[arg(short, long)]
  prompts_file: Option<PathBuf>,

  /// Seed for reproducible output
  #[arg(short, long)]
  seed: Option<u64>,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

fn init_logging(verbose: bool) {
  let default = if verbose { "promptgen=debug,generate_prompts=debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let mut config = match &cli.config {
    Some(path) => GeneratorConfig::load_from_file(path)?,
    None => GeneratorConfig::load()?,
  };
  if let Some(prompts_file) = cli.prompts_file {
    config.prompts_file = prompts_file;
  }

  let target = config.target();
  let mut generator = PromptGenerator::new(config.vocabulary, config.counts, cli.seed);

  let total = generator.counts().total().to_string();
  println!("Generating {}+ prompts...", total.bright_white().bold());
  let report = generator.run().context("Prompt generation failed")?;
  println!("{} Generated {} unique prompts", "✓".green(), report.unique().to_string().cyan());
  tracing::debug!(generated = report.generated, unique = report.unique(), "generation finished");

  let mut store = PromptStore::load(&config.prompts_file)
    .with_context(|| format!("Could not open prompts file {}", config.prompts_file.display()))?;
  store.merge(&config.section, &config.category, &report.prompts)?;
  store.save()?;

  println!(
    "{} Successfully added {} prompts to {}",
    "✓".green(),
    report.unique().to_string().cyan(),
    config.prompts_file.display().to_string().yellow()
  );
  println!("New category: {}", target.cyan());

  Ok(())
}
