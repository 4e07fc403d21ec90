use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use pathscan::{build_entries, scan_files, Manifest, ScanConfig};

#[derive(Parser)]
#[command(name = "update-image-paths")]
#[command(
  about = concat!(
    "Generate a media manifest\n",
    "Scans a workspace for image and audio files and maps each one to its remote URL"
  )
)]
#[command(version)]
struct Cli {
  /// Directory to scan
  #[arg(short, long, default_value = ".")]
  root: PathBuf,

  /// Manifest to write (defaults to the configured file inside the root)
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Base URL prepended to every relative path
  #[arg(short, long)]
  base_url: Option<String>,

  /// Configuration file path
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

fn init_logging(verbose: bool) {
  let default = if verbose { "pathscan=debug,update_image_paths=debug" } else { "warn" };
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
    Some(path) => ScanConfig::load_from_file(path)?,
    None => ScanConfig::load(&cli.root)?,
  };
  if let Some(base_url) = cli.base_url {
    config.base_url = base_url;
  }
  let output = cli.output.unwrap_or_else(|| cli.root.join(&config.output_file));

  println!("Scanning workspace: {}", cli.root.display().to_string().cyan());
  let files = scan_files(&cli.root, &config)
    .with_context(|| format!("Could not scan {}", cli.root.display()))?;
  println!("Found {} files", files.len().to_string().bright_white().bold());

  let manifest = Manifest::new(build_entries(&files, &config.base_url)?);
  manifest.write(&output)?;

  println!(
    "{} Successfully wrote {} entries to {}",
    "✓".green(),
    manifest.images.len().to_string().cyan(),
    output.display().to_string().yellow()
  );

  Ok(())
}
