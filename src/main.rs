//! stylus-assets CLI - rewrite stylesheet asset references into fingerprinted URLs

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stylus_assets::{
  AssetFunctions, FunctionRegistry, ProjectConfig, ResolverStrategy, StringNode, build_resolver,
  functions::{ASSETS_FUNCTION, IMAGES_FUNCTION},
  register, rewrite_stylesheet,
};

#[derive(Parser)]
#[command(name = "stylus-assets")]
#[command(about = "Rewrite stylesheet asset references into fingerprinted URLs", long_about = None)]
#[command(version)]
struct Cli {
  /// Project root containing the assets directory and manifest
  #[arg(long, global = true, default_value = ".")]
  root: PathBuf,

  /// Configuration file (defaults to <root>/stylus-assets.json when present)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Override the configured resolver strategy
  #[arg(long, global = true, value_enum)]
  strategy: Option<ResolverStrategy>,

  /// Increase log verbosity (-v debug, -vv trace)
  #[arg(short, long, global = true, action = clap::ArgAction::Count)]
  verbose: u8,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Rewrite `assets()` and `images()` calls in a stylesheet
  Rewrite {
    /// Stylesheet to rewrite
    input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    out: Option<PathBuf>,
  },

  /// Print the URL literal produced for each asset path
  Resolve {
    /// Asset paths relative to the assets directory
    #[arg(required = true)]
    paths: Vec<String>,

    /// Treat paths as relative to the images directory
    #[arg(long)]
    images: bool,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let mut config = load_config(&cli.root, cli.config.as_deref())?;
  if let Some(strategy) = cli.strategy {
    config.strategy = strategy;
  }

  let resolver = build_resolver(&config, &cli.root).context("failed to set up asset resolver")?;
  let functions = AssetFunctions::from_config(resolver, &config);
  let mut registry = FunctionRegistry::new();
  register(&mut registry, functions);

  match cli.command {
    Commands::Rewrite { input, out } => rewrite_file(&registry, &input, out.as_deref()),
    Commands::Resolve { paths, images } => {
      let function = if images { IMAGES_FUNCTION } else { ASSETS_FUNCTION };
      let mut stdout = io::stdout().lock();
      for path in paths {
        let literal = registry
          .call(function, &StringNode::new(path.as_str()))
          .with_context(|| format!("failed to resolve {path}"))?;
        writeln!(stdout, "{literal}")?;
      }
      Ok(())
    }
  }
}

fn init_logging(verbose: u8) {
  let default_level = match verbose {
    0 => "info",
    1 => "debug",
    _ => "trace",
  };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
  let config = match explicit {
    Some(path) => ProjectConfig::from_path(path)?,
    None => ProjectConfig::discover(root)?,
  };
  Ok(config)
}

fn rewrite_file(registry: &FunctionRegistry, input: &Path, out: Option<&Path>) -> Result<()> {
  let source = fs::read_to_string(input)
    .with_context(|| format!("failed to read {}", input.display()))?;
  let output = rewrite_stylesheet(&source, registry)
    .with_context(|| format!("failed to rewrite {}", input.display()))?;

  match out {
    Some(path) => {
      if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      fs::write(path, &output.css)
        .with_context(|| format!("failed to write {}", path.display()))?;
      info!(
        input = %input.display(),
        output = %path.display(),
        replaced = output.replaced,
        "saved stylesheet"
      );
    }
    None => io::stdout().lock().write_all(output.css.as_bytes())?,
  }

  Ok(())
}
