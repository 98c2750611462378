//! codedocs CLI
//!
//! Collects every source file under a directory into one markdown document.

use anyhow::{Context, Result};
use clap::Parser;
use codedocs_core::{DocGenerator, DocsConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "codedocs")]
#[command(about = "Concatenate a project's source files into a markdown document")]
#[command(version)]
struct Cli {
    /// Output file (default: CODE_DOCS.md, or the config's output_path)
    output: Option<PathBuf>,

    /// Directory to walk
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file (default: <root>/.codedocs.yaml, then the user config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Additional directory name to skip (repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    exclude_dirs: Vec<String>,

    /// Additional file extension to include, e.g. `.rs` (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Descend into symlinked directories
    #[arg(long)]
    follow_symlinks: bool,

    /// Also skip paths matched by .gitignore rules
    #[arg(long)]
    gitignore: bool,

    /// Keep the file system's order instead of sorting by name
    #[arg(long)]
    no_sort: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let output = run(&cli)?;
    println!("{}", completion_notice(&output));
    Ok(())
}

/// Generate the document and return the path it was written to.
fn run(cli: &Cli) -> Result<PathBuf> {
    let config = build_config(cli)?;
    let output = config.output_path.clone();

    DocGenerator::new(config)
        .write_to_file(&cli.root, &output)
        .with_context(|| format!("Failed to document {}", cli.root.display()))?;

    Ok(output)
}

fn completion_notice(output: &Path) -> String {
    format!("All code files have been documented in {}.", output.display())
}

fn build_config(cli: &Cli) -> Result<DocsConfig> {
    let mut config = match &cli.config {
        Some(path) => DocsConfig::load_from(path).context("Failed to load config")?,
        None => DocsConfig::load(&cli.root),
    };

    config.exclude_dirs.extend(cli.exclude_dirs.iter().cloned());
    config.extensions.extend(cli.extensions.iter().cloned());

    if let Some(output) = &cli.output {
        config.output_path = output.clone();
    }
    if cli.follow_symlinks {
        config.follow_symlinks = true;
    }
    if cli.gitignore {
        config.respect_gitignore = true;
    }
    if cli.no_sort {
        config.sort_entries = false;
    }

    Ok(config)
}
