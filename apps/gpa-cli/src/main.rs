//! # gpa-cli
//!
//! Command-line interface for the Group Policy applier.
//!
//! - `gpa show` — print the template bindings resolved from policy storage
//! - `gpa apply` — resolve and activate them (writes polkit rules)

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::GpaConfig;

/// Group Policy applier — translate stored policy into system policy files.
#[derive(Parser)]
#[command(name = "gpa", version, about)]
struct Cli {
    /// Configuration file (missing file means built-in defaults).
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Policy snapshot to read (overrides `storage.snapshot`).
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    /// Directory with `*.rules.tmpl` templates (overrides `polkit.templates_dir`).
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,

    /// polkit rules output directory (overrides `polkit.rules_dir`).
    #[arg(long, global = true)]
    rules_dir: Option<PathBuf>,

    /// Enable debug logging for the applier crates.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print resolved template bindings without changing the system.
    Show {
        /// Emit bindings as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Generate and activate the system policy files.
    Apply,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut config = GpaConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;
    config.apply_overrides(cli.snapshot, cli.templates_dir, cli.rules_dir);

    match cli.command {
        Commands::Show { json } => commands::show::execute(&config, json),
        Commands::Apply => commands::apply::execute(&config),
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    // Logs go to stderr so `gpa show --json` output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref())?)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    Ok(())
}

/// `RUST_LOG` wins when set; `--verbose` or an unset variable selects the
/// per-crate defaults.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
    if let Some(directives) = rust_log.filter(|d| !verbose && !d.trim().is_empty()) {
        return EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {}: {}", EnvFilter::DEFAULT_ENV, directives));
    }
    let level = if verbose { "debug" } else { "info" };
    Ok(EnvFilter::try_new(format!(
        "gpa_applier={level},gpa_template={level},gpa_storage={level},gpa={level}"
    ))?)
}
