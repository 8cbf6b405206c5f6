//! `reviewer`: inspect the service manifest and check that the service graph composes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reviewer::domain::config::{LoggingConfig, ReviewerConfig};
use reviewer::domain::registry::ServiceRegistry;
use reviewer::kernel::config::load_config;
use reviewer_logger::{LevelFilter, Logger};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "reviewer")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Service registry tooling for the reviewer front-end")]
struct Cli {
    /// Configuration file (TOML, YAML or JSON). `REVIEWER__*` variables override it.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the service manifest in registration order
    List,
    /// Build every service from the configuration and print the wired graph
    Compose,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match cli.command {
        Command::List => {
            for name in ServiceRegistry::names() {
                writeln!(out, "{name}")?;
            }
        }
        Command::Compose => {
            let cfg: ReviewerConfig =
                load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
            // The subscriber depends on the loaded `logging` section, so the load is reported here.
            let _logger = init_logger(&cfg.logging)?;
            match &cli.config {
                Some(path) => tracing::info!("Configuration loaded from {}", path.display()),
                None => tracing::info!("No config file given, using defaults and environment"),
            }
            tracing::info!("Composing services");

            let services = reviewer::compose(&cfg).context("Service graph failed to compose")?;
            for (index, token) in services.tokens().enumerate() {
                writeln!(out, "{index} {token}")?;
            }
        }
    }

    Ok(())
}

fn init_logger(cfg: &LoggingConfig) -> Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Unknown log level {:?}", cfg.level))?;

    let builder = Logger::builder().name(env!("CARGO_BIN_NAME")).level(level);
    let builder = match &cfg.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };

    let Some(directory) = &cfg.directory else {
        return Ok(builder.init()?);
    };
    Ok(builder.path(directory).json(cfg.json).init()?)
}
