// Crisis Support - keyword crisis triage service
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

use crisis_support::config::{load_config, Config};
use crisis_support::crisis::{Category, CrisisAnalyzer, ReferenceData};
use crisis_support::server::CrisisServer;

#[derive(Parser, Debug)]
#[command(name = "crisis-support")]
#[command(about = "Keyword-based crisis triage with pre-authored support responses", version)]
struct Args {
    /// Path to config.toml (default: ~/.crisis-support/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Run mode (default: serve)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Run HTTP server
    Serve {
        /// Bind address (overrides config and CRISIS_SUPPORT_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Analyze a single message and print the response JSON
    Analyze {
        /// Message text
        message: String,
    },
    /// Print helplines, self-care techniques and emergency numbers
    Resources,
    /// Validate reference data and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    init_tracing(&config)?;

    match args.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => run_server(config, bind).await,
        Command::Analyze { message } => run_analyze(&config, &message),
        Command::Resources => run_resources(&config),
        Command::Check => run_check(&config),
    }
}

fn init_tracing(config: &Config) -> Result<()> {
    // Default: INFO level, can be overridden with RUST_LOG env var
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match &config.log_file {
        Some(log_path) => {
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

            let file_writer = Arc::new(log_file);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(move || file_writer.clone())
                .with_ansi(false); // No ANSI colors in log file

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Bridge log crate → tracing (for dependencies using log crate)
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// Load reference data from the configured file, or the built-in tables
fn load_reference_data(config: &Config) -> Result<(ReferenceData, String)> {
    match &config.data_path {
        Some(path) => {
            tracing::info!("Loading reference data from {}", path.display());
            let data = ReferenceData::load_from_file(path).map_err(|e| {
                anyhow::anyhow!(crisis_support::errors::wrap_error_with_suggestion(
                    format!("{:#}", e),
                    "Remove data_path from the config to use the built-in reference data",
                ))
            })?;
            Ok((data, path.display().to_string()))
        }
        None => Ok((ReferenceData::builtin(), "built-in tables".to_string())),
    }
}

fn build_analyzer(config: &Config) -> Result<CrisisAnalyzer> {
    let (data, source) = load_reference_data(config)?;
    CrisisAnalyzer::new(data)
        .map_err(|e| anyhow::anyhow!(crisis_support::errors::reference_data_error(&source, &e)))
}

/// Run HTTP server
async fn run_server(mut config: Config, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    // Refuse to start on inconsistent data
    let analyzer = build_analyzer(&config)?;

    if let Some(path) = &config.log_file {
        eprintln!("Server logs: {}", path.display());
    }

    let server = CrisisServer::new(config.server, analyzer)?;
    server.serve().await
}

fn run_analyze(config: &Config, message: &str) -> Result<()> {
    let analyzer = build_analyzer(config)?;
    let result = analyzer.analyze(message)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_resources(config: &Config) -> Result<()> {
    let analyzer = build_analyzer(config)?;
    println!("{}", serde_json::to_string_pretty(analyzer.resources())?);
    Ok(())
}

fn run_check(config: &Config) -> Result<()> {
    let (data, source) = load_reference_data(config)?;
    data.validate()
        .map_err(|e| anyhow::anyhow!(crisis_support::errors::reference_data_error(&source, &e)))?;

    println!("✓ Reference data OK ({})", source);
    for category in Category::PRIORITY {
        println!(
            "  {:<16} {} phrases",
            category.as_str(),
            data.keywords.phrases(category).len()
        );
    }
    println!("  {:<16} {} entries", "helplines", data.helplines.len());
    println!("  {:<16} {} entries", "templates", data.responses.len());

    if let Some(path) = config.data_path.as_deref().filter(|p| p.is_relative()) {
        println!("  note: data_path {} is relative to the working directory", path.display());
    }

    Ok(())
}
