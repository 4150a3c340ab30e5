mod config;
mod repl;
mod signals;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::AppConfig;

/// Calc Server - web-facing calculator service
#[derive(Parser)]
#[command(name = "calc-server")]
#[command(about = "Calc Server - web-facing calculator service")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Run,
    /// Validate configuration and exit
    Check,
    /// Run the interactive calculator loop
    Repl,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.to_string_lossy());
        }
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (CALC__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    match cli.command {
        Some(Commands::Check) => {
            init_tracing(&config, cli.verbose);
            tracing::info!("configuration OK, binding to {}", config.bind_addr());
            Ok(())
        }
        Some(Commands::Repl) => repl::run(),
        Some(Commands::Run) | None => {
            init_tracing(&config, cli.verbose);
            serve(&config).await
        }
    }
}

/// Initialize the fmt subscriber; `-v` flags outrank the configured level,
/// `RUST_LOG` outranks both.
fn init_tracing(config: &AppConfig, verbose: u8) {
    let directive = match verbose {
        0 => config.logging.level.clone(),
        1 => "info".to_owned(),
        2 => "debug".to_owned(),
        _ => "trace".to_owned(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Bind, serve, and shut down gracefully on Ctrl+C/SIGTERM.
async fn serve(config: &AppConfig) -> Result<()> {
    let router = calc_api::router();

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(signals::wait_for_shutdown())
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
