//! Assembly portal server: content API for the assembly and conference site.
//!
//! Main entry point that loads configuration, sets up logging and
//! dispatches to the requested command.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use portal_core::config::AppConfig;
use portal_core::error::AppError;
use portal_database::DatabasePool;

/// Assembly portal content server
#[derive(Debug, Parser)]
#[command(name = "portal-server", version, about, long_about = None)]
struct Cli {
    /// Configuration environment overlay (`config/<env>.toml`)
    #[arg(short, long, env = "PORTAL_ENV", default_value = "development")]
    env: String,

    /// Directory holding the configuration files
    #[arg(short, long, default_value = "config")]
    config_dir: String,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    command: Option<Command>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load_from(&cli.config_dir, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %cli.env, "Configuration loaded");

    let outcome = match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => portal_api::run_server(config).await,
        Command::Migrate => migrate(&config).await,
    };

    if let Err(e) = outcome {
        tracing::error!(error = %e, "Command failed");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn migrate(config: &AppConfig) -> Result<(), AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    portal_database::migration::run_migrations(pool.pool()).await?;
    pool.close().await;
    tracing::info!("Database migrations complete");
    Ok(())
}
