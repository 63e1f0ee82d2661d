//! `kitchen` - drive the production queue from the command line.
//!
//! Results go to stdout as JSON; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use kitchen_core::app::builder::DEVELOPMENT_DATA_DIR;
use kitchen_core::app::{AppBuilder, AppConfig, Environment, StorageBackend, StorageConfig};
use kitchen_core::observability::QueueCounts;
use kitchen_core::{OrderError, OrderService, ProductionOrder, ProductionQueue};

/// Kitchen production queue
#[derive(Parser)]
#[command(name = "kitchen")]
#[command(about = "Send orders to production, move them along, and show the kitchen queue")]
struct Args {
    /// Storage backend (memory, file)
    #[arg(long, env = "KITCHEN_STORAGE", default_value = "file")]
    storage: StorageBackend,

    /// Directory holding the order table (file backend)
    #[arg(long, env = "KITCHEN_DATA_DIR", default_value = DEVELOPMENT_DATA_DIR)]
    data_dir: PathBuf,

    /// Table name
    #[arg(long, env = "KITCHEN_TABLE", default_value = kitchen_core::app::config::DEFAULT_TABLE)]
    table: String,

    /// Log filter (trace, debug, info, warn, error, or a tracing directive)
    #[arg(long, env = "KITCHEN_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Put a new order on the production queue
    Send { order_id: u32 },
    /// Set the production status of an order
    Update { order_id: u32, status: String },
    /// Print the kitchen queue
    Queue,
    /// Print how many queued orders are in each status
    Status,
}

impl Args {
    fn app_config(&self) -> AppConfig {
        AppConfig {
            environment: Environment::Production,
            storage: StorageConfig {
                backend: self.storage,
                data_dir: Some(self.data_dir.clone()),
                table: self.table.clone(),
            },
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("encode output")?;
    println!("{json}");
    Ok(())
}

/// Exit code for each failure class, so scripts can branch on it.
fn exit_code(err: &OrderError) -> u8 {
    match err {
        OrderError::Validation(_) => 2,
        OrderError::Conflict { .. } => 3,
        OrderError::NotFound { .. } => 4,
        OrderError::Storage(_) => 5,
    }
}

/// What a command prints on success.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Order(ProductionOrder),
    Queue(ProductionQueue),
    Counts(QueueCounts),
}

async fn run(service: &OrderService, command: Command) -> Result<Output, OrderError> {
    Ok(match command {
        Command::Send { order_id } => {
            Output::Order(service.send_order_to_production(order_id).await?)
        }
        Command::Update { order_id, status } => Output::Order(
            service
                .update_production_order_status(order_id, &status)
                .await?,
        ),
        Command::Queue => Output::Queue(service.get_production_order_queue().await?),
        Command::Status => Output::Counts(service.queue_counts().await?),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine.
    let _ = dotenv::dotenv();

    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = args.app_config();
    debug!(?config, "starting");
    let app = AppBuilder::new()
        .config(config)
        .build()
        .context("invalid configuration")?;

    match run(app.service(), args.command).await {
        Ok(output) => {
            print_json(&output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("error: {err}");
            Ok(ExitCode::from(exit_code(&err)))
        }
    }
}
