//! fetch-guard command-line front end.
//!
//! Presses a virtual "Preload" button once: runs a single guarded GET and
//! prints what ended up in the title field.
//!
//! ```text
//! fetch-guard get http://localhost:8080/alice/fetchtitle?url=...
//! fetch-guard --title "old" title http://localhost:8080/alice/fetchtitle https://example.com/
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use fetch_guard::config::validation::validate_config;
use fetch_guard::config::{load_config, ConfigError, GuardConfig};
use fetch_guard::guard::{FetchGuard, Outcome};
use fetch_guard::observability::logging;
use fetch_guard::transport::{preload_address, HttpFetcher};
use fetch_guard::ui::{Button, ConsoleNotifier, TextField};

#[derive(Parser)]
#[command(name = "fetch-guard")]
#[command(about = "Run one deadline-guarded fetch into a text field", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deadline in milliseconds (overrides the config file).
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Initial value of the output field.
    #[arg(long, default_value = "")]
    title: String,

    /// Print the outcome and final field state as JSON.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a fully formed address
    Get { address: String },
    /// Ask a fetch-title endpoint for the title of a page
    Title { endpoint: String, target: String },
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    outcome: Outcome,
    address: String,
    value: String,
    enabled: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GuardConfig::default(),
    };
    if let Some(timeout_ms) = cli.timeout_ms {
        config.deadline.timeout_ms = timeout_ms;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability);

    let address = match &cli.command {
        Commands::Get { address } => address.clone(),
        Commands::Title { endpoint, target } => preload_address(endpoint, target)?,
    };

    tracing::debug!(
        address = %address,
        deadline_ms = config.deadline.timeout_ms,
        "Configuration loaded"
    );

    let field = Arc::new(TextField::new(cli.title.clone()));
    let button = Arc::new(Button::new());
    let fetcher = HttpFetcher::new(&config.http)?;
    let guard = FetchGuard::new(
        Arc::new(fetcher),
        field.clone(),
        button.clone(),
        Arc::new(ConsoleNotifier),
        config,
    );

    let outcome = guard.run(&address)?.wait().await?;

    if cli.json {
        let report = Report {
            outcome,
            address,
            value: field.value(),
            enabled: button.is_enabled(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", field.value());
    }

    Ok(())
}
