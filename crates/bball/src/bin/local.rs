//! Runs events through a handler locally, without the Lambda runtime.
//!
//! ```bash
//! echo '{"action": "create", "data": {"name": "Test", "value": 42}}' | bball-local items
//! bball-local records --event events.json --sqlite-path /tmp/records.db
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use bball::storage::InMemoryRepository;
use bball::{telemetry, Config, EntryService, InvocationError, ItemsHandler, RecordsHandler};
use bball_core::event::Response;

/// Run function events locally and print each response
#[derive(Parser, Debug)]
#[command(name = "bball-local")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file holding one event or an array of events (stdin when omitted or "-")
    #[arg(long, short, global = true)]
    event: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Implicit-create events against the relational store
    Records {
        /// Use this SQLite database instead of an in-memory store
        #[arg(long)]
        sqlite_path: Option<String>,
    },
    /// Explicit-action events against the key-value store
    Items {
        /// Use DynamoDB (configured from the environment) instead of an in-memory store
        #[arg(long)]
        dynamodb: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    telemetry::init(config.log_format)?;

    let events = read_events(cli.event.as_deref())?;

    match cli.command {
        Command::Records { sqlite_path } => {
            let handler = RecordsHandler::new(EntryService::new(records_repository(sqlite_path)?));
            for event in &events {
                print_response(&handler.invoke(event).await)?;
            }
        }
        Command::Items { dynamodb } => {
            let handler =
                ItemsHandler::new(EntryService::new(items_repository(dynamodb, &config)?));
            for event in &events {
                match handler.handle(event).await {
                    Ok(response) => print_response(&response)?,
                    Err(err) => print_failure(&err),
                }
            }
        }
    }

    Ok(())
}

fn read_events(path: Option<&std::path::Path>) -> Result<Vec<Value>> {
    let raw = match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read events from stdin")?;
            raw
        }
    };

    let value: Value = if raw.trim().is_empty() {
        json!({})
    } else {
        serde_json::from_str(&raw).context("Events are not valid JSON")?
    };

    Ok(match value {
        Value::Array(events) => events,
        event => vec![event],
    })
}

fn records_repository(
    sqlite_path: Option<String>,
) -> Result<Arc<dyn bball_core::storage::EntryRepository<i64>>> {
    match sqlite_path {
        #[cfg(feature = "sqlite")]
        Some(path) => Ok(Arc::new(bball::storage::SqliteRepository::open(path))),
        #[cfg(not(feature = "sqlite"))]
        Some(_) => anyhow::bail!("--sqlite-path needs the `sqlite` feature"),
        None => Ok(Arc::new(InMemoryRepository::relational())),
    }
}

fn items_repository(
    dynamodb: bool,
    config: &Config,
) -> Result<Arc<dyn bball_core::storage::EntryRepository<String>>> {
    if !dynamodb {
        return Ok(Arc::new(InMemoryRepository::key_value()));
    }

    #[cfg(feature = "dynamodb")]
    {
        let provider = Arc::new(bball::storage::DynamoDbClientProvider::new(config.aws_settings()));
        Ok(Arc::new(bball::storage::DynamoDbRepository::new(
            provider,
            config.dynamodb_table_name.clone(),
        )))
    }

    #[cfg(not(feature = "dynamodb"))]
    {
        let _ = config;
        anyhow::bail!("--dynamodb needs the `dynamodb` feature")
    }
}

fn print_response(response: &Response) -> Result<()> {
    let body = response.body_json().unwrap_or(Value::String(response.body.clone()));
    let printable = json!({"statusCode": response.status_code, "body": body});
    println!("{}", serde_json::to_string_pretty(&printable)?);
    Ok(())
}

fn print_failure(err: &InvocationError) {
    eprintln!("Invocation failed: {err}");
}
