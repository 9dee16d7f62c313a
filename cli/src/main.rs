//! TopicFoundry CLI: forge event schemas and filters from ABIs, offline.
//!
//! # Commands
//! ```text
//! topicfoundry build   ./abis/*.json [--pretty]
//! topicfoundry ddl     ./abis/*.json --target postgres [--schema public]
//! topicfoundry json    ./abis/*.json [--out schemas.json]
//! topicfoundry dict    ./abis/*.json [--out dict.csv]
//! topicfoundry filters ./abis/*.json [--pretty]
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use topicfoundry_codegen::SqlDialect;
use topicfoundry_core::{extract_events, EventModel};
use topicfoundry_observability::init_tracing;
use tracing::info;

mod cmd_build;
mod cmd_ddl;
mod cmd_dict;
mod cmd_filters;
mod cmd_json;
mod config;
mod inputs;
mod output;

use config::FoundryConfig;

#[derive(Parser)]
#[command(
    name = "topicfoundry",
    about = "Forge event schemas & filters from ABIs (offline)",
    long_about = "
TopicFoundry derives topic0 hashes, SQL tables (PostgreSQL, BigQuery,
ClickHouse), JSON Schemas, CSV data dictionaries and eth_getLogs filter
stubs from contract ABIs. No network access.

ABI files may be a bare JSON array, a build artifact with an `abi` key,
or an explorer response whose `result` holds the ABI as a JSON string.

ENVIRONMENT VARIABLES:
  TOPICFOUNDRY_LOG    Log filter directives (overrides config/flags)
",
    version
)]
struct Cli {
    /// YAML config file (log, ddl and filter defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of every event in the given ABIs
    Build {
        /// ABI files or glob patterns
        #[arg(required = true)]
        abi_paths: Vec<String>,
        /// Console summary instead of JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Emit CREATE TABLE statements for all events
    Ddl {
        /// ABI files or glob patterns
        #[arg(required = true)]
        abi_paths: Vec<String>,
        /// postgres | bigquery | clickhouse
        #[arg(long)]
        target: Option<SqlDialect>,
        /// Postgres schema (ignored for other targets) [default: public]
        #[arg(long)]
        schema: Option<String>,
    },

    /// Emit a JSON manifest with a JSON Schema per event
    Json {
        /// ABI files or glob patterns
        #[arg(required = true)]
        abi_paths: Vec<String>,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Produce a CSV data dictionary
    Dict {
        /// ABI files or glob patterns
        #[arg(required = true)]
        abi_paths: Vec<String>,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print eth_getLogs topic stubs per event
    Filters {
        /// ABI files or glob patterns
        #[arg(required = true)]
        abi_paths: Vec<String>,
        /// Console view grouped by file
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = FoundryConfig::load(cli.config.as_deref())?;

    let mut log = config.log.clone();
    if cli.verbose {
        log.level = "debug".into();
    }
    log.json |= cli.log_json;
    init_tracing(&log);

    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Build { abi_paths, pretty } => {
            let events = load_all(&abi_paths)?;
            cmd_build::run(&events, pretty, &mut stdout)
        }

        Commands::Ddl { abi_paths, target, schema } => {
            let dialect = target.or(config.ddl.target).ok_or_else(|| {
                anyhow!("--target is required (postgres, bigquery, clickhouse)")
            })?;
            let schema = schema.unwrap_or_else(|| config.ddl.schema.clone());
            let events = load_all(&abi_paths)?;
            cmd_ddl::run(&events, dialect, &schema, &mut stdout)
        }

        Commands::Json { abi_paths, out } => {
            let events = load_all(&abi_paths)?;
            cmd_json::run(&events, out.as_deref(), &mut stdout)
        }

        Commands::Dict { abi_paths, out } => {
            let events = load_all(&abi_paths)?;
            cmd_dict::run(&events, out.as_deref(), &mut stdout)
        }

        Commands::Filters { abi_paths, pretty } => {
            let files = inputs::resolve_inputs(&abi_paths)?;
            cmd_filters::run(&files, &config.filters, pretty, &mut stdout)
        }
    }
}

/// Resolve inputs and extract every event, in sorted file order.
/// The first unreadable or unrecognized file aborts the run.
fn load_all(patterns: &[String]) -> Result<Vec<EventModel>> {
    let files = inputs::resolve_inputs(patterns)?;
    info!(files = files.len(), "resolved ABI inputs");
    let mut events = Vec::new();
    for path in &files {
        events.extend(extract_events(path)?);
    }
    info!(events = events.len(), "extracted events");
    Ok(events)
}
