//! easytable: replay a scripted session against a data table.
//!
//! ```bash
//! easytable --rows people.json --columns columns.json \
//!     --config config.json --script session.json
//! ```
//!
//! Emitted events are printed as JSON lines, followed by the final page.

mod render;
mod script;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use easytable::prelude::*;
use serde::de::DeserializeOwned;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use script::Action;

#[derive(Debug, Parser)]
#[command(name = "easytable", version, about = "Replay interactions against a data table")]
struct Cli {
    /// JSON array of row objects.
    #[arg(long)]
    rows: PathBuf,

    /// JSON array of column descriptors.
    #[arg(long)]
    columns: PathBuf,

    /// JSON object of configuration overrides.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of actions to replay.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Group rows by this key.
    #[arg(long)]
    group_by: Option<String>,

    /// Total row count reported by the server (server pagination mode).
    #[arg(long)]
    count: Option<usize>,

    /// Write debug logs to this file.
    #[arg(long, default_value = "easytable.log")]
    log_file: PathBuf,

    /// Skip the final page rendering.
    #[arg(long)]
    events_only: bool,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Config::from_json(&text).with_context(|| format!("loading {}", path.display()))
}

fn run(cli: Cli) -> Result<()> {
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("creating log file {}", cli.log_file.display()))?;
    WriteLogger::init(LevelFilter::Debug, LogConfig::default(), log_file)
        .context("initializing logger")?;

    let rows: Vec<Row> = read_json(&cli.rows)?;
    let columns: Vec<Column> = read_json(&cli.columns)?;
    let config = load_config(cli.config.as_deref())?;
    let actions: Vec<Action> = match &cli.script {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let mut table = Table::with_config(config, columns, rows);
    table.apply(TableChanges {
        pagination: Some(PaginationInput { count: cli.count }),
        group_rows_by: Some(cli.group_by),
        ..Default::default()
    });
    log::info!(
        "[{}] loaded {} rows, {} columns, {} actions",
        table.id(),
        table.rows().len(),
        table.columns().len(),
        actions.len()
    );

    for (step, action) in actions.into_iter().enumerate() {
        log::debug!("step {}: {:?}", step, action);
        if !action.apply(&mut table) {
            log::info!("step {} ignored", step);
        }
        for event in table.take_events() {
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    if !cli.events_only {
        print!("{}", render::render(&table));
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
