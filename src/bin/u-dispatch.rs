//! Command-line front end: solve a request file or run the benchmark suite.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use u_dispatch::api::OptimizationRequest;
use u_dispatch::scenario::{default_scenarios, format_table, run_benchmark};
use u_dispatch::{Engine, EngineConfig, OptimizeError};

#[derive(Debug, Parser)]
#[command(name = "u-dispatch", version, about = "Multi-source container dispatch optimizer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a JSON request and print the response JSON to stdout.
    Solve {
        /// Path to the request file.
        request: PathBuf,
        /// Optional engine configuration (JSON).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pretty-print the response.
        #[arg(long)]
        pretty: bool,
    },
    /// Compare both strategies on the built-in synthetic scenarios.
    Benchmark {
        /// RNG seed for scenario generation.
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Optional engine configuration (JSON).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot encode response: {0}")]
    Encode(serde_json::Error),
    #[error(transparent)]
    Optimize(#[from] OptimizeError),
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.clone(),
        source,
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig, CliError> {
    path.map_or_else(|| Ok(EngineConfig::default()), read_json::<EngineConfig>)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Solve {
            request,
            config,
            pretty,
        } => {
            let engine = Engine::new(load_config(config.as_ref())?);
            let request: OptimizationRequest = read_json(&request)?;
            let response = engine.optimize(&request)?;
            let json = if pretty {
                serde_json::to_string_pretty(&response)
            } else {
                serde_json::to_string(&response)
            }
            .map_err(CliError::Encode)?;
            println!("{json}");
        }
        Command::Benchmark { seed, config } => {
            let engine = Engine::new(load_config(config.as_ref())?);
            let rows = run_benchmark(&engine, &default_scenarios(), seed)?;
            print!("{}", format_table(&rows));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "u-dispatch failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
