//! ChartStudy CLI — catalog listing and batch indicator computation.
//!
//! Commands:
//! - `list` — print the indicator catalog (table or JSON)
//! - `compute` — compute indicators over a candle CSV, from a TOML config
//!   file or a single `--kind` with `--param` overrides, and emit JSON

mod input;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chartstudy_core::{compute_all, list_definitions, ConfigFactory, IndicatorResult};

use crate::input::{load_candles, parse_param, ConfigFile};

#[derive(Parser)]
#[command(
    name = "chartstudy",
    about = "ChartStudy CLI — technical indicators over OHLCV candles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the indicator catalog.
    List {
        /// Emit the catalog as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compute indicators over a candle CSV.
    Compute {
        /// CSV with columns time,open,high,low,close,volume.
        #[arg(long)]
        candles: PathBuf,

        /// TOML file with `[[indicator]]` tables.
        #[arg(long, conflicts_with_all = ["kind", "param"])]
        config: Option<PathBuf>,

        /// Single indicator kind (e.g., sma, rsi, bollinger).
        #[arg(long)]
        kind: Option<String>,

        /// Parameter override for --kind, as name=value. Repeatable.
        #[arg(long = "param", value_parser = parse_param, requires = "kind")]
        param: Vec<(String, f64)>,

        /// Write JSON here instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => run_list(json),
        Commands::Compute {
            candles,
            config,
            kind,
            param,
            output,
            pretty,
        } => run_compute(candles, config, kind, param, output, pretty),
    }
}

fn run_list(json: bool) -> Result<()> {
    let defs = list_definitions();
    if json {
        println!("{}", serde_json::to_string_pretty(defs)?);
        return Ok(());
    }

    println!(
        "{:<12} {:<28} {:<11} {:<8} {}",
        "Kind", "Name", "Category", "Pane", "Defaults"
    );
    println!("{}", "-".repeat(90));
    for def in defs {
        let defaults: Vec<String> = def
            .default_params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        println!(
            "{:<12} {:<28} {:<11} {:<8} {}",
            def.kind.as_str(),
            def.display_name,
            format!("{:?}", def.category),
            if def.overlay { "overlay" } else { "pane" },
            defaults.join(" ")
        );
    }
    Ok(())
}

fn run_compute(
    candles_path: PathBuf,
    config_path: Option<PathBuf>,
    kind: Option<String>,
    params: Vec<(String, f64)>,
    output: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let factory = ConfigFactory::default();

    let configs = match (config_path, kind) {
        (Some(path), None) => ConfigFile::from_file(&path)?.build(&factory)?,
        (None, Some(kind)) => {
            let overrides: BTreeMap<String, f64> = params.into_iter().collect();
            vec![factory
                .create(&kind, Some(&overrides))
                .with_context(|| format!("cannot build '{kind}'"))?]
        }
        (Some(_), Some(_)) => bail!("--config and --kind are mutually exclusive"),
        (None, None) => bail!("one of --config or --kind is required"),
    };

    let candles = load_candles(&candles_path)?;
    info!(
        candles = candles.len(),
        indicators = configs.len(),
        "loaded {}",
        candles_path.display()
    );

    let results: Vec<IndicatorResult> = compute_all(&configs, &candles)
        .into_iter()
        .flatten()
        .collect();
    if results.len() < configs.len() {
        info!(skipped = configs.len() - results.len(), "some indicators were skipped");
    }

    let json = if pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("results written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}")?;
        }
    }

    Ok(())
}
