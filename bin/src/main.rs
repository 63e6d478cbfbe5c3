//! CLI for single-company financial statement analysis.
//!
//! Reads provider dumps from disk, runs one analysis pass, and prints the
//! derived tables. Also lists the ratio registry.

mod provider;

use clap::{Parser, Subcommand, ValueEnum};
use fundamentals::{
    Analysis, AnalysisError, Analyzer, Cadence, EngineConfig, RatioCategory, RatioRegistry,
    composite::{ALTMAN_Z, AltmanZone},
};
use polars::prelude::DataFrame;
use provider::JsonFileProvider;
use std::{collections::BTreeMap, fs, path::PathBuf, process::ExitCode};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fundamentals")]
#[command(about = "Financial statement ratios and composite scores for one company")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one ticker from a provider dump
    Analyze {
        /// Stock symbol
        ticker: String,
        /// Directory holding `<TICKER>.json` files
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
        /// Which cadences to print
        #[arg(long, value_enum, default_value_t = CadenceChoice::Both)]
        cadence: CadenceChoice,
        /// JSON engine configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Fiscal years with no new shares issued
        #[arg(long = "no-new-shares", num_args = 1..)]
        no_new_shares: Vec<i32>,
    },
    /// List the ratio registry
    Ratios,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CadenceChoice {
    Quarterly,
    Annual,
    Both,
}

impl CadenceChoice {
    fn cadences(self) -> &'static [Cadence] {
        match self {
            Self::Quarterly => &[Cadence::Quarterly],
            Self::Annual => &[Cadence::Annual],
            Self::Both => &[Cadence::Quarterly, Cadence::Annual],
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            ticker,
            data_dir,
            cadence,
            config,
            no_new_shares,
        } => run_analysis(&ticker, data_dir, cadence, config, &no_new_shares),
        Commands::Ratios => {
            list_ratios(&RatioRegistry::with_defaults());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<EngineConfig, CliError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let contents = fs::read_to_string(&path)
        .map_err(|source| CliError::ConfigRead {
            path: path.clone(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| CliError::ConfigFormat { path, source })
}

fn run_analysis(
    ticker: &str,
    data_dir: PathBuf,
    cadence: CadenceChoice,
    config: Option<PathBuf>,
    no_new_shares: &[i32],
) -> Result<(), CliError> {
    let config = load_config(config)?;
    let provider = JsonFileProvider::new(data_dir);
    let mut analysis = Analyzer::new(config).analyze(&provider, ticker)?;

    for year in no_new_shares {
        if !analysis.set_no_new_shares(*year, true) {
            tracing::warn!(year, "no annual period for --no-new-shares year");
        }
    }

    print_summary(&analysis);
    for cadence in cadence.cadences() {
        let report = analysis.report(*cadence);
        print_frame(&format!("{cadence} financials"), report.financials_frame()?);
        print_frame(&format!("{cadence} ratios"), report.ratios_frame()?);
        print_frame(&format!("{cadence} DuPont analysis"), report.dupont_frame()?);
    }
    print_frame("Piotroski F-Score", analysis.piotroski_frame()?);
    print_diagnostics(&analysis);
    Ok(())
}

fn print_summary(analysis: &Analysis) {
    let snapshot = &analysis.snapshot;
    let name = snapshot
        .long_name
        .as_deref()
        .unwrap_or(analysis.ticker.as_str());
    println!("{name} ({})", analysis.ticker);
    for (label, value) in [
        ("Sector", &snapshot.sector),
        ("Industry", &snapshot.industry),
        ("Exchange", &snapshot.exchange),
        ("Currency", &snapshot.financial_currency),
    ] {
        if let Some(value) = value {
            println!("  {label}: {value}");
        }
    }
    println!("  Price: {}", display_value(snapshot.current_price));
    println!("  Market Cap: {}", display_value(snapshot.market_cap));

    println!("\nValuation");
    if let Some(period) = analysis.valuation.period {
        println!("  As of: {}", period.label());
    }
    for (label, value) in analysis.valuation.columns() {
        println!("  {label}: {}", display_value(value));
    }
    if let Some(z) = analysis.quarterly.ratios.last().and_then(|row| row.get(ALTMAN_Z)) {
        println!("  {ALTMAN_Z}: {z} ({})", AltmanZone::classify(z));
    }
}

fn print_frame(title: &str, frame: DataFrame) {
    println!("\n{title}");
    if frame.height() == 0 {
        println!("  (no data)");
    } else {
        println!("{frame}");
    }
}

fn print_diagnostics(analysis: &Analysis) {
    if analysis.diagnostics.is_empty() {
        return;
    }
    println!("\nDiagnostics");
    for message in analysis.diagnostics.messages() {
        println!("  {message}");
    }
}

fn display_value(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}

/// List all ratios grouped by category.
fn list_ratios(registry: &RatioRegistry) {
    let mut by_category: BTreeMap<RatioCategory, Vec<_>> = BTreeMap::new();
    for info in registry.all_info() {
        by_category.entry(info.category).or_default().push(info);
    }

    println!("Available Ratios ({} total)\n", registry.len());
    for (category, ratios) in by_category {
        println!("{category}:");
        for info in ratios {
            println!("  {} ({}) - {}", info.name, info.kind, info.description);
        }
        println!();
    }
}
