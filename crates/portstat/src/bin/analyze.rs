//! Portfolio correlation and annualized risk/return CLI tool.
//!
//! Fetches daily adjusted-close history for each ticker from Yahoo Finance,
//! aligns the series to their common date range and prints the correlation
//! matrix with the portfolio's annualized return and standard deviation.
//!
//! Usage: `cargo run --features cli --bin analyze -- --tickers A,B --weights W1,W2`
//! Example: `cargo run --features cli --bin analyze -- --tickers AAPL,MSFT --weights 0.6,0.4`

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use portstat::{
    Settings,
    data::{CachedPriceSource, YahooPriceSource},
    model::{ModelError, PortfolioAnalyzer, PortfolioRequest},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Correlation and annualized risk/return of a fixed-weight portfolio")]
struct Cli {
    /// Comma-separated tickers, e.g. AAPL,MSFT.
    #[arg(long)]
    tickers: String,

    /// Comma-separated weights in ticker order, e.g. 0.6,0.4.
    #[arg(long, allow_hyphen_values = true)]
    weights: String,

    /// TOML settings file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Include observations on the aligned end date.
    #[arg(long)]
    inclusive_end: bool,

    /// Fetch each ticker again restricted to the aligned range.
    #[arg(long)]
    refetch: bool,

    /// Cache fetched price series for this many seconds.
    #[arg(long, value_name = "SECS")]
    cache_ttl: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_overrides(cli.inclusive_end, cli.refetch, cli.cache_ttl);
    debug!(?settings, "loaded settings");

    let request = match PortfolioRequest::parse(&cli.tickers, &cli.weights) {
        Ok(request) => request,
        Err(err) => return Ok(report_error(&err)),
    };

    let yahoo = YahooPriceSource::with_config(settings.source.clone())?;
    let result = match settings.source.cache_ttl() {
        Some(ttl) => {
            let source = CachedPriceSource::new(yahoo, ttl);
            PortfolioAnalyzer::with_config(source, settings.analyzer).analyze(&request).await
        }
        None => PortfolioAnalyzer::with_config(yahoo, settings.analyzer).analyze(&request).await,
    };

    match result {
        Ok(report) => {
            println!("{report}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Ok(report_error(&err)),
    }
}

fn report_error(err: &ModelError) -> ExitCode {
    debug!(error = %err, user_error = err.is_user_error(), "analysis failed");
    eprintln!("{}", err.user_message());
    ExitCode::FAILURE
}
