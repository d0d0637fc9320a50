//! End-to-end portfolio analysis pipeline.

use portstat_primitives::{Date, EndBoundary, PriceSeries, Ticker, WeightVector};
use portstat_traits::PriceSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{
    CorrelationEngine, DateRangeAligner, ModelError, PortfolioMetricsEngine, PortfolioReport,
    PortfolioRequest, ReturnsComputer,
};

/// Configuration for portfolio analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// First date requested from the price source.
    pub history_start: Date,
    /// How the aligned end date is applied when restricting prices.
    pub end_boundary: EndBoundary,
    /// Fetch each ticker a second time restricted to the aligned window
    /// instead of slicing the first fetch in memory.
    pub refetch_aligned: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            history_start: Date::from_ymd_opt(1900, 1, 1).unwrap_or(Date::MIN),
            end_boundary: EndBoundary::Exclusive,
            refetch_aligned: false,
        }
    }
}

/// Runs fetch, alignment, returns, correlation and metrics for a portfolio.
#[derive(Debug)]
pub struct PortfolioAnalyzer<S> {
    source: S,
    config: AnalyzerConfig,
    aligner: DateRangeAligner,
    returns: ReturnsComputer,
    correlation: CorrelationEngine,
    metrics: PortfolioMetricsEngine,
}

impl<S: PriceSource> PortfolioAnalyzer<S> {
    /// Create an analyzer with default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(source: S, config: AnalyzerConfig) -> Self {
        Self {
            source,
            returns: ReturnsComputer::new(config.end_boundary),
            config,
            aligner: DateRangeAligner::new(),
            correlation: CorrelationEngine::new(),
            metrics: PortfolioMetricsEngine::new(),
        }
    }

    /// Get the configuration.
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// The price source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Analyze a parsed request.
    ///
    /// # Errors
    /// Returns `ModelError` if any ticker cannot be fetched or the histories
    /// do not yield enough common observations.
    pub async fn analyze(&self, request: &PortfolioRequest) -> Result<PortfolioReport, ModelError> {
        self.analyze_positions(request.tickers(), request.weights()).await
    }

    /// Analyze tickers and weights given by position.
    ///
    /// Counts are checked before anything is fetched.
    ///
    /// # Errors
    /// Returns `ModelError::TickerWeightCountMismatch` or
    /// `ModelError::EmptyPortfolio` without fetching, otherwise the errors of
    /// [`analyze`](Self::analyze).
    #[instrument(skip_all, fields(source = self.source.name(), tickers = tickers.len()))]
    pub async fn analyze_positions(
        &self,
        tickers: &[Ticker],
        weights: &WeightVector,
    ) -> Result<PortfolioReport, ModelError> {
        if weights.len() != tickers.len() {
            return Err(ModelError::TickerWeightCountMismatch {
                tickers: tickers.len(),
                weights: weights.len(),
            });
        }
        if tickers.is_empty() {
            return Err(ModelError::EmptyPortfolio);
        }

        let history = self.fetch_all(tickers, self.config.history_start, None).await?;
        let range = self.aligner.align(&history)?;
        info!(%range, "aligned price histories");

        let series = if self.config.refetch_aligned {
            let end = match self.config.end_boundary {
                EndBoundary::Exclusive => Some(range.end),
                EndBoundary::Inclusive => range.end.succ_opt(),
            };
            self.fetch_all(tickers, range.start, end).await?
        } else {
            history
        };

        let (table, computed) = self.returns.compute_with_span(&series, &range)?;
        debug!(observations = table.n_obs(), %computed, "computed daily returns");

        let correlation = self.correlation.correlate(&table)?;
        let metrics = self.metrics.metrics(&table, weights)?;
        info!(
            annual_return = metrics.annual_return_percent,
            annual_std_dev = metrics.annual_std_dev_percent,
            "computed portfolio metrics"
        );

        Ok(PortfolioReport { range, computed, correlation, metrics, observations: table.n_obs() })
    }

    async fn fetch_all(
        &self,
        tickers: &[Ticker],
        start: Date,
        end: Option<Date>,
    ) -> Result<Vec<PriceSeries>, ModelError> {
        let mut series = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            let fetched = self.source.fetch(ticker, start, end).await.map_err(|source| {
                ModelError::DataUnavailable { ticker: ticker.clone(), source }
            })?;
            debug!(%ticker, observations = fetched.len(), "fetched");
            series.push(fetched);
        }
        Ok(series)
    }
}
