//! One full analysis pass over a company's statements.
//!
//! For each cadence the pass runs in a fixed order:
//! ```text
//! align -> extract -> growth -> ratios (+ Altman Z, quarterly) -> format -> DuPont
//! ```
//! Valuation then uses the latest quarterly period and the Piotroski table is
//! built from the annual rows. Every step records what it had to work around
//! in a shared [`Diagnostics`] log instead of failing.

use crate::{
    accessor::FieldAccessor,
    align::canonical_periods,
    composite::{ALTMAN_Z, DuPontRow, PiotroskiTable, Valuation, altman_z, dupont},
    config::EngineConfig,
    diagnostics::{Diagnostic, Diagnostics},
    error::{AnalysisError, Result},
    financials::FinancialsRow,
    growth::GrowthCalculator,
    provider::{CompanyData, StatementProvider},
    ratios::{RatioEngine, RatioKind, RatioRegistry, RatiosRow},
    snapshot::CompanySnapshot,
    statements::{Cadence, Period, StatementSet},
};

/// Derived tables of one cadence. All three share the same periods.
#[derive(Debug, Clone, PartialEq)]
pub struct CadenceReport {
    /// Cadence of every row
    pub cadence: Cadence,
    /// Absolute values and growth, ascending by period
    pub financials: Vec<FinancialsRow>,
    /// Rounded ratios, aligned with `financials`
    pub ratios: Vec<RatiosRow>,
    /// DuPont view of `ratios`
    pub dupont: Vec<DuPontRow>,
}

impl CadenceReport {
    fn empty(cadence: Cadence) -> Self {
        Self {
            cadence,
            financials: Vec::new(),
            ratios: Vec::new(),
            dupont: Vec::new(),
        }
    }

    /// Canonical periods, ascending.
    pub fn periods(&self) -> Vec<Period> {
        self.financials.iter().map(|row| row.period).collect()
    }

    /// Financials of the most recent period.
    pub fn latest(&self) -> Option<&FinancialsRow> {
        self.financials.last()
    }

    /// Whether the cadence had no canonical periods.
    pub fn is_empty(&self) -> bool {
        self.financials.is_empty()
    }
}

/// Result of an analysis pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Normalized ticker
    pub ticker: String,
    /// Company snapshot as fetched
    pub snapshot: CompanySnapshot,
    /// Quarterly tables
    pub quarterly: CadenceReport,
    /// Annual tables
    pub annual: CadenceReport,
    /// Latest-period valuation, rounded
    pub valuation: Valuation,
    /// Annual F-Scores
    pub piotroski: PiotroskiTable,
    /// Everything the pass worked around
    pub diagnostics: Diagnostics,
}

impl Analysis {
    /// Tables of one cadence.
    pub const fn report(&self, cadence: Cadence) -> &CadenceReport {
        match cadence {
            Cadence::Quarterly => &self.quarterly,
            Cadence::Annual => &self.annual,
        }
    }

    /// Supply the "no new shares issued" signal for a fiscal year.
    ///
    /// Only that year's F-Score changes. Returns whether the year exists.
    pub fn set_no_new_shares(&mut self, year: i32, no_new_shares: bool) -> bool {
        self.piotroski.set_no_new_shares(year, no_new_shares)
    }
}

/// Runs analysis passes with a fixed configuration.
#[derive(Debug)]
pub struct Analyzer {
    config: EngineConfig,
    ratios: RatioEngine,
    growth: GrowthCalculator,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Analyzer {
    /// Analyzer over the default ratio registry.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_registry(config, RatioRegistry::with_defaults())
    }

    /// Analyzer over a custom ratio registry.
    pub fn with_registry(config: EngineConfig, registry: RatioRegistry) -> Self {
        let config = EngineConfig {
            precision: config.precision.clamped(),
            ..config
        };
        let growth = GrowthCalculator::new(config.precision.growth_fraction_decimals);
        let ratios = RatioEngine::new(registry, config.precision);
        Self {
            config,
            ratios,
            growth,
        }
    }

    /// Fetch `ticker` from `provider` and analyze it.
    pub fn analyze(&self, provider: &dyn StatementProvider, ticker: &str) -> Result<Analysis> {
        let ticker = normalize_ticker(ticker)?;
        tracing::debug!(provider = provider.name(), %ticker, "fetching statements");
        let data = provider.fetch(&ticker)?;
        self.analyze_data(&ticker, data)
    }

    /// Analyze already fetched data.
    ///
    /// Fails only when the snapshot does not identify a company. Missing
    /// statements or line items produce empty tables, `None` cells and
    /// diagnostics.
    pub fn analyze_data(&self, ticker: &str, data: CompanyData) -> Result<Analysis> {
        let ticker = normalize_ticker(ticker)?;
        if data.snapshot.long_name.as_deref().is_none_or(|name| name.trim().is_empty()) {
            return Err(AnalysisError::InvalidTicker(ticker));
        }

        let CompanyData {
            quarterly,
            annual,
            snapshot,
        } = data;
        let snapshot = snapshot.finite_only();
        let market_cap = snapshot.market_cap;
        let mut diagnostics = Diagnostics::new();

        let quarterly =
            self.cadence_pass(&quarterly, Cadence::Quarterly, market_cap, &mut diagnostics);
        let annual = self.cadence_pass(&annual, Cadence::Annual, market_cap, &mut diagnostics);

        let valuation = match quarterly.latest() {
            Some(latest) => Valuation::compute(latest, &snapshot).rounded(&self.config.precision),
            None => {
                diagnostics.push(Diagnostic::NoLatestPeriod);
                Valuation::default()
            }
        };

        let piotroski = PiotroskiTable::compute(&annual.financials, &annual.ratios);

        tracing::debug!(
            %ticker,
            quarters = quarterly.financials.len(),
            years = annual.financials.len(),
            diagnostics = diagnostics.len(),
            "analysis complete"
        );

        Ok(Analysis {
            ticker,
            snapshot,
            quarterly,
            annual,
            valuation,
            piotroski,
            diagnostics,
        })
    }

    fn cadence_pass(
        &self,
        statements: &StatementSet,
        cadence: Cadence,
        market_cap: Option<f64>,
        diagnostics: &mut Diagnostics,
    ) -> CadenceReport {
        let periods = canonical_periods(statements, cadence, diagnostics);
        if periods.is_empty() {
            return CadenceReport::empty(cadence);
        }

        let mut fields = FieldAccessor::new(statements, cadence, diagnostics);
        let mut financials: Vec<_> = periods
            .into_iter()
            .map(|period| FinancialsRow::extract(period, &self.config.line_items, &mut fields))
            .collect();

        self.growth.apply(&mut financials);

        let mut ratios: Vec<_> = financials
            .iter()
            .map(|row| {
                let mut ratios = self.ratios.compute(row);
                if cadence == Cadence::Quarterly {
                    ratios.insert(ALTMAN_Z, RatioKind::Multiple, altman_z(row, market_cap));
                }
                ratios
            })
            .collect();
        self.ratios.format(&mut ratios);

        let dupont = dupont(&ratios);
        tracing::debug!(%cadence, periods = financials.len(), "derived cadence tables");

        CadenceReport {
            cadence,
            financials,
            ratios,
            dupont,
        }
    }
}

/// Fetch and analyze `ticker` with the default ratio registry.
pub fn analyze(
    provider: &dyn StatementProvider,
    ticker: &str,
    config: &EngineConfig,
) -> Result<Analysis> {
    Analyzer::new(config.clone()).analyze(provider, ticker)
}

fn normalize_ticker(ticker: &str) -> Result<String> {
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(AnalysisError::InvalidTicker(ticker));
    }
    Ok(ticker)
}
