//! Per-period financial ratios.
//!
//! Every ratio implements [`Ratio`] and is listed in the [`RatioRegistry`].
//! The [`RatioEngine`] evaluates the registry against each
//! [`FinancialsRow`] independently, then rounds the results in a separate
//! formatting pass so dependent calculations never see rounded inputs.

pub mod cash_flow;
pub mod efficiency;
pub mod leverage;
pub mod liquidity;
pub mod profitability;
pub mod registry;

pub use cash_flow::{CapexIntensity, CashFlowMargin, FcfConversion};
pub use efficiency::{AssetTurnover, InventoryTurnover, ReceivablesTurnover};
pub use leverage::{DebtRatio, DebtToEquity, FinancialLeverage};
pub use liquidity::{CashRatio, CurrentRatio, QuickRatio};
pub use profitability::{GrossMargin, NetProfitMargin, OperatingMargin, Roa, Roce, Roe};
pub use registry::{RatioCategory, RatioInfo, RatioRegistry};

use crate::{
    config::{Precision, round_to},
    financials::FinancialsRow,
    statements::Period,
};
use derive_more::Display;

/// How a ratio is expressed, which decides its rounding.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioKind {
    /// Scaled by 100
    #[display("percent")]
    Percent,
    /// Plain multiplier
    #[display("multiple")]
    Multiple,
}

impl RatioKind {
    /// Decimal places for this kind.
    pub const fn decimals(self, precision: &Precision) -> u32 {
        match self {
            Self::Percent => precision.percent_decimals,
            Self::Multiple => precision.multiple_decimals,
        }
    }
}

/// A ratio derived from a single period's financials.
pub trait Ratio: Send + Sync + std::fmt::Debug {
    /// Column name, stable across versions.
    fn name(&self) -> &str;

    /// Human-readable formula.
    fn description(&self) -> &str;

    /// Group the ratio is displayed under.
    fn category(&self) -> RatioCategory;

    /// Percentage or multiplier.
    fn kind(&self) -> RatioKind;

    /// Financials columns the ratio reads.
    fn inputs(&self) -> &[&str];

    /// Unrounded value, `None` when any input is unavailable or the
    /// denominator is zero.
    fn compute(&self, row: &FinancialsRow) -> Option<f64>;
}

/// `numerator / denominator`, unavailable for a zero or missing denominator.
pub fn quotient(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let denominator = denominator.filter(|d| *d != 0.0)?;
    Some(numerator? / denominator).filter(|q| q.is_finite())
}

/// [`quotient`] scaled to a percentage.
pub fn percentage(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    quotient(numerator, denominator).map(|q| q * 100.0)
}

/// One cell of a ratios row.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioValue {
    /// Column name
    pub name: String,
    /// Rounding class
    pub kind: RatioKind,
    /// Value, `None` when not available
    pub value: Option<f64>,
}

/// Ratios for one canonical period, in registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct RatiosRow {
    /// Period the ratios belong to
    pub period: Period,
    /// Ratio cells
    pub values: Vec<RatioValue>,
}

impl RatiosRow {
    /// Value of a ratio by column name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|v| v.name == name)
            .and_then(|v| v.value)
    }

    /// Whether the row has a column of this name, available or not.
    pub fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|v| v.name == name)
    }

    /// Add or replace a cell.
    pub fn insert(&mut self, name: &str, kind: RatioKind, value: Option<f64>) {
        let cell = RatioValue {
            name: name.to_string(),
            kind,
            value,
        };
        match self.values.iter_mut().find(|v| v.name == name) {
            Some(existing) => *existing = cell,
            None => self.values.push(cell),
        }
    }
}

/// Evaluates the ratio registry over a financials table.
#[derive(Debug)]
pub struct RatioEngine {
    registry: RatioRegistry,
    precision: Precision,
}

impl Default for RatioEngine {
    fn default() -> Self {
        Self::new(RatioRegistry::with_defaults(), Precision::default())
    }
}

impl RatioEngine {
    /// Engine over a registry with the given rounding.
    pub const fn new(registry: RatioRegistry, precision: Precision) -> Self {
        Self {
            registry,
            precision,
        }
    }

    /// The registry being evaluated.
    pub const fn registry(&self) -> &RatioRegistry {
        &self.registry
    }

    /// Unrounded ratios for one period.
    pub fn compute(&self, row: &FinancialsRow) -> RatiosRow {
        let values = self
            .registry
            .iter()
            .map(|ratio| RatioValue {
                name: ratio.name().to_string(),
                kind: ratio.kind(),
                value: ratio.compute(row),
            })
            .collect();
        RatiosRow {
            period: row.period,
            values,
        }
    }

    /// Round every cell according to its kind.
    pub fn format(&self, rows: &mut [RatiosRow]) {
        for cell in rows.iter_mut().flat_map(|row| row.values.iter_mut()) {
            let decimals = cell.kind.decimals(&self.precision);
            cell.value = cell.value.map(|v| round_to(v, decimals));
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{growth::FlowMetric, statements::Cadence};
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use rstest::rstest;
    use std::collections::BTreeMap;

    /// A row with every value unavailable, for filling in per test.
    pub(crate) fn empty_row() -> FinancialsRow {
        FinancialsRow {
            period: Period::new(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), Cadence::Quarterly),
            revenue: None,
            net_income: None,
            gross_profit: None,
            operating_income: None,
            total_assets: None,
            total_liabilities: None,
            equity: None,
            current_assets: None,
            current_liabilities: None,
            inventory: None,
            cash: None,
            receivables: None,
            invested_capital: None,
            retained_earnings: None,
            ebit: None,
            ebit_source: None,
            long_term_debt: Some(0.0),
            short_term_debt: Some(0.0),
            operating_cash_flow: None,
            capital_expenditure: Some(0.0),
            free_cash_flow: None,
            working_capital: None,
            growth: BTreeMap::<FlowMetric, Option<f64>>::new(),
        }
    }

    #[rstest]
    #[case(Some(1.0), Some(0.0), None)]
    #[case(Some(1.0), None, None)]
    #[case(None, Some(2.0), None)]
    #[case(Some(1.0), Some(4.0), Some(0.25))]
    #[case(Some(-3.0), Some(2.0), Some(-1.5))]
    fn test_quotient(
        #[case] n: Option<f64>,
        #[case] d: Option<f64>,
        #[case] expected: Option<f64>,
    ) {
        assert_eq!(quotient(n, d), expected);
    }

    #[test]
    fn test_round_trip_scenario() {
        let row = FinancialsRow {
            revenue: Some(1000.0),
            net_income: Some(100.0),
            total_assets: Some(2000.0),
            equity: Some(800.0),
            ..empty_row()
        };
        let engine = RatioEngine::default();
        let mut rows = vec![engine.compute(&row)];
        engine.format(&mut rows);

        assert_eq!(rows[0].get("Net Profit Margin"), Some(10.0));
        assert_eq!(rows[0].get("ROA"), Some(5.0));
        assert_eq!(rows[0].get("ROE"), Some(12.5));
        assert_eq!(rows[0].get("Financial Leverage"), Some(2.5));
    }

    #[test]
    fn test_zero_current_liabilities_only_affects_liquidity() {
        let row = FinancialsRow {
            revenue: Some(1000.0),
            net_income: Some(100.0),
            current_assets: Some(500.0),
            current_liabilities: Some(0.0),
            inventory: Some(50.0),
            cash: Some(120.0),
            ..empty_row()
        };
        let ratios = RatioEngine::default().compute(&row);

        assert!(ratios.contains("Current Ratio"));
        assert_eq!(ratios.get("Current Ratio"), None);
        assert_eq!(ratios.get("Quick Ratio"), None);
        assert_eq!(ratios.get("Cash Ratio"), None);
        assert_relative_eq!(ratios.get("Net Profit Margin").unwrap(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_format_rounds_by_kind() {
        let mut row = RatiosRow {
            period: empty_row().period,
            values: Vec::new(),
        };
        row.insert("Gross Margin", RatioKind::Percent, Some(0.123456));
        row.insert("Current Ratio", RatioKind::Multiple, Some(1.23456));
        row.insert("Cash Ratio", RatioKind::Multiple, None);

        let mut rows = vec![row];
        RatioEngine::default().format(&mut rows);

        assert_eq!(rows[0].get("Gross Margin"), Some(0.12346));
        assert_eq!(rows[0].get("Current Ratio"), Some(1.2346));
        assert_eq!(rows[0].get("Cash Ratio"), None);
    }

    #[test]
    fn test_roce_rounded_as_multiple() {
        let row = FinancialsRow {
            operating_income: Some(100.0),
            invested_capital: Some(300.0),
            ..empty_row()
        };
        let engine = RatioEngine::default();
        let mut rows = vec![engine.compute(&row)];
        engine.format(&mut rows);

        assert_eq!(rows[0].get("ROCE"), Some(33.3333));
    }

    #[test]
    fn test_engine_emits_every_registered_ratio() {
        let engine = RatioEngine::default();
        let ratios = engine.compute(&empty_row());

        assert_eq!(ratios.values.len(), engine.registry().len());
        assert!(ratios.values.iter().all(|v| v.value.is_none()));
    }

    #[test]
    fn test_insert_replaces_existing_cell() {
        let mut row = RatioEngine::default().compute(&empty_row());
        let width = row.values.len();
        row.insert("ROE", RatioKind::Percent, Some(3.0));

        assert_eq!(row.values.len(), width);
        assert_eq!(row.get("ROE"), Some(3.0));
    }
}
