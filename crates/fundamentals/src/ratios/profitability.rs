//! Profitability ratios: margins and returns.
//!
//! All are percentages. ROCE uses operating income against invested capital
//! as reported by the provider.

use super::{Ratio, RatioCategory, RatioKind, percentage};
use crate::financials::FinancialsRow;

/// Net income as a percentage of revenue.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetProfitMargin;

impl Ratio for NetProfitMargin {
    fn name(&self) -> &str {
        "Net Profit Margin"
    }

    fn description(&self) -> &str {
        "Net income / revenue x 100"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Percent
    }

    fn inputs(&self) -> &[&str] {
        &["Net Income", "Revenue"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        percentage(row.net_income, row.revenue)
    }
}

/// Gross profit as a percentage of revenue.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrossMargin;

impl Ratio for GrossMargin {
    fn name(&self) -> &str {
        "Gross Margin"
    }

    fn description(&self) -> &str {
        "Gross profit / revenue x 100"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Percent
    }

    fn inputs(&self) -> &[&str] {
        &["Gross Profit", "Revenue"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        percentage(row.gross_profit, row.revenue)
    }
}

/// Operating income as a percentage of revenue.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatingMargin;

impl Ratio for OperatingMargin {
    fn name(&self) -> &str {
        "Operating Margin"
    }

    fn description(&self) -> &str {
        "Operating income / revenue x 100"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Percent
    }

    fn inputs(&self) -> &[&str] {
        &["Operating Income", "Revenue"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        percentage(row.operating_income, row.revenue)
    }
}

/// Return on assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Roa;

impl Ratio for Roa {
    fn name(&self) -> &str {
        "ROA"
    }

    fn description(&self) -> &str {
        "Net income / total assets x 100"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Percent
    }

    fn inputs(&self) -> &[&str] {
        &["Net Income", "Total Assets"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        percentage(row.net_income, row.total_assets)
    }
}

/// Return on equity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Roe;

impl Ratio for Roe {
    fn name(&self) -> &str {
        "ROE"
    }

    fn description(&self) -> &str {
        "Net income / equity x 100"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Percent
    }

    fn inputs(&self) -> &[&str] {
        &["Net Income", "Equity"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        percentage(row.net_income, row.equity)
    }
}

/// Return on capital employed.
///
/// Scaled by 100 like the other returns, but rounded to the multiple
/// precision, as the published ROCE column has always been.
#[derive(Debug, Clone, Copy, Default)]
pub struct Roce;

impl Ratio for Roce {
    fn name(&self) -> &str {
        "ROCE"
    }

    fn description(&self) -> &str {
        "Operating income / invested capital x 100"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Profitability
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Operating Income", "Invested Capital"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        percentage(row.operating_income, row.invested_capital)
    }
}
