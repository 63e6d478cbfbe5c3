//! Leverage ratios.
//!
//! Financial leverage (assets over equity) is also the third DuPont factor.

use super::{Ratio, RatioCategory, RatioKind, quotient};
use crate::financials::FinancialsRow;

/// Total liabilities over equity.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebtToEquity;

impl Ratio for DebtToEquity {
    fn name(&self) -> &str {
        "Debt-to-Equity"
    }

    fn description(&self) -> &str {
        "Total liabilities / equity"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Leverage
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Total Liabilities", "Equity"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        quotient(row.total_liabilities, row.equity)
    }
}

/// Total liabilities over total assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebtRatio;

impl Ratio for DebtRatio {
    fn name(&self) -> &str {
        "Debt Ratio"
    }

    fn description(&self) -> &str {
        "Total liabilities / total assets"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Leverage
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Total Liabilities", "Total Assets"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        quotient(row.total_liabilities, row.total_assets)
    }
}

/// Equity multiplier: total assets over equity.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinancialLeverage;

impl Ratio for FinancialLeverage {
    fn name(&self) -> &str {
        "Financial Leverage"
    }

    fn description(&self) -> &str {
        "Total assets / equity"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Leverage
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Total Assets", "Equity"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        quotient(row.total_assets, row.equity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratios::tests::empty_row;
    use approx::assert_relative_eq;

    #[test]
    fn test_leverage_ratios() {
        let row = FinancialsRow {
            total_assets: Some(2000.0),
            total_liabilities: Some(1200.0),
            equity: Some(800.0),
            ..empty_row()
        };

        assert_relative_eq!(DebtToEquity.compute(&row).unwrap(), 1.5);
        assert_relative_eq!(DebtRatio.compute(&row).unwrap(), 0.6);
        assert_relative_eq!(FinancialLeverage.compute(&row).unwrap(), 2.5);
    }

    #[test]
    fn test_zero_equity() {
        let row = FinancialsRow {
            total_assets: Some(2000.0),
            total_liabilities: Some(2000.0),
            equity: Some(0.0),
            ..empty_row()
        };

        assert_eq!(DebtToEquity.compute(&row), None);
        assert_eq!(FinancialLeverage.compute(&row), None);
        assert_relative_eq!(DebtRatio.compute(&row).unwrap(), 1.0);
    }
}
