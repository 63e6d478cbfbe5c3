//! Liquidity ratios against current liabilities.

use super::{Ratio, RatioCategory, RatioKind, quotient};
use crate::financials::FinancialsRow;

/// Current assets over current liabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentRatio;

impl Ratio for CurrentRatio {
    fn name(&self) -> &str {
        "Current Ratio"
    }

    fn description(&self) -> &str {
        "Current assets / current liabilities"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Liquidity
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Current Assets", "Current Liabilities"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        quotient(row.current_assets, row.current_liabilities)
    }
}

/// Current assets excluding inventory over current liabilities.
///
/// Unavailable when inventory is not reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickRatio;

impl Ratio for QuickRatio {
    fn name(&self) -> &str {
        "Quick Ratio"
    }

    fn description(&self) -> &str {
        "(Current assets - inventory) / current liabilities"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Liquidity
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Current Assets", "Inventory", "Current Liabilities"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        let quick_assets = Some(row.current_assets? - row.inventory?);
        quotient(quick_assets, row.current_liabilities)
    }
}

/// Cash and equivalents over current liabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashRatio;

impl Ratio for CashRatio {
    fn name(&self) -> &str {
        "Cash Ratio"
    }

    fn description(&self) -> &str {
        "Cash / current liabilities"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Liquidity
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Cash", "Current Liabilities"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        quotient(row.cash, row.current_liabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratios::tests::empty_row;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn row(current_liabilities: Option<f64>) -> FinancialsRow {
        FinancialsRow {
            current_assets: Some(500.0),
            current_liabilities,
            inventory: Some(100.0),
            cash: Some(150.0),
            ..empty_row()
        }
    }

    #[test]
    fn test_liquidity_ratios() {
        let row = row(Some(200.0));

        assert_relative_eq!(CurrentRatio.compute(&row).unwrap(), 2.5);
        assert_relative_eq!(QuickRatio.compute(&row).unwrap(), 2.0);
        assert_relative_eq!(CashRatio.compute(&row).unwrap(), 0.75);
    }

    #[rstest]
    #[case(Some(0.0))]
    #[case(None)]
    fn test_unusable_current_liabilities(#[case] current_liabilities: Option<f64>) {
        let row = row(current_liabilities);

        assert_eq!(CurrentRatio.compute(&row), None);
        assert_eq!(QuickRatio.compute(&row), None);
        assert_eq!(CashRatio.compute(&row), None);
    }

    #[test]
    fn test_quick_ratio_needs_inventory() {
        let row = FinancialsRow {
            inventory: None,
            ..row(Some(200.0))
        };
        assert_eq!(QuickRatio.compute(&row), None);
        assert!(CurrentRatio.compute(&row).is_some());
    }
}
