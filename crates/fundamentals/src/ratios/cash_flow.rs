//! Cash-flow ratios.
//!
//! Free cash flow is operating cash flow minus capital expenditure, as
//! derived in [`FinancialsRow::extract`].

use super::{Ratio, RatioCategory, RatioKind, percentage};
use crate::financials::FinancialsRow;

/// Operating cash flow as a percentage of revenue.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashFlowMargin;

impl Ratio for CashFlowMargin {
    fn name(&self) -> &str {
        "Cash Flow Margin"
    }

    fn description(&self) -> &str {
        "Operating cash flow / revenue x 100"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::CashFlow
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Percent
    }

    fn inputs(&self) -> &[&str] {
        &["Operating Cash Flow", "Revenue"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        percentage(row.operating_cash_flow, row.revenue)
    }
}

/// Capital expenditure as a percentage of revenue.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapexIntensity;

impl Ratio for CapexIntensity {
    fn name(&self) -> &str {
        "CapEx Intensity"
    }

    fn description(&self) -> &str {
        "Capital expenditure / revenue x 100"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::CashFlow
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Percent
    }

    fn inputs(&self) -> &[&str] {
        &["Capital Expenditure", "Revenue"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        percentage(row.capital_expenditure, row.revenue)
    }
}

/// Free cash flow as a percentage of net income.
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfConversion;

impl Ratio for FcfConversion {
    fn name(&self) -> &str {
        "FCF Conversion"
    }

    fn description(&self) -> &str {
        "Free cash flow / net income x 100"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::CashFlow
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Percent
    }

    fn inputs(&self) -> &[&str] {
        &["Free Cash Flow", "Net Income"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        percentage(row.free_cash_flow, row.net_income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratios::tests::empty_row;
    use approx::assert_relative_eq;

    #[test]
    fn test_cash_flow_ratios() {
        let row = FinancialsRow {
            revenue: Some(1000.0),
            net_income: Some(100.0),
            operating_cash_flow: Some(180.0),
            capital_expenditure: Some(50.0),
            free_cash_flow: Some(130.0),
            ..empty_row()
        };

        assert_relative_eq!(CashFlowMargin.compute(&row).unwrap(), 18.0, epsilon = 1e-9);
        assert_relative_eq!(CapexIntensity.compute(&row).unwrap(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(FcfConversion.compute(&row).unwrap(), 130.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_net_income() {
        let row = FinancialsRow {
            net_income: Some(0.0),
            free_cash_flow: Some(130.0),
            ..empty_row()
        };
        assert_eq!(FcfConversion.compute(&row), None);
    }
}
