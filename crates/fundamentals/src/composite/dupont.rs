//! DuPont decomposition of return on equity.
//!
//! A view over columns already present in the ratios table:
//! ```text
//! ROE = Net Profit Margin x Asset Turnover x Financial Leverage
//! ```
//! Nothing is re-derived here, so the reported ROE and the product of its
//! factors agree only up to rounding.

use crate::{ratios::RatiosRow, statements::Period};

/// DuPont factors for one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuPontRow {
    /// Period of the source ratios
    pub period: Period,
    /// Net profit margin, percent
    pub net_profit_margin: Option<f64>,
    /// Asset turnover, multiple
    pub asset_turnover: Option<f64>,
    /// Financial leverage, multiple
    pub financial_leverage: Option<f64>,
    /// Return on equity, percent
    pub roe: Option<f64>,
}

impl DuPontRow {
    /// Read the factors back from a ratios row.
    pub fn from_ratios(row: &RatiosRow) -> Self {
        Self {
            period: row.period,
            net_profit_margin: row.get("Net Profit Margin"),
            asset_turnover: row.get("Asset Turnover"),
            financial_leverage: row.get("Financial Leverage"),
            roe: row.get("ROE"),
        }
    }

    /// Product of the three factors, in percent.
    pub fn implied_roe(&self) -> Option<f64> {
        Some(self.net_profit_margin? * self.asset_turnover? * self.financial_leverage?)
    }
}

/// DuPont view of every period of a ratios table.
pub fn dupont(rows: &[RatiosRow]) -> Vec<DuPontRow> {
    rows.iter().map(DuPontRow::from_ratios).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        financials::FinancialsRow,
        ratios::{RatioEngine, tests::empty_row},
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_holds_within_rounding() {
        let row = FinancialsRow {
            revenue: Some(1_000.0),
            net_income: Some(100.0),
            total_assets: Some(2_000.0),
            equity: Some(800.0),
            ..empty_row()
        };
        let engine = RatioEngine::default();
        let mut ratios = vec![engine.compute(&row)];
        engine.format(&mut ratios);

        let view = dupont(&ratios);
        assert_eq!(view.len(), 1);

        let factors = view[0];
        assert_eq!(factors.net_profit_margin, Some(10.0));
        assert_eq!(factors.asset_turnover, Some(0.5));
        assert_eq!(factors.financial_leverage, Some(2.5));
        assert_relative_eq!(factors.implied_roe().unwrap(), factors.roe.unwrap(), epsilon = 1e-6);
    }

    #[test]
    fn test_missing_factor() {
        let ratios = RatioEngine::default().compute(&FinancialsRow {
            revenue: Some(1_000.0),
            net_income: Some(100.0),
            ..empty_row()
        });
        let factors = DuPontRow::from_ratios(&ratios);

        assert!(factors.net_profit_margin.is_some());
        assert_eq!(factors.asset_turnover, None);
        assert_eq!(factors.implied_roe(), None);
    }
}
