//! Altman Z-Score.
//!
//! The Altman Z-Score is a bankruptcy prediction model that combines five
//! balance-sheet and income ratios with the market's valuation of equity.

use crate::financials::FinancialsRow;
use derive_more::Display;

/// Column name of the score in a ratios row.
pub const ALTMAN_Z: &str = "Altman Z-Score";

/// The seven inputs of the score, all required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltmanInputs {
    /// Current assets minus current liabilities
    pub working_capital: f64,
    /// Total assets
    pub total_assets: f64,
    /// Retained earnings
    pub retained_earnings: f64,
    /// EBIT
    pub ebit: f64,
    /// Market capitalization
    pub market_cap: f64,
    /// Total liabilities
    pub total_liabilities: f64,
    /// Revenue
    pub revenue: f64,
}

impl AltmanInputs {
    /// Collect the inputs from a period and the current market cap.
    ///
    /// Returns `None` if any one of them is unavailable: a partial score
    /// would overstate what is known.
    pub fn from_row(row: &FinancialsRow, market_cap: Option<f64>) -> Option<Self> {
        Some(Self {
            working_capital: row.working_capital?,
            total_assets: row.total_assets?,
            retained_earnings: row.retained_earnings?,
            ebit: row.ebit?,
            market_cap: market_cap.filter(|m| m.is_finite())?,
            total_liabilities: row.total_liabilities?,
            revenue: row.revenue?,
        })
    }

    /// The score:
    /// ```text
    /// Z = 1.2*A + 1.4*B + 3.3*C + 0.6*D + 1.0*E
    /// where:
    ///   A = Working Capital / Total Assets
    ///   B = Retained Earnings / Total Assets
    ///   C = EBIT / Total Assets
    ///   D = Market Cap / Total Liabilities
    ///   E = Revenue / Total Assets
    /// ```
    /// Unavailable when total assets or total liabilities is zero.
    pub fn score(&self) -> Option<f64> {
        if self.total_assets == 0.0 || self.total_liabilities == 0.0 {
            return None;
        }
        let a = self.working_capital / self.total_assets;
        let b = self.retained_earnings / self.total_assets;
        let c = self.ebit / self.total_assets;
        let d = self.market_cap / self.total_liabilities;
        let e = self.revenue / self.total_assets;
        Some(1.2 * a + 1.4 * b + 3.3 * c + 0.6 * d + 1.0 * e)
    }
}

/// Unrounded Z-Score of a period, or `None` if any input is missing.
pub fn altman_z(row: &FinancialsRow, market_cap: Option<f64>) -> Option<f64> {
    AltmanInputs::from_row(row, market_cap)?.score()
}

/// Conventional interpretation bands of the score.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum AltmanZone {
    /// Z > 2.99
    Safe,
    /// 1.81 <= Z <= 2.99
    Grey,
    /// Z < 1.81
    Distress,
}

impl AltmanZone {
    /// Band a score falls in.
    pub fn classify(z: f64) -> Self {
        if z > 2.99 {
            Self::Safe
        } else if z >= 1.81 {
            Self::Grey
        } else {
            Self::Distress
        }
    }
}
