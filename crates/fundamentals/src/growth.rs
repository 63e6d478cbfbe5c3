//! Period-over-period growth of flow metrics.
//!
//! Growth is the percentage change against the immediately preceding
//! canonical period of the same cadence:
//! ```text
//! growth = round((curr - prev) / prev, 4) * 100
//! ```
//! The fraction is rounded before scaling so historical output is reproduced
//! exactly. The first period, and any period whose predecessor is zero or
//! unavailable, has no growth value.

use crate::{config::round_to, financials::FinancialsRow};
use derive_more::Display;

/// Flow metrics that carry a growth column.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlowMetric {
    /// Total revenue
    #[display("Revenue")]
    Revenue,
    /// Net income
    #[display("Net Income")]
    NetIncome,
    /// Gross profit
    #[display("Gross Profit")]
    GrossProfit,
    /// Operating income
    #[display("Operating Income")]
    OperatingIncome,
    /// Operating cash flow
    #[display("Operating Cash Flow")]
    OperatingCashFlow,
    /// Free cash flow
    #[display("Free Cash Flow")]
    FreeCashFlow,
    /// EBIT
    #[display("EBIT")]
    Ebit,
}

impl FlowMetric {
    /// Every flow metric, in column order.
    pub const ALL: [Self; 7] = [
        Self::Revenue,
        Self::NetIncome,
        Self::GrossProfit,
        Self::OperatingIncome,
        Self::OperatingCashFlow,
        Self::FreeCashFlow,
        Self::Ebit,
    ];

    /// Value of the metric in a row.
    pub const fn value(self, row: &FinancialsRow) -> Option<f64> {
        match self {
            Self::Revenue => row.revenue,
            Self::NetIncome => row.net_income,
            Self::GrossProfit => row.gross_profit,
            Self::OperatingIncome => row.operating_income,
            Self::OperatingCashFlow => row.operating_cash_flow,
            Self::FreeCashFlow => row.free_cash_flow,
            Self::Ebit => row.ebit,
        }
    }
}

/// Fills the growth columns of a cadence's financials table.
#[derive(Debug, Clone, Copy)]
pub struct GrowthCalculator {
    fraction_decimals: u32,
}

impl Default for GrowthCalculator {
    fn default() -> Self {
        Self::new(4)
    }
}

impl GrowthCalculator {
    /// Calculator rounding the growth fraction to `fraction_decimals`.
    pub const fn new(fraction_decimals: u32) -> Self {
        Self { fraction_decimals }
    }

    /// Percentage change from `previous` to `current`. Unavailable when the
    /// change does not fit in a finite float.
    pub fn percent_change(&self, previous: Option<f64>, current: Option<f64>) -> Option<f64> {
        let previous = previous.filter(|p| *p != 0.0)?;
        let fraction = Some((current? - previous) / previous).filter(|f| f.is_finite())?;
        let percent = round_to(fraction, self.fraction_decimals) * 100.0;
        // Drop float noise from the scaling without changing the rounded value.
        let growth = round_to(percent, self.fraction_decimals.saturating_sub(2));
        Some(growth).filter(|g| g.is_finite())
    }

    /// Compute growth for every flow metric. Rows must be in ascending
    /// period order.
    pub fn apply(&self, rows: &mut [FinancialsRow]) {
        for metric in FlowMetric::ALL {
            let mut previous = None;
            for row in rows.iter_mut() {
                let current = metric.value(row);
                let change = self.percent_change(previous, current);
                row.growth.insert(metric, change);
                previous = current;
            }
        }
    }
}
