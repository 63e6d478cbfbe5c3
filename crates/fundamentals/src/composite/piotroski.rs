//! Piotroski F-Score on annual periods.
//!
//! The F-Score is a 9-point composite score that assesses financial strength:
//!
//! **Profitability (4 points):**
//! - Net income > 0
//! - Operating cash flow > 0
//! - ROA higher than the prior year
//! - Operating cash flow > net income
//!
//! **Leverage/Liquidity (3 points):**
//! - Long-term debt to total assets lower than the prior year
//! - Current ratio higher than the prior year
//! - No new shares issued since the prior year
//!
//! **Operating Efficiency (2 points):**
//! - Gross margin higher than the prior year
//! - Asset turnover higher than the prior year
//!
//! Share-issuance history is not available from the statements, so the "no new
//! shares" signal is supplied by the caller per year and starts out `false`.
//! Year-over-year signals of the first period, or of any period where either
//! value is unavailable, do not pass.

use crate::{
    financials::FinancialsRow,
    ratios::{RatiosRow, quotient},
    statements::Period,
};

/// The nine binary signals of one year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PiotroskiSignals {
    /// Net income > 0
    pub positive_net_income: bool,
    /// Operating cash flow > 0
    pub positive_operating_cash_flow: bool,
    /// ROA improved year over year
    pub roa_improving: bool,
    /// Operating cash flow exceeds net income
    pub cash_flow_exceeds_net_income: bool,
    /// Long-term debt to total assets decreased year over year
    pub leverage_decreasing: bool,
    /// Current ratio improved year over year
    pub current_ratio_improving: bool,
    /// No dilutive share issuance, supplied externally
    pub no_new_shares: bool,
    /// Gross margin improved year over year
    pub gross_margin_improving: bool,
    /// Asset turnover improved year over year
    pub asset_turnover_improving: bool,
}

impl PiotroskiSignals {
    /// Column labels of the signals, in the order of [`values`](Self::values).
    pub const LABELS: [&'static str; 9] = [
        "Positive Net Income",
        "Positive Operating Cash Flow",
        "ROA Improving",
        "OCF Exceeds Net Income",
        "Leverage Decreasing",
        "Current Ratio Improving",
        "No New Shares Issued",
        "Gross Margin Improving",
        "Asset Turnover Improving",
    ];

    /// Signal values in label order.
    pub const fn values(&self) -> [bool; 9] {
        [
            self.positive_net_income,
            self.positive_operating_cash_flow,
            self.roa_improving,
            self.cash_flow_exceeds_net_income,
            self.leverage_decreasing,
            self.current_ratio_improving,
            self.no_new_shares,
            self.gross_margin_improving,
            self.asset_turnover_improving,
        ]
    }

    /// Number of passed signals, 0-9.
    pub fn score(&self) -> u8 {
        self.values().iter().filter(|passed| **passed).count() as u8
    }
}

/// One annual period of the F-Score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiotroskiRow {
    /// Annual period
    pub period: Period,
    /// Signals for the period
    pub signals: PiotroskiSignals,
}

impl PiotroskiRow {
    /// Fiscal year of the row.
    pub fn year(&self) -> i32 {
        self.period.year()
    }

    /// F-Score, derived from the current signals.
    pub fn score(&self) -> u8 {
        self.signals.score()
    }
}

/// F-Score per annual period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PiotroskiTable {
    rows: Vec<PiotroskiRow>,
}

impl PiotroskiTable {
    /// Derive signals from aligned annual financials and (rounded) ratios.
    ///
    /// Both slices must describe the same periods in ascending order.
    pub fn compute(financials: &[FinancialsRow], ratios: &[RatiosRow]) -> Self {
        let mut rows = Vec::with_capacity(financials.len());
        let mut prior: Option<(&FinancialsRow, &RatiosRow)> = None;

        for (row, current) in financials.iter().zip(ratios) {
            debug_assert_eq!(row.period, current.period);
            let improved = |name: &str| {
                increased(prior.and_then(|(_, prev)| prev.get(name)), current.get(name))
            };
            let prior_leverage = prior.and_then(|(prev, _)| long_term_leverage(prev));

            let signals = PiotroskiSignals {
                positive_net_income: row.net_income.is_some_and(|ni| ni > 0.0),
                positive_operating_cash_flow: row.operating_cash_flow.is_some_and(|ocf| ocf > 0.0),
                roa_improving: improved("ROA"),
                cash_flow_exceeds_net_income: matches!(
                    (row.operating_cash_flow, row.net_income),
                    (Some(ocf), Some(ni)) if ocf > ni
                ),
                leverage_decreasing: decreased(prior_leverage, long_term_leverage(row)),
                current_ratio_improving: improved("Current Ratio"),
                no_new_shares: false,
                gross_margin_improving: improved("Gross Margin"),
                asset_turnover_improving: improved("Asset Turnover"),
            };
            rows.push(PiotroskiRow {
                period: row.period,
                signals,
            });
            prior = Some((row, current));
        }

        Self { rows }
    }

    /// Set the externally supplied "no new shares issued" signal for a year.
    ///
    /// Only rows of that year change. Returns whether any row matched.
    pub fn set_no_new_shares(&mut self, year: i32, no_new_shares: bool) -> bool {
        let mut matched = false;
        for row in self.rows.iter_mut().filter(|r| r.year() == year) {
            row.signals.no_new_shares = no_new_shares;
            matched = true;
        }
        matched
    }

    /// Rows in ascending period order.
    pub fn rows(&self) -> &[PiotroskiRow] {
        &self.rows
    }

    /// Row of a fiscal year.
    pub fn get(&self, year: i32) -> Option<&PiotroskiRow> {
        self.rows.iter().find(|r| r.year() == year)
    }

    /// `(year, score)` pairs in ascending order.
    pub fn scores(&self) -> Vec<(i32, u8)> {
        self.rows.iter().map(|r| (r.year(), r.score())).collect()
    }

    /// Whether there are no annual periods.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn increased(previous: Option<f64>, current: Option<f64>) -> bool {
    matches!((previous, current), (Some(p), Some(c)) if c > p)
}

fn decreased(previous: Option<f64>, current: Option<f64>) -> bool {
    matches!((previous, current), (Some(p), Some(c)) if c < p)
}

fn long_term_leverage(row: &FinancialsRow) -> Option<f64> {
    quotient(row.long_term_debt, row.total_assets)
}
