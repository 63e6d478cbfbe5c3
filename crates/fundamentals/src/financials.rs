//! Per-period extraction of absolute financial values.
//!
//! Each canonical period is processed on its own: raw line items are read
//! through the [`FieldAccessor`] and the two derived balances (free cash flow
//! and working capital) are computed from them.

use crate::{
    accessor::{FieldAccessor, UNKNOWN, ZERO},
    config::LineItemNames,
    growth::FlowMetric,
    statements::{Period, Statement},
};
use derive_more::Display;
use std::collections::BTreeMap;

/// Where the EBIT figure of a row came from.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum EbitSource {
    /// Reported by the provider as EBIT
    #[display("reported")]
    Reported,
    /// Approximated by operating income because EBIT was not reported
    #[display("operating income")]
    OperatingIncome,
}

/// Absolute values for one canonical period.
///
/// `None` means the value is not available for the period.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialsRow {
    /// Period the values belong to
    pub period: Period,
    /// Total revenue
    pub revenue: Option<f64>,
    /// Net income
    pub net_income: Option<f64>,
    /// Gross profit
    pub gross_profit: Option<f64>,
    /// Operating income
    pub operating_income: Option<f64>,
    /// Total assets
    pub total_assets: Option<f64>,
    /// Total liabilities
    pub total_liabilities: Option<f64>,
    /// Stockholders' equity
    pub equity: Option<f64>,
    /// Current assets
    pub current_assets: Option<f64>,
    /// Current liabilities
    pub current_liabilities: Option<f64>,
    /// Inventory
    pub inventory: Option<f64>,
    /// Cash and equivalents
    pub cash: Option<f64>,
    /// Accounts receivable
    pub receivables: Option<f64>,
    /// Invested capital
    pub invested_capital: Option<f64>,
    /// Retained earnings
    pub retained_earnings: Option<f64>,
    /// EBIT, possibly approximated (see `ebit_source`)
    pub ebit: Option<f64>,
    /// Provenance of `ebit`
    pub ebit_source: Option<EbitSource>,
    /// Long-term debt, zero when the statement lacks the line item
    pub long_term_debt: Option<f64>,
    /// Short-term debt, zero when the statement lacks the line item
    pub short_term_debt: Option<f64>,
    /// Operating cash flow
    pub operating_cash_flow: Option<f64>,
    /// Capital expenditure, zero when the statement lacks the line item
    pub capital_expenditure: Option<f64>,
    /// Operating cash flow minus capital expenditure
    pub free_cash_flow: Option<f64>,
    /// Current assets minus current liabilities
    pub working_capital: Option<f64>,
    /// Period-over-period percentage change of each flow metric
    pub growth: BTreeMap<FlowMetric, Option<f64>>,
}

impl FinancialsRow {
    /// Read every line item for `period` and derive free cash flow and
    /// working capital.
    pub fn extract(period: Period, names: &LineItemNames, fields: &mut FieldAccessor<'_>) -> Self {
        use Statement::{BalanceSheet, CashFlow, Income};
        let date = period.date;

        let revenue = fields.get(Income, &names.revenue, date, UNKNOWN);
        let net_income = fields.get(Income, &names.net_income, date, UNKNOWN);
        let gross_profit = fields.get(Income, &names.gross_profit, date, UNKNOWN);
        let operating_income = fields.get(Income, &names.operating_income, date, UNKNOWN);

        let (ebit, ebit_source) = match fields.get(Income, &names.ebit, date, UNKNOWN) {
            Some(ebit) => (Some(ebit), Some(EbitSource::Reported)),
            None => (operating_income, operating_income.map(|_| EbitSource::OperatingIncome)),
        };

        let current_assets = fields.get(BalanceSheet, &names.current_assets, date, UNKNOWN);
        let current_liabilities =
            fields.get(BalanceSheet, &names.current_liabilities, date, UNKNOWN);
        let operating_cash_flow = fields.get(CashFlow, &names.operating_cash_flow, date, UNKNOWN);
        let capital_expenditure = fields.get(CashFlow, &names.capital_expenditure, date, ZERO);

        Self {
            period,
            revenue,
            net_income,
            gross_profit,
            operating_income,
            total_assets: fields.get(BalanceSheet, &names.total_assets, date, UNKNOWN),
            total_liabilities: fields.get(BalanceSheet, &names.total_liabilities, date, UNKNOWN),
            equity: fields.get(BalanceSheet, &names.equity, date, UNKNOWN),
            current_assets,
            current_liabilities,
            inventory: fields.get(BalanceSheet, &names.inventory, date, UNKNOWN),
            cash: fields.get(BalanceSheet, &names.cash, date, UNKNOWN),
            receivables: fields.get(BalanceSheet, &names.receivables, date, UNKNOWN),
            invested_capital: fields.get(BalanceSheet, &names.invested_capital, date, UNKNOWN),
            retained_earnings: fields.get(BalanceSheet, &names.retained_earnings, date, UNKNOWN),
            ebit,
            ebit_source,
            long_term_debt: fields.get(BalanceSheet, &names.long_term_debt, date, ZERO),
            short_term_debt: fields.get(BalanceSheet, &names.short_term_debt, date, ZERO),
            operating_cash_flow,
            capital_expenditure,
            free_cash_flow: difference(operating_cash_flow, capital_expenditure),
            working_capital: difference(current_assets, current_liabilities),
            growth: BTreeMap::new(),
        }
    }

    /// Long-term plus short-term debt.
    pub fn total_debt(&self) -> f64 {
        self.long_term_debt.unwrap_or(0.0) + self.short_term_debt.unwrap_or(0.0)
    }

    /// Growth of a flow metric relative to the previous period.
    pub fn growth_of(&self, metric: FlowMetric) -> Option<f64> {
        self.growth.get(&metric).copied().flatten()
    }

    /// Column names of [`values`](Self::values), in display order.
    pub const COLUMNS: [&'static str; 19] = [
        "Revenue",
        "Net Income",
        "Gross Profit",
        "Operating Income",
        "Total Assets",
        "Total Liabilities",
        "Equity",
        "Current Assets",
        "Current Liabilities",
        "Inventory",
        "Cash",
        "Receivables",
        "Invested Capital",
        "Retained Earnings",
        "EBIT",
        "Operating Cash Flow",
        "Capital Expenditure",
        "Free Cash Flow",
        "Working Capital",
    ];

    /// Absolute values in [`COLUMNS`](Self::COLUMNS) order.
    pub const fn values(&self) -> [Option<f64>; 19] {
        [
            self.revenue,
            self.net_income,
            self.gross_profit,
            self.operating_income,
            self.total_assets,
            self.total_liabilities,
            self.equity,
            self.current_assets,
            self.current_liabilities,
            self.inventory,
            self.cash,
            self.receivables,
            self.invested_capital,
            self.retained_earnings,
            self.ebit,
            self.operating_cash_flow,
            self.capital_expenditure,
            self.free_cash_flow,
            self.working_capital,
        ]
    }
}

fn difference(minuend: Option<f64>, subtrahend: Option<f64>) -> Option<f64> {
    Some(minuend? - subtrahend?)
}
