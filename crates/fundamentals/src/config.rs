//! Engine configuration.
//!
//! Provider line-item spellings are an external contract, so they live here
//! rather than in the extraction code. Override a name when a provider
//! reports the same concept under a different label.

use serde::Deserialize;

/// Configuration for an analysis pass.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Provider names of the line items the engine reads.
    pub line_items: LineItemNames,
    /// Rounding applied in the final formatting pass.
    pub precision: Precision,
}

/// Provider spelling of every line item read from the raw statements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LineItemNames {
    /// Income statement: total revenue
    pub revenue: String,
    /// Income statement: net income
    pub net_income: String,
    /// Income statement: gross profit
    pub gross_profit: String,
    /// Income statement: operating income
    pub operating_income: String,
    /// Income statement: EBIT
    pub ebit: String,
    /// Balance sheet: total assets
    pub total_assets: String,
    /// Balance sheet: total liabilities
    pub total_liabilities: String,
    /// Balance sheet: stockholders' equity
    pub equity: String,
    /// Balance sheet: current assets
    pub current_assets: String,
    /// Balance sheet: current liabilities
    pub current_liabilities: String,
    /// Balance sheet: inventory
    pub inventory: String,
    /// Balance sheet: cash and equivalents
    pub cash: String,
    /// Balance sheet: accounts receivable
    pub receivables: String,
    /// Balance sheet: invested capital
    pub invested_capital: String,
    /// Balance sheet: retained earnings
    pub retained_earnings: String,
    /// Balance sheet: long-term debt
    pub long_term_debt: String,
    /// Balance sheet: short-term debt
    pub short_term_debt: String,
    /// Cash-flow statement: operating cash flow
    pub operating_cash_flow: String,
    /// Cash-flow statement: capital expenditure
    pub capital_expenditure: String,
}

impl Default for LineItemNames {
    fn default() -> Self {
        Self {
            revenue: "Total Revenue".to_string(),
            net_income: "Net Income".to_string(),
            gross_profit: "Gross Profit".to_string(),
            operating_income: "Operating Income".to_string(),
            ebit: "EBIT".to_string(),
            total_assets: "Total Assets".to_string(),
            total_liabilities: "Total Liabilities Net Minority Interest".to_string(),
            equity: "Stockholders Equity".to_string(),
            current_assets: "Current Assets".to_string(),
            current_liabilities: "Current Liabilities".to_string(),
            inventory: "Inventory".to_string(),
            cash: "Cash And Cash Equivalents".to_string(),
            receivables: "Accounts Receivable".to_string(),
            invested_capital: "Invested Capital".to_string(),
            retained_earnings: "Retained Earnings".to_string(),
            long_term_debt: "Long Term Debt".to_string(),
            short_term_debt: "Short Term Debt".to_string(),
            operating_cash_flow: "Operating Cash Flow".to_string(),
            capital_expenditure: "Capital Expenditure".to_string(),
        }
    }
}

/// Most decimal places [`round_to`] honors. Beyond this an `f64` carries no
/// further digits.
pub const MAX_DECIMALS: u32 = 15;

/// Decimal places used when rounding derived values.
///
/// Values above [`MAX_DECIMALS`] are clamped when an analyzer is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Precision {
    /// Percentage-style ratios (margins, returns)
    pub percent_decimals: u32,
    /// Multiplier-style ratios (liquidity, turnover, leverage)
    pub multiple_decimals: u32,
    /// Growth fractions, rounded before scaling to a percentage
    pub growth_fraction_decimals: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            percent_decimals: 5,
            multiple_decimals: 4,
            growth_fraction_decimals: 4,
        }
    }
}

impl Precision {
    /// Every field capped at [`MAX_DECIMALS`].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            percent_decimals: self.percent_decimals.min(MAX_DECIMALS),
            multiple_decimals: self.multiple_decimals.min(MAX_DECIMALS),
            growth_fraction_decimals: self.growth_fraction_decimals.min(MAX_DECIMALS),
        }
    }
}

/// Round half away from zero to a number of decimal places, at most
/// [`MAX_DECIMALS`]. Values too large to scale are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}
