//! Point-in-time company facts.
//!
//! These are not time series: they describe the company as of the request and
//! are only combined with the latest canonical period. Field aliases accept the
//! camelCase keys of common quote-summary payloads.

use chrono::NaiveDate;
use serde::Deserialize;

/// A daily closing price, kept for charting.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PricePoint {
    /// Trading day
    pub date: NaiveDate,
    /// Closing price
    pub close: f64,
}

/// Scalar facts about a company at request time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanySnapshot {
    /// Company name; absent when the provider does not know the ticker
    #[serde(alias = "longName")]
    pub long_name: Option<String>,
    /// Sector
    pub sector: Option<String>,
    /// Industry
    pub industry: Option<String>,
    /// Listing exchange
    pub exchange: Option<String>,
    /// Country of domicile
    pub country: Option<String>,
    /// Company website
    pub website: Option<String>,
    /// Reporting currency of the statements
    #[serde(alias = "financialCurrency")]
    pub financial_currency: Option<String>,
    /// Last traded price
    #[serde(alias = "currentPrice")]
    pub current_price: Option<f64>,
    /// Book value per share
    #[serde(alias = "bookValue")]
    pub book_value: Option<f64>,
    /// Market capitalization
    #[serde(alias = "marketCap")]
    pub market_cap: Option<f64>,
    /// Shares outstanding
    #[serde(alias = "sharesOutstanding")]
    pub shares_outstanding: Option<f64>,
    /// Annual dividend per share
    #[serde(alias = "dividendRate")]
    pub dividend_rate: Option<f64>,
    /// Dividend yield
    #[serde(alias = "dividendYield")]
    pub dividend_yield: Option<f64>,
    /// Trailing twelve-month P/E
    #[serde(alias = "trailingPE")]
    pub trailing_pe: Option<f64>,
    /// Trailing twelve-month EPS
    #[serde(alias = "trailingEps")]
    pub trailing_eps: Option<f64>,
    /// Earnings growth as a fraction (0.12 = 12%)
    #[serde(alias = "earningsGrowth")]
    pub earnings_growth: Option<f64>,
    /// 52-week low
    #[serde(alias = "fiftyTwoWeekLow")]
    pub fifty_two_week_low: Option<f64>,
    /// 52-week high
    #[serde(alias = "fiftyTwoWeekHigh")]
    pub fifty_two_week_high: Option<f64>,
    /// Average daily volume over ten days
    #[serde(alias = "averageDailyVolume10Day")]
    pub average_volume_10d: Option<f64>,
    /// Daily closes, ascending
    #[serde(alias = "priceHistory")]
    pub price_history: Vec<PricePoint>,
}

impl CompanySnapshot {
    /// Book value per share, reported or derived from equity and share count.
    pub fn book_value_per_share(&self, equity: Option<f64>) -> Option<f64> {
        finite(self.book_value).filter(|b| *b != 0.0).or_else(|| {
            let shares = finite(self.shares_outstanding).filter(|s| *s != 0.0)?;
            finite(Some(equity? / shares))
        })
    }

    /// The snapshot with every NaN or infinite number treated as absent.
    ///
    /// Price points without a finite close are dropped.
    #[must_use]
    pub fn finite_only(mut self) -> Self {
        for value in [
            &mut self.current_price,
            &mut self.book_value,
            &mut self.market_cap,
            &mut self.shares_outstanding,
            &mut self.dividend_rate,
            &mut self.dividend_yield,
            &mut self.trailing_pe,
            &mut self.trailing_eps,
            &mut self.earnings_growth,
            &mut self.fifty_two_week_low,
            &mut self.fifty_two_week_high,
            &mut self.average_volume_10d,
        ] {
            *value = finite(*value);
        }
        self.price_history.retain(|point| point.close.is_finite());
        self
    }
}

/// `value` if it is a finite number.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
