//! Valuation ratios for the latest canonical period.
//!
//! These combine the [`CompanySnapshot`] with the most recent quarterly
//! financials and are computed once per analysis, not per period.

use crate::{
    config::{Precision, round_to},
    financials::FinancialsRow,
    ratios::{percentage, quotient},
    snapshot::{CompanySnapshot, finite},
    statements::Period,
};

/// Latest-period valuation metrics. `None` means not available.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Valuation {
    /// Period the flows were taken from
    pub period: Option<Period>,
    /// Market cap + total debt - cash
    pub enterprise_value: Option<f64>,
    /// Trailing P/E / (earnings growth x 100)
    pub peg_ratio: Option<f64>,
    /// Current price / book value per share
    pub price_to_book: Option<f64>,
    /// Enterprise value / free cash flow
    pub ev_to_fcf: Option<f64>,
    /// Enterprise value / EBIT, standing in for EBITDA
    pub ev_to_ebitda: Option<f64>,
    /// Dividends paid as a percentage of net income
    pub dividend_payout_ratio: Option<f64>,
    /// Free cash flow as a percentage of market cap
    pub fcf_yield: Option<f64>,
}

impl Valuation {
    /// Derive the metrics from the latest period and the snapshot, unrounded.
    ///
    /// Snapshot numbers that are NaN or infinite count as unavailable.
    pub fn compute(latest: &FinancialsRow, snapshot: &CompanySnapshot) -> Self {
        let market_cap = finite(snapshot.market_cap);
        let enterprise_value = enterprise_value(latest, market_cap);

        let peg_ratio = match (finite(snapshot.trailing_pe), finite(snapshot.earnings_growth)) {
            (Some(pe), Some(growth)) if growth > 0.0 => quotient(Some(pe), Some(growth * 100.0)),
            _ => None,
        };

        let price_to_book = quotient(
            finite(snapshot.current_price),
            snapshot.book_value_per_share(latest.equity),
        );

        let dividends_paid = finite(snapshot.dividend_rate)
            .zip(finite(snapshot.shares_outstanding))
            .map(|(rate, shares)| rate * shares);

        Self {
            period: Some(latest.period),
            enterprise_value,
            peg_ratio,
            price_to_book,
            ev_to_fcf: quotient(enterprise_value, latest.free_cash_flow),
            ev_to_ebitda: quotient(enterprise_value, latest.ebit),
            dividend_payout_ratio: percentage(dividends_paid, latest.net_income),
            fcf_yield: percentage(latest.free_cash_flow, market_cap),
        }
    }

    /// Round multiples and percentages. Enterprise value is left as is.
    #[must_use]
    pub fn rounded(self, precision: &Precision) -> Self {
        let multiple = |v: Option<f64>| v.map(|v| round_to(v, precision.multiple_decimals));
        let percent = |v: Option<f64>| v.map(|v| round_to(v, precision.percent_decimals));
        Self {
            peg_ratio: multiple(self.peg_ratio),
            price_to_book: multiple(self.price_to_book),
            ev_to_fcf: multiple(self.ev_to_fcf),
            ev_to_ebitda: multiple(self.ev_to_ebitda),
            dividend_payout_ratio: percent(self.dividend_payout_ratio),
            fcf_yield: percent(self.fcf_yield),
            ..self
        }
    }

    /// Labelled metrics in display order.
    pub fn columns(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("Enterprise Value", self.enterprise_value),
            ("PEG Ratio", self.peg_ratio),
            ("P/B Ratio", self.price_to_book),
            ("EV/FCF", self.ev_to_fcf),
            ("EV/EBITDA", self.ev_to_ebitda),
            ("Dividend Payout Ratio", self.dividend_payout_ratio),
            ("FCF Yield", self.fcf_yield),
        ]
    }
}

/// Market cap plus total debt minus cash. Unavailable without a finite market
/// cap or cash; absent debt components count as zero.
pub fn enterprise_value(row: &FinancialsRow, market_cap: Option<f64>) -> Option<f64> {
    finite(Some(finite(market_cap)? + row.total_debt() - row.cash?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratios::tests::empty_row;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn latest() -> FinancialsRow {
        FinancialsRow {
            net_income: Some(500.0),
            equity: Some(4_000.0),
            cash: Some(1_000.0),
            long_term_debt: Some(2_000.0),
            short_term_debt: Some(500.0),
            ebit: Some(800.0),
            free_cash_flow: Some(600.0),
            ..empty_row()
        }
    }

    fn snapshot() -> CompanySnapshot {
        CompanySnapshot {
            market_cap: Some(20_000.0),
            current_price: Some(50.0),
            book_value: Some(10.0),
            shares_outstanding: Some(400.0),
            dividend_rate: Some(0.5),
            trailing_pe: Some(40.0),
            earnings_growth: Some(0.2),
            ..CompanySnapshot::default()
        }
    }

    #[test]
    fn test_enterprise_value() {
        // 20,000 + 2,000 + 500 - 1,000
        assert_eq!(enterprise_value(&latest(), Some(20_000.0)), Some(21_500.0));
        assert_eq!(enterprise_value(&latest(), None), None);

        let no_cash = FinancialsRow {
            cash: None,
            ..latest()
        };
        assert_eq!(enterprise_value(&no_cash, Some(20_000.0)), None);
    }

    #[test]
    fn test_valuation_metrics() {
        let v = Valuation::compute(&latest(), &snapshot());

        assert_relative_eq!(v.peg_ratio.unwrap(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(v.price_to_book.unwrap(), 5.0);
        assert_relative_eq!(v.ev_to_fcf.unwrap(), 21_500.0 / 600.0);
        assert_relative_eq!(v.ev_to_ebitda.unwrap(), 26.875);
        assert_relative_eq!(v.dividend_payout_ratio.unwrap(), 40.0, epsilon = 1e-9);
        assert_relative_eq!(v.fcf_yield.unwrap(), 3.0, epsilon = 1e-9);
        assert_eq!(v.period, Some(latest().period));
    }

    #[rstest]
    #[case(Some(0.0))]
    #[case(Some(-0.05))]
    #[case(None)]
    fn test_peg_requires_positive_growth(#[case] growth: Option<f64>) {
        let snapshot = CompanySnapshot {
            earnings_growth: growth,
            ..snapshot()
        };
        assert_eq!(Valuation::compute(&latest(), &snapshot).peg_ratio, None);
    }

    #[test]
    fn test_price_to_book_from_equity() {
        let snapshot = CompanySnapshot {
            book_value: None,
            ..snapshot()
        };
        // 4,000 / 400 = 10 per share
        let v = Valuation::compute(&latest(), &snapshot);
        assert_relative_eq!(v.price_to_book.unwrap(), 5.0);
    }

    #[test]
    fn test_zero_divisors() {
        let row = FinancialsRow {
            free_cash_flow: Some(0.0),
            ebit: Some(0.0),
            net_income: Some(0.0),
            ..latest()
        };
        let v = Valuation::compute(&row, &snapshot());

        assert_eq!(v.ev_to_fcf, None);
        assert_eq!(v.ev_to_ebitda, None);
        assert_eq!(v.dividend_payout_ratio, None);
        assert!(v.enterprise_value.is_some());
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_non_finite_market_cap(#[case] market_cap: f64) {
        let snapshot = CompanySnapshot {
            market_cap: Some(market_cap),
            ..snapshot()
        };
        let v = Valuation::compute(&latest(), &snapshot);

        assert_eq!(v.enterprise_value, None);
        assert_eq!(v.ev_to_fcf, None);
        assert_eq!(v.ev_to_ebitda, None);
        assert_eq!(v.fcf_yield, None);
        assert_eq!(enterprise_value(&latest(), Some(market_cap)), None);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_non_finite_price_inputs(#[case] value: f64) {
        let snapshot = CompanySnapshot {
            trailing_pe: Some(value),
            current_price: Some(value),
            ..snapshot()
        };
        let v = Valuation::compute(&latest(), &snapshot);

        assert_eq!(v.peg_ratio, None);
        assert_eq!(v.price_to_book, None);
        assert!(v.enterprise_value.is_some());
    }

    #[test]
    fn test_rounded() {
        let v = Valuation::compute(&latest(), &snapshot()).rounded(&Precision::default());
        // 21,500 / 600 = 35.8333...
        assert_eq!(v.ev_to_fcf, Some(35.8333));
        assert_eq!(v.enterprise_value, Some(21_500.0));
    }
}
