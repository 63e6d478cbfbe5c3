//! Raw financial statement tables as delivered by a data provider.
//!
//! A [`RawStatementTable`] maps a period-end date to the provider's line items
//! for that date. Line-item names are whatever the provider calls them
//! ("Total Revenue", "Stockholders Equity", ...) and are not guaranteed to be
//! present for every security, so the engine never indexes them directly.

use crate::{AnalysisError, Result};
use chrono::{Datelike, NaiveDate};
use derive_more::Display;
use polars::prelude::*;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Reporting frequency of a set of statements.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// Quarterly filings
    #[display("quarterly")]
    Quarterly,
    /// Annual filings
    #[display("annual")]
    Annual,
}

impl Cadence {
    /// Suffix used for period-over-period growth columns.
    pub const fn growth_suffix(self) -> &'static str {
        match self {
            Self::Quarterly => "QoQ",
            Self::Annual => "YoY",
        }
    }
}

/// The three statements every canonical period must appear in.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Statement {
    /// Income statement
    #[display("income statement")]
    Income,
    /// Balance sheet
    #[display("balance sheet")]
    BalanceSheet,
    /// Cash-flow statement
    #[display("cash-flow statement")]
    CashFlow,
}

/// A reporting date together with its cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    /// Period-end date
    pub date: NaiveDate,
    /// Cadence the period was aligned under
    pub cadence: Cadence,
}

impl Period {
    /// Create a period for the given date and cadence.
    pub const fn new(date: NaiveDate, cadence: Cadence) -> Self {
        Self { date, cadence }
    }

    /// Calendar year of the period end.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar quarter (1-4) of the period end, for quarterly periods only.
    pub fn quarter(&self) -> Option<u32> {
        match self.cadence {
            Cadence::Quarterly => Some((self.date.month() - 1) / 3 + 1),
            Cadence::Annual => None,
        }
    }

    /// Short label such as `2024 Q1` or `2024`.
    pub fn label(&self) -> String {
        match self.quarter() {
            Some(quarter) => format!("{} Q{}", self.year(), quarter),
            None => self.year().to_string(),
        }
    }
}

/// Line items keyed by period-end date.
///
/// Values that are not finite (`NaN`, infinities) are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<NaiveDate, BTreeMap<String, Option<f64>>>")]
pub struct RawStatementTable {
    rows: BTreeMap<NaiveDate, BTreeMap<String, Option<f64>>>,
    line_items: BTreeSet<String>,
}

impl RawStatementTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a line item for a period, creating the period if needed.
    pub fn insert(&mut self, date: NaiveDate, line_item: impl Into<String>, value: Option<f64>) {
        let line_item = line_item.into();
        let value = value.filter(|v| v.is_finite());
        self.line_items.insert(line_item.clone());
        self.rows.entry(date).or_default().insert(line_item, value);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, date: NaiveDate, line_item: &str, value: f64) -> Self {
        self.insert(date, line_item, Some(value));
        self
    }

    /// Period-end dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.rows.keys().copied()
    }

    /// Whether any period of the table carries the line item.
    pub fn has_line_item(&self, line_item: &str) -> bool {
        self.line_items.contains(line_item)
    }

    /// Value of a line item for a period, if reported.
    pub fn value(&self, line_item: &str, date: NaiveDate) -> Option<f64> {
        self.rows.get(&date)?.get(line_item).copied().flatten()
    }

    /// Number of periods in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no periods.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Build a table from a DataFrame with a `date` column (`YYYY-MM-DD`
    /// strings) and one numeric column per line item.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let dates = df
            .column("date")?
            .str()?
            .into_iter()
            .map(|label| {
                let label = label.ok_or_else(|| AnalysisError::InvalidDate("null".to_string()))?;
                NaiveDate::parse_from_str(label, "%Y-%m-%d")
                    .map_err(|_| AnalysisError::InvalidDate(label.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut table = Self::new();
        for name in df.get_column_names() {
            if name.as_str() == "date" {
                continue;
            }
            let values = df.column(name.as_str())?.cast(&DataType::Float64)?;
            for (date, value) in dates.iter().zip(values.f64()?.into_iter()) {
                table.insert(*date, name.as_str(), value);
            }
        }
        Ok(table)
    }
}

impl From<BTreeMap<NaiveDate, BTreeMap<String, Option<f64>>>> for RawStatementTable {
    fn from(rows: BTreeMap<NaiveDate, BTreeMap<String, Option<f64>>>) -> Self {
        let mut table = Self::new();
        for (date, items) in rows {
            table.rows.entry(date).or_default();
            for (line_item, value) in items {
                table.insert(date, line_item, value);
            }
        }
        table
    }
}

/// Income statement, balance sheet and cash-flow statement for one cadence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatementSet {
    /// Income statement
    #[serde(default)]
    pub income: RawStatementTable,
    /// Balance sheet
    #[serde(default)]
    pub balance_sheet: RawStatementTable,
    /// Cash-flow statement
    #[serde(default)]
    pub cash_flow: RawStatementTable,
}

impl StatementSet {
    /// The table for one statement.
    pub const fn table(&self, statement: Statement) -> &RawStatementTable {
        match statement {
            Statement::Income => &self.income,
            Statement::BalanceSheet => &self.balance_sheet,
            Statement::CashFlow => &self.cash_flow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2024, 3, 31), Some(1))]
    #[case(date(2024, 6, 30), Some(2))]
    #[case(date(2024, 9, 28), Some(3))]
    #[case(date(2024, 12, 31), Some(4))]
    fn test_quarter_from_month(#[case] end: NaiveDate, #[case] expected: Option<u32>) {
        let period = Period::new(end, Cadence::Quarterly);
        assert_eq!(period.quarter(), expected);
        assert_eq!(period.year(), 2024);
    }

    #[test]
    fn test_annual_period_has_no_quarter() {
        let period = Period::new(date(2023, 6, 30), Cadence::Annual);
        assert_eq!(period.quarter(), None);
        assert_eq!(period.label(), "2023");
    }

    #[test]
    fn test_non_finite_values_are_absent() {
        let mut table = RawStatementTable::new();
        table.insert(date(2024, 3, 31), "Inventory", Some(f64::NAN));
        table.insert(date(2024, 3, 31), "Cash And Cash Equivalents", Some(50.0));

        assert!(table.has_line_item("Inventory"));
        assert_eq!(table.value("Inventory", date(2024, 3, 31)), None);
        assert_eq!(
            table.value("Cash And Cash Equivalents", date(2024, 3, 31)),
            Some(50.0)
        );
        assert!(!table.has_line_item("Accounts Receivable"));
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "2024-06-30": { "Total Revenue": 1100.0, "EBIT": null },
            "2024-03-31": { "Total Revenue": 1000.0 }
        }"#;
        let table: RawStatementTable = serde_json::from_str(json).unwrap();

        assert_eq!(table.dates().collect::<Vec<_>>(), vec![date(2024, 3, 31), date(2024, 6, 30)]);
        assert!(table.has_line_item("EBIT"));
        assert_eq!(table.value("EBIT", date(2024, 6, 30)), None);
        assert_eq!(table.value("Total Revenue", date(2024, 3, 31)), Some(1000.0));
    }

    #[test]
    fn test_from_dataframe() {
        let df = df![
            "date" => ["2024-03-31", "2024-06-30"],
            "Total Revenue" => [Some(1000.0), Some(1100.0)],
            "Inventory" => [None, Some(40.0)]
        ]
        .unwrap();

        let table = RawStatementTable::from_dataframe(&df).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.value("Total Revenue", date(2024, 6, 30)), Some(1100.0));
        assert_eq!(table.value("Inventory", date(2024, 3, 31)), None);
        assert_eq!(table.value("Inventory", date(2024, 6, 30)), Some(40.0));
    }

    #[test]
    fn test_from_dataframe_rejects_bad_dates() {
        let df = df![
            "date" => ["Q1 2024"],
            "Total Revenue" => [1000.0]
        ]
        .unwrap();

        let err = RawStatementTable::from_dataframe(&df).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidDate(label) if label == "Q1 2024"));
    }
}
