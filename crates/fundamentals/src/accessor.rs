//! Defensive line-item lookup.
//!
//! Providers do not promise a stable set of line-item names across securities
//! or exchanges. All reads from a [`RawStatementTable`] go through
//! [`FieldAccessor::get`], which falls back to a caller-chosen default and
//! logs a [`Diagnostic::MissingField`] when the item is absent from the table
//! altogether. A reported item with a blank cell stays unknown.

use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    statements::{Cadence, RawStatementTable, Statement, StatementSet},
};
use chrono::NaiveDate;

/// Default for a line item that cannot be read.
pub const UNKNOWN: Option<f64> = None;

/// Default for line items whose absence plausibly means zero (debt, capex).
pub const ZERO: Option<f64> = Some(0.0);

/// Looks up line items of one cadence, recording what is missing.
#[derive(Debug)]
pub struct FieldAccessor<'a> {
    statements: &'a StatementSet,
    cadence: Cadence,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> FieldAccessor<'a> {
    /// Create an accessor over the statements of a cadence.
    pub const fn new(
        statements: &'a StatementSet,
        cadence: Cadence,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            statements,
            cadence,
            diagnostics,
        }
    }

    /// Value of `field` in `statement` at `date`.
    ///
    /// A field the table never reports logs a diagnostic and yields `default`.
    /// A field that is reported for other periods but blank for this one is
    /// `None` whatever the default.
    pub fn get(
        &mut self,
        statement: Statement,
        field: &str,
        date: NaiveDate,
        default: Option<f64>,
    ) -> Option<f64> {
        let table: &RawStatementTable = self.statements.table(statement);
        if !table.has_line_item(field) {
            self.diagnostics.push(Diagnostic::MissingField {
                cadence: self.cadence,
                statement,
                field: field.to_string(),
            });
            return default;
        }
        table.value(field, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn statements() -> StatementSet {
        let mut balance_sheet = RawStatementTable::new()
            .with(date(2024, 3, 31), "Inventory", 40.0)
            .with(date(2024, 6, 30), "Cash And Cash Equivalents", 75.0);
        balance_sheet.insert(date(2024, 6, 30), "Inventory", None);
        StatementSet {
            balance_sheet,
            ..StatementSet::default()
        }
    }

    #[test]
    fn test_present_value() {
        let statements = statements();
        let mut diagnostics = Diagnostics::new();
        let mut accessor = FieldAccessor::new(&statements, Cadence::Quarterly, &mut diagnostics);

        let value = accessor.get(Statement::BalanceSheet, "Inventory", date(2024, 3, 31), UNKNOWN);

        assert_eq!(value, Some(40.0));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_blank_cell_is_unknown_without_diagnostic() {
        let statements = statements();
        let mut diagnostics = Diagnostics::new();
        let mut accessor = FieldAccessor::new(&statements, Cadence::Quarterly, &mut diagnostics);
        let blank = date(2024, 6, 30);

        assert_eq!(accessor.get(Statement::BalanceSheet, "Inventory", blank, ZERO), None);
        assert_eq!(accessor.get(Statement::BalanceSheet, "Inventory", blank, UNKNOWN), None);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_column_records_diagnostic() {
        let statements = statements();
        let mut diagnostics = Diagnostics::new();
        let mut accessor = FieldAccessor::new(&statements, Cadence::Annual, &mut diagnostics);

        let value =
            accessor.get(Statement::BalanceSheet, "Long Term Debt", date(2024, 3, 31), ZERO);

        assert_eq!(value, Some(0.0));
        assert_eq!(
            diagnostics.entries(),
            &[Diagnostic::MissingField {
                cadence: Cadence::Annual,
                statement: Statement::BalanceSheet,
                field: "Long Term Debt".to_string(),
            }]
        );
    }
}
