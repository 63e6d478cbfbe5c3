//! Period alignment across the three statements.

use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    statements::{Cadence, Period, StatementSet},
};
use std::collections::BTreeSet;

/// Canonical periods of a cadence: the dates present in the income
/// statement, balance sheet and cash-flow statement, ascending.
///
/// An empty intersection is not an error. It records
/// [`Diagnostic::NoCanonicalPeriods`] and returns no periods, so the other
/// cadence can still be analysed.
pub fn canonical_periods(
    statements: &StatementSet,
    cadence: Cadence,
    diagnostics: &mut Diagnostics,
) -> Vec<Period> {
    let balance: BTreeSet<_> = statements.balance_sheet.dates().collect();
    let cash_flow: BTreeSet<_> = statements.cash_flow.dates().collect();

    let periods: Vec<_> = statements
        .income
        .dates()
        .filter(|date| balance.contains(date) && cash_flow.contains(date))
        .map(|date| Period::new(date, cadence))
        .collect();

    if periods.is_empty() {
        diagnostics.push(Diagnostic::NoCanonicalPeriods { cadence });
    } else {
        tracing::debug!(%cadence, periods = periods.len(), "aligned statements");
    }
    periods
}
