//! Non-fatal diagnostics collected during an analysis pass.
//!
//! Every derivation step takes a `&mut Diagnostics` and records what it had
//! to work around. Nothing here interrupts the pass; the collected entries are
//! returned with the results for display.

use crate::statements::{Cadence, Statement};
use derive_more::Display;

/// A condition the engine absorbed while deriving a table.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A line item the provider did not report for any period
    #[display("Warning: Data column '{field}' not found in {cadence} {statement}.")]
    MissingField {
        /// Cadence being processed
        cadence: Cadence,
        /// Statement that lacked the line item
        statement: Statement,
        /// Provider line-item name
        field: String,
    },

    /// The three statements of a cadence share no reporting date
    #[display("No {cadence} data available to calculate ratios.")]
    NoCanonicalPeriods {
        /// Cadence without canonical periods
        cadence: Cadence,
    },

    /// Valuation ratios need a quarterly period and there is none
    #[display("No quarterly period available for valuation ratios.")]
    NoLatestPeriod,
}

/// Ordered, de-duplicated log of [`Diagnostic`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a diagnostic. Repeats of an entry already in the log are ignored.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.entries.contains(&diagnostic) {
            return;
        }
        tracing::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    /// Entries in the order they were first recorded.
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Rendered messages in order.
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(field: &str) -> Diagnostic {
        Diagnostic::MissingField {
            cadence: Cadence::Quarterly,
            statement: Statement::BalanceSheet,
            field: field.to_string(),
        }
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            missing("Inventory").to_string(),
            "Warning: Data column 'Inventory' not found in quarterly balance sheet."
        );
    }

    #[test]
    fn test_repeats_are_recorded_once() {
        let mut log = Diagnostics::new();
        log.push(missing("Inventory"));
        log.push(missing("Accounts Receivable"));
        log.push(missing("Inventory"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0], missing("Inventory"));
        assert_eq!(log.entries()[1], missing("Accounts Receivable"));
    }
}
