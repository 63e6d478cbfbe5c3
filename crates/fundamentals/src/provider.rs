//! Data-fetch boundary.
//!
//! The engine never talks to a market-data service itself. A
//! [`StatementProvider`] hands over the six raw statement tables and the
//! company snapshot for a ticker, and everything after that is pure.

use crate::{error::Result, snapshot::CompanySnapshot, statements::StatementSet};
use serde::Deserialize;
use std::fmt::Debug;

/// Everything fetched for one ticker.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanyData {
    /// Quarterly income, balance sheet and cash-flow tables
    pub quarterly: StatementSet,
    /// Annual income, balance sheet and cash-flow tables
    pub annual: StatementSet,
    /// Descriptive and market data
    pub snapshot: CompanySnapshot,
}

/// Source of raw statements and company snapshots.
///
/// Implementations map their own failures onto
/// [`AnalysisError`](crate::AnalysisError): an unknown ticker is
/// `InvalidTicker`, an unreachable source is `Unavailable`, and a payload that
/// cannot be read is `UnrecognizedData`.
pub trait StatementProvider: Debug {
    /// Provider name, for logging.
    fn name(&self) -> &str;

    /// Fetch all statements and the snapshot for `ticker`.
    fn fetch(&self, ticker: &str) -> Result<CompanyData>;
}
