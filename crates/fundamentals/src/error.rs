//! Error types for statement analysis.
//!
//! Only failures that make the whole analysis meaningless are errors. Missing
//! line items, empty cadences and undefined ratios are reported through
//! [`Diagnostics`](crate::Diagnostics) and `None` cells instead.

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that abort an analysis request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The data source does not recognize the ticker
    #[error(
        "Could not retrieve company information for ticker '{0}'. It may be an invalid ticker."
    )]
    InvalidTicker(String),

    /// The data source could not be reached
    #[error("Failed to fetch financial data for {ticker}: {reason}")]
    Unavailable {
        /// Requested ticker
        ticker: String,
        /// Underlying failure
        reason: String,
    },

    /// The data source answered with data that cannot be read
    #[error("Unrecognized financial data for {ticker}: {reason}")]
    UnrecognizedData {
        /// Requested ticker
        ticker: String,
        /// What could not be read
        reason: String,
    },

    /// A period label that is not an ISO date
    #[error("Invalid period date: {0}")]
    InvalidDate(String),

    /// Polars DataFrame error
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl AnalysisError {
    /// Whether retrying the same request later could succeed.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
