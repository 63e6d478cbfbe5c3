#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundamentals/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod accessor;
pub mod align;
pub mod analysis;
pub mod composite;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod financials;
pub mod frame;
pub mod growth;
pub mod provider;
pub mod ratios;
pub mod snapshot;
pub mod statements;

// Re-export core types
pub use analysis::{Analysis, Analyzer, CadenceReport, analyze};
pub use config::{EngineConfig, LineItemNames, Precision};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{AnalysisError, Result};
pub use financials::{EbitSource, FinancialsRow};
pub use growth::FlowMetric;
pub use provider::{CompanyData, StatementProvider};
pub use ratios::{Ratio, RatioCategory, RatioInfo, RatioKind, RatioRegistry, RatiosRow};
pub use snapshot::{CompanySnapshot, PricePoint};
pub use statements::{Cadence, Period, RawStatementTable, Statement, StatementSet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
