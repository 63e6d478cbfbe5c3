//! Statement provider backed by JSON dumps on disk.

use fundamentals::{AnalysisError, CompanyData, Result, StatementProvider};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Reads `<dir>/<TICKER>.json`, one [`CompanyData`] document per ticker.
#[derive(Debug, Clone)]
pub(crate) struct JsonFileProvider {
    dir: PathBuf,
}

impl JsonFileProvider {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, ticker: &str) -> PathBuf {
        self.dir.join(format!("{ticker}.json"))
    }
}

impl StatementProvider for JsonFileProvider {
    fn name(&self) -> &str {
        "json-file"
    }

    fn fetch(&self, ticker: &str) -> Result<CompanyData> {
        let path = self.path(ticker);
        tracing::debug!(path = %path.display(), "reading company data");

        let contents = fs::read_to_string(&path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AnalysisError::InvalidTicker(ticker.to_string()),
            _ => AnalysisError::Unavailable {
                ticker: ticker.to_string(),
                reason: describe(&path, &err),
            },
        })?;

        serde_json::from_str(&contents).map_err(|err| AnalysisError::UnrecognizedData {
            ticker: ticker.to_string(),
            reason: describe(&path, &err),
        })
    }
}

fn describe(path: &Path, err: &dyn std::error::Error) -> String {
    format!("{}: {err}", path.display())
}
