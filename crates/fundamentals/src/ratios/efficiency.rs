//! Turnover ratios: revenue generated per unit of a balance.

use super::{Ratio, RatioCategory, RatioKind, quotient};
use crate::financials::FinancialsRow;

/// Revenue over inventory.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryTurnover;

impl Ratio for InventoryTurnover {
    fn name(&self) -> &str {
        "Inventory Turnover"
    }

    fn description(&self) -> &str {
        "Revenue / inventory"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Efficiency
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Revenue", "Inventory"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        quotient(row.revenue, row.inventory)
    }
}

/// Revenue over total assets; the second DuPont factor.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetTurnover;

impl Ratio for AssetTurnover {
    fn name(&self) -> &str {
        "Asset Turnover"
    }

    fn description(&self) -> &str {
        "Revenue / total assets"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Efficiency
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Revenue", "Total Assets"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        quotient(row.revenue, row.total_assets)
    }
}

/// Revenue over accounts receivable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceivablesTurnover;

impl Ratio for ReceivablesTurnover {
    fn name(&self) -> &str {
        "Receivables Turnover"
    }

    fn description(&self) -> &str {
        "Revenue / receivables"
    }

    fn category(&self) -> RatioCategory {
        RatioCategory::Efficiency
    }

    fn kind(&self) -> RatioKind {
        RatioKind::Multiple
    }

    fn inputs(&self) -> &[&str] {
        &["Revenue", "Receivables"]
    }

    fn compute(&self, row: &FinancialsRow) -> Option<f64> {
        quotient(row.revenue, row.receivables)
    }
}
