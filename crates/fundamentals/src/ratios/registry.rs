//! Ratio registry for discovery and introspection.
//!
//! The registry fixes the ratio schema: which ratios are derived and in what
//! column order they appear in a [`RatiosRow`](super::RatiosRow).

use super::{Ratio, RatioKind};
use derive_more::Display;
use std::sync::Arc;

/// Ratio category for grouping related ratios.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RatioCategory {
    /// Profitability - margins and returns
    Profitability,
    /// Liquidity - short-term solvency
    Liquidity,
    /// Leverage - capital structure
    Leverage,
    /// Efficiency - turnover ratios
    Efficiency,
    /// Cash flow - cash generation and reinvestment
    #[display("Cash Flow")]
    CashFlow,
}

/// Metadata for ratio introspection.
#[derive(Debug, Clone)]
pub struct RatioInfo {
    /// Column name
    pub name: String,
    /// Human-readable formula
    pub description: String,
    /// Ratio category
    pub category: RatioCategory,
    /// Percentage or multiplier
    pub kind: RatioKind,
    /// Financials columns read
    pub inputs: Vec<String>,
}

/// Ordered registry of ratios.
#[derive(Debug, Default)]
pub struct RatioRegistry {
    ratios: Vec<Arc<dyn Ratio>>,
}

impl RatioRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { ratios: Vec::new() }
    }

    /// Register the standard ratio set in display order.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Profitability
        registry.register(Arc::new(super::NetProfitMargin));
        registry.register(Arc::new(super::GrossMargin));
        registry.register(Arc::new(super::OperatingMargin));
        registry.register(Arc::new(super::Roa));
        registry.register(Arc::new(super::Roe));

        // Liquidity
        registry.register(Arc::new(super::CurrentRatio));
        registry.register(Arc::new(super::QuickRatio));
        registry.register(Arc::new(super::CashRatio));

        // Leverage
        registry.register(Arc::new(super::DebtToEquity));
        registry.register(Arc::new(super::DebtRatio));

        // Cash flow and efficiency
        registry.register(Arc::new(super::CashFlowMargin));
        registry.register(Arc::new(super::InventoryTurnover));
        registry.register(Arc::new(super::AssetTurnover));
        registry.register(Arc::new(super::ReceivablesTurnover));
        registry.register(Arc::new(super::CapexIntensity));
        registry.register(Arc::new(super::Roce));
        registry.register(Arc::new(super::FcfConversion));
        registry.register(Arc::new(super::FinancialLeverage));

        registry
    }

    /// Register a ratio. A ratio with the same name is replaced in place.
    pub fn register(&mut self, ratio: Arc<dyn Ratio>) {
        match self.ratios.iter_mut().find(|r| r.name() == ratio.name()) {
            Some(existing) => *existing = ratio,
            None => self.ratios.push(ratio),
        }
    }

    /// Get a ratio by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Ratio>> {
        self.ratios.iter().find(|r| r.name() == name).cloned()
    }

    /// Ratios in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Ratio>> {
        self.ratios.iter()
    }

    /// Ratios in a category, in registration order.
    pub fn by_category(&self, category: RatioCategory) -> Vec<Arc<dyn Ratio>> {
        self.ratios
            .iter()
            .filter(|r| r.category() == category)
            .cloned()
            .collect()
    }

    /// Metadata for every registered ratio.
    pub fn all_info(&self) -> Vec<RatioInfo> {
        self.ratios
            .iter()
            .map(|r| RatioInfo {
                name: r.name().to_string(),
                description: r.description().to_string(),
                category: r.category(),
                kind: r.kind(),
                inputs: r.inputs().iter().map(|s| (*s).to_string()).collect(),
            })
            .collect()
    }

    /// Number of registered ratios.
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}
