//! Polars renderings of the derived tables.
//!
//! Every frame starts with `date` (ISO string) and `Year`, plus `Quarter` for
//! quarterly tables. Unavailable cells become nulls and rows are never dropped.

use crate::{
    analysis::{Analysis, CadenceReport},
    composite::{PiotroskiSignals, PiotroskiTable},
    error::Result,
    financials::FinancialsRow,
    growth::FlowMetric,
    statements::{Cadence, Period},
};
use polars::prelude::*;

fn period_columns(periods: &[Period], cadence: Cadence) -> Vec<Column> {
    let dates: Vec<String> = periods
        .iter()
        .map(|p| p.date.format("%Y-%m-%d").to_string())
        .collect();
    let years: Vec<i32> = periods.iter().map(Period::year).collect();

    let mut columns = vec![
        Column::new("date".into(), dates),
        Column::new("Year".into(), years),
    ];
    if cadence == Cadence::Quarterly {
        let quarters: Vec<Option<i32>> = periods
            .iter()
            .map(|p| p.quarter().map(|q| q as i32))
            .collect();
        columns.push(Column::new("Quarter".into(), quarters));
    }
    columns
}

impl CadenceReport {
    /// Absolute values, growth columns and EBIT provenance.
    pub fn financials_frame(&self) -> Result<DataFrame> {
        let rows = &self.financials;
        let mut columns = period_columns(&self.periods(), self.cadence);

        for (i, name) in FinancialsRow::COLUMNS.iter().enumerate() {
            let values: Vec<Option<f64>> = rows.iter().map(|row| row.values()[i]).collect();
            columns.push(Column::new((*name).into(), values));
        }

        for metric in FlowMetric::ALL {
            let name = format!("{metric} {}", self.cadence.growth_suffix());
            let values: Vec<Option<f64>> = rows.iter().map(|row| row.growth_of(metric)).collect();
            columns.push(Column::new(name.into(), values));
        }

        let sources: Vec<Option<String>> = rows
            .iter()
            .map(|row| row.ebit_source.map(|s| s.to_string()))
            .collect();
        columns.push(Column::new("EBIT Source".into(), sources));

        Ok(DataFrame::new(columns)?)
    }

    /// Rounded ratios in registry order, with `Altman Z-Score` on quarterly
    /// tables.
    pub fn ratios_frame(&self) -> Result<DataFrame> {
        let mut columns = period_columns(&self.periods(), self.cadence);

        let names: Vec<&str> = self
            .ratios
            .first()
            .map(|row| row.values.iter().map(|cell| cell.name.as_str()).collect())
            .unwrap_or_default();
        for name in names {
            let values: Vec<Option<f64>> = self.ratios.iter().map(|row| row.get(name)).collect();
            columns.push(Column::new(name.into(), values));
        }

        Ok(DataFrame::new(columns)?)
    }

    /// The DuPont factors and the reported ROE.
    pub fn dupont_frame(&self) -> Result<DataFrame> {
        let rows = &self.dupont;
        let mut columns = period_columns(&self.periods(), self.cadence);

        let series: [(&str, Vec<Option<f64>>); 5] = [
            ("Net Profit Margin", rows.iter().map(|r| r.net_profit_margin).collect()),
            ("Asset Turnover", rows.iter().map(|r| r.asset_turnover).collect()),
            ("Financial Leverage", rows.iter().map(|r| r.financial_leverage).collect()),
            ("ROE", rows.iter().map(|r| r.roe).collect()),
            ("Implied ROE", rows.iter().map(|r| r.implied_roe()).collect()),
        ];
        for (name, values) in series {
            columns.push(Column::new(name.into(), values));
        }

        Ok(DataFrame::new(columns)?)
    }
}

impl PiotroskiTable {
    /// One boolean column per signal plus `F Score`.
    pub fn to_frame(&self) -> Result<DataFrame> {
        let periods: Vec<Period> = self.rows().iter().map(|r| r.period).collect();
        let mut columns = period_columns(&periods, Cadence::Annual);

        for (i, label) in PiotroskiSignals::LABELS.iter().enumerate() {
            let values: Vec<bool> = self.rows().iter().map(|r| r.signals.values()[i]).collect();
            columns.push(Column::new((*label).into(), values));
        }
        let scores: Vec<u32> = self.rows().iter().map(|r| u32::from(r.score())).collect();
        columns.push(Column::new("F Score".into(), scores));

        Ok(DataFrame::new(columns)?)
    }
}

impl Analysis {
    /// Annual F-Score table.
    pub fn piotroski_frame(&self) -> Result<DataFrame> {
        self.piotroski.to_frame()
    }
}
