//! The fixed company metrics table and the validated universe built from it.
//!
//! Raw metrics are stored without a sector; the sector is attached from a
//! [`SectorMap`] when the [`Universe`] is built, and any ticker the map does
//! not know is rejected there.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::DataError;
use crate::sector::{Sector, SectorMap};

/// One literal row of the metrics table. Ratios are fractions (0.243 = 24.3%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRow {
    pub ticker: &'static str,
    pub market_cap_millions: f64,
    pub pe_ratio: Option<f64>,
    pub profit_margin: f64,
    pub revenue_growth: f64,
    pub dividend_yield: f64,
    pub roe: f64,
}

const fn row(
    ticker: &'static str,
    market_cap_millions: f64,
    pe_ratio: Option<f64>,
    profit_margin: f64,
    revenue_growth: f64,
    dividend_yield: f64,
    roe: f64,
) -> MetricRow {
    MetricRow {
        ticker,
        market_cap_millions,
        pe_ratio,
        profit_margin,
        revenue_growth,
        dividend_yield,
        roe,
    }
}

/// Metrics for the fourteen companies, in display order.
pub const METRIC_TABLE: [MetricRow; 14] = [
    row("AAPL", 2_990_296.5309, Some(30.3809), 0.243, 0.051, 0.0053, 1.3802),
    row("MSFT", 3_424_096.8786, Some(34.848), 0.3579, 0.133, 0.0074, 0.3361),
    row("AMZN", 2_187_190.7308, Some(32.8057), 0.1014, 0.086, 0.0, 0.2524),
    row("NFLX", 515_609.0348, Some(55.8585), 0.2307, 0.125, 0.0, 0.4084),
    row("META", 1_576_632.1889, Some(24.5067), 0.3911, 0.161, 0.0033, 0.3984),
    row("GOOG", 2_050_458.6486, Some(18.9314), 0.3086, 0.12, 0.005, 0.3479),
    row("INTC", 89_639.0922, None, -0.3619, -0.004, 0.0122, -0.1813),
    row("AMD", 185_747.5871, Some(80.6761), 0.0802, 0.359, 0.0, 0.039),
    row("NVDA", 3_304_519.893, Some(44.5724), 0.5585, 0.779, 0.0003, 1.1918),
    row("GE", 257_831.7804, Some(36.7447), 0.1763, 0.109, 0.0062, 0.272),
    row("GS", 188_931.1949, Some(13.8897), 0.2806, 0.063, 0.02, 0.1222),
    row("BAC", 333_059.7519, Some(12.8921), 0.2858, 0.057, 0.0241, 0.0946),
    row("JPM", 737_264.7956, Some(12.7851), 0.3538, 0.048, 0.0215, 0.1735),
    row("MS", 207_294.2019, Some(14.7669), 0.2235, 0.163, 0.0293, 0.1388),
];

/// A company with its sector attached. Immutable once the universe is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyRecord {
    pub ticker: String,
    pub sector: Sector,
    pub market_cap_millions: f64,
    pub pe_ratio: Option<f64>,
    pub profit_margin: f64,
    pub revenue_growth: f64,
    pub dividend_yield: f64,
    pub roe: f64,
}

impl CompanyRecord {
    fn from_row(row: &MetricRow, sector: Sector) -> Self {
        Self {
            ticker: row.ticker.to_string(),
            sector,
            market_cap_millions: row.market_cap_millions,
            pe_ratio: row.pe_ratio,
            profit_margin: row.profit_margin,
            revenue_growth: row.revenue_growth,
            dividend_yield: row.dividend_yield,
            roe: row.roe,
        }
    }

    fn validate(&self) -> Result<(), DataError> {
        let fields = [
            ("market cap", self.market_cap_millions),
            ("P/E ratio", self.pe_ratio.unwrap_or(0.0)),
            ("profit margin", self.profit_margin),
            ("revenue growth", self.revenue_growth),
            ("dividend yield", self.dividend_yield),
            ("ROE", self.roe),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DataError::NonFinite {
                ticker: self.ticker.clone(),
                field,
            });
        }
        if self.dividend_yield < 0.0 {
            return Err(DataError::NegativeDividendYield {
                ticker: self.ticker.clone(),
                value: self.dividend_yield,
            });
        }
        Ok(())
    }
}

/// The validated, constant set of companies the dashboard displays.
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    records: Vec<CompanyRecord>,
}

impl Universe {
    /// The fourteen built-in companies.
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_rows(&METRIC_TABLE, &SectorMap::builtin())
    }

    /// Attach sectors to raw rows. Fails on the first ticker without a sector.
    pub fn from_rows(rows: &[MetricRow], sectors: &SectorMap) -> Result<Self, DataError> {
        let records = rows
            .iter()
            .map(|row| {
                sectors
                    .sector_of(row.ticker)
                    .map(|sector| CompanyRecord::from_row(row, sector))
                    .ok_or_else(|| DataError::UnmappedTicker {
                        ticker: row.ticker.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Validate records that already carry a sector.
    pub fn from_records(records: Vec<CompanyRecord>) -> Result<Self, DataError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.ticker.as_str()) {
                return Err(DataError::DuplicateTicker {
                    ticker: record.ticker.clone(),
                });
            }
            record.validate()?;
        }
        tracing::debug!(companies = records.len(), "universe validated");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn get(&self, ticker: &str) -> Option<&CompanyRecord> {
        self.records.iter().find(|r| r.ticker == ticker)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
