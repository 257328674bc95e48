//! Chart projections: per-chart reshaping of the company records.
//!
//! Every function here is pure. Output is a fresh `Vec` built from the input
//! slice in one pass; sorts are stable so ties keep table order.
//!
//! - Market cap: millions → billions, sorted descending.
//! - Profitability: margin and ROE as percent, raw P/E, absent-P/E rows dropped.
//! - Growth: revenue growth as percent, no filtering.
//! - Dividends: yield as percent, non-positive yields dropped, sorted descending.

use std::cmp::Ordering;

use serde::Serialize;

use crate::company::CompanyRecord;
use crate::sector::Sector;

/// Millions per billion (market cap scaling).
pub const MARKET_CAP_SCALE: f64 = 1000.0;
/// Fraction → percent scaling.
pub const PERCENT_SCALE: f64 = 100.0;

/// Sort direction for caller-chosen orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, a: f64, b: f64) -> Ordering {
        match self {
            SortOrder::Ascending => a.total_cmp(&b),
            SortOrder::Descending => b.total_cmp(&a),
        }
    }
}

/// A point that belongs to one company in one sector.
pub trait SectorPoint {
    fn ticker(&self) -> &str;
    fn sector(&self) -> Sector;
}

macro_rules! sector_point {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl SectorPoint for $ty {
                fn ticker(&self) -> &str {
                    &self.ticker
                }

                fn sector(&self) -> Sector {
                    self.sector
                }
            }
        )+
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketCapPoint {
    pub ticker: String,
    pub sector: Sector,
    pub market_cap_billions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitabilityPoint {
    pub ticker: String,
    pub sector: Sector,
    pub profit_margin_pct: f64,
    pub pe_ratio: f64,
    pub roe_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub ticker: String,
    pub sector: Sector,
    pub revenue_growth_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DividendPoint {
    pub ticker: String,
    pub sector: Sector,
    pub dividend_yield_pct: f64,
}

sector_point!(MarketCapPoint, ProfitabilityPoint, GrowthPoint, DividendPoint);

/// Field a profitability view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitabilityKey {
    ProfitMargin,
    PeRatio,
    Roe,
}

impl ProfitabilityPoint {
    pub fn value(&self, key: ProfitabilityKey) -> f64 {
        match key {
            ProfitabilityKey::ProfitMargin => self.profit_margin_pct,
            ProfitabilityKey::PeRatio => self.pe_ratio,
            ProfitabilityKey::Roe => self.roe_pct,
        }
    }
}

pub fn market_cap(records: &[CompanyRecord]) -> Vec<MarketCapPoint> {
    let mut points: Vec<MarketCapPoint> = records
        .iter()
        .map(|r| MarketCapPoint {
            ticker: r.ticker.clone(),
            sector: r.sector,
            market_cap_billions: r.market_cap_millions / MARKET_CAP_SCALE,
        })
        .collect();
    points.sort_by(|a, b| {
        SortOrder::Descending.apply(a.market_cap_billions, b.market_cap_billions)
    });
    points
}

/// Profitability points in table order. Records without a P/E are skipped.
pub fn profitability(records: &[CompanyRecord]) -> Vec<ProfitabilityPoint> {
    records
        .iter()
        .filter_map(|r| {
            r.pe_ratio.map(|pe_ratio| ProfitabilityPoint {
                ticker: r.ticker.clone(),
                sector: r.sector,
                profit_margin_pct: r.profit_margin * PERCENT_SCALE,
                pe_ratio,
                roe_pct: r.roe * PERCENT_SCALE,
            })
        })
        .collect()
}

/// [`profitability`] ordered by one field.
pub fn profitability_sorted(
    records: &[CompanyRecord],
    key: ProfitabilityKey,
    order: SortOrder,
) -> Vec<ProfitabilityPoint> {
    let mut points = profitability(records);
    points.sort_by(|a, b| order.apply(a.value(key), b.value(key)));
    points
}

/// Growth points in table order.
pub fn growth(records: &[CompanyRecord]) -> Vec<GrowthPoint> {
    records
        .iter()
        .map(|r| GrowthPoint {
            ticker: r.ticker.clone(),
            sector: r.sector,
            revenue_growth_pct: r.revenue_growth * PERCENT_SCALE,
        })
        .collect()
}

pub fn growth_sorted(records: &[CompanyRecord], order: SortOrder) -> Vec<GrowthPoint> {
    let mut points = growth(records);
    points.sort_by(|a, b| order.apply(a.revenue_growth_pct, b.revenue_growth_pct));
    points
}

pub fn dividends(records: &[CompanyRecord]) -> Vec<DividendPoint> {
    let mut points: Vec<DividendPoint> = records
        .iter()
        .map(|r| DividendPoint {
            ticker: r.ticker.clone(),
            sector: r.sector,
            dividend_yield_pct: r.dividend_yield * PERCENT_SCALE,
        })
        .filter(|p| p.dividend_yield_pct > 0.0)
        .collect();
    points.sort_by(|a, b| {
        SortOrder::Descending.apply(a.dividend_yield_pct, b.dividend_yield_pct)
    });
    points
}
