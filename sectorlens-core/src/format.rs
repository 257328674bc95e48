//! Value formatting shared by the dashboard and the CLI.
//!
//! Precision is fixed per metric: market cap to whole billions with a `$…B`
//! wrapper, P/E to one decimal, margin/ROE/growth to one decimal percent, and
//! dividend yield to two decimal percent.

use serde::Serialize;

/// A displayed metric. Values passed to [`Metric::format`] are already scaled
/// (billions for market cap, percent for ratios).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    MarketCap,
    PeRatio,
    ProfitMargin,
    Roe,
    RevenueGrowth,
    DividendYield,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::MarketCap => "Market Cap",
            Metric::PeRatio => "P/E Ratio",
            Metric::ProfitMargin => "Profit Margin",
            Metric::Roe => "ROE",
            Metric::RevenueGrowth => "Revenue Growth",
            Metric::DividendYield => "Dividend Yield",
        }
    }

    /// Axis caption, with unit.
    pub fn axis_title(self) -> &'static str {
        match self {
            Metric::MarketCap => "Market Cap ($B)",
            Metric::PeRatio => "P/E Ratio",
            Metric::ProfitMargin => "Profit Margin (%)",
            Metric::Roe => "ROE (%)",
            Metric::RevenueGrowth => "Revenue Growth (%)",
            Metric::DividendYield => "Dividend Yield (%)",
        }
    }

    pub fn format(self, value: f64) -> String {
        match self {
            Metric::MarketCap => billions(value),
            Metric::PeRatio => ratio(value),
            Metric::ProfitMargin | Metric::Roe | Metric::RevenueGrowth => percent(value, 1),
            Metric::DividendYield => percent(value, 2),
        }
    }
}

/// `3304.5` → `$3305B`.
pub fn billions(value: f64) -> String {
    format!("${value:.0}B")
}

/// `3.42` (trillions) → `$3.4T`.
pub fn trillions(value: f64) -> String {
    format!("${value:.1}T")
}

pub fn percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

pub fn ratio(value: f64) -> String {
    format!("{value:.1}")
}
