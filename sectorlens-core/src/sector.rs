//! Sectors, their display colours, and the ticker → sector lookup.
//!
//! The colour lookup is total: [`Sector::color`] is an exhaustive match, so a
//! sector can never render with an undefined colour. The ticker lookup is the
//! only partial function in the crate and is checked once when the
//! [`Universe`](crate::company::Universe) is built.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseSectorError;

/// An RGB colour token, written as `#RRGGBB` in the dashboard palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorToken {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorToken {
    /// Build a token from a packed `0xRRGGBB` literal.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// `#RRGGBB` form, upper-case.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Serialize for ColorToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Bars whose value is negative (revenue decline, losses).
pub const ALERT_COLOR: ColorToken = ColorToken::from_hex(0xEF4444);
/// P/E bars in the grouped P/E vs ROE chart.
pub const PE_BAR_COLOR: ColorToken = ColorToken::from_hex(0x8884D8);
/// ROE bars in the grouped P/E vs ROE chart.
pub const ROE_BAR_COLOR: ColorToken = ColorToken::from_hex(0x82CA9D);

/// Industry classification used for colouring and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Sector {
    Technology,
    Financial,
    Industrial,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Technology, Sector::Financial, Sector::Industrial];

    pub fn label(self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Financial => "Financial",
            Sector::Industrial => "Industrial",
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            Sector::Technology => ColorToken::from_hex(0x3B82F6),
            Sector::Financial => ColorToken::from_hex(0x10B981),
            Sector::Industrial => ColorToken::from_hex(0xF59E0B),
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = ParseSectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSectorError(s.to_string()))
    }
}

/// Ticker → sector lookup.
///
/// Stored per ticker in a `BTreeMap` so iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorMap {
    by_ticker: BTreeMap<String, Sector>,
}

impl SectorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(ticker, sector)` pairs. Later pairs overwrite earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Sector)>,
        S: Into<String>,
    {
        Self {
            by_ticker: pairs.into_iter().map(|(t, s)| (t.into(), s)).collect(),
        }
    }

    /// The lookup for the fourteen built-in companies.
    pub fn builtin() -> Self {
        let technology = [
            "AAPL", "MSFT", "AMZN", "NFLX", "META", "GOOG", "INTC", "AMD", "NVDA",
        ];
        let financial = ["GS", "BAC", "JPM", "MS"];
        let industrial = ["GE"];

        let pairs = technology
            .iter()
            .map(|t| (*t, Sector::Technology))
            .chain(financial.iter().map(|t| (*t, Sector::Financial)))
            .chain(industrial.iter().map(|t| (*t, Sector::Industrial)));
        Self::from_pairs(pairs)
    }

    pub fn sector_of(&self, ticker: &str) -> Option<Sector> {
        self.by_ticker.get(ticker).copied()
    }

    /// Member tickers of one sector, in ticker order.
    pub fn tickers(&self, sector: Sector) -> Vec<&str> {
        self.by_ticker
            .iter()
            .filter(|(_, s)| **s == sector)
            .map(|(t, _)| t.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_ticker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ticker.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tokens_match_palette() {
        assert_eq!(Sector::Technology.color().hex(), "#3B82F6");
        assert_eq!(Sector::Financial.color().hex(), "#10B981");
        assert_eq!(Sector::Industrial.color().hex(), "#F59E0B");
        assert_eq!(ALERT_COLOR.hex(), "#EF4444");
        assert_eq!(PE_BAR_COLOR.hex(), "#8884D8");
        assert_eq!(ROE_BAR_COLOR.rgb(), (0x82, 0xCA, 0x9D));
    }

    #[test]
    fn sector_parse_is_case_insensitive() {
        assert_eq!("technology".parse::<Sector>(), Ok(Sector::Technology));
        assert_eq!(" Financial ".parse::<Sector>(), Ok(Sector::Financial));
        assert!("Energy".parse::<Sector>().is_err());
    }

    #[test]
    fn builtin_map_covers_fourteen_tickers() {
        let map = SectorMap::builtin();
        assert_eq!(map.len(), 14);
        assert_eq!(map.sector_of("GE"), Some(Sector::Industrial));
        assert_eq!(map.sector_of("JPM"), Some(Sector::Financial));
        assert_eq!(map.sector_of("NVDA"), Some(Sector::Technology));
        assert_eq!(map.sector_of("XOM"), None);
    }

    #[test]
    fn tickers_by_sector() {
        let map = SectorMap::builtin();
        assert_eq!(map.tickers(Sector::Financial), vec!["BAC", "GS", "JPM", "MS"]);
        assert_eq!(map.tickers(Sector::Industrial), vec!["GE"]);
        assert_eq!(map.tickers(Sector::Technology).len(), 9);
    }

    #[test]
    fn color_token_serializes_as_hex() {
        let json = serde_json::to_string(&Sector::Financial.color()).unwrap();
        assert_eq!(json, "\"#10B981\"");
    }
}
