//! Derived summary figures: the combined market cap card and the header.

use std::collections::BTreeMap;

use crate::company::CompanyRecord;
use crate::projection::MarketCapPoint;
use crate::sector::Sector;

/// Combined market cap of a billions projection, in trillions.
pub fn total_market_cap_trillions(points: &[MarketCapPoint]) -> f64 {
    points.iter().map(|p| p.market_cap_billions).sum::<f64>() / 1000.0
}

/// Companies per sector. Every sector is present, possibly with zero.
pub fn sector_counts(records: &[CompanyRecord]) -> BTreeMap<Sector, usize> {
    let mut counts: BTreeMap<Sector, usize> = Sector::ALL.iter().map(|s| (*s, 0)).collect();
    for record in records {
        *counts.entry(record.sector).or_default() += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::Universe;
    use crate::projection::market_cap;

    #[test]
    fn total_is_about_eighteen_trillion() {
        let universe = Universe::builtin().unwrap();
        let total = total_market_cap_trillions(&market_cap(universe.records()));
        assert!((total - 18.0485723096).abs() < 1e-6);
    }

    #[test]
    fn counts_per_sector() {
        let universe = Universe::builtin().unwrap();
        let counts = sector_counts(universe.records());
        assert_eq!(counts[&Sector::Technology], 9);
        assert_eq!(counts[&Sector::Financial], 4);
        assert_eq!(counts[&Sector::Industrial], 1);
    }
}
