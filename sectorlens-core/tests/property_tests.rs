//! Property tests for projection invariants.
//!
//! Uses proptest to verify, over arbitrary company tables:
//! 1. Lengths: output length is input length minus filtered records
//! 2. Ordering: market cap and dividends are descending for every adjacent pair
//! 3. Filtering: no dividend entry with yield ≤ 0, no profitability entry without P/E
//! 4. Scaling: scaled values divided by the factor recover the raw values
//! 5. Purity: building a view twice yields identical content

use proptest::prelude::*;
use sectorlens_core::projection::{
    self, ProfitabilityKey, SortOrder, MARKET_CAP_SCALE, PERCENT_SCALE,
};
use sectorlens_core::{CompanyRecord, Sector, Tab, TabView, Universe};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_sector() -> impl Strategy<Value = Sector> {
    prop_oneof![
        Just(Sector::Technology),
        Just(Sector::Financial),
        Just(Sector::Industrial),
    ]
}

fn arb_dividend_yield() -> impl Strategy<Value = f64> {
    // Plenty of exact zeros so the filter is exercised.
    prop_oneof![Just(0.0), 0.0..0.08_f64]
}

fn arb_record() -> impl Strategy<Value = CompanyRecord> {
    (
        arb_sector(),
        1.0..5_000_000.0_f64,
        prop::option::weighted(0.8, 1.0..120.0_f64),
        -0.5..0.7_f64,
        -0.3..1.0_f64,
        arb_dividend_yield(),
        -0.5..2.0_f64,
    )
        .prop_map(
            |(sector, market_cap_millions, pe_ratio, profit_margin, revenue_growth, dividend_yield, roe)| {
                CompanyRecord {
                    ticker: String::new(),
                    sector,
                    market_cap_millions,
                    pe_ratio,
                    profit_margin,
                    revenue_growth,
                    dividend_yield,
                    roe,
                }
            },
        )
}

fn arb_records() -> impl Strategy<Value = Vec<CompanyRecord>> {
    prop::collection::vec(arb_record(), 0..30).prop_map(|mut records| {
        for (i, r) in records.iter_mut().enumerate() {
            r.ticker = format!("T{i:02}");
        }
        records
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ── 1. Lengths ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn projection_lengths(records in arb_records()) {
        let absent_pe = records.iter().filter(|r| r.pe_ratio.is_none()).count();
        let no_yield = records.iter().filter(|r| r.dividend_yield <= 0.0).count();

        prop_assert_eq!(projection::market_cap(&records).len(), records.len());
        prop_assert_eq!(projection::growth(&records).len(), records.len());
        prop_assert_eq!(projection::profitability(&records).len(), records.len() - absent_pe);
        prop_assert_eq!(projection::dividends(&records).len(), records.len() - no_yield);
    }
}

// ── 2. Ordering ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn market_cap_descending(records in arb_records()) {
        let points = projection::market_cap(&records);
        for pair in points.windows(2) {
            prop_assert!(pair[0].market_cap_billions >= pair[1].market_cap_billions);
        }
    }

    #[test]
    fn dividends_descending(records in arb_records()) {
        let points = projection::dividends(&records);
        for pair in points.windows(2) {
            prop_assert!(pair[0].dividend_yield_pct >= pair[1].dividend_yield_pct);
        }
    }

    #[test]
    fn profitability_sorted_both_ways(records in arb_records()) {
        let up = projection::profitability_sorted(&records, ProfitabilityKey::PeRatio, SortOrder::Ascending);
        for pair in up.windows(2) {
            prop_assert!(pair[0].pe_ratio <= pair[1].pe_ratio);
        }
        let down = projection::profitability_sorted(&records, ProfitabilityKey::Roe, SortOrder::Descending);
        for pair in down.windows(2) {
            prop_assert!(pair[0].roe_pct >= pair[1].roe_pct);
        }
    }

    /// Unsorted projections keep table order.
    #[test]
    fn growth_keeps_table_order(records in arb_records()) {
        let points = projection::growth(&records);
        for (point, record) in points.iter().zip(&records) {
            prop_assert_eq!(&point.ticker, &record.ticker);
        }
    }
}

// ── 3. Filtering ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn dividends_are_positive(records in arb_records()) {
        for point in projection::dividends(&records) {
            prop_assert!(point.dividend_yield_pct > 0.0);
        }
    }

    #[test]
    fn profitability_only_with_pe(records in arb_records()) {
        for point in projection::profitability(&records) {
            let record = records.iter().find(|r| r.ticker == point.ticker).unwrap();
            prop_assert_eq!(record.pe_ratio, Some(point.pe_ratio));
        }
    }
}

// ── 4. Scaling ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn scaling_is_reversible(records in arb_records()) {
        let by_ticker = |t: &str| records.iter().find(|r| r.ticker == t).unwrap();

        for p in projection::market_cap(&records) {
            prop_assert!(close(p.market_cap_billions * MARKET_CAP_SCALE, by_ticker(&p.ticker).market_cap_millions));
        }
        for p in projection::profitability(&records) {
            let r = by_ticker(&p.ticker);
            prop_assert!(close(p.profit_margin_pct / PERCENT_SCALE, r.profit_margin));
            prop_assert!(close(p.roe_pct / PERCENT_SCALE, r.roe));
        }
        for p in projection::growth(&records) {
            prop_assert!(close(p.revenue_growth_pct / PERCENT_SCALE, by_ticker(&p.ticker).revenue_growth));
        }
        for p in projection::dividends(&records) {
            prop_assert!(close(p.dividend_yield_pct / PERCENT_SCALE, by_ticker(&p.ticker).dividend_yield));
        }
    }
}

// ── 5. Purity ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn views_are_pure(records in arb_records(), tab_index in 0..5usize) {
        let universe = Universe::from_records(records).unwrap();
        let tab = Tab::from_index(tab_index).unwrap();
        prop_assert_eq!(TabView::build(tab, &universe), TabView::build(tab, &universe));
    }
}
