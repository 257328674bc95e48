//! View selection: the active tab and the projections each tab displays.
//!
//! [`ViewSelector`] is the only mutable state of the dashboard. It is owned by
//! whoever renders (the TUI's `AppState`), starts on [`Tab::Overview`], and
//! changes only on explicit selection. [`TabView::build`] is the per-tab
//! dispatch: a pure function from (tab, universe) to the data the tab shows.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::company::Universe;
use crate::error::ParseTabError;
use crate::projection::{
    self, DividendPoint, GrowthPoint, MarketCapPoint, ProfitabilityKey, ProfitabilityPoint,
    SortOrder,
};

/// Dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Overview,
    Profitability,
    Growth,
    Dividends,
    Insights,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Profitability,
        Tab::Growth,
        Tab::Dividends,
        Tab::Insights,
    ];

    pub fn index(self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Profitability => 1,
            Tab::Growth => 2,
            Tab::Dividends => 3,
            Tab::Insights => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Tab::ALL.get(i).copied()
    }

    /// Stable identifier, as accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Profitability => "profitability",
            Tab::Growth => "growth",
            Tab::Dividends => "dividends",
            Tab::Insights => "insights",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Market Overview",
            Tab::Profitability => "Profitability",
            Tab::Growth => "Growth Analysis",
            Tab::Dividends => "Dividend Analysis",
            Tab::Insights => "Key Insights",
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}

/// Holds the active tab. Not persisted anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSelector {
    active: Tab,
}

impl ViewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Make `tab` active. Returns whether the active tab changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        tracing::debug!(from = %self.active, to = %tab, "tab selected");
        self.active = tab;
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.select(self.active.next())
    }

    pub fn select_prev(&mut self) -> bool {
        self.select(self.active.prev())
    }

    /// The data for the active tab, computed fresh from `universe`.
    pub fn view(&self, universe: &Universe) -> TabView {
        TabView::build(self.active, universe)
    }
}

/// Per-tab chart data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "snake_case")]
pub enum TabView {
    Overview {
        market_cap: Vec<MarketCapPoint>,
    },
    Profitability {
        by_margin: Vec<ProfitabilityPoint>,
        by_pe: Vec<ProfitabilityPoint>,
    },
    Growth {
        by_growth: Vec<GrowthPoint>,
    },
    Dividends {
        by_yield: Vec<DividendPoint>,
    },
    Insights,
}

impl TabView {
    pub fn build(tab: Tab, universe: &Universe) -> Self {
        let records = universe.records();
        match tab {
            Tab::Overview => TabView::Overview {
                market_cap: projection::market_cap(records),
            },
            Tab::Profitability => TabView::Profitability {
                by_margin: projection::profitability_sorted(
                    records,
                    ProfitabilityKey::ProfitMargin,
                    SortOrder::Descending,
                ),
                by_pe: projection::profitability_sorted(
                    records,
                    ProfitabilityKey::PeRatio,
                    SortOrder::Ascending,
                ),
            },
            Tab::Growth => TabView::Growth {
                by_growth: projection::growth_sorted(records, SortOrder::Descending),
            },
            Tab::Dividends => TabView::Dividends {
                by_yield: projection::dividends(records),
            },
            Tab::Insights => TabView::Insights,
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            TabView::Overview { .. } => Tab::Overview,
            TabView::Profitability { .. } => Tab::Profitability,
            TabView::Growth { .. } => Tab::Growth,
            TabView::Dividends { .. } => Tab::Dividends,
            TabView::Insights => Tab::Insights,
        }
    }
}
