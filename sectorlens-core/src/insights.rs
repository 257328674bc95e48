//! Annotation cards shown under the charts.
//!
//! Narrative text is authored, not derived. The one exception is the
//! combined market cap on the overview, summed from the projection.

use std::borrow::Cow;

use serde::Serialize;

use crate::format;
use crate::projection::MarketCapPoint;
use crate::sector::ColorToken;
use crate::summary;
use crate::view::TabView;

/// Card accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Accent {
    Blue,
    Green,
    Yellow,
    Purple,
    Red,
    Indigo,
    Emerald,
    Orange,
    Teal,
}

impl Accent {
    pub fn color(self) -> ColorToken {
        match self {
            Accent::Blue => ColorToken::from_hex(0x2563EB),
            Accent::Green => ColorToken::from_hex(0x16A34A),
            Accent::Yellow => ColorToken::from_hex(0xCA8A04),
            Accent::Purple => ColorToken::from_hex(0x9333EA),
            Accent::Red => ColorToken::from_hex(0xDC2626),
            Accent::Indigo => ColorToken::from_hex(0x4F46E5),
            Accent::Emerald => ColorToken::from_hex(0x059669),
            Accent::Orange => ColorToken::from_hex(0xEA580C),
            Accent::Teal => ColorToken::from_hex(0x0D9488),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: Cow<'static, str>,
    pub headline: Option<Cow<'static, str>>,
    pub body: Cow<'static, str>,
    pub accent: Accent,
}

impl Card {
    const fn authored(
        title: &'static str,
        headline: &'static str,
        body: &'static str,
        accent: Accent,
    ) -> Self {
        Self {
            title: Cow::Borrowed(title),
            headline: Some(Cow::Borrowed(headline)),
            body: Cow::Borrowed(body),
            accent,
        }
    }

    const fn note(title: &'static str, body: &'static str, accent: Accent) -> Self {
        Self {
            title: Cow::Borrowed(title),
            headline: None,
            body: Cow::Borrowed(body),
            accent,
        }
    }

    fn derived(title: &'static str, body: String, accent: Accent) -> Self {
        Self {
            title: Cow::Borrowed(title),
            headline: None,
            body: Cow::Owned(body),
            accent,
        }
    }
}

/// A titled column of rows, each with an optional right-aligned value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ListPanel {
    pub title: &'static str,
    pub rows: &'static [ListRow],
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ListRow {
    pub label: &'static str,
    pub value: Option<&'static str>,
}

/// A narrative insight block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Insight {
    pub title: &'static str,
    pub body: &'static str,
    pub accent: Accent,
}

pub const TECHNOLOGY_DOMINANCE: Card = Card::note(
    "Technology Dominance",
    "9 of top 10 companies by market cap",
    Accent::Blue,
);

pub const TOP_THREE_LEADERS: Card = Card::note(
    "Top 3 Leaders",
    "NVDA, MSFT, AAPL control 65% of total",
    Accent::Yellow,
);

/// Overview cards. Only the combined market cap is computed, from a
/// market-cap projection in billions.
pub fn overview_cards(points: &[MarketCapPoint]) -> Vec<Card> {
    vec![
        TECHNOLOGY_DOMINANCE,
        Card::derived(
            "Total Market Cap",
            format!(
                "{} combined",
                format::trillions(summary::total_market_cap_trillions(points))
            ),
            Accent::Green,
        ),
        TOP_THREE_LEADERS,
    ]
}

pub const PROFITABILITY_CARDS: [Card; 3] = [
    Card::authored(
        "Highest Profit Margin",
        "NVDA: 55.9%",
        "AI boom driving exceptional margins",
        Accent::Purple,
    ),
    Card::authored(
        "Struggling Profitability",
        "INTC: -36.2%",
        "Major restructuring needed",
        Accent::Red,
    ),
    Card::authored(
        "Highest ROE",
        "AAPL: 138%",
        "Exceptional capital efficiency",
        Accent::Indigo,
    ),
];

pub const GROWTH_CARDS: [Card; 4] = [
    Card::authored("Growth Leader", "NVDA: 77.9%", "AI revolution impact", Accent::Emerald),
    Card::authored(
        "Strong Tech Growth",
        "AMD: 35.9%",
        "Data center expansion",
        Accent::Blue,
    ),
    Card::authored("Stable Growth", "META: 16.1%", "Social media maturity", Accent::Orange),
    Card::authored("Declining", "INTC: -0.4%", "Market share erosion", Accent::Red),
];

pub const HIGH_DIVIDEND_PAYERS: ListPanel = ListPanel {
    title: "High Dividend Payers (Financial Sector)",
    rows: &[
        ListRow {
            label: "Morgan Stanley (MS)",
            value: Some("2.93%"),
        },
        ListRow {
            label: "Bank of America (BAC)",
            value: Some("2.41%"),
        },
        ListRow {
            label: "JPMorgan (JPM)",
            value: Some("2.15%"),
        },
    ],
    accent: Accent::Green,
};

pub const GROWTH_FOCUSED: ListPanel = ListPanel {
    title: "Growth-Focused (Low/No Dividends)",
    rows: &[
        ListRow {
            label: "AMZN, NFLX, AMD: No dividends",
            value: None,
        },
        ListRow {
            label: "NVDA: 0.03% (token dividend)",
            value: None,
        },
        ListRow {
            label: "Focus on reinvestment for growth",
            value: None,
        },
    ],
    accent: Accent::Blue,
};

pub const STRATEGIC_INSIGHTS: [Insight; 6] = [
    Insight {
        title: "AI Revolution Winners",
        body: "NVIDIA leads with 77.9% revenue growth and 55.9% profit margins, capturing AI \
               infrastructure demand. Microsoft and Google also benefit from AI integration.",
        accent: Accent::Blue,
    },
    Insight {
        title: "Intel's Crisis",
        body: "Only company with negative revenue growth (-0.4%) and massive losses (-36.2% \
               profit margin). Missing the AI transition and losing market share to AMD and \
               NVIDIA.",
        accent: Accent::Red,
    },
    Insight {
        title: "Financial Sector Stability",
        body: "Banks (JPM, BAC, GS, MS) offer consistent dividends (2-3%) with reasonable P/E \
               ratios (13-15), providing income and value.",
        accent: Accent::Green,
    },
    Insight {
        title: "Valuation Extremes",
        body: "AMD trades at 80.7x P/E vs Netflix at 55.8x, suggesting AMD may be overvalued \
               relative to growth prospects. Financial stocks appear undervalued.",
        accent: Accent::Purple,
    },
    Insight {
        title: "Capital Allocation Strategies",
        body: "Apple's 138% ROE shows exceptional capital efficiency. Growth companies (AMZN, \
               NFLX) reinvest vs. mature companies (financials) returning cash via dividends.",
        accent: Accent::Orange,
    },
    Insight {
        title: "Investment Themes",
        body: "Three clear strategies emerge: AI growth (NVDA, MSFT), stable tech (AAPL, GOOG), \
               and income/value (financial sector). Each serves different portfolio needs.",
        accent: Accent::Teal,
    },
];

pub const PORTFOLIO_RECOMMENDATIONS: [Card; 3] = [
    Card::authored(
        "Growth Portfolio",
        "NVDA, AMD, META",
        "AI/tech exposure with higher risk/reward",
        Accent::Blue,
    ),
    Card::authored(
        "Balanced Portfolio",
        "AAPL, MSFT, GOOG",
        "Stable growth with reasonable valuations",
        Accent::Green,
    ),
    Card::authored(
        "Income Portfolio",
        "JPM, BAC, MS",
        "Dividends and value with lower volatility",
        Accent::Yellow,
    ),
];

/// Everything printed around one tab's charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotations {
    pub cards: Vec<Card>,
    pub lists: Vec<ListPanel>,
    pub insights: Vec<Insight>,
}

/// Cards, list panels and insight blocks for a built view.
pub fn annotations(view: &TabView) -> Annotations {
    let (cards, lists, insights) = match view {
        TabView::Overview { market_cap } => (overview_cards(market_cap), vec![], vec![]),
        TabView::Profitability { .. } => (PROFITABILITY_CARDS.to_vec(), vec![], vec![]),
        TabView::Growth { .. } => (GROWTH_CARDS.to_vec(), vec![], vec![]),
        TabView::Dividends { .. } => (
            vec![],
            vec![HIGH_DIVIDEND_PAYERS, GROWTH_FOCUSED],
            vec![],
        ),
        TabView::Insights => (
            PORTFOLIO_RECOMMENDATIONS.to_vec(),
            vec![],
            STRATEGIC_INSIGHTS.to_vec(),
        ),
    };
    Annotations {
        cards,
        lists,
        insights,
    }
}
