//! Market overview: market cap by company, coloured by sector.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use sectorlens_core::insights;
use sectorlens_core::projection::MarketCapPoint;
use sectorlens_core::Metric;

use crate::theme::Theme;

use super::bars::{self, BarDatum};
use super::cards;
use super::table::{self, DetailRow};

pub const CHART_TITLE: &str = "Market Capitalization by Company";

pub fn render(f: &mut Frame, area: Rect, points: &[MarketCapPoint], theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[0]);

    let data: Vec<BarDatum> = points
        .iter()
        .map(|p| BarDatum {
            label: p.ticker.clone(),
            value: p.market_cap_billions,
            text: Metric::MarketCap.format(p.market_cap_billions),
            color: theme.sector(p.sector),
        })
        .collect();
    bars::render_bars(
        f,
        top[0],
        CHART_TITLE,
        Metric::MarketCap.axis_title(),
        &data,
        &bars::sector_legend(theme),
        theme,
    );

    let detail: Vec<DetailRow> = points
        .iter()
        .map(|p| {
            DetailRow::new(
                &p.ticker,
                p.sector,
                vec![(Metric::MarketCap, p.market_cap_billions)],
            )
        })
        .collect();
    table::render(f, top[1], "Ranking", &detail, theme);

    cards::render_cards(f, rows[1], &insights::overview_cards(points), theme);
}
