//! Growth analysis. Declining revenue is drawn in the alert colour.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use sectorlens_core::insights::GROWTH_CARDS;
use sectorlens_core::projection::GrowthPoint;
use sectorlens_core::Metric;

use crate::theme::Theme;

use super::bars::{self, BarDatum};
use super::cards;
use super::table::{self, DetailRow};

pub const CHART_TITLE: &str = "Revenue Growth by Company";

pub fn render(f: &mut Frame, area: Rect, points: &[GrowthPoint], theme: &Theme) {
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
            value: p.revenue_growth_pct,
            text: Metric::RevenueGrowth.format(p.revenue_growth_pct),
            color: theme.signed(p.sector, p.revenue_growth_pct),
        })
        .collect();
    let mut legend = bars::sector_legend(theme);
    legend.push((theme.alert, "Decline".to_string()));
    bars::render_bars(
        f,
        top[0],
        CHART_TITLE,
        Metric::RevenueGrowth.axis_title(),
        &data,
        &legend,
        theme,
    );

    let detail: Vec<DetailRow> = points
        .iter()
        .map(|p| {
            DetailRow::new(
                &p.ticker,
                p.sector,
                vec![(Metric::RevenueGrowth, p.revenue_growth_pct)],
            )
        })
        .collect();
    table::render(f, top[1], "Growth Ranking", &detail, theme);

    cards::render_cards(f, rows[1], &GROWTH_CARDS, theme);
}
