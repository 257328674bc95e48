//! Profitability: margin ranking plus valuation (P/E) against ROE.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use sectorlens_core::insights::PROFITABILITY_CARDS;
use sectorlens_core::projection::ProfitabilityPoint;
use sectorlens_core::sector::{PE_BAR_COLOR, ROE_BAR_COLOR};
use sectorlens_core::Metric;

use crate::theme::Theme;

use super::bars::{self, BarDatum, GroupDatum};
use super::cards;
use super::table::{self, DetailRow};

pub const MARGIN_TITLE: &str = "Profit Margin by Company";
pub const VALUATION_TITLE: &str = "P/E Ratio vs ROE";

/// `by_margin` is margin-descending, `by_pe` is P/E-ascending.
pub fn render(
    f: &mut Frame,
    area: Rect,
    by_margin: &[ProfitabilityPoint],
    by_pe: &[ProfitabilityPoint],
    theme: &Theme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[0]);
    let charts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(top[0]);

    let margins: Vec<BarDatum> = by_margin
        .iter()
        .map(|p| BarDatum {
            label: p.ticker.clone(),
            value: p.profit_margin_pct,
            text: Metric::ProfitMargin.format(p.profit_margin_pct),
            color: theme.signed(p.sector, p.profit_margin_pct),
        })
        .collect();
    bars::render_bars(
        f,
        charts[0],
        MARGIN_TITLE,
        Metric::ProfitMargin.axis_title(),
        &margins,
        &bars::sector_legend(theme),
        theme,
    );

    let pe_color = theme.token(PE_BAR_COLOR);
    let roe_color = theme.token(ROE_BAR_COLOR);
    let groups: Vec<GroupDatum> = by_pe
        .iter()
        .map(|p| GroupDatum {
            label: p.ticker.clone(),
            bars: vec![
                BarDatum {
                    label: Metric::PeRatio.label().to_string(),
                    value: p.pe_ratio,
                    text: Metric::PeRatio.format(p.pe_ratio),
                    color: pe_color,
                },
                BarDatum {
                    label: Metric::Roe.label().to_string(),
                    value: p.roe_pct,
                    text: Metric::Roe.format(p.roe_pct),
                    color: roe_color,
                },
            ],
        })
        .collect();
    let legend = vec![
        (pe_color, Metric::PeRatio.label().to_string()),
        (roe_color, Metric::Roe.axis_title().to_string()),
    ];
    bars::render_groups(
        f,
        charts[1],
        VALUATION_TITLE,
        "P/E Ratio | ROE (%)",
        &groups,
        &legend,
        theme,
    );

    let detail: Vec<DetailRow> = by_margin
        .iter()
        .map(|p| {
            DetailRow::new(
                &p.ticker,
                p.sector,
                vec![
                    (Metric::ProfitMargin, p.profit_margin_pct),
                    (Metric::PeRatio, p.pe_ratio),
                    (Metric::Roe, p.roe_pct),
                ],
            )
        })
        .collect();
    table::render(f, top[1], "Margins & Valuation", &detail, theme);

    cards::render_cards(f, rows[1], &PROFITABILITY_CARDS, theme);
}
