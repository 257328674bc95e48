//! Dividend analysis: payers only, highest yield first.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use sectorlens_core::insights::{GROWTH_FOCUSED, HIGH_DIVIDEND_PAYERS};
use sectorlens_core::projection::DividendPoint;
use sectorlens_core::Metric;

use crate::theme::Theme;

use super::bars::{self, BarDatum};
use super::table::{self, DetailRow};
use super::{cards, columns};

pub const CHART_TITLE: &str = "Dividend Yield by Company";
pub const STRATEGY_TITLE: &str = "Dividend Strategy Analysis";
/// Section border plus two list panels of three rows each.
const STRATEGY_HEIGHT: u16 = 7;

pub fn render(f: &mut Frame, area: Rect, points: &[DividendPoint], theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(STRATEGY_HEIGHT)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[0]);

    let data: Vec<BarDatum> = points
        .iter()
        .map(|p| BarDatum {
            label: p.ticker.clone(),
            value: p.dividend_yield_pct,
            text: Metric::DividendYield.format(p.dividend_yield_pct),
            color: theme.sector(p.sector),
        })
        .collect();
    bars::render_bars(
        f,
        top[0],
        CHART_TITLE,
        Metric::DividendYield.axis_title(),
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
                vec![(Metric::DividendYield, p.dividend_yield_pct)],
            )
        })
        .collect();
    table::render(f, top[1], "Yield Ranking", &detail, theme);

    let section = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(format!(" {STRATEGY_TITLE} "), theme.title()));
    let inner = section.inner(rows[1]);
    f.render_widget(section, rows[1]);

    let strategy = columns(inner, 2);
    cards::render_list_panel(f, strategy[0], &HIGH_DIVIDEND_PAYERS, theme);
    cards::render_list_panel(f, strategy[1], &GROWTH_FOCUSED, theme);
}
