//! Key insights: six narrative blocks and the portfolio recommendations.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use sectorlens_core::insights::{PORTFOLIO_RECOMMENDATIONS, STRATEGIC_INSIGHTS};

use crate::theme::Theme;

use super::{cards, columns};

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(5)])
        .split(area);

    let halves = columns(rows[0], 2);
    let per_column = STRATEGIC_INSIGHTS.len().div_ceil(2);
    for (column, chunk) in halves.iter().zip(STRATEGIC_INSIGHTS.chunks(per_column)) {
        let cells = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, chunk.len() as u32); chunk.len()])
            .split(*column);
        for (insight, cell) in chunk.iter().zip(cells.iter()) {
            cards::render_insight(f, *cell, insight, theme);
        }
    }

    cards::render_cards(f, rows[1], &PORTFOLIO_RECOMMENDATIONS, theme);
}
