//! Detail table beside each chart: exact values, including negatives that
//! the bars can only hint at.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use sectorlens_core::{Metric, Sector};

use crate::theme::Theme;

/// One table row: ticker, sector and one or more metric values.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub ticker: String,
    pub sector: Sector,
    pub values: Vec<(Metric, f64)>,
}

impl DetailRow {
    pub fn new(ticker: &str, sector: Sector, values: Vec<(Metric, f64)>) -> Self {
        Self {
            ticker: ticker.to_string(),
            sector,
            values,
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, title: &str, rows: &[DetailRow], theme: &Theme) {
    let metrics: Vec<Metric> = rows
        .first()
        .map(|r| r.values.iter().map(|(m, _)| *m).collect())
        .unwrap_or_default();

    let mut header = vec![Cell::from("Ticker"), Cell::from("Sector")];
    header.extend(metrics.iter().map(|m| Cell::from(m.label())));
    let header = Row::new(header).style(theme.accent_bold());

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                Cell::from(Span::styled(
                    row.ticker.clone(),
                    Style::default()
                        .fg(theme.sector(row.sector))
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(row.sector.label(), theme.muted())),
            ];
            cells.extend(row.values.iter().map(|(metric, value)| {
                let style = if *value < 0.0 {
                    Style::default().fg(theme.alert)
                } else {
                    theme.text()
                };
                Cell::from(Span::styled(metric.format(*value), style))
            }));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(6), Constraint::Length(11)];
    widths.extend(metrics.iter().map(|_| Constraint::Min(8)));

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(format!(" {title} "), theme.title())),
    );
    f.render_widget(table, area);
}
