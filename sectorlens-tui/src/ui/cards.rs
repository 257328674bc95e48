//! Annotation cards, list panels and insight blocks.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use sectorlens_core::insights::{Card, Insight, ListPanel};

use crate::theme::Theme;

use super::columns;

fn accent_block<'a>(title: &'a str, color: ratatui::style::Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
}

pub fn render_card(f: &mut Frame, area: Rect, card: &Card, theme: &Theme) {
    let color = theme.card(card.accent);
    let mut lines = Vec::with_capacity(2);
    if let Some(headline) = &card.headline {
        lines.push(Line::from(Span::styled(
            headline.as_ref(),
            theme.title(),
        )));
    }
    lines.push(Line::from(Span::styled(card.body.as_ref(), theme.muted())));

    let paragraph = Paragraph::new(lines)
        .block(accent_block(card.title.as_ref(), color))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Cards side by side in equal columns.
pub fn render_cards(f: &mut Frame, area: Rect, cards: &[Card], theme: &Theme) {
    for (card, col) in cards.iter().zip(columns(area, cards.len())) {
        render_card(f, col, card, theme);
    }
}

pub fn render_list_panel(f: &mut Frame, area: Rect, panel: &ListPanel, theme: &Theme) {
    let color = theme.card(panel.accent);
    let lines: Vec<Line> = panel
        .rows
        .iter()
        .map(|row| match row.value {
            Some(value) => Line::from(vec![
                Span::styled(row.label, theme.text()),
                Span::raw("  "),
                Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ]),
            None => Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::styled(row.label, theme.text()),
            ]),
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(accent_block(panel.title, color))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub fn render_insight(f: &mut Frame, area: Rect, insight: &Insight, theme: &Theme) {
    let color = theme.card(insight.accent);
    let paragraph = Paragraph::new(Line::from(Span::styled(insight.body, theme.text())))
        .block(accent_block(insight.title, color))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
