//! Top-level UI layout: header, tab bar, active tab content, status bar.

pub mod bars;
pub mod cards;
pub mod dividends;
pub mod growth;
pub mod insights;
pub mod overview;
pub mod profitability;
pub mod status_bar;
pub mod table;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use sectorlens_core::summary;
use sectorlens_core::{Tab, TabView};

use crate::app::AppState;
use crate::theme::Theme;

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let area = f.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        draw_too_small(f, area, &app.theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, chunks[0], app);
    draw_tabs(f, chunks[1], app.active_tab(), &app.theme);
    draw_content(f, chunks[2], app);
    status_bar::render(f, chunks[3], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let counts = summary::sector_counts(app.universe.records());
    let sectors: Vec<&str> = counts
        .iter()
        .filter(|(_, n)| **n > 0)
        .map(|(s, _)| s.label())
        .collect();

    let lines = vec![
        Line::from(Span::styled("Financial Analysis Dashboard", theme.title())),
        Line::from(Span::styled(
            format!(
                "Comprehensive analysis of {} major companies across {} sectors",
                app.universe.len(),
                join_and(&sectors)
            ),
            theme.muted(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_tabs(f: &mut Frame, area: Rect, active: Tab, theme: &Theme) {
    let titles = Tab::ALL
        .iter()
        .map(|tab| format!("{} {}", tab.index() + 1, tab.label()));

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(theme.muted())
        .highlight_style(theme.tab_active())
        .divider(Span::styled("│", theme.border()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
    f.render_widget(tabs, area);
}

/// One case per tab.
fn draw_content(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    match app.current_view() {
        TabView::Overview { market_cap } => overview::render(f, area, &market_cap, theme),
        TabView::Profitability { by_margin, by_pe } => {
            profitability::render(f, area, &by_margin, &by_pe, theme)
        }
        TabView::Growth { by_growth } => growth::render(f, area, &by_growth, theme),
        TabView::Dividends { by_yield } => dividends::render(f, area, &by_yield, theme),
        TabView::Insights => insights::render(f, area, theme),
    }
}

fn draw_too_small(f: &mut Frame, area: Rect, theme: &Theme) {
    let text = Paragraph::new(vec![
        Line::from(Span::styled("Terminal too small", theme.accent_bold())),
        Line::from(Span::styled(
            format!("need at least {MIN_WIDTH}x{MIN_HEIGHT}"),
            theme.muted(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(text, area);
}

/// `["a", "b", "c"]` → `"a, b, and c"`.
pub fn join_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => (*one).to_string(),
        [a, b] => format!("{a} and {b}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

/// Split `area` into `n` equal columns.
pub fn columns(area: Rect, n: usize) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, n as u32); n];
    Layout::horizontal(constraints).split(area).to_vec()
}
