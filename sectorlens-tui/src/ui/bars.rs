//! Bar and grouped-bar charts with printed values and a sector legend.
//!
//! Terminal bars only have non-negative integer heights. Values are scaled
//! by [`HEIGHT_SCALE`] to keep one decimal of resolution; anything at or
//! below zero gets the minimum height so its signed value label is still
//! printed.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use sectorlens_core::Sector;

use crate::theme::Theme;

pub const HEIGHT_SCALE: f64 = 10.0;
pub const MAX_BAR_WIDTH: u16 = 7;
const BAR_GAP: u16 = 1;
const GROUP_GAP: u16 = 1;

/// One bar: axis label, raw value, printed value, fill colour.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    pub text: String,
    pub color: Color,
}

/// Several bars sharing one axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDatum {
    pub label: String,
    pub bars: Vec<BarDatum>,
}

/// Legend entry: swatch colour and caption.
pub type LegendItem = (Color, String);

/// Bar height for a value.
pub fn height(value: f64) -> u64 {
    let scaled = (value * HEIGHT_SCALE).round();
    if scaled >= 1.0 {
        scaled as u64
    } else {
        1
    }
}

/// Widest bar that lets `slots` bars (plus gaps) fit in `width` columns.
pub fn fit_bar_width(width: u16, slots: usize, gap: u16) -> u16 {
    if slots == 0 {
        return MAX_BAR_WIDTH;
    }
    let per_slot = width as usize / slots;
    (per_slot.saturating_sub(gap as usize) as u16).clamp(1, MAX_BAR_WIDTH)
}

fn to_bar<'a>(datum: &'a BarDatum, theme: &Theme, with_label: bool) -> Bar<'a> {
    let (bar_style, value_style) = theme.bar(datum.color);
    let bar = Bar::default()
        .value(height(datum.value))
        .text_value(datum.text.clone())
        .style(bar_style)
        .value_style(value_style);
    if with_label {
        bar.label(Line::from(datum.label.as_str()))
    } else {
        bar
    }
}

fn chart_block<'a>(title: &'a str, axis: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(Span::styled(format!(" {title} "), theme.title()))
        .title_bottom(Line::from(Span::styled(format!(" {axis} "), theme.muted())))
}

/// Split off a one-line legend under the chart when there is room.
fn with_legend(area: Rect, legend: &[LegendItem]) -> (Rect, Option<Rect>) {
    if legend.is_empty() || area.height < 6 {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

pub fn render_legend(f: &mut Frame, area: Rect, legend: &[LegendItem], theme: &Theme) {
    let mut spans = Vec::with_capacity(legend.len() * 2);
    for (color, caption) in legend {
        spans.push(Span::styled(" ■ ", Style::default().fg(*color)));
        spans.push(Span::styled(caption.clone(), theme.muted()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Swatches for the three sectors.
pub fn sector_legend(theme: &Theme) -> Vec<LegendItem> {
    Sector::ALL
        .iter()
        .map(|s| (theme.sector(*s), s.label().to_string()))
        .collect()
}

/// Single-series bar chart.
pub fn render_bars(
    f: &mut Frame,
    area: Rect,
    title: &str,
    axis: &str,
    data: &[BarDatum],
    legend: &[LegendItem],
    theme: &Theme,
) {
    let (chart_area, legend_area) = with_legend(area, legend);
    let block = chart_block(title, axis, theme);
    let inner = block.inner(chart_area);

    let bars: Vec<Bar> = data.iter().map(|d| to_bar(d, theme, true)).collect();
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(fit_bar_width(inner.width, data.len(), BAR_GAP))
        .bar_gap(BAR_GAP)
        .label_style(theme.text());
    f.render_widget(chart, chart_area);

    if let Some(legend_area) = legend_area {
        render_legend(f, legend_area, legend, theme);
    }
}

/// Grouped bar chart: one group per label, bars within a group side by side.
pub fn render_groups(
    f: &mut Frame,
    area: Rect,
    title: &str,
    axis: &str,
    groups: &[GroupDatum],
    legend: &[LegendItem],
    theme: &Theme,
) {
    let (chart_area, legend_area) = with_legend(area, legend);
    let block = chart_block(title, axis, theme);
    let inner = block.inner(chart_area);

    let per_group = groups.iter().map(|g| g.bars.len()).max().unwrap_or(1).max(1);
    let group_width = fit_bar_width(inner.width, groups.len(), GROUP_GAP);
    let bar_width = (group_width / per_group as u16).clamp(1, MAX_BAR_WIDTH);

    let bar_sets: Vec<Vec<Bar>> = groups
        .iter()
        .map(|g| g.bars.iter().map(|d| to_bar(d, theme, false)).collect())
        .collect();

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(GROUP_GAP)
        .label_style(theme.text());
    for (group, bars) in groups.iter().zip(&bar_sets) {
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(group.label.as_str()))
                .bars(bars),
        );
    }
    f.render_widget(chart, chart_area);

    if let Some(legend_area) = legend_area {
        render_legend(f, legend_area, legend, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_keeps_one_decimal() {
        assert_eq!(height(55.86), 559);
        assert_eq!(height(3424.0968786), 34241);
        assert_eq!(height(0.03), 1);
    }

    #[test]
    fn non_positive_values_get_minimum_height() {
        assert_eq!(height(0.0), 1);
        assert_eq!(height(-0.4), 1);
        assert_eq!(height(-36.19), 1);
    }

    #[test]
    fn bar_width_fits_area() {
        assert_eq!(fit_bar_width(120, 14, 1), 7);
        assert_eq!(fit_bar_width(70, 14, 1), 4);
        assert_eq!(fit_bar_width(10, 14, 1), 1);
        assert_eq!(fit_bar_width(50, 0, 1), MAX_BAR_WIDTH);
    }

    #[test]
    fn sector_legend_has_three_entries() {
        let legend = sector_legend(&Theme::default());
        let captions: Vec<&str> = legend.iter().map(|(_, c)| c.as_str()).collect();
        assert_eq!(captions, ["Technology", "Financial", "Industrial"]);
    }
}
