//! Bottom status bar: key hints and the active tab.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;

pub const KEY_HINTS: &str = " 1-5:Tab  Tab/l:Next  S-Tab/h:Prev  q:Quit";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let spans = vec![
        Span::styled(KEY_HINTS, theme.muted()),
        Span::raw(" | "),
        Span::styled(app.active_tab().id(), theme.accent()),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
