//! Application state: single-owner, main-thread only.
//!
//! The universe is validated before `AppState` exists, so rendering never
//! meets an unmapped ticker. The view selector is the only state that input
//! changes besides the quit flag.

use sectorlens_core::{Tab, TabView, Universe, ViewSelector};

use crate::theme::Theme;

pub struct AppState {
    pub universe: Universe,
    pub view: ViewSelector,
    pub theme: Theme,
    pub running: bool,
}

impl AppState {
    pub fn new(universe: Universe, theme: Theme) -> Self {
        Self {
            universe,
            view: ViewSelector::new(),
            theme,
            running: true,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.view.active()
    }

    /// Projections for the active tab, rebuilt on each call.
    pub fn current_view(&self) -> TabView {
        self.view.view(&self.universe)
    }

    pub fn quit(&mut self) {
        tracing::info!(tab = %self.active_tab(), "quit requested");
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_overview_and_running() {
        let app = AppState::new(Universe::builtin().unwrap(), Theme::default());
        assert_eq!(app.active_tab(), Tab::Overview);
        assert!(app.running);
        assert!(matches!(app.current_view(), TabView::Overview { .. }));
    }

    #[test]
    fn quit_clears_running() {
        let mut app = AppState::new(Universe::builtin().unwrap(), Theme::default());
        app.quit();
        assert!(!app.running);
    }
}
