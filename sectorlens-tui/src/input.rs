//! Keyboard input dispatch: quit keys, then tab selection.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use sectorlens_core::Tab;

use crate::app::AppState;

/// Apply one key event to the app.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                app.view.select(tab);
            }
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.view.select_prev();
        }
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            app.view.select_next();
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.view.select_prev();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use proptest::prelude::*;
    use sectorlens_core::Universe;

    use crate::theme::Theme;

    fn app() -> AppState {
        AppState::new(Universe::builtin().unwrap(), Theme::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_select_tabs() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('4')));
        assert_eq!(app.active_tab(), Tab::Dividends);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.active_tab(), Tab::Overview);
        handle_key(&mut app, press(KeyCode::Char('5')));
        assert_eq!(app.active_tab(), Tab::Insights);
    }

    #[test]
    fn out_of_range_number_is_ignored() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('6')));
        handle_key(&mut app, press(KeyCode::Char('0')));
        assert_eq!(app.active_tab(), Tab::Overview);
        assert!(app.running);
    }

    #[test]
    fn tab_keys_cycle_with_wrap() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.active_tab(), Tab::Insights);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_tab(), Tab::Overview);
        handle_key(&mut app, KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT));
        assert_eq!(app.active_tab(), Tab::Insights);
        handle_key(&mut app, press(KeyCode::Char('l')));
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.active_tab(), Tab::Profitability);
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.active_tab(), Tab::Overview);
    }

    #[test]
    fn quit_keys() {
        for key in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = app();
            handle_key(&mut app, key);
            assert!(!app.running);
        }
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let release = KeyEvent {
            code: KeyCode::Char('3'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, release);
        assert_eq!(app.active_tab(), Tab::Overview);
    }

    fn arb_navigation_key() -> impl Strategy<Value = KeyCode> {
        prop_oneof![
            prop::char::range('1', '9').prop_map(KeyCode::Char),
            Just(KeyCode::Tab),
            Just(KeyCode::BackTab),
            Just(KeyCode::Left),
            Just(KeyCode::Right),
            Just(KeyCode::Char('h')),
            Just(KeyCode::Char('l')),
            Just(KeyCode::Char('x')),
        ]
    }

    proptest! {
        /// Navigation never quits, and a number key always lands on its tab.
        #[test]
        fn navigation_then_number_lands_on_tab(
            keys in prop::collection::vec(arb_navigation_key(), 0..40),
            target in 0..5usize,
        ) {
            let mut app = app();
            for code in keys {
                handle_key(&mut app, press(code));
            }
            prop_assert!(app.running);
            let digit = char::from(b'1' + target as u8);
            handle_key(&mut app, press(KeyCode::Char(digit)));
            prop_assert_eq!(app.active_tab(), Tab::from_index(target).unwrap());
        }
    }
}
