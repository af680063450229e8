//! Event handling for keyboard input using crossterm.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tipsplit::prelude::KeyValueStore;
use tui_input::backend::crossterm::EventHandler;

use crate::tui::app::{App, Focus};

/// Poll for events and handle them.
/// Returns Ok(true) if the app should quit.
pub fn handle_events<S: KeyValueStore>(app: &mut App<S>) -> io::Result<bool> {
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        return Ok(handle_key(app, key));
    }
    Ok(false)
}

/// Applies one key press. Returns true if the app should quit.
pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> bool {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return true;
    }

    if key.code != KeyCode::Enter {
        app.message = None;
    }

    if app.editing {
        handle_input_mode(app, key);
    } else {
        handle_navigation(app, key.code);
    }

    !app.running
}

/// Keys while a numeric field's text buffer is open.
fn handle_input_mode<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_editing(),
        KeyCode::Esc => app.cancel_editing(),
        KeyCode::Tab | KeyCode::Down => {
            app.commit_editing();
            app.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.commit_editing();
            app.focus_previous();
        }
        _ => {
            app.input.handle_event(&Event::Key(key));
        }
    }
}

fn handle_navigation<S: KeyValueStore>(app: &mut App<S>, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char(c @ '1'..='4') if app.focus.numeric_field().is_none() => {
            quick_tip(app, c);
        }
        KeyCode::Down | KeyCode::Tab => app.focus_next(),
        KeyCode::Up | KeyCode::BackTab => app.focus_previous(),
        KeyCode::Left | KeyCode::Right => {
            let forward = code == KeyCode::Right;
            match app.focus {
                Focus::Currency => app.cycle_currency(forward),
                Focus::Presets => app.move_preset(forward),
                _ => {}
            }
        }
        KeyCode::Enter => match app.focus {
            Focus::Amount | Focus::Tip | Focus::People => app.start_editing(),
            Focus::Currency => app.cycle_currency(true),
            Focus::Presets => app.apply_selected_preset(),
            Focus::Reset => app.reset(),
        },
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
            // Typing on a numeric row replaces its value.
            if app.focus.numeric_field().is_some() {
                app.start_editing_blank();
                app.input.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char(c))));
            }
        }
        _ => {}
    }
}

/// Keys `1`-`4` pick the quick-tip presets in order.
fn quick_tip<S: KeyValueStore>(app: &mut App<S>, key: char) {
    let idx = key as usize - '1' as usize;
    if let Some(preset) = App::<S>::presets().get(idx).copied() {
        app.apply_preset(preset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tipsplit::money::MoneyFormatter;
    use tipsplit::prelude::{MemoryStore, Splitter};

    fn app() -> App<MemoryStore> {
        let splitter = Splitter::open(MemoryStore::new()).unwrap();
        App::new(splitter, MoneyFormatter::new("en-US").unwrap())
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::from(code))
    }

    fn type_text(app: &mut App<MemoryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_amount_and_commit() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Amount);
        type_text(&mut app, "42.5");
        assert!(app.editing);
        press(&mut app, KeyCode::Enter);
        assert!(!app.editing);
        assert_eq!(app.state().amount, dec!(42.5));
    }

    #[test]
    fn test_escape_cancels_edit() {
        let mut app = app();
        type_text(&mut app, "99");
        assert!(!press(&mut app, KeyCode::Esc));
        assert_eq!(app.state().amount, dec!(0));
        assert!(app.running);
    }

    #[test]
    fn test_quick_tip_keys() {
        let mut app = app();
        app.focus = Focus::Presets;
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.state().tip_percent, dec!(15));
        assert_eq!(app.preset_index, 3);
    }

    #[test]
    fn test_tab_commits_and_moves() {
        let mut app = app();
        type_text(&mut app, "80");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().amount, dec!(80));
        assert_eq!(app.focus, Focus::Tip);
    }

    #[test]
    fn test_reset_key() {
        let mut app = app();
        type_text(&mut app, "10");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state().amount, dec!(0));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));

        let mut app2 = self::app();
        assert!(handle_key(
            &mut app2,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }
}
