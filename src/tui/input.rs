//! Key binding dispatch for the TUI.
//!
//! Ctrl+C quits. While a notification is shown only Enter/Esc (dismiss)
//! are accepted. Enter inserts. F1–F4 and Alt+I/D/S/U run insert, delete,
//! search, update. Tab / Shift+Tab switch fields. Esc clears the focused
//! field. Everything else goes to the focused field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use seqview_core::Operation;

use super::app::TuiApp;

/// Operation bound to a key, if any (Enter handled separately).
fn operation_for(key: &KeyEvent) -> Option<Operation> {
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::F(1) => Some(Operation::Insert),
        KeyCode::F(2) => Some(Operation::Delete),
        KeyCode::F(3) => Some(Operation::Search),
        KeyCode::F(4) => Some(Operation::Update),
        KeyCode::Char(c) if alt => match c.to_ascii_lowercase() {
            'i' => Some(Operation::Insert),
            'd' => Some(Operation::Delete),
            's' => Some(Operation::Search),
            'u' => Some(Operation::Update),
            _ => None,
        },
        _ => None,
    }
}

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Blocking notification: nothing else gets through.
    if app.notification.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notification();
        }
        return;
    }

    if let Some(op) = operation_for(&key) {
        app.submit(op);
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit(Operation::Insert),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.cycle_focus(),
        KeyCode::Esc => app.focused_line().clear(),
        _ => {
            app.focused_line().handle_key(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Field;
    use seqview_config::Config;

    fn press(app: &mut TuiApp, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut TuiApp, s: &str) {
        for ch in s.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn app() -> TuiApp {
        TuiApp::new(Config::default())
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn typing_then_enter_inserts() {
        let mut app = app();
        type_str(&mut app, "hello");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "0");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.sequence().values(), vec!["hello"]);
        assert_eq!(app.focus, Field::Value);
    }

    #[test]
    fn function_keys_dispatch() {
        let mut app = app();
        app.value_line.set_content("a");
        app.index_line.set_content("0");
        press(&mut app, KeyCode::F(1));
        app.value_line.set_content("b");
        app.index_line.set_content("0");
        press(&mut app, KeyCode::F(4));
        assert_eq!(app.controller.sequence().values(), vec!["b"]);
        app.index_line.set_content("0");
        press(&mut app, KeyCode::F(2));
        assert!(app.controller.sequence().is_empty());
    }

    #[test]
    fn alt_letters_dispatch_instead_of_typing() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT));
        assert_eq!(app.notification.as_deref(), Some("Provide value to search."));
        assert_eq!(app.value_line.content(), "");
    }

    #[test]
    fn notification_blocks_input_until_dismissed() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.notification.as_deref(), Some("Provide index to delete."));
        type_str(&mut app, "zzz");
        assert_eq!(app.value_line.content(), "");
        press(&mut app, KeyCode::Esc);
        assert!(app.notification.is_none());
        type_str(&mut app, "z");
        assert_eq!(app.value_line.content(), "z");
    }

    #[test]
    fn esc_clears_focused_field() {
        let mut app = app();
        type_str(&mut app, "abc");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.value_line.content(), "");
    }
}
