//! Single-line text field with a cursor, used for the Value and Index
//! inputs.
//!
//! Content is kept as a `Vec<char>` so the cursor is a plain index. Pasted
//! text (Ctrl+V via `arboard`) is flattened onto one line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

use super::box_drawing::display_width;

#[derive(Debug, Default)]
pub struct InputLine {
    chars: Vec<char>,
    /// Cursor position as a character offset (0 = before first char).
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Replace content and move the cursor to the end.
    pub fn set_content(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    /// Insert a character at the cursor. Control characters other than
    /// tab are dropped; the field is single-line.
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() && ch != '\t' {
            return;
        }
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor, turning line breaks into spaces.
    pub fn insert_str(&mut self, s: &str) {
        let flat = s.replace("\r\n", " ").replace(['\r', '\n'], " ");
        for ch in flat.chars() {
            self.insert_char(ch);
        }
    }

    /// Backspace.
    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    /// Delete key.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Set the cursor to an absolute position, clamped to the content.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.chars.len());
    }

    /// Text before the cursor, for placing the terminal cursor.
    pub fn before_cursor(&self) -> String {
        self.chars[..self.cursor].iter().collect()
    }

    /// Horizontal scroll, in columns, that keeps the cursor inside a view
    /// `width` columns wide.
    pub fn view_scroll(&self, width: u16) -> u16 {
        let cursor_x = display_width(&self.before_cursor()).min(u16::MAX as usize) as u16;
        cursor_x.saturating_sub(width.saturating_sub(1))
    }

    /// Character offset for a display column. A column inside a wide
    /// character maps to that character; past the end maps to the end.
    pub fn offset_at_column(&self, column: usize) -> usize {
        let mut x = 0;
        for (i, ch) in self.chars.iter().enumerate() {
            x += ch.width().unwrap_or(0);
            if column < x {
                return i;
            }
        }
        self.chars.len()
    }

    fn paste_clipboard(&mut self) {
        if let Ok(mut clip) = arboard::Clipboard::new() {
            if let Ok(text) = clip.get_text() {
                self.insert_str(&text);
            }
        }
    }

    /// Handle an editing key. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('v') if ctrl => self.paste_clipboard(),
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char(_) if ctrl => return false,
            KeyCode::Char(ch) => self.insert_char(ch),
            KeyCode::Backspace => self.delete_back(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }
}
