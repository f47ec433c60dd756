//! Mouse handling: field focus, button clicks, row scrolling.
//!
//! Hit-testing uses the regions cached by the last draw.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use seqview_core::Operation;

use super::app::{Field, TuiApp};

/// Columns scrolled per wheel notch.
const SCROLL_STEP: u16 = 4;

/// Cached layout regions for mouse hit-testing. Updated each frame.
#[derive(Default, Clone, Debug)]
pub struct LayoutAreas {
    pub row: Rect,
    /// Inner (inside border) area of each input field.
    pub value_field: Rect,
    pub index_field: Rect,
    /// Button label spans: (x_start, x_end, row, operation).
    pub buttons: Vec<(u16, u16, u16, Operation)>,
    /// Widest horizontal scroll the row allows.
    pub row_max_scroll: u16,
}

pub fn rect_contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}

pub fn handle_mouse(app: &mut TuiApp, event: MouseEvent) {
    // Blocking notification swallows clicks too.
    if app.notification.is_some() {
        return;
    }
    let (col, row) = (event.column, event.row);
    match event.kind {
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            if rect_contains(app.layout_areas.row, col, row) {
                app.row_scroll = app.row_scroll.saturating_sub(SCROLL_STEP);
            }
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            if rect_contains(app.layout_areas.row, col, row) {
                app.row_scroll = app
                    .row_scroll
                    .saturating_add(SCROLL_STEP)
                    .min(app.layout_areas.row_max_scroll);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, col, row),
        _ => {}
    }
}

fn handle_click(app: &mut TuiApp, col: u16, row: u16) {
    let areas = &app.layout_areas;
    let button = areas
        .buttons
        .iter()
        .find(|&&(start, end, y, _)| y == row && col >= start && col < end)
        .map(|&(_, _, _, op)| op);
    if let Some(op) = button {
        app.submit(op);
        return;
    }

    for (field, area) in [(Field::Value, areas.value_field), (Field::Index, areas.index_field)] {
        if rect_contains(area, col, row) {
            app.focus = field;
            let line = app.focused_line();
            let column = col.saturating_sub(area.x).saturating_add(line.view_scroll(area.width));
            let offset = line.offset_at_column(column as usize);
            line.set_cursor(offset);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use seqview_config::Config;

    fn click(app: &mut TuiApp, col: u16, row: u16) {
        handle_mouse(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: col,
                row,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    fn wheel(app: &mut TuiApp, kind: MouseEventKind) {
        handle_mouse(
            app,
            MouseEvent {
                kind,
                column: 2,
                row: 2,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    fn app() -> TuiApp {
        let mut app = TuiApp::new(Config::default());
        app.layout_areas = LayoutAreas {
            row: Rect::new(0, 0, 40, 6),
            value_field: Rect::new(1, 7, 20, 1),
            index_field: Rect::new(23, 7, 10, 1),
            buttons: vec![(1, 11, 9, Operation::Insert), (12, 22, 9, Operation::Delete)],
            row_max_scroll: 10,
        };
        app
    }

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(2, 2, 3, 1);
        assert!(rect_contains(r, 2, 2));
        assert!(rect_contains(r, 4, 2));
        assert!(!rect_contains(r, 5, 2));
        assert!(!rect_contains(r, 2, 3));
    }

    #[test]
    fn click_field_focuses_and_places_cursor() {
        let mut app = app();
        app.index_line.set_content("123");
        click(&mut app, 24, 7);
        assert_eq!(app.focus, Field::Index);
        assert_eq!(app.index_line.cursor(), 1);
    }

    #[test]
    fn click_maps_wide_characters() {
        let mut app = app();
        app.index_line.set_content("漢字1");
        click(&mut app, 25, 7);
        assert_eq!(app.index_line.cursor(), 1);
    }

    #[test]
    fn click_accounts_for_field_scroll() {
        let mut app = app();
        app.value_line.set_content(&"a".repeat(30));
        // Cursor at the end scrolls the 20-column field by 11.
        click(&mut app, 1, 7);
        assert_eq!(app.focus, Field::Value);
        assert_eq!(app.value_line.cursor(), 11);
    }

    #[test]
    fn click_button_submits() {
        let mut app = app();
        app.value_line.set_content("x");
        app.index_line.set_content("0");
        click(&mut app, 3, 9);
        assert_eq!(app.controller.sequence().values(), vec!["x"]);
    }

    #[test]
    fn clicks_ignored_under_notification() {
        let mut app = app();
        app.notification = Some("Array is empty".into());
        app.value_line.set_content("x");
        app.index_line.set_content("0");
        click(&mut app, 3, 9);
        assert!(app.controller.sequence().is_empty());
    }

    #[test]
    fn wheel_scrolls_row_within_bounds() {
        let mut app = app();
        wheel(&mut app, MouseEventKind::ScrollDown);
        assert_eq!(app.row_scroll, 4);
        wheel(&mut app, MouseEventKind::ScrollDown);
        wheel(&mut app, MouseEventKind::ScrollDown);
        assert_eq!(app.row_scroll, 10);
        wheel(&mut app, MouseEventKind::ScrollUp);
        assert_eq!(app.row_scroll, 6);
    }
}
