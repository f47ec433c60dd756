//! Screen layout.
//!
//! ```text
//! ┌─ Sequence ──────────────────────────────────────┐
//! │  ┌─────┐ ┌─────┐ ┌─────┐                        │
//! │  │ C   │ │ Z   │ │ 42  │                        │
//! │  └─────┘ └─────┘ └─────┘                        │
//! │     0       1       2                           │
//! └─────────────────────────────────────────────────┘
//! ┌─ Value ───────────────────────┐┌─ Index ────────┐
//! │ hello                         ││ 1              │
//! └───────────────────────────────┘└────────────────┘
//!  [F1 Insert] [F2 Delete] [F3 Search] [F4 Update]
//!  [3 elements]  Inserted at 1   Enter:Insert  Tab:Field  ^C:Quit
//! ```

mod shared;

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use seqview_core::{MarkerKind, Operation};

use super::app::{Field, TuiApp};
use super::box_drawing::display_width;
use super::input_line::InputLine;
use super::row::{self, CellBox, GAP};

/// Button bar labels in display order.
const BUTTONS: [(&str, Operation); 4] = [
    ("F1 Insert", Operation::Insert),
    ("F2 Delete", Operation::Delete),
    ("F3 Search", Operation::Search),
    ("F4 Update", Operation::Update),
];

/// Border/text style for a box, by marker.
pub(super) fn marker_style(marker: Option<MarkerKind>) -> Style {
    match marker {
        None => Style::default().fg(Color::White),
        Some(MarkerKind::Inserted) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Some(MarkerKind::Found) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Some(MarkerKind::Updated) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Some(MarkerKind::Removing) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
    }
}

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &mut TuiApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // sequence row
            Constraint::Length(3), // value + index fields
            Constraint::Length(1), // buttons
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    draw_row(f, app, outer[0]);
    draw_fields(f, app, outer[1]);
    draw_buttons(f, app, outer[2]);
    shared::draw_status(f, app, outer[3]);

    if app.notification.is_some() {
        shared::draw_notification(f, app, outer[0]);
    }
}

/// Styled four-line version of [`row::text_lines`].
fn row_lines(boxes: &[CellBox]) -> Vec<Line<'static>> {
    let mut lines: [Vec<Span<'static>>; 4] = Default::default();
    for (i, b) in boxes.iter().enumerate() {
        if i > 0 {
            for line in lines.iter_mut() {
                line.push(Span::raw(" ".repeat(GAP)));
            }
        }
        let style = marker_style(b.marker);
        let label_style = if b.marker.is_some() {
            style
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines[0].push(Span::styled(b.top(), style));
        lines[1].push(Span::styled(b.middle(), style));
        lines[2].push(Span::styled(b.bottom(), style));
        lines[3].push(Span::styled(b.index_line(), label_style));
    }
    lines.into_iter().map(Line::from).collect()
}

fn draw_row(f: &mut Frame, app: &mut TuiApp, area: Rect) {
    let count = app.controller.sequence().len();
    let block = Block::default()
        .title(format!(" Sequence ({count}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);
    app.layout_areas.row = area;

    let boxes = row::layout_cells(&app.controller.renderer().cells, &app.config.view);
    if boxes.is_empty() {
        app.row_scroll = 0;
        app.layout_areas.row_max_scroll = 0;
        f.render_widget(
            Paragraph::new(Span::styled(
                "Empty. Type a value and an index, then press Enter.",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    }

    let viewport = inner.width as usize;
    let total = row::row_width(&boxes);
    let max_scroll = total.saturating_sub(viewport).min(u16::MAX as usize) as u16;

    if let Some(id) = app.controller.renderer_mut().take_scroll_target() {
        if let Some(i) = boxes.iter().position(|b| b.id == id) {
            let (start, end) = row::spans(&boxes)[i];
            let offset = row::center_offset(start, end, viewport, total);
            app.row_scroll = offset.min(u16::MAX as usize) as u16;
        }
    }
    app.row_scroll = app.row_scroll.min(max_scroll);
    app.layout_areas.row_max_scroll = max_scroll;

    // Vertically center the four box lines.
    let top = inner.y + inner.height.saturating_sub(4) / 2;
    let row_area = Rect::new(inner.x, top, inner.width, inner.height.min(4));
    f.render_widget(
        Paragraph::new(row_lines(&boxes)).scroll((0, app.row_scroll)),
        row_area,
    );
}

fn draw_field(f: &mut Frame, title: &str, line: &InputLine, focused: bool, area: Rect) -> Rect {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Keep the cursor visible on long input.
    let scroll = line.view_scroll(inner.width);
    f.render_widget(Paragraph::new(line.content()).scroll((0, scroll)), inner);
    inner
}

fn draw_fields(f: &mut Frame, app: &mut TuiApp, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let value_inner = draw_field(f, "Value", &app.value_line, app.focus == Field::Value, cols[0]);
    let index_inner = draw_field(f, "Index", &app.index_line, app.focus == Field::Index, cols[1]);
    app.layout_areas.value_field = value_inner;
    app.layout_areas.index_field = index_inner;

    if app.notification.is_none() {
        let (inner, line) = match app.focus {
            Field::Value => (value_inner, &app.value_line),
            Field::Index => (index_inner, &app.index_line),
        };
        let cursor_x = (display_width(&line.before_cursor()) as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(inner.x + cursor_x, inner.y));
    }
}

fn draw_buttons(f: &mut Frame, app: &mut TuiApp, area: Rect) {
    let mut regions = Vec::new();
    let mut spans = Vec::new();
    let mut x = area.x;
    for (label, op) in BUTTONS {
        let text = format!("[{label}]");
        let width = text.len() as u16;
        let start = x + 1; // leading space
        regions.push((start, start + width, area.y, op));
        x = start + width;
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            text,
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
    }
    app.layout_areas.buttons = regions;
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
