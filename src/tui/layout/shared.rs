//! Status bar and the blocking notification popup.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use super::super::app::TuiApp;
use super::super::box_drawing::{display_width, truncate_to_width};

/// Render the error notification as a centered red popup over `area`.
pub(super) fn draw_notification(f: &mut Frame, app: &TuiApp, area: Rect) {
    let Some(message) = app.notification.as_deref() else {
        return;
    };

    let max_w = area.width.saturating_sub(4);
    let wanted = (display_width(message) + 4).max(28) as u16;
    let popup_w = wanted.min(max_w);
    let popup_h = 5u16;
    if area.height < popup_h || popup_w < 12 {
        return; // terminal too small
    }
    let x = area.x + (area.width - popup_w) / 2;
    let y = area.y + (area.height - popup_h) / 2;
    let popup = Rect::new(x, y, popup_w, popup_h);

    let bg = Style::default().bg(Color::Red).fg(Color::White);
    let text_w = popup_w.saturating_sub(2) as usize;
    let text = vec![
        Line::styled("", bg),
        Line::styled(format!(" {}", truncate_to_width(message, text_w)), bg.add_modifier(Modifier::BOLD)),
        Line::styled("", bg),
        Line::from(vec![
            Span::styled(" [Enter] ", bg.fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled("OK", bg),
        ]),
        Line::styled("", bg),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(text).style(bg), popup);
}

pub(super) fn draw_status(f: &mut Frame, app: &TuiApp, area: Rect) {
    let len = app.controller.sequence().len();
    let noun = if len == 1 { "element" } else { "elements" };
    let status_color = if app.notification.is_some() {
        Color::Red
    } else {
        Color::Green
    };

    let spans = vec![
        Span::styled(format!(" [{len} {noun}]"), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(app.status.clone(), Style::default().fg(status_color)),
        Span::raw("  "),
        Span::styled(
            "Enter:Insert  Alt+I/D/S/U  Tab:Field  Esc:Clear  ^C:Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
