//! HTML markup renderer.
//!
//! One `div.dav-item` per cell with a `data-id`, holding `.dav-value` and
//! `.dav-index`. Marker classes: `dav-anim-in`, `dav-anim-out`, and
//! `found` for both search hits and updated elements.

use std::fmt::Write;

use crate::render::{Cell, MarkerKind, RenderFrame, Renderer};

/// Escape `& < > " '` for literal display inside markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn marker_class(kind: MarkerKind) -> &'static str {
    match kind {
        MarkerKind::Inserted => "dav-anim-in",
        MarkerKind::Removing => "dav-anim-out",
        MarkerKind::Found | MarkerKind::Updated => "found",
    }
}

fn write_cell(out: &mut String, cell: &Cell) {
    let mut class = String::from("dav-item");
    if let Some(kind) = cell.marker {
        class.push(' ');
        class.push_str(marker_class(kind));
    }
    let index = cell.index.map(|i| i.to_string()).unwrap_or_default();
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        r#"<div class="{class}" data-id="{}"><div class="dav-value">{}</div><div class="dav-index">{index}</div></div>"#,
        cell.id,
        escape_html(&cell.value),
    );
}

/// Renders each frame into a `#dav-visualizer` container string.
#[derive(Debug, Default, Clone)]
pub struct HtmlRenderer {
    markup: String,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the most recent render.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, frame: RenderFrame<'_>) {
        let mut out = String::from(r#"<div id="dav-visualizer">"#);
        for cell in frame.cells() {
            write_cell(&mut out, &cell);
        }
        out.push_str("</div>");
        self.markup = out;
    }
}
