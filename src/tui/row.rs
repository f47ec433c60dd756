//! The sequence row: cells → fixed-width boxes.
//!
//! ```text
//! ┌─────┐ ┌─────┐ ┌─────┐
//! │ C   │ │ Z   │ │ 42  │
//! └─────┘ └─────┘ └─────┘
//!    0       1       2
//! ```
//!
//! `RowView` is the terminal's [`Renderer`]: it keeps the cells of the last
//! render pass and the element the row should scroll to. Box geometry is
//! computed here so the plain-text replay output and the styled terminal
//! view agree column for column.

use seqview_config::ViewConfig;
use seqview_core::render::escape_control;
use seqview_core::{Cell, ElementId, MarkerKind, RenderFrame, Renderer};

use super::box_drawing::{build_border, center, display_width, pad_cell, strip_vs16, truncate_to_width};

/// Columns between two boxes.
pub const GAP: usize = 1;

/// Terminal renderer state.
#[derive(Debug, Default)]
pub struct RowView {
    pub cells: Vec<Cell>,
    pub generation: u64,
    scroll_target: Option<ElementId>,
}

impl RowView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element to bring into view, consumed by the next draw.
    pub fn take_scroll_target(&mut self) -> Option<ElementId> {
        self.scroll_target.take()
    }
}

impl Renderer for RowView {
    fn render(&mut self, frame: RenderFrame<'_>) {
        self.cells = frame.cells();
        self.generation = frame.generation;
        if let Some(id) = frame.scroll_to {
            self.scroll_target = Some(id);
        }
    }
}

/// One laid-out box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBox {
    pub id: ElementId,
    /// Escaped, truncated value text.
    pub text: String,
    /// Index label; empty for a removed element's ghost.
    pub label: String,
    pub marker: Option<MarkerKind>,
    /// Content width in columns (borders and padding excluded).
    pub width: usize,
}

impl CellBox {
    /// Full box width including borders and padding.
    pub fn outer_width(&self) -> usize {
        self.width + 4
    }

    pub fn top(&self) -> String {
        build_border(self.width, '┌', '┐')
    }

    pub fn middle(&self) -> String {
        format!("│{}│", pad_cell(&self.text, self.width))
    }

    pub fn bottom(&self) -> String {
        build_border(self.width, '└', '┘')
    }

    pub fn index_line(&self) -> String {
        center(&self.label, self.outer_width())
    }
}

pub fn layout_cells(cells: &[Cell], view: &ViewConfig) -> Vec<CellBox> {
    let min = view.min_cell_width as usize;
    let max = view.max_cell_width as usize;
    cells
        .iter()
        .map(|cell| {
            let text = truncate_to_width(&strip_vs16(&escape_control(&cell.value)), max);
            let label = cell.index.map(|i| i.to_string()).unwrap_or_default();
            let width = display_width(&text).max(display_width(&label)).clamp(min, max.max(min));
            CellBox {
                id: cell.id,
                text,
                label,
                marker: cell.marker,
                width,
            }
        })
        .collect()
}

/// Column span `[start, end)` of each box within the row.
pub fn spans(boxes: &[CellBox]) -> Vec<(usize, usize)> {
    let mut x = 0;
    boxes
        .iter()
        .map(|b| {
            let start = x;
            x += b.outer_width() + GAP;
            (start, start + b.outer_width())
        })
        .collect()
}

/// Total row width in columns.
pub fn row_width(boxes: &[CellBox]) -> usize {
    spans(boxes).last().map(|&(_, end)| end).unwrap_or(0)
}

/// Horizontal offset that centers `[start, end)` in a viewport of
/// `viewport` columns, clamped to the row.
pub fn center_offset(start: usize, end: usize, viewport: usize, total: usize) -> usize {
    let mid = (start + end) / 2;
    let max_offset = total.saturating_sub(viewport);
    mid.saturating_sub(viewport / 2).min(max_offset)
}

/// Plain four-line rendering: top border, value, bottom border, index.
pub fn text_lines(boxes: &[CellBox]) -> Vec<String> {
    if boxes.is_empty() {
        return vec!["(empty)".to_string()];
    }
    let gap = " ".repeat(GAP);
    let join = |f: fn(&CellBox) -> String| boxes.iter().map(f).collect::<Vec<_>>().join(&gap);
    vec![
        join(CellBox::top),
        join(CellBox::middle),
        join(CellBox::bottom),
        join(CellBox::index_line),
    ]
}
