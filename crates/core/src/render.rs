//! Render pass: current sequence + optional transient marker → cells.
//!
//! The controller never talks to a display directly. It hands a
//! [`RenderFrame`] to a [`Renderer`], which decides what "display" means
//! (terminal widgets, HTML markup, a test recorder).

use crate::sequence::{Element, ElementId, Sequence};

/// Kind of transient annotation on a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Entrance animation after insert.
    Inserted,
    /// Exit animation of a just-deleted element.
    Removing,
    /// Search hit.
    Found,
    /// In-place value change.
    Updated,
}

/// Temporary annotation attached to one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Inserted(ElementId),
    Found(ElementId),
    Updated(ElementId),
    /// The element is already gone from the sequence; the frame keeps a
    /// ghost of it at its former position until the settle render.
    Removing { element: Element, former_index: usize },
}

impl Marker {
    pub fn kind(&self) -> MarkerKind {
        match self {
            Marker::Inserted(_) => MarkerKind::Inserted,
            Marker::Found(_) => MarkerKind::Found,
            Marker::Updated(_) => MarkerKind::Updated,
            Marker::Removing { .. } => MarkerKind::Removing,
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            Marker::Inserted(id) | Marker::Found(id) | Marker::Updated(id) => *id,
            Marker::Removing { element, .. } => element.id,
        }
    }
}

/// Everything a renderer needs for one pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub sequence: &'a Sequence,
    pub marker: Option<&'a Marker>,
    /// Element the display should bring into view.
    pub scroll_to: Option<ElementId>,
    /// Render generation this frame belongs to.
    pub generation: u64,
}

/// One visual node of the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: ElementId,
    pub value: String,
    /// Current position. `None` for the ghost of a removed element.
    pub index: Option<usize>,
    pub marker: Option<MarkerKind>,
}

impl RenderFrame<'_> {
    /// Build the cells for this frame, in display order.
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self
            .sequence
            .iter()
            .enumerate()
            .map(|(index, element)| Cell {
                id: element.id,
                value: element.value.clone(),
                index: Some(index),
                marker: self
                    .marker
                    .filter(|m| m.id() == element.id)
                    .map(Marker::kind),
            })
            .collect();

        if let Some(Marker::Removing {
            element,
            former_index,
        }) = self.marker
        {
            let at = (*former_index).min(cells.len());
            cells.insert(
                at,
                Cell {
                    id: element.id,
                    value: element.value.clone(),
                    index: None,
                    marker: Some(MarkerKind::Removing),
                },
            );
        }
        cells
    }
}

/// The single display capability the controller depends on.
pub trait Renderer {
    fn render(&mut self, frame: RenderFrame<'_>);
}

/// Escape a value for literal display on a terminal.
///
/// Control characters (ESC, CR, BEL, ...) are replaced by their `\u{..}`
/// form so a value can never move the cursor or change colors.
pub fn escape_control(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_control() {
            out.extend(ch.escape_default());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Renderer that keeps the last set of cells. Used by the replay text
/// output and by tests.
#[derive(Debug, Default, Clone)]
pub struct CellRecorder {
    pub cells: Vec<Cell>,
    pub renders: usize,
    pub last_generation: u64,
    /// Scroll request carried by the most recent render.
    pub last_scroll_to: Option<ElementId>,
}

impl Renderer for CellRecorder {
    fn render(&mut self, frame: RenderFrame<'_>) {
        self.cells = frame.cells();
        self.renders += 1;
        self.last_generation = frame.generation;
        self.last_scroll_to = frame.scroll_to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Sequence {
        let mut seq = Sequence::new();
        seq.insert(0, "a");
        seq.insert(1, "b");
        seq.insert(2, "c");
        seq
    }

    fn frame<'a>(seq: &'a Sequence, marker: Option<&'a Marker>) -> RenderFrame<'a> {
        RenderFrame {
            sequence: seq,
            marker,
            scroll_to: None,
            generation: 1,
        }
    }

    #[test]
    fn one_cell_per_element_in_order() {
        let seq = abc();
        let cells = frame(&seq, None).cells();
        let values: Vec<_> = cells.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
        let indices: Vec<_> = cells.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![Some(0), Some(1), Some(2)]);
        assert!(cells.iter().all(|c| c.marker.is_none()));
    }

    #[test]
    fn marker_applies_by_id() {
        let seq = abc();
        let id = seq.get(1).unwrap().id;
        let marker = Marker::Found(id);
        let cells = frame(&seq, Some(&marker)).cells();
        assert_eq!(cells[1].marker, Some(MarkerKind::Found));
        assert!(cells[0].marker.is_none());
        assert!(cells[2].marker.is_none());
    }

    #[test]
    fn marker_for_missing_id_marks_nothing() {
        let seq = abc();
        let mut other = Sequence::new();
        for _ in 0..10 {
            other.insert(0, "x");
        }
        let marker = Marker::Updated(other.get(0).unwrap().id);
        let cells = frame(&seq, Some(&marker)).cells();
        assert!(cells.iter().all(|c| c.marker.is_none()));
    }

    #[test]
    fn removing_marker_adds_ghost_at_former_position() {
        let mut seq = abc();
        let removed = seq.remove(1).unwrap();
        let marker = Marker::Removing {
            element: removed.clone(),
            former_index: 1,
        };
        let cells = frame(&seq, Some(&marker)).cells();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[1].id, removed.id);
        assert_eq!(cells[1].index, None);
        assert_eq!(cells[1].marker, Some(MarkerKind::Removing));
        assert_eq!(cells[2].index, Some(1));
    }

    #[test]
    fn removing_last_element_puts_ghost_at_end() {
        let mut seq = abc();
        let removed = seq.remove(2).unwrap();
        let marker = Marker::Removing {
            element: removed,
            former_index: 2,
        };
        let cells = frame(&seq, Some(&marker)).cells();
        assert_eq!(cells.last().unwrap().index, None);
    }

    #[test]
    fn escape_control_neutralizes_escape_sequences() {
        assert_eq!(escape_control("plain <b>"), "plain <b>");
        assert_eq!(escape_control("\x1b[31mred"), "\\u{1b}[31mred");
        assert_eq!(escape_control("a\nb"), "a\\nb");
    }

    #[test]
    fn recorder_counts_renders() {
        let seq = abc();
        let mut rec = CellRecorder::default();
        rec.render(frame(&seq, None));
        rec.render(frame(&seq, None));
        assert_eq!(rec.renders, 2);
        assert_eq!(rec.cells.len(), 3);
    }
}
