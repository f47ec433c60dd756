//! SequenceController — validates raw input, mutates the sequence, renders.
//!
//! Each operation is all-or-nothing: every check runs before the sequence
//! is touched. A successful operation renders once with its marker and
//! schedules a clear render; [`SequenceController::run_due`] fires those.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{Operation, SequenceError, SequenceResult};
use crate::parse::{parse_index, require_value};
use crate::render::{Marker, RenderFrame, Renderer};
use crate::schedule::{Schedule, Timings};
use crate::sequence::{Element, ElementId, Sequence};

/// Result of a successful search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub index: usize,
    pub id: ElementId,
}

/// Owns the sequence, the renderer and the pending clear renders.
pub struct SequenceController<R> {
    sequence: Sequence,
    renderer: R,
    timings: Timings,
    schedule: Schedule,
    generation: u64,
}

impl<R: Renderer> SequenceController<R> {
    /// Create a controller over an empty sequence and render it once.
    pub fn new(renderer: R, timings: Timings) -> Self {
        let mut controller = Self {
            sequence: Sequence::new(),
            renderer,
            timings,
            schedule: Schedule::new(),
            generation: 0,
        };
        controller.render(None, None);
        controller
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Number of renders performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Insert `value` at `index` (0..=len).
    pub fn insert(&mut self, value: &str, index: &str) -> SequenceResult<ElementId> {
        let op = Operation::Insert;
        let checked = require_value(op, value)
            .and_then(|v| Ok((v, parse_index(op, index, Some(self.sequence.len()))?)));
        let (value, at) = self.reject_on_error(op, checked)?;

        let id = self
            .sequence
            .insert(at, value)
            .ok_or(SequenceError::IndexOutOfRange {
                op,
                index: at as i64,
                max: self.sequence.len(),
            })?;
        info!(id = %id, index = at, len = self.sequence.len(), "inserted element");
        self.render(Some(Marker::Inserted(id)), Some(id));
        self.schedule_clear(self.timings.insert);
        Ok(id)
    }

    /// Delete the element at `index` (0..len).
    pub fn delete(&mut self, index: &str) -> SequenceResult<Element> {
        let op = Operation::Delete;
        let max = self.sequence.len().checked_sub(1);
        let at = self.reject_on_error(op, parse_index(op, index, max))?;

        let removed = self
            .sequence
            .remove(at)
            .ok_or(SequenceError::IndexOutOfRange {
                op,
                index: at as i64,
                max: max.unwrap_or(0),
            })?;
        info!(id = %removed.id, index = at, len = self.sequence.len(), "deleted element");
        self.render(
            Some(Marker::Removing {
                element: removed.clone(),
                former_index: at,
            }),
            None,
        );
        self.schedule_clear(self.timings.delete_grace);
        Ok(removed)
    }

    /// Highlight the first element whose value equals `value`.
    pub fn search(&mut self, value: &str) -> SequenceResult<SearchHit> {
        let op = Operation::Search;
        let checked = require_value(op, value).and_then(|v| {
            if self.sequence.is_empty() {
                return Err(SequenceError::Empty);
            }
            self.sequence
                .find(&v)
                .map(|(index, element)| SearchHit {
                    index,
                    id: element.id,
                })
                .ok_or(SequenceError::NotFound { value: v })
        });
        let hit = self.reject_on_error(op, checked)?;

        info!(id = %hit.id, index = hit.index, "search hit");
        self.render(Some(Marker::Found(hit.id)), Some(hit.id));
        self.schedule_clear(self.timings.search_highlight);
        Ok(hit)
    }

    /// Replace the value at `index` (0..len), keeping its id.
    pub fn update(&mut self, value: &str, index: &str) -> SequenceResult<ElementId> {
        let op = Operation::Update;
        let max = self.sequence.len().checked_sub(1);
        let checked =
            require_value(op, value).and_then(|v| Ok((v, parse_index(op, index, max)?)));
        let (value, at) = self.reject_on_error(op, checked)?;

        let id = self
            .sequence
            .set(at, value)
            .ok_or(SequenceError::IndexOutOfRange {
                op,
                index: at as i64,
                max: max.unwrap_or(0),
            })?;
        info!(id = %id, index = at, "updated element");
        self.render(Some(Marker::Updated(id)), Some(id));
        self.schedule_clear(self.timings.update_highlight);
        Ok(id)
    }

    /// When the next pending clear comes due.
    pub fn next_due(&self) -> Option<Instant> {
        self.schedule.next_due()
    }

    /// Fire every clear due at or before `now`. Returns how many rendered.
    pub fn run_due(&mut self, now: Instant) -> usize {
        let mut rendered = 0;
        for clear in self.schedule.take_due(now) {
            if clear.generation != self.generation {
                debug!(
                    scheduled = clear.generation,
                    current = self.generation,
                    "stale clear expired"
                );
                continue;
            }
            self.render(None, None);
            rendered += 1;
        }
        rendered
    }

    fn reject_on_error<T>(&self, op: Operation, result: SequenceResult<T>) -> SequenceResult<T> {
        if let Err(e) = &result {
            warn!(op = op.name(), len = self.sequence.len(), "rejected: {e}");
        }
        result
    }

    fn schedule_clear(&mut self, delay: Duration) {
        self.schedule.push(Instant::now() + delay, self.generation);
    }

    fn render(&mut self, marker: Option<Marker>, scroll_to: Option<ElementId>) {
        self.generation += 1;
        debug!(generation = self.generation, marker = ?marker, "render");
        self.renderer.render(RenderFrame {
            sequence: &self.sequence,
            marker: marker.as_ref(),
            scroll_to,
            generation: self.generation,
        });
    }
}
