//! TUI model: the controller, the two input fields, focus, notification.
//!
//! The key and mouse handlers only call [`TuiApp::submit`] and the focus
//! helpers; all sequence semantics stay in the controller.

use std::time::{Duration, Instant};

use seqview_config::Config;
use seqview_core::render::escape_control;
use seqview_core::{Operation, SequenceController, SequenceError};
use tracing::debug;

use super::input_line::InputLine;
use super::mouse::LayoutAreas;
use super::row::RowView;
use crate::timings_from;

/// Upper bound on how long the event loop blocks without a pending clear.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which input field receives typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Value,
    Index,
}

impl Field {
    pub fn other(self) -> Self {
        match self {
            Field::Value => Field::Index,
            Field::Index => Field::Value,
        }
    }
}

pub struct TuiApp {
    pub controller: SequenceController<RowView>,
    pub config: Config,
    pub value_line: InputLine,
    pub index_line: InputLine,
    pub focus: Field,
    /// Blocking error message; input is ignored until dismissed.
    pub notification: Option<String>,
    /// Last action summary shown in the status bar.
    pub status: String,
    pub should_quit: bool,
    /// Horizontal scroll of the sequence row, in columns.
    pub row_scroll: u16,
    pub layout_areas: LayoutAreas,
}

impl TuiApp {
    pub fn new(config: Config) -> Self {
        let controller = SequenceController::new(RowView::new(), timings_from(&config));
        Self {
            controller,
            config,
            value_line: InputLine::new(),
            index_line: InputLine::new(),
            focus: Field::Value,
            notification: None,
            status: "Ready".into(),
            should_quit: false,
            row_scroll: 0,
            layout_areas: LayoutAreas::default(),
        }
    }

    pub fn focused_line(&mut self) -> &mut InputLine {
        match self.focus {
            Field::Value => &mut self.value_line,
            Field::Index => &mut self.index_line,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Run one operation with the current field contents.
    ///
    /// Errors become the blocking notification. Once the input parsed (on
    /// success, or a range rejection) the fields the operation consumed are
    /// cleared and focus returns to the value field.
    /// A missing field or unparseable index leaves the fields as typed.
    pub fn submit(&mut self, op: Operation) {
        let value = self.value_line.content();
        let index = self.index_line.content();
        let result = match op {
            Operation::Insert => self
                .controller
                .insert(&value, &index)
                .map(|_| format!("Inserted at {}", index.trim())),
            Operation::Delete => self
                .controller
                .delete(&index)
                .map(|removed| {
                    format!("Deleted \"{}\" from {}", escape_control(&removed.value), index.trim())
                }),
            Operation::Search => self
                .controller
                .search(&value)
                .map(|hit| format!("Found at {}", hit.index)),
            Operation::Update => self
                .controller
                .update(&value, &index)
                .map(|_| format!("Updated {}", index.trim())),
        };

        match result {
            Ok(status) => {
                self.consume_fields(op);
                self.status = status;
            }
            Err(e) => {
                debug!(op = op.name(), "showing notification");
                if !matches!(
                    e,
                    SequenceError::MissingInput { .. } | SequenceError::InvalidIndex { .. }
                ) {
                    self.consume_fields(op);
                }
                self.status = format!("{} failed", op.name());
                self.notification = Some(e.to_string());
            }
        }
    }

    fn consume_fields(&mut self, op: Operation) {
        match op {
            Operation::Insert | Operation::Update => {
                self.value_line.clear();
                self.index_line.clear();
            }
            Operation::Delete => self.index_line.clear(),
            Operation::Search => return,
        }
        self.focus = Field::Value;
    }

    /// How long the event loop may block before the next clear is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.controller.next_due() {
            Some(due) => due.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// Fire due clear renders. Returns `true` if anything re-rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.controller.run_due(now) > 0
    }
}
