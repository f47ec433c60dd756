//! seqview-core — the sequence model behind the visualizer.
//!
//! An ordered list of identified string elements, a controller that applies
//! insert/delete/search/update from raw user input, and a render pass that
//! turns the current state plus an optional transient marker into cells for
//! whatever display is plugged in.

pub mod controller;
pub mod error;
pub mod html;
pub mod parse;
pub mod render;
pub mod schedule;
pub mod sequence;

pub use controller::{SearchHit, SequenceController};
pub use error::{Operation, SequenceError, SequenceResult};
pub use html::HtmlRenderer;
pub use render::{Cell, CellRecorder, Marker, MarkerKind, RenderFrame, Renderer};
pub use schedule::Timings;
pub use sequence::{Element, ElementId, Sequence};
