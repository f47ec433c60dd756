//! Terminal UI — ratatui presentation of the sequence controller.
//!
//! ## Architecture (TEA)
//!
//! Model (`TuiApp`) + Update (key/mouse handlers calling the controller) +
//! View (`layout::draw`). The controller renders into `RowView`, a plain
//! list of cells; the view draws those cells each frame and never touches
//! the sequence itself.

pub mod app;
pub mod box_drawing;
pub mod input;
pub mod input_line;
pub mod layout;
pub mod mouse;
pub mod row;
pub mod runner;
