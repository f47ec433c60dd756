//! Headless replay: feed a script through the controller, print the result.
//!
//! Script format, one operation per line:
//!
//! ```text
//! # comment
//! insert <value> <index>
//! delete <index>
//! search <value>
//! update <value> <index>
//! ```
//!
//! For `insert`/`update` the last token is the index and everything before
//! it is the value, so values may contain spaces. Rejected operations are
//! collected, not fatal: the controller's messages are the user feedback.

use std::time::{Duration, Instant};

use anyhow::bail;
use tracing::info;

use seqview_config::Config;
use seqview_core::{CellRecorder, HtmlRenderer, Renderer, SequenceController, SequenceError};

use crate::cli::OutputFormat;
use crate::timings_from;
use crate::tui::row;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Insert { value: String, index: String },
    Delete { index: String },
    Search { value: String },
    Update { value: String, index: String },
}

/// An operation the controller refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub line: usize,
    pub message: String,
}

#[derive(Debug)]
pub struct ReplayOutput {
    pub rendered: String,
    pub rejections: Vec<Rejection>,
}

/// Split `rest` into (value, index): last token is the index.
fn split_value_index(rest: &str) -> (String, String) {
    match rest.trim().rsplit_once(char::is_whitespace) {
        Some((value, index)) => (value.trim().to_string(), index.to_string()),
        None => (rest.trim().to_string(), String::new()),
    }
}

/// Parse a script into numbered steps (1-based line numbers).
pub fn parse_script(script: &str) -> anyhow::Result<Vec<(usize, Step)>> {
    let mut steps = Vec::new();
    for (i, raw) in script.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let step = match verb.to_ascii_lowercase().as_str() {
            "insert" => {
                let (value, index) = split_value_index(rest);
                Step::Insert { value, index }
            }
            "delete" => Step::Delete {
                index: rest.trim().to_string(),
            },
            "search" => Step::Search {
                value: rest.trim().to_string(),
            },
            "update" => {
                let (value, index) = split_value_index(rest);
                Step::Update { value, index }
            }
            other => bail!("line {line_no}: unknown operation '{other}'"),
        };
        steps.push((line_no, step));
    }
    Ok(steps)
}

fn apply<R: Renderer>(controller: &mut SequenceController<R>, step: &Step) -> Result<(), SequenceError> {
    match step {
        Step::Insert { value, index } => controller.insert(value, index).map(drop),
        Step::Delete { index } => controller.delete(index).map(drop),
        Step::Search { value } => controller.search(value).map(drop),
        Step::Update { value, index } => controller.update(value, index).map(drop),
    }
}

/// Run every step, then let all pending clears expire so the final
/// render carries no transient marker.
pub fn run_steps<R: Renderer>(
    renderer: R,
    config: &Config,
    steps: &[(usize, Step)],
) -> (SequenceController<R>, Vec<Rejection>) {
    let mut controller = SequenceController::new(renderer, timings_from(config));
    let mut rejections = Vec::new();
    for (line, step) in steps {
        if let Err(e) = apply(&mut controller, step) {
            rejections.push(Rejection {
                line: *line,
                message: e.to_string(),
            });
        }
    }
    let settle = Instant::now() + Duration::from_secs(24 * 60 * 60);
    controller.run_due(settle);
    info!(
        steps = steps.len(),
        rejected = rejections.len(),
        len = controller.sequence().len(),
        "replay finished"
    );
    (controller, rejections)
}

pub fn replay(script: &str, config: &Config, format: OutputFormat) -> anyhow::Result<ReplayOutput> {
    let steps = parse_script(script)?;
    let (rendered, rejections) = match format {
        OutputFormat::Html => {
            let (controller, rejections) = run_steps(HtmlRenderer::new(), config, &steps);
            (controller.renderer().markup().to_string(), rejections)
        }
        OutputFormat::Text => {
            let (controller, rejections) = run_steps(CellRecorder::default(), config, &steps);
            let boxes = row::layout_cells(&controller.renderer().cells, &config.view);
            (row::text_lines(&boxes).join("\n"), rejections)
        }
    };
    Ok(ReplayOutput {
        rendered,
        rejections,
    })
}
