//! seqview — interactive visualizer for a resizable sequence.
//!
//! Insert, delete, search and update string elements and watch the row of
//! boxes redraw. `seqview replay` runs the same controller headless over a
//! script.

mod cli;
mod replay;
mod tui;

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use seqview_config::Config;
use seqview_core::Timings;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// The terminal owns stdout, so the TUI logs to a file.
fn init_file_logging(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("seqview.log"));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Map configured milliseconds onto controller timings.
pub(crate) fn timings_from(config: &Config) -> Timings {
    let t = &config.timings;
    Timings {
        insert: t.insert(),
        delete_grace: t.delete_grace(),
        search_highlight: t.search_highlight(),
        update_highlight: t.update_highlight(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let log_path = init_file_logging(cli.log_file)?;
            tracing::info!(log = %log_path.display(), "starting terminal UI");
            tui::runner::run(&config)
        }
        Command::Replay { file, format } => {
            init_stderr_logging();
            let script = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read script {}", file.display()))?;
            let output = replay::replay(&script, &config, format)?;
            for rejection in &output.rejections {
                eprintln!("line {}: {}", rejection.line, rejection.message);
            }
            println!("{}", output.rendered);
            Ok(())
        }
    }
}
