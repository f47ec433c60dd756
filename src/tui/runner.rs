//! Terminal lifecycle and the event loop.
//!
//! Single-threaded: draw, poll crossterm for input until the next clear is
//! due, dispatch the event, then fire due clears. Every operation runs to
//! completion inside its key or mouse handler.

use std::io::stdout;
use std::time::Instant;

use anyhow::Context;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;
use seqview_config::Config;
use tracing::info;

use super::app::TuiApp;
use super::{input, layout, mouse};

/// Runs the terminal teardown when dropped, so an early `?` or a panic
/// still leaves the terminal usable.
struct TerminalGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
}

pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut app = TuiApp::new(config.clone());

    let mut terminal = ratatui::init();
    let _guard = TerminalGuard::new(restore_terminal);
    execute!(stdout(), EnableMouseCapture).context("failed to enable mouse capture")?;

    let result = event_loop(&mut terminal, &mut app);
    info!(len = app.controller.sequence().len(), "terminal UI closed");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut TuiApp) -> anyhow::Result<()> {
    loop {
        terminal
            .draw(|f| layout::draw(f, app))
            .context("failed to draw frame")?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(m) => mouse::handle_mouse(app, m),
                // Resize only needs the redraw at the top of the loop.
                _ => {}
            }
        }
        app.tick(Instant::now());
    }
}
