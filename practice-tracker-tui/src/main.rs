// practice-tracker-tui/src/main.rs
use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use practice_tracker_lib::{get_config_dir_util, PracticeService};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod app; // Application state
mod ui; // UI rendering logic

use crate::app::App;

const LOG_FILE_NAME: &str = "practice-tracker.log";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:?}"); // Print errors to stderr
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_dir = get_config_dir_util().context("Failed to determine configuration directory")?;
    // The terminal belongs to the UI, so logs go to a file. Keep the guard
    // alive until the end of `run` so buffered lines get flushed.
    let _log_guard = init_logging(&config_dir);

    // Startup failures are fatal: no catalog, no session
    let service = PracticeService::open(&config_dir, Utc::now()).inspect_err(|e| {
        tracing::error!("Startup failed: {e:#}");
    })?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Session ended");
    res
}

fn init_logging(config_dir: &Path) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(config_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    guard
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render_ui(f, app))?;

        // Block until the next event; there is nothing to do between keys.
        if let Event::Key(key) = event::read()? {
            // Only process key press events
            if key.kind == KeyEventKind::Press {
                app.handle_key_event(key)?;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
