//! Brochure CLI - binary entry point and terminal session management.
//!
//! The CLI bridges [`brochure_engine`] (application state) and
//! [`brochure_tui`] (rendering), providing RAII-based terminal management
//! with guaranteed cleanup.
//!
//! # Event Loop
//!
//! A fixed ~60 FPS render cadence:
//!
//! 1. Wait for input up to the frame budget, then drain the queue
//! 2. Advance application state (`app.tick`)
//! 3. Render the frame, capturing the layout map for next frame's input

mod assets;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use brochure_engine::{App, BrochureConfig, load_page, parse_page};
use brochure_tui::{LayoutMap, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("BROCHURE_LOG")
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let candidates = log_file_candidates();
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.brochure/logs/brochure.log
    if let Some(config_path) = BrochureConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("brochure.log"));
    }

    // Fallback: ./.brochure/logs/brochure.log (useful in constrained environments)
    candidates.push(PathBuf::from(".brochure").join("logs").join("brochure.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode, the alternate screen, and mouse capture (clicks drive
/// the page behaviors). On drop, all terminal state is restored, ensuring
/// the terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = BrochureConfig::load()?.unwrap_or_default();
    let page = match env::args().nth(1) {
        Some(path) => load_page(Path::new(&path))?,
        None => parse_page(assets::demo_page())?,
    };

    let mut app = App::start(page, &config);

    let run_result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app)
    };

    if let Err(err) = &run_result {
        eprintln!("Error: {err:?}");
    }
    run_result
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut layout = LayoutMap::default();
    let mut last_frame = Instant::now();

    loop {
        let budget = FRAME_DURATION.saturating_sub(last_frame.elapsed());
        if handle_events(app, &layout, budget)? {
            return Ok(());
        }

        let now = Instant::now();
        app.tick(now - last_frame);
        last_frame = now;

        if let Err(e) = terminal.draw(|frame| layout = draw(frame, app)) {
            return Err(e.into());
        }
    }
}
