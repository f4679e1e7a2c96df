//! Terminal frontend for gridmark.
//!
//! Two players share one keyboard-and-mouse terminal: click an empty cell
//! to place the current player's mark. Rounds reset automatically after
//! the end-of-round message has been on screen for the configured delay.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod hit;
mod ui;

use anyhow::{Context, Result};
use app::TuiView;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridmark_core::{MonotonicClock, Session};
use hit::BoardLayout;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Poll interval for input events; also bounds how late a reset can fire.
const TICK: Duration = Duration::from_millis(100);

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Click-driven two-player tic-tac-toe", long_about = None)]
#[command(version)]
struct Cli {
    /// Milliseconds the end-of-round message stays up before the board resets
    #[arg(long, default_value_t = 2500)]
    reset_delay_ms: u64,

    /// Log file path (logging to the terminal would corrupt the UI)
    #[arg(long, default_value = "gridmark.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("starting gridmark");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, Duration::from_millis(cli.reset_delay_ms));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "game loop error");
        eprintln!("Error: {err:?}");
    }
    res
}

/// Event loop: draw, forward clicks to the engine, poll the reset timer.
fn run<B: Backend>(terminal: &mut Terminal<B>, reset_delay: Duration) -> Result<()> {
    let mut session =
        Session::with_reset_delay(TuiView::new(), MonotonicClock::new(), reset_delay);
    let mut layout = BoardLayout::default();

    loop {
        terminal.draw(|f| {
            layout = ui::render(f, &session);
        })?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        info!("user quit");
                        return Ok(());
                    }
                    _ => {}
                },
                Event::Mouse(mouse)
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    if let Some(cell) = layout.cell_at(mouse.column, mouse.row) {
                        let outcome = session.handle_click(cell);
                        debug!(%cell, ?outcome, "click handled");
                    }
                }
                _ => {}
            }
        }

        if session.poll() {
            info!("board reset, next round started");
        }
    }
}
