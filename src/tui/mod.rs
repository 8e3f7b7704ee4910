//! Terminal UI - name entry and the two bingo boards.

mod controller;
mod screen;
mod screens;

use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::BingoService;

use controller::TuiController;

/// Runs the terminal UI until the player quits.
///
/// Sets up raw mode and the alternate screen, and restores the terminal
/// even when the event loop fails.
#[instrument(skip(service))]
pub fn run_tui(service: &mut BingoService) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = TuiController::new(service);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "Terminal UI exited with error");
    }
    info!("Terminal UI closed");
    res
}
