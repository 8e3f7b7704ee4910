//! Screen trait and transition type for the terminal UI state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::BingoService;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`TuiController`](super::controller::TuiController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Show the name entry screen.
    GoToNameEntry,
    /// Show the boards.
    GoToBoard,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen of the terminal UI.
///
/// Screens own their view state (cursor, input buffer); game state lives
/// in the [`BingoService`] passed to every call.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, service: &BingoService);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, service: &mut BingoService) -> ScreenTransition;
}
