//! Controller driving the terminal UI state machine.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::tui::screens::{BoardScreen, NameEntryScreen};
use crate::{BingoService, NameGate};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    NameEntry(NameEntryScreen),
    Board(BoardScreen),
}

/// Controller that owns the event loop.
///
/// Call [`TuiController::run`] to start it.
#[derive(Debug)]
pub struct TuiController<'a> {
    service: &'a mut BingoService,
}

impl<'a> TuiController<'a> {
    /// Creates a controller over the given service.
    #[instrument(skip(service))]
    pub fn new(service: &'a mut BingoService) -> Self {
        info!("Creating TuiController");
        Self { service }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        let mut screen = self.screen_for_gate();

        loop {
            terminal.draw(|f| match &screen {
                ActiveScreen::NameEntry(s) => s.render(f, &*self.service),
                ActiveScreen::Board(s) => s.render(f, &*self.service),
            })?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::NameEntry(s) => s.handle_key(key, &mut *self.service),
                    ActiveScreen::Board(s) => s.handle_key(key, &mut *self.service),
                };

                screen = match self.apply_transition(transition, screen) {
                    Some(next) => next,
                    None => {
                        info!("Quitting");
                        return Ok(());
                    }
                };
            }
        }
    }

    /// Picks the screen matching the session's name gate.
    #[instrument(skip(self))]
    fn screen_for_gate(&self) -> ActiveScreen {
        match self.service.session().gate() {
            NameGate::AwaitingName => {
                ActiveScreen::NameEntry(NameEntryScreen::new(self.service.session()))
            }
            NameGate::Ready => ActiveScreen::Board(BoardScreen::new()),
        }
    }

    /// Applies a transition, returning the next screen or `None` to quit.
    #[instrument(skip(self, current))]
    fn apply_transition(
        &mut self,
        transition: ScreenTransition,
        current: ActiveScreen,
    ) -> Option<ActiveScreen> {
        debug!(transition = ?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => Some(current),
            ScreenTransition::GoToNameEntry | ScreenTransition::GoToBoard => {
                // The gate, not the request, decides which screen is legal.
                let next = self.screen_for_gate();
                info!(gate = ?self.service.session().gate(), "Screen changed");
                Some(next)
            }
            ScreenTransition::Quit => None,
        }
    }
}
