//! Name entry screen - shown while the name gate is closed.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::{BingoService, GameSession};

/// State for the name entry screen.
#[derive(Debug, Getters)]
pub struct NameEntryScreen {
    input: String,
    error_message: Option<String>,
}

impl NameEntryScreen {
    /// Creates the screen, pre-filled with the session's last name.
    #[instrument(skip(session))]
    pub fn new(session: &GameSession) -> Self {
        debug!("Initializing NameEntryScreen");
        Self {
            input: session.player_name().clone(),
            error_message: None,
        }
    }

    /// Submits the input to the service.
    #[instrument(skip(self, service))]
    fn submit(&mut self, service: &mut BingoService) -> ScreenTransition {
        match service.submit_name(&self.input) {
            Ok(()) => {
                info!(player = %service.session().player_name(), "Name accepted");
                self.error_message = None;
                ScreenTransition::GoToBoard
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                ScreenTransition::Stay
            }
        }
    }
}

impl Screen for NameEntryScreen {
    #[instrument(skip(self, frame, _service))]
    fn render(&self, frame: &mut Frame, _service: &BingoService) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let title = Paragraph::new("Welcome to Conference Bingo!")
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let intro = Paragraph::new(
            "Two games to make the most of the conference:\n\
             Sustainability Travel - green choices getting around town\n\
             Conference Learning - sessions, people and takeaways",
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(intro, chunks[1]);

        let input = Paragraph::new(self.input.as_str())
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Your name (Enter to start)"),
            );
        frame.render_widget(input, chunks[2]);

        let error_text = self.error_message.as_deref().unwrap_or("");
        let error = Paragraph::new(error_text)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(error, chunks[3]);

        let help = Paragraph::new("Type name | Enter: Start playing | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, service))]
    fn handle_key(&mut self, key: KeyEvent, service: &mut BingoService) -> ScreenTransition {
        match key.code {
            KeyCode::Enter => self.submit(service),
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Backspace => {
                self.input.pop();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.error_message = None;
                ScreenTransition::Stay
            }
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BingoConfig, MemoryStore, PersistenceAdapter};
    use crossterm::event::KeyModifiers;

    fn service() -> BingoService {
        let persistence = PersistenceAdapter::new(MemoryStore::new());
        BingoService::open(persistence, &BingoConfig::default()).unwrap()
    }

    fn press(screen: &mut NameEntryScreen, service: &mut BingoService, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), service)
    }

    #[test]
    fn test_blank_name_stays() {
        let mut service = service();
        let mut screen = NameEntryScreen::new(service.session());
        press(&mut screen, &mut service, KeyCode::Char(' '));
        let transition = press(&mut screen, &mut service, KeyCode::Enter);
        assert_eq!(transition, ScreenTransition::Stay);
        assert!(screen.error_message().is_some());
        assert!(!service.session().is_ready());
    }

    #[test]
    fn test_typed_name_opens_board() {
        let mut service = service();
        let mut screen = NameEntryScreen::new(service.session());
        for c in "Ada".chars() {
            press(&mut screen, &mut service, KeyCode::Char(c));
        }
        let transition = press(&mut screen, &mut service, KeyCode::Enter);
        assert_eq!(transition, ScreenTransition::GoToBoard);
        assert_eq!(service.session().player_name(), "Ada");
    }

    #[test]
    fn test_backspace_edits_input() {
        let mut service = service();
        let mut screen = NameEntryScreen::new(service.session());
        press(&mut screen, &mut service, KeyCode::Char('a'));
        press(&mut screen, &mut service, KeyCode::Char('b'));
        press(&mut screen, &mut service, KeyCode::Backspace);
        assert_eq!(screen.input(), "a");
    }
}
