//! Board screen - tabs for both games, the 5x5 grid and its statistics.

use bingo_grid::{CELL_COUNT, GRID_SIZE};
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap},
};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};
use crate::{BingoService, GameKind, ToggleOutcome};

/// Accent colour for completed cells of a game.
#[instrument]
fn accent(game: GameKind) -> Color {
    match game {
        GameKind::Sustainability => Color::Green,
        GameKind::Learning => Color::Blue,
    }
}

/// State for the board screen.
#[derive(Debug, Getters)]
pub struct BoardScreen {
    cursor: usize,
    confirm_reset: bool,
    status_message: Option<String>,
}

impl Default for BoardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardScreen {
    /// Creates the screen with the cursor on the top-left cell.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing BoardScreen");
        Self {
            cursor: 0,
            confirm_reset: false,
            status_message: None,
        }
    }

    #[instrument(skip(self))]
    fn move_up(&mut self) {
        self.cursor = (self.cursor + CELL_COUNT - GRID_SIZE) % CELL_COUNT;
    }

    #[instrument(skip(self))]
    fn move_down(&mut self) {
        self.cursor = (self.cursor + GRID_SIZE) % CELL_COUNT;
    }

    #[instrument(skip(self))]
    fn move_left(&mut self) {
        let row = self.cursor / GRID_SIZE;
        let col = (self.cursor % GRID_SIZE + GRID_SIZE - 1) % GRID_SIZE;
        self.cursor = row * GRID_SIZE + col;
    }

    #[instrument(skip(self))]
    fn move_right(&mut self) {
        let row = self.cursor / GRID_SIZE;
        let col = (self.cursor % GRID_SIZE + 1) % GRID_SIZE;
        self.cursor = row * GRID_SIZE + col;
    }

    /// Toggles the cell under the cursor in the active game.
    #[instrument(skip(self, service))]
    fn toggle_cursor(&mut self, service: &mut BingoService) {
        let game = *service.session().active_game();
        let Some(cell) = service.grid(game).get(self.cursor) else {
            return;
        };
        let id = *cell.id();
        let text = cell.text().clone();
        let before = *service.stats(game).bingo_count();

        let outcome = service.toggle(game, id);
        let after = *service.stats(game).bingo_count();

        self.status_message = Some(match outcome {
            ToggleOutcome::Toggled { .. } if after > before => {
                info!(game = %game, bingo_count = after, "New bingo line");
                "BINGO! You completed a line!".to_string()
            }
            ToggleOutcome::Toggled { completed: true } => format!("Done: {}", text),
            ToggleOutcome::Toggled { completed: false } => format!("Undone: {}", text),
            ToggleOutcome::Locked => "The free space is always marked".to_string(),
            ToggleOutcome::UnknownCell => "Nothing to mark here".to_string(),
        });
    }

    #[instrument(skip(self, frame, service))]
    fn render_grid(&self, frame: &mut Frame, area: Rect, service: &BingoService) {
        let game = *service.session().active_game();
        let slot = service.slot(game);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, GRID_SIZE as u32); GRID_SIZE])
            .split(area);

        for (r, row_area) in rows.iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, GRID_SIZE as u32); GRID_SIZE])
                .split(*row_area);

            for (c, cell_area) in cols.iter().enumerate() {
                let index = r * GRID_SIZE + c;
                let Some(cell) = slot.grid().get(index) else {
                    continue;
                };

                let style = if slot.is_locked(*cell.id()) {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else if cell.is_completed() {
                    Style::default().fg(Color::Black).bg(accent(game))
                } else {
                    Style::default()
                };

                let border_style = if index == self.cursor {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                let mark = if cell.is_completed() { "[x]" } else { "[ ]" };
                let body = Paragraph::new(format!("{} {}", mark, cell.text()))
                    .style(style)
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(border_style),
                    );
                frame.render_widget(body, *cell_area);
            }
        }
    }
}

impl Screen for BoardScreen {
    #[instrument(skip(self, frame, service))]
    fn render(&self, frame: &mut Frame, service: &BingoService) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(15),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let session = service.session();
        let game = *session.active_game();

        let title = Paragraph::new(format!(
            "Conference Bingo - Player: {}",
            session.player_name()
        ))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let titles: Vec<String> = GameKind::ALL
            .iter()
            .map(|g| {
                let stats = service.stats(*g);
                format!("{} ({} bingo)", g.title(), stats.bingo_count())
            })
            .collect();
        let selected = GameKind::ALL.iter().position(|g| *g == game).unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .block(Block::default().borders(Borders::ALL).title("Games"))
            .highlight_style(
                Style::default()
                    .fg(accent(game))
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, chunks[1]);

        let stats = service.stats(game);
        let progress = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Completed {}/{}   BINGO lines: {}",
                stats.completed_count(),
                CELL_COUNT,
                stats.bingo_count()
            )))
            .gauge_style(Style::default().fg(accent(game)))
            .percent(stats.progress_percentage().round().clamp(0.0, 100.0) as u16);
        frame.render_widget(progress, chunks[2]);

        self.render_grid(frame, chunks[3], service);

        let (status_text, status_style) = if let Some(msg) = &self.status_message {
            (msg.clone(), Style::default().fg(Color::White))
        } else if let Some(banner) = stats.bingo_message() {
            (
                banner,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (String::new(), Style::default())
        };
        let status = Paragraph::new(status_text)
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, chunks[4]);

        let help_text = if self.confirm_reset {
            "Reset BOTH boards? y: Yes | any other key: Cancel"
        } else {
            "Arrows: Move | Space/Enter: Toggle | Tab: Switch game | r: Reset | n: Change player | q: Quit"
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[5]);
    }

    #[instrument(skip(self, key, service))]
    fn handle_key(&mut self, key: KeyEvent, service: &mut BingoService) -> ScreenTransition {
        if self.confirm_reset {
            self.confirm_reset = false;
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                service.reset_all();
                self.status_message = Some("Both boards reset".to_string());
            } else {
                self.status_message = Some("Reset cancelled".to_string());
            }
            return ScreenTransition::Stay;
        }

        match key.code {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_cursor(service),
            KeyCode::Tab | KeyCode::BackTab => {
                service.switch_game();
                self.status_message = None;
            }
            KeyCode::Char('1') => service.select_game(GameKind::Sustainability),
            KeyCode::Char('2') => service.select_game(GameKind::Learning),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.confirm_reset = true;
                self.status_message = Some("Reset both boards? (y/n)".to_string());
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                service.change_player();
                return ScreenTransition::GoToNameEntry;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return ScreenTransition::Quit;
            }
            _ => {}
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BingoConfig, MemoryStore, PersistenceAdapter};
    use bingo_grid::CellId;
    use crossterm::event::KeyModifiers;

    fn service() -> BingoService {
        let persistence = PersistenceAdapter::new(MemoryStore::new());
        let mut service = BingoService::open(persistence, &BingoConfig::default()).unwrap();
        service.submit_name("Grace").unwrap();
        service
    }

    fn press(screen: &mut BoardScreen, service: &mut BingoService, code: KeyCode) -> ScreenTransition {
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), service)
    }

    #[test]
    fn test_cursor_wraps() {
        let mut service = service();
        let mut screen = BoardScreen::new();
        press(&mut screen, &mut service, KeyCode::Up);
        assert_eq!(*screen.cursor(), 20);
        press(&mut screen, &mut service, KeyCode::Left);
        assert_eq!(*screen.cursor(), 24);
        press(&mut screen, &mut service, KeyCode::Right);
        assert_eq!(*screen.cursor(), 20);
        press(&mut screen, &mut service, KeyCode::Down);
        assert_eq!(*screen.cursor(), 0);
    }

    #[test]
    fn test_space_toggles_active_game() {
        let mut service = service();
        let mut screen = BoardScreen::new();
        press(&mut screen, &mut service, KeyCode::Char(' '));
        let grid = service.grid(GameKind::Sustainability);
        assert!(grid.cell(CellId::new(1)).unwrap().is_completed());
        let other = service.grid(GameKind::Learning);
        assert!(!other.cell(CellId::new(1)).unwrap().is_completed());
    }

    #[test]
    fn test_center_is_locked() {
        let mut service = service();
        let mut screen = BoardScreen::new();
        for _ in 0..2 {
            press(&mut screen, &mut service, KeyCode::Down);
            press(&mut screen, &mut service, KeyCode::Right);
        }
        assert_eq!(*screen.cursor(), 12);
        press(&mut screen, &mut service, KeyCode::Enter);
        let grid = service.grid(GameKind::Sustainability);
        assert!(grid.cell(CellId::new(13)).unwrap().is_completed());
        assert_eq!(
            screen.status_message().as_deref(),
            Some("The free space is always marked")
        );
    }

    #[test]
    fn test_tab_switches_game() {
        let mut service = service();
        let mut screen = BoardScreen::new();
        press(&mut screen, &mut service, KeyCode::Tab);
        assert_eq!(*service.session().active_game(), GameKind::Learning);
        press(&mut screen, &mut service, KeyCode::Char(' '));
        assert_eq!(*service.stats(GameKind::Learning).completed_count(), 2);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut service = service();
        let mut screen = BoardScreen::new();
        press(&mut screen, &mut service, KeyCode::Enter);
        press(&mut screen, &mut service, KeyCode::Char('r'));
        press(&mut screen, &mut service, KeyCode::Char('x'));
        assert_eq!(*service.stats(GameKind::Sustainability).completed_count(), 2);

        press(&mut screen, &mut service, KeyCode::Char('r'));
        press(&mut screen, &mut service, KeyCode::Char('y'));
        assert_eq!(*service.stats(GameKind::Sustainability).completed_count(), 1);
    }

    #[test]
    fn test_change_player_returns_to_name_entry() {
        let mut service = service();
        let mut screen = BoardScreen::new();
        let transition = press(&mut screen, &mut service, KeyCode::Char('n'));
        assert_eq!(transition, ScreenTransition::GoToNameEntry);
        assert!(!service.session().is_ready());
    }

    #[test]
    fn test_completing_row_reports_bingo() {
        let mut service = service();
        let mut screen = BoardScreen::new();
        for _ in 0..5 {
            press(&mut screen, &mut service, KeyCode::Enter);
            press(&mut screen, &mut service, KeyCode::Right);
        }
        assert_eq!(*service.stats(GameKind::Sustainability).bingo_count(), 1);
        assert_eq!(
            screen.status_message().as_deref(),
            Some("BINGO! You completed a line!")
        );
    }
}
