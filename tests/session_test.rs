//! Tests for the name gate and game selection.

use conference_bingo::{EmptyName, GameKind, GameSession, NameGate};

#[test]
fn test_starts_awaiting_without_name() {
    let session = GameSession::new(None);
    assert_eq!(*session.gate(), NameGate::AwaitingName);
    assert!(!session.is_ready());
}

#[test]
fn test_starts_awaiting_with_blank_name() {
    let session = GameSession::new(Some("   ".to_string()));
    assert_eq!(*session.gate(), NameGate::AwaitingName);
}

#[test]
fn test_starts_ready_with_restored_name() {
    let session = GameSession::new(Some("Ada".to_string()));
    assert_eq!(*session.gate(), NameGate::Ready);
    assert_eq!(session.player_name(), "Ada");
}

#[test]
fn test_blank_submission_rejected() {
    let mut session = GameSession::new(None);
    assert_eq!(session.submit_name(""), Err(EmptyName));
    assert_eq!(session.submit_name(" \t "), Err(EmptyName));
    assert_eq!(*session.gate(), NameGate::AwaitingName);
}

#[test]
fn test_submission_trims_and_opens_gate() {
    let mut session = GameSession::new(None);
    assert_eq!(session.submit_name("  Ada Lovelace  "), Ok("Ada Lovelace"));
    assert_eq!(*session.gate(), NameGate::Ready);
}

#[test]
fn test_change_player_closes_gate() {
    let mut session = GameSession::new(Some("Ada".to_string()));
    session.change_player();
    assert_eq!(*session.gate(), NameGate::AwaitingName);
    assert_eq!(session.player_name(), "Ada");

    session.submit_name("Grace").unwrap();
    assert!(session.is_ready());
    assert_eq!(session.player_name(), "Grace");
}

#[test]
fn test_game_selection() {
    let mut session = GameSession::new(None);
    assert_eq!(*session.active_game(), GameKind::Sustainability);
    session.switch_game();
    assert_eq!(*session.active_game(), GameKind::Learning);
    session.switch_game();
    assert_eq!(*session.active_game(), GameKind::Sustainability);
    session.select_game(GameKind::Learning);
    assert_eq!(*session.active_game(), GameKind::Learning);
}
