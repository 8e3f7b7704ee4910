//! Tests for the bingo service: locking, write-through and resets.

use bingo_grid::{CellId, Grid};

use conference_bingo::{
    BingoConfig, BingoService, GameKind, KeyValueStore, MemoryStore, PersistenceAdapter,
    ToggleOutcome,
};

fn open(store: &MemoryStore, config: &BingoConfig) -> BingoService {
    let adapter = PersistenceAdapter::new(store.clone());
    BingoService::open(adapter, config).expect("Open failed")
}

fn stored_grid(store: &MemoryStore, game: GameKind) -> Option<Grid> {
    store
        .get(game.storage_key())
        .expect("Get failed")
        .map(|json| serde_json::from_str(&json).expect("Stored grid should decode"))
}

#[test]
fn test_fresh_boards_mark_free_space() {
    let store = MemoryStore::new();
    let service = open(&store, &BingoConfig::default());
    for game in GameKind::ALL {
        let stats = service.stats(game);
        assert_eq!(*stats.completed_count(), 1);
        assert_eq!(*stats.progress_percentage(), 4.0);
        assert!(service.grid(game).cell(CellId::new(13)).unwrap().is_completed());
    }
    assert!(!service.session().is_ready());
}

fn mark_everything(service: &mut BingoService, game: GameKind) {
    for id in CellId::MIN..=CellId::MAX {
        service.toggle(game, CellId::new(id));
    }
}

#[test]
fn test_full_board_reaches_every_line() {
    let configs = [
        BingoConfig::default(),
        BingoConfig::default().with_locked_cells(vec![1, 25]),
        BingoConfig::default().with_locked_cells(Vec::new()),
    ];
    for config in configs {
        let store = MemoryStore::new();
        let mut service = open(&store, &config);
        mark_everything(&mut service, GameKind::Learning);
        let stats = service.stats(GameKind::Learning);
        assert_eq!(*stats.completed_count(), 25, "locked {:?}", config.locked_cells());
        assert_eq!(*stats.bingo_count(), 12, "locked {:?}", config.locked_cells());
    }
}

#[test]
fn test_no_locked_cells_starts_empty() {
    let store = MemoryStore::new();
    let config = BingoConfig::default().with_locked_cells(Vec::new());
    let mut service = open(&store, &config);
    assert_eq!(*service.stats(GameKind::Learning).completed_count(), 0);
    assert_eq!(
        service.toggle(GameKind::Learning, CellId::new(13)),
        ToggleOutcome::Toggled { completed: true }
    );
}

#[test]
fn test_locked_cell_cannot_toggle() {
    let store = MemoryStore::new();
    let mut service = open(&store, &BingoConfig::default());
    let outcome = service.toggle(GameKind::Sustainability, CellId::new(13));
    assert_eq!(outcome, ToggleOutcome::Locked);
    assert!(stored_grid(&store, GameKind::Sustainability).is_none());
}

#[test]
fn test_configured_lock_set() {
    let store = MemoryStore::new();
    let config = BingoConfig::default().with_locked_cells(vec![1, 25]);
    let mut service = open(&store, &config);
    let stats = service.stats(GameKind::Learning);
    assert_eq!(*stats.completed_count(), 2);
    assert_eq!(
        service.toggle(GameKind::Learning, CellId::new(1)),
        ToggleOutcome::Locked
    );
    assert_eq!(
        service.toggle(GameKind::Learning, CellId::new(13)),
        ToggleOutcome::Toggled { completed: true }
    );
}

#[test]
fn test_invalid_lock_set_rejected() {
    let store = MemoryStore::new();
    let config = BingoConfig::default().with_locked_cells(vec![99]);
    let adapter = PersistenceAdapter::new(store);
    assert!(BingoService::open(adapter, &config).is_err());
}

#[test]
fn test_unknown_cell_is_noop() {
    let store = MemoryStore::new();
    let mut service = open(&store, &BingoConfig::default());
    let before = service.grid(GameKind::Learning).clone();
    let outcome = service.toggle(GameKind::Learning, CellId::new(40));
    assert_eq!(outcome, ToggleOutcome::UnknownCell);
    assert_eq!(service.grid(GameKind::Learning), &before);
}

#[test]
fn test_toggle_writes_through() {
    let store = MemoryStore::new();
    let mut service = open(&store, &BingoConfig::default());
    service.toggle(GameKind::Learning, CellId::new(5));
    assert_eq!(
        stored_grid(&store, GameKind::Learning).as_ref(),
        Some(service.grid(GameKind::Learning))
    );
    assert!(stored_grid(&store, GameKind::Sustainability).is_none());
}

#[test]
fn test_games_are_independent() {
    let store = MemoryStore::new();
    let mut service = open(&store, &BingoConfig::default());
    for id in [1, 2, 3, 4, 5] {
        service.toggle(GameKind::Sustainability, CellId::new(id));
    }
    assert_eq!(*service.stats(GameKind::Sustainability).bingo_count(), 1);
    assert_eq!(*service.stats(GameKind::Learning).bingo_count(), 0);
}

#[test]
fn test_diagonals_through_free_space() {
    let store = MemoryStore::new();
    let mut service = open(&store, &BingoConfig::default());
    for id in [1, 7, 19, 25, 5, 9, 17, 21] {
        service.toggle(GameKind::Learning, CellId::new(id));
    }
    let stats = service.stats(GameKind::Learning);
    assert_eq!(*stats.bingo_count(), 2);
    assert_eq!(*stats.completed_count(), 9);
}

#[test]
fn test_reset_single_game() {
    let store = MemoryStore::new();
    let mut service = open(&store, &BingoConfig::default());
    service.toggle(GameKind::Sustainability, CellId::new(1));
    service.toggle(GameKind::Learning, CellId::new(1));

    service.reset(GameKind::Sustainability);
    assert_eq!(*service.stats(GameKind::Sustainability).completed_count(), 1);
    assert_eq!(*service.stats(GameKind::Learning).completed_count(), 2);
    assert_eq!(
        stored_grid(&store, GameKind::Sustainability).as_ref(),
        Some(service.grid(GameKind::Sustainability))
    );
}

#[test]
fn test_reset_all() {
    let store = MemoryStore::new();
    let mut service = open(&store, &BingoConfig::default());
    service.toggle(GameKind::Sustainability, CellId::new(1));
    service.toggle(GameKind::Learning, CellId::new(2));

    service.reset_all();
    for game in GameKind::ALL {
        assert_eq!(*service.stats(game).completed_count(), 1);
        assert_eq!(*service.stats(game).bingo_count(), 0);
    }
}

#[test]
fn test_unavailable_storage_keeps_session_usable() {
    let store = MemoryStore::new();
    store.set_unavailable(true);
    let mut service = open(&store, &BingoConfig::default());

    service.submit_name("Ada").expect("Name should be accepted in memory");
    let outcome = service.toggle(GameKind::Sustainability, CellId::new(3));
    assert_eq!(outcome, ToggleOutcome::Toggled { completed: true });
    assert_eq!(*service.stats(GameKind::Sustainability).completed_count(), 2);
    assert!(service.session().is_ready());

    store.set_unavailable(false);
    assert!(store.is_empty());
}

#[test]
fn test_full_storage_keeps_session_usable() {
    let store = MemoryStore::with_quota(16);
    let mut service = open(&store, &BingoConfig::default());
    let outcome = service.toggle(GameKind::Learning, CellId::new(8));
    assert_eq!(outcome, ToggleOutcome::Toggled { completed: true });
    assert!(!store.contains_key(GameKind::Learning.storage_key()));
}

#[test]
fn test_blank_name_not_saved() {
    let store = MemoryStore::new();
    let mut service = open(&store, &BingoConfig::default());
    assert!(service.submit_name("   ").is_err());
    assert!(store.is_empty());
}
