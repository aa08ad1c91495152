use blockfall_engine::{
    Cell, EventError, Game, GameEvent, LockOutcome, MoveOutcome, Phase, Piece, PieceKind,
    PieceSeed,
};

const SEED: PieceSeed = PieceSeed::from_bytes([
    0x5e, 0xed, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
]);

fn started_game() -> Game {
    let mut game = Game::with_seed(SEED);
    game.handle_event(GameEvent::Start).unwrap();
    game
}

#[test]
fn test_o_piece_falls_to_the_floor_and_locks() {
    let mut game = started_game();
    game.set_falling_piece(Piece::new(PieceKind::O).moved(1, 0)).unwrap();

    for step in 1..=18 {
        assert_eq!(game.soft_drop(), Ok(MoveOutcome::Moved), "step {step}");
    }
    assert_eq!(game.falling_piece().unwrap().position(), (4, 18));

    assert_eq!(
        game.soft_drop(),
        Ok(MoveOutcome::Locked(LockOutcome {
            cleared_lines: 0,
            game_over: false,
        }))
    );
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(game.grid().cell(x, y).and_then(Cell::color_id), Some(2));
    }
    assert_eq!(game.grid().filled_cell_count(), 4);
    assert_eq!(game.score(), 0);
    assert_eq!(game.falling_piece().unwrap().position(), (3, 0));
}

#[test]
fn test_double_clear_scores_four_hundred() {
    let mut game = started_game();
    for y in [18, 19] {
        for x in (0..10).filter(|x| !(4..=5).contains(x)) {
            game.grid_mut().set(x, y, Cell::Filled(PieceKind::J));
        }
    }
    game.set_falling_piece(Piece::new(PieceKind::O).moved(1, 0)).unwrap();

    let outcome = loop {
        match game.tick().unwrap() {
            MoveOutcome::Moved => {}
            MoveOutcome::Locked(lock) => break lock,
        }
    };
    assert_eq!(outcome.cleared_lines, 2);
    assert_eq!(game.score(), 400);
    assert!(game.grid().is_empty());
}

#[test]
fn test_sideways_moves_stop_at_walls() {
    let mut game = started_game();
    game.set_falling_piece(Piece::new(PieceKind::O).moved(0, 5)).unwrap();

    let mut moves = 0;
    while game.handle_event(GameEvent::MoveLeft).is_ok() {
        moves += 1;
    }
    assert_eq!(moves, 3);
    assert_eq!(
        game.handle_event(GameEvent::MoveLeft),
        Err(EventError::PieceCollision(blockfall_engine::PieceCollisionError))
    );

    let mut moves = 0;
    while game.handle_event(GameEvent::MoveRight).is_ok() {
        moves += 1;
    }
    assert_eq!(moves, 8);
    assert_eq!(game.falling_piece().unwrap().position(), (8, 5));
    assert!(game.grid().is_empty());
}

#[test]
fn test_filling_the_spawn_area_ends_the_game() {
    let mut game = started_game();
    let mut drops = 0;
    // Without sideways input every piece stacks in the middle until a spawn collides.
    while game.phase().is_playing() {
        game.handle_event(GameEvent::Tick).unwrap();
        drops += 1;
        assert!(drops < 10_000, "game never ended");
    }

    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.falling_piece().is_none());
    assert_eq!(game.score(), 0);
    for event in [GameEvent::Tick, GameEvent::SoftDrop, GameEvent::MoveLeft] {
        assert_eq!(
            game.handle_event(event),
            Err(EventError::UnexpectedEvent {
                event,
                phase: Phase::GameOver,
            })
        );
    }

    game.handle_event(GameEvent::Restart).unwrap();
    assert_eq!(game.phase(), Phase::Playing);
    assert!(game.grid().is_empty());
    assert_eq!(game.stats().completed_pieces(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameEvent::Start,
        GameEvent::MoveLeft,
        GameEvent::RotateCw,
        GameEvent::Tick,
        GameEvent::MoveRight,
        GameEvent::MoveRight,
        GameEvent::SoftDrop,
    ];
    let mut a = Game::with_seed(SEED);
    let mut b = Game::with_seed(SEED);
    for _ in 0..30 {
        for event in script {
            let _ = a.handle_event(event);
            let _ = b.handle_event(event);
        }
        assert_eq!(a.phase(), b.phase());
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.falling_piece(), b.falling_piece());
        assert_eq!(a.stats(), b.stats());
    }
}

#[test]
fn test_tick_and_soft_drop_are_equivalent() {
    let mut by_tick = started_game();
    let mut by_drop = started_game();
    for _ in 0..200 {
        let a = by_tick.handle_event(GameEvent::Tick);
        let b = by_drop.handle_event(GameEvent::SoftDrop);
        assert_eq!(a.is_ok(), b.is_ok());
        assert_eq!(by_tick.grid(), by_drop.grid());
        assert_eq!(by_tick.falling_piece(), by_drop.falling_piece());
    }
}
