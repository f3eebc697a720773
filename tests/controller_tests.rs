//! Controller tests - full games driven through the public entry points

use std::time::Duration;

use uw_tetris::core::{
    GameConfig, GameController, MoveOutcome, Phase, ScriptedRng, SimpleRng, TickOutcome,
};
use uw_tetris::types::{Command, Mark, ShapeKind};

/// A 6x4 well fed only Squares: two side-by-side Squares clear two rows.
fn narrow_squares() -> GameController<ScriptedRng> {
    let config = GameConfig {
        rows: 6,
        cols: 4,
        ..GameConfig::default()
    };
    GameController::new(&config, ScriptedRng::shapes(&[ShapeKind::Square])).unwrap()
}

/// Drop a Square against the left wall, then one against the right wall.
fn clear_two_rows(game: &mut GameController<ScriptedRng>) -> (TickOutcome, TickOutcome) {
    assert_eq!(game.move_left_command().unwrap(), MoveOutcome::Applied);
    assert_eq!(game.drop_command().unwrap(), MoveOutcome::Locked);
    let first = game.tick().unwrap();

    assert_eq!(game.move_right_command().unwrap(), MoveOutcome::Applied);
    assert_eq!(game.drop_command().unwrap(), MoveOutcome::Locked);
    let second = game.tick().unwrap();
    (first, second)
}

#[test]
fn test_two_squares_clear_two_rows() {
    let mut game = narrow_squares();
    game.spawn_new_game(true).unwrap();

    let (first, second) = clear_two_rows(&mut game);

    let TickOutcome::Spawned(first) = first else {
        panic!("expected a spawn, got {first:?}");
    };
    assert!(first.cleared_rows.is_empty());
    // Two moves (left, drop): 100 / 2.
    assert_eq!(first.score_delta, 50);

    let TickOutcome::Spawned(second) = second else {
        panic!("expected a spawn, got {second:?}");
    };
    assert_eq!(second.cleared_rows.as_slice(), &[5, 4]);
    assert_eq!(second.score_delta, 2 * 200 + 50);
    assert_eq!(game.lines(), 2);
    assert_eq!(game.score(), 500);

    // Only the freshly spawned Square remains.
    assert_eq!(game.board().count(Mark::Locked), 0);
    assert_eq!(game.board().count(Mark::Active), 4);
}

#[test]
fn test_ten_lines_level_up_and_speed_up() {
    let mut game = narrow_squares();
    game.spawn_new_game(true).unwrap();
    assert_eq!(game.tick_interval(), Some(Duration::from_millis(1000)));

    for round in 0..5 {
        let (_, second) = clear_two_rows(&mut game);
        let TickOutcome::Spawned(report) = second else {
            panic!("round {round}: expected a spawn");
        };
        assert_eq!(report.level_up, round == 4, "round {round}");
    }

    assert_eq!(game.lines(), 10);
    assert_eq!(game.level(), 1);
    assert_eq!(game.delay_ms(), 490);
    assert_eq!(game.tick_interval(), Some(Duration::from_millis(490)));
    // Points are computed at the level in force before the level-up.
    assert_eq!(game.score(), 5 * (50 + 450));
}

#[test]
fn test_level_threshold_counts_from_start_level() {
    let config = GameConfig {
        rows: 6,
        cols: 4,
        start_level: 5,
        ..GameConfig::default()
    };
    let mut game =
        GameController::new(&config, ScriptedRng::shapes(&[ShapeKind::Square])).unwrap();
    game.spawn_new_game(true).unwrap();
    assert_eq!(game.delay_ms(), 1000 / 6);

    for _ in 0..4 {
        clear_two_rows(&mut game);
    }
    assert_eq!(game.level(), 5);
    clear_two_rows(&mut game);
    assert_eq!(game.level(), 6);
    assert_eq!(game.delay_ms(), 1000 / 7 - 10);
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut game = narrow_squares();
    game.spawn_new_game(true).unwrap();

    // Squares stack in the middle columns: rows 4-5, 2-3, then 0-1.
    for _ in 0..2 {
        game.drop_command().unwrap();
        assert!(matches!(game.tick().unwrap(), TickOutcome::Spawned(_)));
    }
    game.drop_command().unwrap();
    let outcome = game.tick().unwrap();
    assert!(matches!(outcome, TickOutcome::GameOver(_)), "{outcome:?}");

    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.snapshot().game_over());
    assert_eq!(game.score(), 300);
    assert_eq!(game.tick_interval(), None);
    assert_eq!(game.tick().unwrap(), TickOutcome::Ignored);
    assert_eq!(game.drop_command().unwrap(), MoveOutcome::Ignored);

    // A new game starts from a clean slate.
    game.spawn_new_game(true).unwrap();
    assert_eq!(game.phase(), Phase::Falling);
    assert_eq!((game.score(), game.lines()), (0, 0));
    assert_eq!(game.board().count(Mark::Locked), 0);
}

#[test]
fn test_gravity_locks_at_the_floor() {
    let mut game = narrow_squares();
    game.spawn_new_game(true).unwrap();

    // Rows 0-1 down to rows 4-5 is four falls; the fifth tick locks.
    for _ in 0..4 {
        assert_eq!(game.tick().unwrap(), TickOutcome::Fell { opponent: None });
    }
    assert_eq!(game.tick().unwrap(), TickOutcome::Locked);
    assert_eq!(game.moves(), 5);

    let TickOutcome::Spawned(report) = game.tick().unwrap() else {
        panic!("expected a spawn");
    };
    assert_eq!(report.score_delta, 100 / 5);
}

#[test]
fn test_soft_drop_locks_when_blocked() {
    let mut game = narrow_squares();
    game.spawn_new_game(true).unwrap();
    for _ in 0..4 {
        assert_eq!(game.soft_drop_command().unwrap(), MoveOutcome::Applied);
    }
    assert_eq!(game.soft_drop_command().unwrap(), MoveOutcome::Locked);
    assert_eq!(game.phase(), Phase::Locked);
}

#[test]
fn test_command_dispatch_matches_named_entry_points() {
    let mut a = GameController::new(&GameConfig::default(), SimpleRng::new(42)).unwrap();
    let mut b = a.clone();
    a.spawn_new_game(true).unwrap();
    b.spawn_new_game(true).unwrap();

    a.rotate_command().unwrap();
    a.move_right_command().unwrap();
    a.move_left_command().unwrap();
    a.soft_drop_command().unwrap();
    a.drop_command().unwrap();

    for command in [
        Command::Rotate,
        Command::MoveRight,
        Command::MoveLeft,
        Command::SoftDrop,
        Command::Drop,
    ] {
        b.command(command).unwrap();
    }
    assert_eq!(a.board(), b.board());
    assert_eq!(a.moves(), 5);
    assert_eq!(b.moves(), 5);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u32| {
        let mut game = GameController::new(&GameConfig::default(), SimpleRng::new(seed)).unwrap();
        game.spawn_new_game(false).unwrap();
        for _ in 0..400 {
            game.tick().unwrap();
        }
        (game.board().to_ascii(), game.score(), game.lines())
    };
    assert_eq!(play(7), play(7));
}

#[test]
fn test_watch_mode_runs_unattended() {
    let mut game = GameController::new(&GameConfig::default(), SimpleRng::new(2024)).unwrap();
    game.spawn_new_game(false).unwrap();
    assert!(!game.is_human());

    let mut spawned = 0;
    for _ in 0..2000 {
        match game.tick().unwrap() {
            TickOutcome::Fell { opponent } => {
                let (command, _) = opponent.expect("opponent moves every falling tick");
                assert!(Command::AI_CHOICES.contains(&command));
            }
            TickOutcome::Spawned(_) => spawned += 1,
            TickOutcome::GameOver(_) => break,
            TickOutcome::Locked | TickOutcome::Ignored => {}
        }
    }
    assert!(spawned > 0);
    assert_eq!(game.delay_ms(), 100);
}

#[test]
fn test_reconfigure_waits_for_new_game() {
    let mut game = GameController::new(&GameConfig::default(), SimpleRng::new(1)).unwrap();
    game.spawn_new_game(true).unwrap();
    game.drop_command().unwrap();

    let config = GameConfig::from_raw_options(Some("12"), Some("6"), Some("2"), Some("1"));
    game.reconfigure(&config).unwrap();
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.tick().unwrap(), TickOutcome::Ignored);
    assert_eq!(game.board().count(Mark::Empty), 72);

    game.spawn_new_game(true).unwrap();
    assert_eq!(game.level(), 2);
    assert_eq!(game.piece().unwrap().pivot().col, 2);
}

#[test]
fn test_invalid_dimensions_are_rejected() {
    let config = GameConfig {
        rows: 3,
        ..GameConfig::default()
    };
    assert!(GameController::new(&config, SimpleRng::new(1)).is_err());
}
