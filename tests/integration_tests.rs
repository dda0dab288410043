//! Integration tests for the game loop

use std::sync::mpsc;
use std::time::{Duration, Instant};

use gravity_tetris::core::{FrameClock, GameState, LifecycleEvent};
use gravity_tetris::types::{GameAction, Phase, PieceKind, BOARD_HEIGHT};

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.active().is_none());

    state.start();
    assert!(state.is_playing());
    assert!(state.active().is_some());
    assert!(state.next_piece().is_some());
    assert!(state.hold_piece().is_none());
}

#[test]
fn test_repeated_hard_drops_end_the_game() {
    let (tx, rx) = mpsc::channel::<LifecycleEvent>();
    let mut state = GameState::with_hooks(2024, tx);
    state.start();

    let mut drops = 0;
    while state.is_playing() && drops < 200 {
        assert!(state.apply_action(GameAction::HardDrop));
        drops += 1;
    }

    assert!(state.is_game_over(), "stack should top out");
    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(
        events,
        vec![LifecycleEvent::GameOver {
            final_score: state.score()
        }]
    );

    // Commands are ignored once the game is over.
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.tick(10_000));
}

#[test]
fn test_game_over_when_stack_reaches_spawn() {
    let (tx, rx) = mpsc::channel::<LifecycleEvent>();
    let mut state = GameState::with_hooks(7, tx);
    state.start();

    // A block under the spawn columns; pieces pile onto it without clearing.
    for x in 3..=6 {
        for y in 4..=5 {
            state.board_mut().set(x, y, Some(PieceKind::Z));
        }
    }
    while state.is_playing() {
        state.apply_action(GameAction::SoftDrop);
    }

    assert_eq!(state.phase(), Phase::GameOver);
    assert!(matches!(
        rx.try_recv(),
        Ok(LifecycleEvent::GameOver { .. })
    ));
}

#[test]
fn test_pause_resume_events_and_frozen_state() {
    let (tx, rx) = mpsc::channel::<LifecycleEvent>();
    let mut state = GameState::with_hooks(1, tx);
    state.start();
    let before = state.snapshot();

    assert!(state.apply_action(GameAction::Pause));
    assert!(state.is_paused());
    for action in [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Hold,
    ] {
        assert!(!state.apply_action(action));
    }
    state.tick(30_000);
    assert_eq!(
        state.active().map(|p| (p.x, p.y)),
        before.active.map(|a| (a.x, a.y))
    );
    assert_eq!(state.zones().timer_ms(), 0);

    assert!(state.apply_action(GameAction::Pause));
    assert!(state.is_playing());
    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events, vec![LifecycleEvent::Paused, LifecycleEvent::Resumed]);
}

#[test]
fn test_frame_clock_drives_ticks() {
    let mut state = GameState::new(3);
    state.start();
    let start_y = state.active().map(|p| p.y).unwrap_or(0);

    let t0 = Instant::now();
    let mut clock = FrameClock::new(t0);
    // 1.1 seconds of 16ms frames at level 1: exactly one gravity step.
    for i in 1..=69u32 {
        state.tick(clock.advance(t0 + Duration::from_millis(16 * i as u64)));
    }
    assert_eq!(state.active().map(|p| p.y), Some(start_y + 1));
}

#[test]
fn test_soft_drop_locks_on_floor() {
    let mut state = GameState::new(42);
    state.start();
    let first = state.active().map(|p| p.kind);

    let mut steps = 0;
    while state.active().map(|p| p.kind) == first && steps < BOARD_HEIGHT as usize * 2 {
        state.soft_drop();
        steps += 1;
        if state.board().cells().iter().any(|c| c.is_some()) {
            break;
        }
    }

    assert!(state.board().cells().iter().any(|c| c.is_some()));
    assert_eq!(state.score(), 0, "soft drop awards no points");
    assert!(state.can_hold());
}

#[test]
fn test_restart_after_game_over() {
    let mut state = GameState::new(99);
    state.start();
    while state.is_playing() {
        state.hard_drop();
    }
    assert!(state.score() > 0);

    state.apply_action(GameAction::Restart);
    assert!(state.is_playing());
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert!(state.board().cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_same_seed_replays_identically() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::SoftDrop,
        GameAction::HardDrop,
    ];

    let run = || {
        let mut state = GameState::new(555);
        state.start();
        for _ in 0..5 {
            for action in script {
                state.apply_action(action);
                state.tick(16);
            }
        }
        state.snapshot()
    };

    assert_eq!(run(), run());
}
