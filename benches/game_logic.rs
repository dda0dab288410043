use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gravity_tetris::core::{Board, GameSnapshot, GameState, Tetromino, ZoneManager};
use gravity_tetris::term::{FrameBuffer, GameView, Viewport};
use gravity_tetris::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if !state.is_playing() {
                state.restart();
            }
            state.tick(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, PieceKind::I);
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 10..20 {
        for x in (0..BOARD_WIDTH as i8).step_by(2) {
            board.set(x, y, Some(PieceKind::Z));
        }
    }
    let piece = Tetromino::new(PieceKind::T);

    c.bench_function("is_valid_move", |b| {
        b.iter(|| black_box(board.is_valid_move(black_box(&piece), 0, 1, None)))
    });
    c.bench_function("drop_distance", |b| {
        b.iter(|| black_box(board.drop_distance(black_box(&piece))))
    });
}

fn bench_zones(c: &mut Criterion) {
    let mut zones = ZoneManager::new(BOARD_WIDTH, BOARD_HEIGHT, 9);
    // Warm up until both zones are live.
    for _ in 0..2000 {
        zones.update(16);
    }
    let piece = Tetromino::new(PieceKind::I);

    c.bench_function("zone_update_16ms", |b| b.iter(|| zones.update(black_box(16))));
    c.bench_function("gravity_modifier", |b| {
        b.iter(|| black_box(zones.gravity_modifier(black_box(&piece))))
    });
}

fn bench_actions(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate", |b| {
        b.iter(|| state.apply_action(GameAction::Rotate))
    });
    c.bench_function("shift_right", |b| {
        b.iter(|| {
            if !state.apply_action(GameAction::MoveRight) {
                while state.apply_action(GameAction::MoveLeft) {}
            }
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = GameSnapshot::default();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("snapshot_into", |b| b.iter(|| state.snapshot_into(&mut snap)));
    c.bench_function("render_into", |b| {
        b.iter(|| view.render_into(black_box(&snap), vp, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_zones,
    bench_actions,
    bench_snapshot_and_render
);
criterion_main!(benches);
