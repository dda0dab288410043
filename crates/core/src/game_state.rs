//! Game state module - the controller
//!
//! Ties the board, the active piece and the zone manager together. It owns
//! scoring and leveling, the spawn/hold logic and the drop/lock state machine.
//! Every command short-circuits unless the game is in [`Phase::Playing`]
//! (pause toggling also works while paused).

use std::fmt;

use tracing::{debug, info};

use crate::events::{LifecycleHooks, NoHooks};
use crate::pieces::Tetromino;
use crate::rng::{GameRng, PIECE_STREAM};
use crate::scoring::{
    calculate_drop_score, calculate_line_score, get_drop_interval_ms, level_for_lines,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::{Board, ZoneManager};

/// Horizontal offsets tried, in order, when placing a rotated shape.
const ROTATION_KICKS: [i8; 3] = [0, 1, -1];

/// Complete game state
pub struct GameState {
    board: Board,
    zones: ZoneManager,
    active: Option<Tetromino>,
    next: Option<Tetromino>,
    hold: Option<Tetromino>,
    rng: GameRng,
    score: u32,
    lines: u32,
    level: u32,
    drop_counter_ms: u32,
    drop_interval_ms: u32,
    can_hold: bool,
    phase: Phase,
    hooks: Box<dyn LifecycleHooks>,
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("phase", &self.phase)
            .field("active", &self.active)
            .field("next", &self.next)
            .field("hold", &self.hold)
            .field("zones", &self.zones.zones())
            .field("score", &self.score)
            .field("lines", &self.lines)
            .field("level", &self.level)
            .field("drop_counter_ms", &self.drop_counter_ms)
            .field("can_hold", &self.can_hold)
            .finish_non_exhaustive()
    }
}

impl GameState {
    /// Create an idle game with the given RNG seed and no lifecycle hooks.
    pub fn new(seed: u64) -> Self {
        Self::with_hooks(seed, NoHooks)
    }

    /// Create an idle game that reports lifecycle transitions to `hooks`.
    pub fn with_hooks(seed: u64, hooks: impl LifecycleHooks + 'static) -> Self {
        let mut state = Self {
            board: Board::new(),
            zones: ZoneManager::new(BOARD_WIDTH, BOARD_HEIGHT, seed),
            active: None,
            next: None,
            hold: None,
            rng: GameRng::new(seed, PIECE_STREAM),
            score: 0,
            lines: 0,
            level: 1,
            drop_counter_ms: 0,
            drop_interval_ms: BASE_DROP_MS,
            can_hold: true,
            phase: Phase::Idle,
            hooks: Box::new(hooks),
        };
        state.next = Some(state.random_piece());
        state
    }

    /// Start a session from `Idle` or `GameOver`. No-op while a session runs.
    pub fn start(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::GameOver) {
            self.begin_session();
        }
    }

    /// Throw away the current session and start a fresh one.
    pub fn restart(&mut self) {
        self.begin_session();
    }

    /// End the session without a game over; back to `Idle`.
    pub fn quit(&mut self) {
        if self.phase != Phase::Idle {
            info!(score = self.score, "session quit");
        }
        self.phase = Phase::Idle;
        self.active = None;
    }

    fn begin_session(&mut self) {
        self.reset();
        self.phase = Phase::Playing;
        info!(seed = self.rng.seed(), "session started");
        self.spawn_piece();
    }

    /// Clear board, zones, counters and pieces. The phase is left alone.
    pub fn reset(&mut self) {
        self.board.reset();
        self.zones.reset();
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.drop_interval_ms = BASE_DROP_MS;
        self.drop_counter_ms = 0;
        self.active = None;
        self.hold = None;
        self.can_hold = true;
        self.next = Some(self.random_piece());
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Level-based gravity interval.
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_piece(&self) -> Option<Tetromino> {
        self.next
    }

    pub fn hold_piece(&self) -> Option<Tetromino> {
        self.hold
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    /// Mutable board access for scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Mutable zone access for scripted setups.
    pub fn zones_mut(&mut self) -> &mut ZoneManager {
        &mut self.zones
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.copy_from_slice(src);
        }
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next.map(|p| p.kind);
        out.hold = self.hold.map(|p| p.kind);
        out.zones.clear();
        out.zones.extend(self.zones.zones().iter().cloned());
        out.gravity = self.gravity();
        out.can_hold = self.can_hold;
        out.phase = self.phase;
        out.seed = self.rng.seed();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn random_piece(&mut self) -> Tetromino {
        Tetromino::new(self.rng.piece_kind())
    }

    /// Promote the queued piece, queue a new one and check the spawn.
    ///
    /// A spawn that does not fit ends the game; nothing is locked.
    fn spawn_piece(&mut self) -> bool {
        let piece = match self.next.take() {
            Some(piece) => piece,
            None => self.random_piece(),
        };
        self.active = Some(piece);
        self.next = Some(self.random_piece());
        self.can_hold = true;

        if !self.board.is_valid_move(&piece, 0, 0, None) {
            self.game_over();
            return false;
        }
        true
    }

    fn game_over(&mut self) {
        self.phase = Phase::GameOver;
        info!(
            score = self.score,
            lines = self.lines,
            level = self.level,
            "game over"
        );
        self.hooks.on_game_over(self.score);
    }

    /// Gravity acting on the active piece; `Normal` without one.
    pub fn gravity(&self) -> ZoneKind {
        self.active
            .map(|piece| self.zones.gravity_modifier(&piece))
            .unwrap_or(ZoneKind::Normal)
    }

    /// Interval for automatic drops under `gravity`; `None` means never.
    pub fn effective_drop_interval(&self, gravity: ZoneKind) -> Option<u32> {
        match gravity {
            ZoneKind::Heavy => Some(HEAVY_DROP_MS),
            ZoneKind::Zero => None,
            ZoneKind::Reverse | ZoneKind::Normal => Some(self.drop_interval_ms),
        }
    }

    /// Advance the game by `elapsed_ms`. Only runs while playing.
    ///
    /// Returns true when gravity acted on the active piece (moved or locked).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }

        self.zones.update(elapsed_ms);
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);

        let gravity = self.gravity();
        let Some(interval) = self.effective_drop_interval(gravity) else {
            return false;
        };

        if self.drop_counter_ms > interval {
            let dy = if gravity == ZoneKind::Reverse { -1 } else { 1 };
            self.gravity_step(dy);
            return true;
        }

        false
    }

    /// Move the active piece one row; a blocked step locks it.
    fn gravity_step(&mut self, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let Some(y) = active.y.checked_add(dy) else {
            return false;
        };

        if self.board.is_valid_move(&active, 0, dy, None) {
            self.active = Some(Tetromino { y, ..active });
            self.drop_counter_ms = 0;
            true
        } else {
            self.lock_piece();
            false
        }
    }

    /// Write the active piece into the board, clear lines, score, respawn.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock_piece(&active);
        let cleared = self.board.clear_lines();
        debug!(kind = active.kind.as_str(), x = active.x, y = active.y, cleared, "piece locked");

        if cleared > 0 {
            self.score = self
                .score
                .saturating_add(calculate_line_score(cleared, self.level));
            self.lines += cleared;
            self.level = level_for_lines(self.lines);
            self.drop_interval_ms = get_drop_interval_ms(self.level);
        }

        self.spawn_piece();
    }

    fn playing_piece(&self) -> Option<Tetromino> {
        if self.phase == Phase::Playing {
            self.active
        } else {
            None
        }
    }

    /// Shift the active piece by `dir` columns if it fits.
    pub fn shift(&mut self, dir: i8) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };
        if !self.board.is_valid_move(&active, dir, 0, None) {
            return false;
        }
        self.active = Some(Tetromino {
            x: active.x + dir,
            ..active
        });
        true
    }

    /// Rotate clockwise, trying offsets 0, +1, -1. Leaves the piece alone if none fit.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };

        let candidate = active.rotate();
        for dx in ROTATION_KICKS {
            if self.board.is_valid_move(&active, dx, 0, Some(&candidate)) {
                self.active = Some(Tetromino {
                    shape: candidate,
                    x: active.x + dx,
                    ..active
                });
                return true;
            }
        }
        false
    }

    /// One manual step down; locks when blocked. Ignores zones.
    pub fn soft_drop(&mut self) -> bool {
        if self.playing_piece().is_none() {
            return false;
        }
        self.gravity_step(1);
        true
    }

    /// Drop to the landing row, 2 points per row, and lock.
    ///
    /// Refused while any zone modifies the active piece's gravity.
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.playing_piece() else {
            return false;
        };
        if !self.gravity().is_normal() {
            return false;
        }

        let distance = self.board.drop_distance(&active);
        self.active = Some(Tetromino {
            y: active.y + distance,
            ..active
        });
        self.score = self
            .score
            .saturating_add(calculate_drop_score(distance as u32));
        self.lock_piece();
        true
    }

    /// Stash the active piece's kind, or swap with the stashed one.
    ///
    /// Allowed once per lock.
    pub fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(active) = self.playing_piece() else {
            return false;
        };

        match self.hold.take() {
            None => {
                self.hold = Some(Tetromino::new(active.kind));
                self.spawn_piece();
            }
            Some(held) => {
                self.hold = Some(Tetromino::new(active.kind));
                self.active = Some(Tetromino {
                    x: SPAWN_X,
                    y: SPAWN_Y,
                    ..held
                });
            }
        }

        self.can_hold = false;
        true
    }

    /// Pause while playing, resume while paused.
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => {
                self.phase = Phase::Paused;
                info!("paused");
                self.hooks.on_pause();
                true
            }
            Phase::Paused => {
                self.phase = Phase::Playing;
                info!("resumed");
                self.hooks.on_resume();
                true
            }
            Phase::Idle | Phase::GameOver => false,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.shift(-1),
            GameAction::MoveRight => self.shift(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Row the active piece would land on under plain gravity.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        Some(active.y + self.board.drop_distance(&active))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
