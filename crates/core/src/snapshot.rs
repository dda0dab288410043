//! Read-only views of the game for renderers and reporting.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::pieces::{Shape, Tetromino};
use crate::types::{Cell, PieceKind, Phase, ZoneKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_ZONES};
use crate::zones::Zone;

pub type BoardGrid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: &'static str,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
            color: value.color(),
        }
    }
}

impl ActiveSnapshot {
    /// Absolute cells with the matrix origin moved to row `y`.
    pub fn cells_at(&self, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, y + dy))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub next: Option<PieceKind>,
    pub hold: Option<PieceKind>,
    pub zones: ArrayVec<Zone, MAX_ZONES>,
    /// Gravity currently acting on the active piece.
    pub gravity: ZoneKind,
    pub can_hold: bool,
    pub phase: Phase,
    pub seed: u64,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            next: None,
            hold: None,
            zones: ArrayVec::new(),
            gravity: ZoneKind::Normal,
            can_hold: true,
            phase: Phase::Idle,
            seed: 0,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: 0,
        }
    }
}

/// End-of-session report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub phase: Phase,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl From<&GameSnapshot> for SessionSummary {
    fn from(snap: &GameSnapshot) -> Self {
        Self {
            seed: snap.seed,
            phase: snap.phase,
            score: snap.score,
            level: snap.level,
            lines: snap.lines,
        }
    }
}
