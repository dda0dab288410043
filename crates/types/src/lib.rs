//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no behavior beyond lookups, so they can be
//! shared by the rules engine, the renderer and the input layer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0) for every piece
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default host frame interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest level-based interval |
//! | `HEAVY_DROP_MS` | 100 | Gravity interval inside a HEAVY zone |
//! | `ZONE_SPAWN_INTERVAL_MS` | 10000 | Time between zone spawns |
//! | `ZONE_LIFETIME_MS` | 20000 | Lifetime of a spawned zone |
//!
//! # Examples
//!
//! ```
//! use gravity_tetris_types::{GameAction, PieceKind, ZoneKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_ne!(GameAction::HardDrop, GameAction::SoftDrop);
//! assert!(ZoneKind::Normal.is_normal());
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column of a piece's shape origin.
pub const SPAWN_X: i8 = 3;

/// Spawn row of a piece's shape origin.
pub const SPAWN_Y: i8 = 0;

/// Default host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level.
pub const DROP_STEP_MS: u32 = 100;

/// Fastest level-based gravity interval.
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Gravity interval while the active piece overlaps a HEAVY zone.
pub const HEAVY_DROP_MS: u32 = 100;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cell descended by a hard drop.
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Base points for clearing N lines at level 1, multiplied by the level.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Time between zone spawn attempts.
pub const ZONE_SPAWN_INTERVAL_MS: u32 = 10_000;

/// Lifetime of a freshly spawned zone.
pub const ZONE_LIFETIME_MS: i32 = 20_000;

/// Maximum number of zones alive at once.
pub const MAX_ZONES: usize = 2;

/// How far (in cells) a zone may drift past the board edge before bouncing.
pub const ZONE_BOUNCE_MARGIN: f32 = 2.0;

/// Cloud mask width range (inclusive).
pub const CLOUD_MIN_WIDTH: u8 = 4;
pub const CLOUD_MAX_WIDTH: u8 = 6;

/// Cloud mask height range (inclusive).
pub const CLOUD_MIN_HEIGHT: u8 = 3;
pub const CLOUD_MAX_HEIGHT: u8 = 5;

/// Largest possible cloud mask (`CLOUD_MAX_WIDTH * CLOUD_MAX_HEIGHT`).
pub const CLOUD_MAX_BLOCKS: usize = (CLOUD_MAX_WIDTH as usize) * (CLOUD_MAX_HEIGHT as usize);

/// Drift speed spans in cells per second; speeds are drawn from `[-span/2, span/2)`.
pub const ZONE_DRIFT_SPAN_X: f32 = 1.0;
pub const ZONE_DRIFT_SPAN_Y: f32 = 1.5;


/// The seven tetromino piece kinds
///
/// Each kind has one canonical shape matrix and one color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in lookup-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Gravity behavior imposed by a zone.
///
/// `Normal` is the absence of a zone; it is never spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneKind {
    #[default]
    Normal,
    /// Gravity pulls toward row 0.
    Reverse,
    /// Gravity runs at a fixed fast interval.
    Heavy,
    /// No automatic drop.
    Zero,
}

impl ZoneKind {
    /// Kinds a zone manager may spawn.
    pub const SPAWNABLE: [ZoneKind; 3] = [ZoneKind::Reverse, ZoneKind::Heavy, ZoneKind::Zero];

    pub fn is_normal(&self) -> bool {
        matches!(self, ZoneKind::Normal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::Normal => "NORMAL",
            ZoneKind::Reverse => "REVERSE",
            ZoneKind::Heavy => "HEAVY",
            ZoneKind::Zero => "ZERO",
        }
    }
}

/// Session phase.
///
/// `Idle → Playing → {Paused ⇄ Playing} → GameOver`. Only `Playing` advances time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    Paused,
    GameOver,
}

/// Commands issued by an input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Single gravity step downward
    SoftDrop,
    /// Drop to the landing row and lock (plain gravity only)
    HardDrop,
    /// Rotate 90° clockwise with a ±1 wall kick
    Rotate,
    /// Hold current piece (once per lock)
    Hold,
    /// Toggle pause
    Pause,
    /// Begin a fresh session
    Restart,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked block; the kind doubles as its color token
pub type Cell = Option<PieceKind>;
