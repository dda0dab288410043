//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the game: the board, the pieces, the gravity
//! zones and the controller that ties them together. It does no I/O and never
//! reads the clock on its own; the host feeds elapsed milliseconds to
//! [`GameState::tick`] and reads back a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks and line clearing
//! - [`pieces`]: tetromino matrices, colors and clockwise rotation
//! - [`zones`]: drifting cloud-shaped regions that override gravity
//! - [`game_state`]: the controller (spawn, hold, drop/lock, scoring, phases)
//! - [`scoring`]: line points, levels and gravity speed
//! - [`rng`]: seeded ChaCha streams for pieces and zones
//! - [`events`]: lifecycle hooks for pause, resume and game over
//! - [`clock`]: host-side frame clock that turns instants into tick deltas
//! - [`snapshot`]: read-only views for renderers and session reports
//!
//! # Gravity Zones
//!
//! Every ten seconds a zone may appear (at most two at a time, each living
//! twenty seconds). While the active piece shares a cell with a zone, that
//! zone's kind replaces normal gravity:
//!
//! - **Reverse**: the piece drifts upward at the level speed
//! - **Heavy**: the piece falls every 100ms
//! - **Zero**: the piece does not fall on its own
//!
//! Hard drop is refused inside a zone; soft drop still works.
//!
//! # Example
//!
//! ```
//! use gravity_tetris_core::GameState;
//! use gravity_tetris_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert!(game.score() > 0); // Hard drop awards points
//! ```

pub mod board;
pub mod clock;
pub mod events;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod zones;

pub use gravity_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::FrameClock;
pub use events::{LifecycleEvent, LifecycleHooks, NoHooks};
pub use game_state::GameState;
pub use pieces::{get_shape, piece_color, Shape, Tetromino};
pub use rng::GameRng;
pub use scoring::{calculate_drop_score, calculate_line_score, get_drop_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot, SessionSummary};
pub use zones::{Zone, ZoneManager};
