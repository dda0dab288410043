//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders a
//! `GameSnapshot` into a plain framebuffer which is then diffed and flushed
//! through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Control the aspect ratio precisely (2 chars wide per cell)
//! - Only redraw what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gravity_tetris_core as core;
pub use gravity_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_rgb, zone_tint, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
