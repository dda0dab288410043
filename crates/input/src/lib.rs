//! Terminal input mapping.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values and
//! recognizes the quit keys. It knows nothing about rendering or game state.

pub mod map;

pub use gravity_tetris_types as types;

pub use map::{handle_key_event, should_quit};
