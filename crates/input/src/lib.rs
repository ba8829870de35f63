//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::MoveIntent`] and tracks which
//! intents are currently held, including terminals that never deliver
//! key-release events.

pub mod map;
pub mod tracker;

pub use tui_maze_types as types;

pub use map::{map_key, should_quit};
pub use tracker::KeyStateTracker;
