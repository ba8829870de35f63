//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the frame driver draws into a
//! [`FrameBuffer`] (which implements the core `Surface` contract) and a
//! [`TerminalRenderer`] flushes it to the real terminal, diffing against the
//! previous frame so only changed runs are rewritten.

pub mod fb;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::TerminalRenderer;
