//! tui-maze (workspace facade crate).
//!
//! This package keeps a single `tui_maze::{core,engine,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_maze_core as core;
pub use tui_maze_engine as engine;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
