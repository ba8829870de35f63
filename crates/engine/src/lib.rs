//! Frame driver - ties the core simulation to a display surface.
//!
//! One [`FrameRunner::tick`] is one frame: scale elapsed time into a speed
//! factor, advance the pose, cast a ray per surface column, shade every row,
//! and finish with the status line and minimap overlays. The runner keeps no
//! state beyond the maze, the pose, and its configuration.

mod runner;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use runner::{FrameRunner, RunnerConfig};
