//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the ray-casting world model and all per-tick rules.
//! It has **zero dependencies** on terminal I/O or timing, making it:
//!
//! - **Deterministic**: identical inputs always produce identical frames
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: renders onto anything that implements [`Surface`]
//!
//! # Module Structure
//!
//! - [`maze`]: immutable 2D wall grid parsed from a flat string
//! - [`pose`]: player position and heading
//! - [`raycast`]: per-column ray march with tile boundary detection
//! - [`shade`]: inverse-distance projection and wall/floor glyph policy
//! - [`movement`]: intent handling with strict accept/reject collision
//! - [`surface`]: the glyph output contract the frame driver draws through
//!
//! Call [`movement::advance`] once per tick, then
//! [`raycast::Raycaster::cast`] once per screen column.

pub mod maze;
pub mod movement;
pub mod pose;
pub mod raycast;
pub mod shade;
pub mod surface;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use maze::{Maze, MazeError, Tile};
pub use movement::advance;
pub use pose::Pose;
pub use raycast::{RayHit, Raycaster, RaycasterConfigError};
pub use shade::{floor_shade, project, wall_shade, ColumnSpan};
pub use surface::Surface;
