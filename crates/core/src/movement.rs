//! Movement controller - applies tick intents to the pose
//!
//! Rotation is unconditional. Translation is validated against the maze with
//! a strict accept/reject policy: a candidate landing in a wall cell (or out
//! of bounds) discards that intent's whole move, with no clamping or
//! sliding.
//!
//! Within one tick all rotation intents are applied first and every
//! translation then reads the post-rotation heading. The source behavior was
//! order-dependent here; the fixed order makes simultaneous rotate+move
//! deterministic.

use crate::maze::Maze;
use crate::pose::Pose;
use tui_maze_types::{IntentSet, MoveIntent, MOVE_RATE, ROTATE_RATE};

/// Advance the pose by one tick's worth of intents.
///
/// `speed_factor` scales every delta by elapsed real time so movement speed
/// is frame-rate independent.
pub fn advance(pose: &mut Pose, maze: &Maze, intents: IntentSet, speed_factor: f64) {
    if intents.contains(MoveIntent::RotateLeft) {
        pose.angle -= ROTATE_RATE * speed_factor;
    }
    if intents.contains(MoveIntent::RotateRight) {
        pose.angle += ROTATE_RATE * speed_factor;
    }

    let (sin_a, cos_a) = pose.angle.sin_cos();
    let walk_x = sin_a * MOVE_RATE * speed_factor;
    let walk_y = cos_a * MOVE_RATE * speed_factor;
    let side_x = cos_a * MOVE_RATE * speed_factor;
    let side_y = sin_a * MOVE_RATE * speed_factor;

    if intents.contains(MoveIntent::Forward) {
        try_step(pose, maze, walk_x, walk_y);
    }
    if intents.contains(MoveIntent::Backward) {
        try_step(pose, maze, -walk_x, -walk_y);
    }
    if intents.contains(MoveIntent::StrafeLeft) {
        try_step(pose, maze, -side_x, side_y);
    }
    if intents.contains(MoveIntent::StrafeRight) {
        try_step(pose, maze, side_x, -side_y);
    }
}

/// Commit a translation only when the target cell can be occupied.
fn try_step(pose: &mut Pose, maze: &Maze, dx: f64, dy: f64) -> bool {
    let nx = pose.x + dx;
    let ny = pose.y + dy;
    if maze.blocks(nx.floor() as i64, ny.floor() as i64) {
        return false;
    }
    pose.x = nx;
    pose.y = ny;
    true
}
