//! Movement controller properties over the public facade API.

use std::f64::consts::FRAC_PI_2;

use tui_maze::core::maze::Maze;
use tui_maze::core::movement::advance;
use tui_maze::core::pose::Pose;
use tui_maze::types::{IntentSet, MoveIntent, MOVE_RATE, ROTATE_RATE};

fn intents(list: &[MoveIntent]) -> IntentSet {
    list.iter().copied().collect()
}

/// The wall-adjacency scenario: player at (1, 1), wall to the east at
/// (2, 1), heading east, speed factor big enough to truncate into the wall.
#[test]
fn move_into_adjacent_wall_leaves_pose_unchanged() {
    let maze = Maze::parse(
        4,
        3,
        "####\
         #.##\
         ####",
    )
    .unwrap();
    let mut pose = Pose::new(1.0, 1.0, FRAC_PI_2);

    advance(&mut pose, &maze, intents(&[MoveIntent::Forward]), 0.5);

    assert_eq!(pose.x, 1.0);
    assert_eq!(pose.y, 1.0);
}

#[test]
fn rejected_move_is_discarded_not_clamped() {
    // A huge factor overshoots deep into the wall; nothing of the delta may
    // be applied.
    let maze = Maze::builtin();
    let mut pose = Pose::new(8.0, 8.0, 0.0);

    advance(&mut pose, &maze, intents(&[MoveIntent::Forward]), 50.0);

    assert_eq!(pose.x, 8.0);
    assert_eq!(pose.y, 8.0);
}

#[test]
fn rotation_applies_even_when_walled_in() {
    let maze = Maze::parse(3, 3, "####.####").unwrap();
    let mut pose = Pose::new(1.5, 1.5, 1.0);

    advance(&mut pose, &maze, intents(&[MoveIntent::RotateLeft]), 2.0);
    assert!((pose.angle - (1.0 - ROTATE_RATE * 2.0)).abs() < 1e-12);
}

#[test]
fn angle_accumulates_without_normalization() {
    let maze = Maze::open(8, 8);
    let mut pose = Pose::new(4.0, 4.0, 0.0);

    for _ in 0..100 {
        advance(&mut pose, &maze, intents(&[MoveIntent::RotateRight]), 1.0);
    }
    assert!((pose.angle - ROTATE_RATE * 100.0).abs() < 1e-9);
}

#[test]
fn simultaneous_rotate_and_walk_uses_the_new_heading() {
    let maze = Maze::open(64, 64);
    let mut pose = Pose::new(32.0, 32.0, 0.0);

    let factor = std::f64::consts::PI;
    advance(
        &mut pose,
        &maze,
        intents(&[MoveIntent::RotateRight, MoveIntent::Forward]),
        factor,
    );

    // A quarter turn east, then the walk goes along +x.
    assert!((pose.x - (32.0 + MOVE_RATE * factor)).abs() < 1e-9);
    assert!((pose.y - 32.0).abs() < 1e-9);
}

#[test]
fn opposing_walks_cancel_out() {
    let maze = Maze::open(16, 16);
    let mut pose = Pose::new(8.0, 8.0, 0.8);

    advance(
        &mut pose,
        &maze,
        intents(&[MoveIntent::Forward, MoveIntent::Backward]),
        0.3,
    );

    assert!((pose.x - 8.0).abs() < 1e-12);
    assert!((pose.y - 8.0).abs() < 1e-12);
}

#[test]
fn strafes_are_validated_independently() {
    // Open corridor along y: strafing east into the wall is rejected while
    // walking forward in the same tick still lands.
    let mut encoded = String::new();
    for _y in 0..8 {
        encoded.push_str("#.#");
    }
    let maze = Maze::parse(3, 8, &encoded).unwrap();
    let mut pose = Pose::new(1.5, 4.0, 0.0);

    advance(
        &mut pose,
        &maze,
        intents(&[MoveIntent::Forward, MoveIntent::StrafeRight]),
        0.25,
    );

    // Forward (heading 0) moved along +y; the strafe right towards x=2 was
    // rejected by the wall column.
    assert!((pose.y - 4.5).abs() < 1e-12);
    assert!((pose.x - 1.5).abs() < 1e-12);
}
