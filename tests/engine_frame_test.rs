//! Integration test for the frame driver over a recording surface.
//!
//! One tick must paint the full scene (sky band, wall band, floor band),
//! then the status line and minimap overlays, all through the `Surface`
//! contract alone.

use std::time::Duration;

use tui_maze::core::maze::Maze;
use tui_maze::core::pose::Pose;
use tui_maze::core::shade;
use tui_maze::core::surface::Surface;
use tui_maze::engine::{FrameRunner, RunnerConfig};
use tui_maze::types::{IntentSet, MoveIntent, Rgb};

/// Records every draw call into a plain character grid.
struct Recorder {
    width: u16,
    height: u16,
    cells: Vec<char>,
    colored: Vec<bool>,
    clipped: usize,
}

impl Recorder {
    fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![' '; len],
            colored: vec![false; len],
            clipped: 0,
        }
    }

    fn at(&self, x: u16, y: u16) -> char {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    fn colored_at(&self, x: u16, y: u16) -> bool {
        self.colored[y as usize * self.width as usize + x as usize]
    }

    fn row(&self, y: u16) -> String {
        (0..self.width).map(|x| self.at(x, y)).collect()
    }
}

impl Surface for Recorder {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn draw(&mut self, x: u16, y: u16, glyph: char, color: Option<Rgb>) {
        if x >= self.width || y >= self.height {
            self.clipped += 1;
            return;
        }
        let i = y as usize * self.width as usize + x as usize;
        self.cells[i] = glyph;
        self.colored[i] = color.is_some();
    }
}

fn spawn_runner(config: RunnerConfig) -> FrameRunner {
    FrameRunner::new(Maze::builtin(), Pose::new(8.0, 8.0, 0.0), config).unwrap()
}

/// 16x16 open interior bordered by walls, for predictable distances.
fn arena() -> Maze {
    let mut encoded = String::new();
    for y in 0..16 {
        for x in 0..16 {
            let wall = x == 0 || x == 15 || y == 0 || y == 15;
            encoded.push(if wall { '#' } else { '.' });
        }
    }
    Maze::parse(16, 16, &encoded).unwrap()
}

#[test]
fn one_tick_fills_every_world_cell() {
    let mut runner = spawn_runner(RunnerConfig {
        status_line: false,
        minimap: false,
        ..RunnerConfig::default()
    });
    let mut rec = Recorder::new(60, 20);

    assert!(runner.tick(Duration::from_millis(16), IntentSet::EMPTY, &mut rec));

    // Every column must contain a wall band: the arena is closed, so some
    // non-sky glyph appears in each column.
    for x in 0..60 {
        let column: String = (0..20).map(|y| rec.at(x, y)).collect();
        assert!(
            column.trim().len() > 0,
            "column {} rendered entirely empty: {:?}",
            x,
            column
        );
    }
}

#[test]
fn bands_appear_in_sky_wall_floor_order() {
    let config = RunnerConfig {
        status_line: false,
        minimap: false,
        ..RunnerConfig::default()
    };
    let mut runner = FrameRunner::new(arena(), Pose::new(8.0, 8.0, 0.0), config).unwrap();
    let mut rec = Recorder::new(80, 24);
    runner.tick(Duration::ZERO, IntentSet::EMPTY, &mut rec);

    // The center column looks straight down the view axis at the border
    // wall ~7 units ahead: rows 0..8 sky, 8..=16 wall, 17.. floor.
    let x = 40;
    assert_eq!(rec.at(x, 0), ' ');
    assert_eq!(rec.at(x, 7), ' ');
    assert_eq!(rec.at(x, 8), shade::WALL_FAR);
    assert_eq!(rec.at(x, 16), shade::WALL_FAR);
    assert_ne!(rec.at(x, 17), shade::WALL_FAR);
    assert_eq!(rec.at(x, 23), '#');
}

#[test]
fn status_line_and_minimap_overlay_the_scene() {
    let mut runner = spawn_runner(RunnerConfig::default());
    let mut rec = Recorder::new(80, 24);
    runner.tick(Duration::from_millis(20), IntentSet::EMPTY, &mut rec);

    // Status line carries the frame time and the pose, in an accent color.
    let status = rec.row(0);
    assert!(status.starts_with("ft=20.0ms"), "status was {:?}", status);
    assert!(status.contains("x=8.00"));
    assert!(rec.colored_at(0, 0));

    // Minimap: row 1 mirrors the maze's wall border; the player marker sits
    // at the spawn cell (8, 8), offset one row down.
    assert_eq!(&rec.row(1)[..16], "################");
    assert_eq!(rec.at(8, 9), 'P');
    assert!(rec.colored_at(8, 9));
}

#[test]
fn driver_never_draws_outside_the_surface() {
    let mut runner = spawn_runner(RunnerConfig::default());

    // Surface shorter than the minimap: the driver may emit out-of-range
    // rows, and the surface clips them without panicking.
    let mut rec = Recorder::new(20, 6);
    runner.tick(Duration::from_millis(16), IntentSet::EMPTY, &mut rec);
    assert!(rec.clipped > 0);
}

#[test]
fn two_identical_ticks_render_identical_frames() {
    let config = RunnerConfig {
        status_line: false,
        minimap: false,
        ..RunnerConfig::default()
    };
    let mut a = spawn_runner(config);
    let mut b = spawn_runner(config);

    let mut rec_a = Recorder::new(40, 16);
    let mut rec_b = Recorder::new(40, 16);
    a.tick(Duration::from_millis(16), IntentSet::EMPTY, &mut rec_a);
    b.tick(Duration::from_millis(16), IntentSet::EMPTY, &mut rec_b);

    assert_eq!(rec_a.cells, rec_b.cells);
}

#[test]
fn held_intents_steer_the_player_across_ticks() {
    let mut runner = spawn_runner(RunnerConfig::default());
    let mut rec = Recorder::new(40, 16);

    let mut intents = IntentSet::EMPTY;
    intents.insert(MoveIntent::RotateRight);
    for _ in 0..4 {
        runner.tick(Duration::from_millis(16), intents, &mut rec);
    }

    // 4 ticks * 0.5 rad * (16 / 200) = 0.16 rad of turn.
    assert!((runner.pose().angle - 0.16).abs() < 1e-9);
}
