//! Per-tick orchestration: movement, column sweep, overlays.

use std::time::Duration;

use tui_maze_core::maze::{Maze, Tile};
use tui_maze_core::movement;
use tui_maze_core::pose::Pose;
use tui_maze_core::raycast::{Raycaster, RaycasterConfigError};
use tui_maze_core::shade::{self, floor_shade, project, wall_shade};
use tui_maze_core::surface::Surface;
use tui_maze_types::{IntentSet, Rgb, BOUNDARY_RAD, FOV, MAX_DEPTH, SPEED_DIVISOR_MS, STEP_SIZE};

const STATUS_FG: Rgb = Rgb::new(220, 80, 80);
const MINIMAP_FG: Rgb = Rgb::new(140, 140, 150);
const PLAYER_FG: Rgb = Rgb::new(235, 205, 80);

/// Frame driver tuning; defaults match the built-in world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunnerConfig {
    pub fov: f64,
    pub max_depth: f64,
    pub step_size: f64,
    /// Corner-graze threshold for tile seams (radians).
    pub boundary_rad: f64,
    /// Elapsed-milliseconds divisor producing the speed factor.
    pub speed_divisor_ms: f64,
    /// Draw the frame-time / pose line at the top left.
    pub status_line: bool,
    /// Draw the maze overview with the player marker.
    pub minimap: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            fov: FOV,
            max_depth: MAX_DEPTH,
            step_size: STEP_SIZE,
            boundary_rad: BOUNDARY_RAD,
            speed_divisor_ms: SPEED_DIVISOR_MS,
            status_line: true,
            minimap: true,
        }
    }
}

/// Owns the world and the player, renders one frame per [`tick`].
///
/// [`tick`]: FrameRunner::tick
pub struct FrameRunner {
    maze: Maze,
    pose: Pose,
    caster: Raycaster,
    config: RunnerConfig,
}

impl FrameRunner {
    /// Initialization hook: fix the world and the starting pose.
    pub fn new(maze: Maze, pose: Pose, config: RunnerConfig) -> Result<Self, RaycasterConfigError> {
        let caster = Raycaster::new(config.max_depth, config.step_size)?
            .with_boundary_threshold(config.boundary_rad);
        Ok(Self {
            maze,
            pose,
            caster,
            config,
        })
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Run one frame: advance the simulation, then paint every cell of the
    /// surface. Returns `false` when the application should stop; quitting
    /// is input-driven here, so the runner itself always continues.
    pub fn tick<S: Surface>(&mut self, elapsed: Duration, intents: IntentSet, surface: &mut S) -> bool {
        let speed_factor = elapsed.as_secs_f64() * 1000.0 / self.config.speed_divisor_ms;
        movement::advance(&mut self.pose, &self.maze, intents, speed_factor);

        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            return true;
        }

        for x in 0..width {
            // Project this column into world space across the field of view.
            let ray_angle =
                self.pose.angle - self.config.fov / 2.0 + (x as f64 / width as f64) * self.config.fov;
            let hit = self.caster.cast(&self.maze, &self.pose, ray_angle);
            let span = project(&hit, height);
            let wall = wall_shade(hit.distance, hit.boundary, self.caster.max_depth());

            for y in 0..height {
                let row = y as i32;
                let glyph = if row < span.ceiling {
                    shade::EMPTY
                } else if row <= span.floor {
                    wall
                } else {
                    floor_shade(y, height)
                };
                surface.draw(x, y, glyph, None);
            }
        }

        if self.config.status_line {
            self.draw_status(elapsed, surface);
        }
        if self.config.minimap {
            self.draw_minimap(surface);
        }

        true
    }

    fn draw_status<S: Surface>(&self, elapsed: Duration, surface: &mut S) {
        let status = format!(
            "ft={:.1}ms x={:.2} y={:.2} a={:.2}",
            elapsed.as_secs_f64() * 1000.0,
            self.pose.x,
            self.pose.y,
            self.pose.angle,
        );
        draw_text(surface, 0, 0, &status, Some(STATUS_FG));
    }

    /// Maze overview under the status line, one cell per glyph, with the
    /// player at their truncated grid position.
    fn draw_minimap<S: Surface>(&self, surface: &mut S) {
        let top = 1u16;
        for my in 0..self.maze.height() {
            for mx in 0..self.maze.width() {
                let glyph = match self.maze.tile(mx as i64, my as i64) {
                    Some(Tile::Wall) => '#',
                    _ => '.',
                };
                surface.draw(mx as u16, top + my as u16, glyph, Some(MINIMAP_FG));
            }
        }

        let px = self.pose.grid_x();
        let py = self.pose.grid_y();
        if px >= 0 && py >= 0 {
            surface.draw(px as u16, top + py as u16, 'P', Some(PLAYER_FG));
        }
    }
}

fn draw_text<S: Surface>(surface: &mut S, x: u16, y: u16, text: &str, color: Option<Rgb>) {
    for (i, ch) in text.chars().enumerate() {
        surface.draw(x + i as u16, y, ch, color);
    }
}
