//! Ray caster - per-column ray march through the maze grid
//!
//! For one screen column the caster marches a ray from the player in fixed
//! increments until it enters a wall cell or runs out of depth, and reports
//! the travelled distance. On a wall hit it additionally checks whether the
//! ray grazes a tile corner, which the shader renders as a dark seam between
//! adjacent wall blocks.

use std::fmt;

use arrayvec::ArrayVec;

use crate::maze::{Maze, Tile};
use crate::pose::Pose;
use tui_maze_types::{BOUNDARY_RAD, MAX_DEPTH, STEP_SIZE};

/// Result of casting a single ray.
///
/// `distance` is in `(0, max_depth]`. `boundary` is only set when a wall was
/// hit short of max depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f64,
    pub boundary: bool,
}

/// Errors detected while configuring a [`Raycaster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaycasterConfigError {
    /// A non-positive step would never advance the march.
    NonPositiveStep,
    /// A non-positive depth leaves nothing to render.
    NonPositiveDepth,
}

impl fmt::Display for RaycasterConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RaycasterConfigError::NonPositiveStep => write!(f, "ray step size must be positive"),
            RaycasterConfigError::NonPositiveDepth => write!(f, "ray max depth must be positive"),
        }
    }
}

impl std::error::Error for RaycasterConfigError {}

/// Ray march configuration: depth limit, step size, boundary threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raycaster {
    max_depth: f64,
    step: f64,
    boundary_rad: f64,
}

impl Raycaster {
    /// Build a caster, rejecting configurations that cannot terminate or
    /// would divide by a zero distance.
    pub fn new(max_depth: f64, step: f64) -> Result<Self, RaycasterConfigError> {
        if !(step > 0.0) {
            return Err(RaycasterConfigError::NonPositiveStep);
        }
        if !(max_depth > 0.0) {
            return Err(RaycasterConfigError::NonPositiveDepth);
        }
        Ok(Self {
            max_depth,
            step,
            boundary_rad: BOUNDARY_RAD,
        })
    }

    /// Override the corner-graze threshold (radians).
    pub fn with_boundary_threshold(mut self, rad: f64) -> Self {
        self.boundary_rad = rad;
        self
    }

    pub fn max_depth(&self) -> f64 {
        self.max_depth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// March a ray at the absolute world angle `ray_angle` from the pose.
    ///
    /// Stepping is a precision/performance trade-off: a wall thinner than
    /// the step can be tunnelled through. Leaving the grid is a normal
    /// terminal condition reported as a max-depth hit, not an error.
    pub fn cast(&self, maze: &Maze, pose: &Pose, ray_angle: f64) -> RayHit {
        let (eye_x, eye_y) = ray_angle.sin_cos();

        let mut distance = 0.0;
        while distance < self.max_depth {
            distance += self.step;

            let test_x = (pose.x + eye_x * distance).floor() as i64;
            let test_y = (pose.y + eye_y * distance).floor() as i64;

            match maze.tile(test_x, test_y) {
                // Out of the grid: force the maximum depth.
                None => {
                    return RayHit {
                        distance: self.max_depth,
                        boundary: false,
                    }
                }
                Some(Tile::Wall) => {
                    let boundary = self.grazes_corner(pose, eye_x, eye_y, test_x, test_y);
                    return RayHit {
                        // The last step may overshoot the depth limit.
                        distance: distance.min(self.max_depth),
                        boundary,
                    };
                }
                Some(Tile::Open) => {}
            }
        }

        RayHit {
            distance: self.max_depth,
            boundary: false,
        }
    }

    /// Does the ray pass close enough to a corner of the hit cell to count
    /// as a tile boundary?
    ///
    /// Each corner's player->corner vector, normalized, dotted with the ray
    /// direction gives the cosine of the angle between them. Only the two
    /// nearest corners are tested; the far pair is occluded by the cell
    /// itself.
    fn grazes_corner(&self, pose: &Pose, eye_x: f64, eye_y: f64, cell_x: i64, cell_y: i64) -> bool {
        let mut corners: ArrayVec<(f64, f64), 4> = ArrayVec::new();

        for dy in 0..2 {
            for dx in 0..2 {
                let vx = (cell_x + dx) as f64 - pose.x;
                let vy = (cell_y + dy) as f64 - pose.y;
                let dist = (vx * vx + vy * vy).sqrt();
                if dist == 0.0 {
                    // Player standing exactly on the corner; nothing to graze.
                    continue;
                }
                let dot = (eye_x * vx + eye_y * vy) / dist;
                corners.push((dist, dot));
            }
        }

        corners.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

        corners
            .iter()
            .take(2)
            .any(|&(_, dot)| dot.clamp(-1.0, 1.0).acos() < self.boundary_rad)
    }
}

impl Default for Raycaster {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            step: STEP_SIZE,
            boundary_rad: BOUNDARY_RAD,
        }
    }
}
