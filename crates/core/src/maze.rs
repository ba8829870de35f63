//! Maze module - the immutable world grid
//!
//! The maze is a fixed-size 2D grid where each cell is either a wall or open
//! floor. Uses a flat vector for better cache locality.
//! Coordinates: (x, y) where x grows to the right and y grows downward, both
//! bounded strictly by `[0, width)` and `[0, height)`.

use std::fmt;

use tui_maze_types::{DEFAULT_MAZE, MAZE_HEIGHT, MAZE_WIDTH};

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
}

/// Errors detected while loading a maze.
///
/// A malformed map is a configuration mistake; it is rejected once at load
/// time so the per-cast hot path never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// The encoded string length does not match `width * height`.
    LengthMismatch { expected: usize, found: usize },
    /// A zero width or height can represent no world.
    ZeroDimension,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::LengthMismatch { expected, found } => {
                write!(f, "maze string length {} does not match grid size {}", found, expected)
            }
            MazeError::ZeroDimension => write!(f, "maze width and height must be non-zero"),
        }
    }
}

impl std::error::Error for MazeError {}

/// The world grid - immutable after parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    /// Flat tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
}

impl Maze {
    /// Parse a maze from a flat row-major string.
    ///
    /// `'#'` encodes a wall; every other character is open floor.
    pub fn parse(width: usize, height: usize, encoded: &str) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::ZeroDimension);
        }
        let expected = width * height;
        if encoded.len() != expected {
            return Err(MazeError::LengthMismatch {
                expected,
                found: encoded.len(),
            });
        }

        let tiles = encoded
            .bytes()
            .map(|b| if b == b'#' { Tile::Wall } else { Tile::Open })
            .collect();

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// The built-in 16x16 world.
    pub fn builtin() -> Self {
        Self::parse(MAZE_WIDTH, MAZE_HEIGHT, DEFAULT_MAZE)
            .expect("built-in maze constants are consistent")
    }

    /// An all-open maze, useful for tests.
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Open; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculate flat index from signed (x, y) coordinates.
    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Tile at (x, y), or `None` when out of bounds.
    pub fn tile(&self, x: i64, y: i64) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// True when (x, y) is an in-bounds wall cell.
    pub fn is_wall(&self, x: i64, y: i64) -> bool {
        matches!(self.tile(x, y), Some(Tile::Wall))
    }

    /// True when (x, y) cannot be occupied: a wall cell or out of bounds.
    pub fn blocks(&self, x: i64, y: i64) -> bool {
        !matches!(self.tile(x, y), Some(Tile::Open))
    }
}
