//! Column shader - projection and glyph policy
//!
//! Converts one ray hit into the vertical layout of a screen column (sky,
//! wall band, floor) and picks the glyph for each band. Wall brightness
//! follows ray distance; floor brightness follows screen row only, which
//! fakes a distance-shaded floor without a second cast.

use crate::raycast::RayHit;

/// Wall glyphs from nearest/densest to farthest/sparsest.
pub const WALL_NEAR: char = '\u{2588}';
pub const WALL_MID: char = '\u{2593}';
pub const WALL_FAR: char = '\u{2592}';
pub const WALL_FAINT: char = '\u{2591}';

/// Glyph for sky, out-of-range walls and boundary seams.
pub const EMPTY: char = ' ';

/// Vertical extent of the wall band in one screen column.
///
/// Rows above `ceiling` are sky, rows in `ceiling..=floor` are wall, rows
/// below `floor` are floor. `ceiling` may be negative for very close walls;
/// callers iterate only the valid screen rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub ceiling: i32,
    pub floor: i32,
}

/// Inverse-distance perspective projection of a hit onto screen rows.
pub fn project(hit: &RayHit, screen_height: u16) -> ColumnSpan {
    let h = screen_height as f64;
    let ceiling = (h / 2.0 - h / hit.distance) as i32;
    let floor = screen_height as i32 - ceiling;
    ColumnSpan { ceiling, floor }
}

/// Wall glyph for a given hit distance.
///
/// Four density bands at `max_depth` / 4, / 3, / 2 and the full depth; a
/// boundary hit renders as a seam regardless of the band.
pub fn wall_shade(distance: f64, boundary: bool, max_depth: f64) -> char {
    if boundary {
        return EMPTY;
    }

    if distance <= max_depth / 4.0 {
        WALL_NEAR
    } else if distance <= max_depth / 3.0 {
        WALL_MID
    } else if distance <= max_depth / 2.0 {
        WALL_FAR
    } else if distance <= max_depth {
        WALL_FAINT
    } else {
        EMPTY
    }
}

/// Floor glyph for a screen row.
///
/// Pure in `(row, screen_height)`: brightness falls off towards the horizon,
/// bucketed into five density bands.
pub fn floor_shade(row: u16, screen_height: u16) -> char {
    let half = screen_height as f64 / 2.0;
    let b = 1.0 - (row as f64 - half) / half;

    if b < 0.25 {
        '#'
    } else if b < 0.5 {
        'x'
    } else if b < 0.75 {
        '-'
    } else if b < 0.9 {
        '.'
    } else {
        EMPTY
    }
}

/// Glyph for a single cell of a shaded column.
pub fn shade_cell(span: &ColumnSpan, hit: &RayHit, row: u16, screen_height: u16, max_depth: f64) -> char {
    let r = row as i32;
    if r < span.ceiling {
        EMPTY
    } else if r <= span.floor {
        wall_shade(hit.distance, hit.boundary, max_depth)
    } else {
        floor_shade(row, screen_height)
    }
}
