//! Output contract between the frame driver and its display sink.

use tui_maze_types::Rgb;

/// A grid of character cells the frame driver renders into.
///
/// Implementations own clipping: a draw outside `size()` must be ignored,
/// never panic. `None` for the color means "use the sink's default style".
pub trait Surface {
    /// Current (width, height) in cells.
    fn size(&self) -> (u16, u16);

    /// Write one cell.
    fn draw(&mut self, x: u16, y: u16, glyph: char, color: Option<Rgb>);
}
