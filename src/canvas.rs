//! Rendering and input collaborators.
//!
//! Tasks never touch the terminal directly. They draw and erase text frames
//! through the [`Canvas`] trait and read the player's controls from it. Three
//! implementations ship with the crate:
//! - [`Screen`]: a ratatui buffer with the draw/erase rules (no input)
//! - [`HeadlessCanvas`]: a screen with scripted input, used by tests,
//!   benchmarks and the `simulate` command
//! - [`TerminalCanvas`]: a screen presented through crossterm

mod frame;
mod headless;
mod screen;
mod terminal;

pub use frame::{frame_size, Frame};
pub(crate) use frame::max_size;
pub use headless::{DrawCall, HeadlessCanvas};
pub use screen::Screen;
pub use terminal::TerminalCanvas;

use std::io;

use crate::geometry::Bounds;
use crate::physics::Direction;

/// Text attribute for a drawn frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// Faint text.
    Dim,
    /// Plain text.
    #[default]
    Normal,
    /// Bright text.
    Bold,
}

/// Player input sampled once per tic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    /// Vertical direction.
    pub rows: Direction,
    /// Horizontal direction.
    pub columns: Direction,
    /// Whether the fire key was pressed.
    pub fire: bool,
}

impl Controls {
    /// Controls with the given directions and no fire.
    #[must_use]
    pub const fn steer(rows: Direction, columns: Direction) -> Self {
        Self {
            rows,
            columns,
            fire: false,
        }
    }

    /// Controls with only the fire key pressed.
    #[must_use]
    pub const fn fire() -> Self {
        Self {
            rows: Direction::Hold,
            columns: Direction::Hold,
            fire: true,
        }
    }
}

/// A surface tasks draw on, plus the input device attached to it.
///
/// Drawing rules shared by every implementation:
/// - positions are rounded to the nearest cell
/// - spaces in a frame are transparent
/// - cells outside the surface are clipped
pub trait Canvas {
    /// Size of the surface, border included.
    fn bounds(&self) -> Bounds;

    /// Draw a possibly multi-line text block anchored at its top-left corner.
    fn draw(&mut self, row: f64, column: f64, text: &str, emphasis: Emphasis);

    /// Erase the cells a previous `draw` of the same text covered.
    fn erase(&mut self, row: f64, column: f64, text: &str);

    /// Drain pending input into this tic's controls.
    fn read_input(&mut self) -> Controls;

    /// Audible cue for shots and explosions.
    fn beep(&mut self) {}

    /// Make this tic's drawing visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device fails.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}
