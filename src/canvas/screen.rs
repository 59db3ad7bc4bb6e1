//! Cell buffer with frame draw/erase rules.

// Cell coordinates are range-checked before every cast
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use super::Emphasis;
use crate::geometry::Bounds;

/// Off-screen character grid backed by a ratatui [`Buffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    buffer: Buffer,
    bounds: Bounds,
}

impl Screen {
    /// Create a blank screen.
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, bounds.columns, bounds.rows)),
            bounds,
        }
    }

    /// Create a screen with a one-cell border around the playfield.
    #[must_use]
    pub fn bordered(bounds: Bounds) -> Self {
        let mut screen = Self::new(bounds);
        let area = screen.buffer.area;
        Block::bordered().render(area, &mut screen.buffer);
        screen
    }

    /// Size of the screen.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The underlying buffer.
    #[must_use]
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Draw `text` with the given emphasis.
    pub fn draw(&mut self, row: f64, column: f64, text: &str, emphasis: Emphasis) {
        let style = match emphasis {
            Emphasis::Dim => Style::new().add_modifier(Modifier::DIM),
            Emphasis::Normal => Style::new(),
            Emphasis::Bold => Style::new().add_modifier(Modifier::BOLD),
        };
        self.plot(row, column, text, Some(style));
    }

    /// Blank the cells covered by the visible characters of `text`.
    pub fn erase(&mut self, row: f64, column: f64, text: &str) {
        self.plot(row, column, text, None);
    }

    fn plot(&mut self, row: f64, column: f64, text: &str, style: Option<Style>) {
        let rows = i64::from(self.bounds.rows);
        let columns = i64::from(self.bounds.columns);
        let top = row.round() as i64;
        let left = column.round() as i64;

        for (line_offset, line) in text.lines().enumerate() {
            let y = top + line_offset as i64;
            if y < 0 {
                continue;
            }
            if y >= rows {
                break;
            }
            for (char_offset, symbol) in line.chars().enumerate() {
                let x = left + char_offset as i64;
                if x < 0 {
                    continue;
                }
                if x >= columns {
                    break;
                }
                if symbol == ' ' {
                    continue;
                }
                let Some(cell) = self.buffer.cell_mut((x as u16, y as u16)) else {
                    continue;
                };
                cell.reset();
                if let Some(style) = style {
                    cell.set_char(symbol);
                    cell.set_style(style);
                }
            }
        }
    }

    /// Symbol at a cell, if the cell exists.
    #[must_use]
    pub fn symbol_at(&self, row: u16, column: u16) -> Option<&str> {
        self.buffer.cell((column, row)).map(ratatui::buffer::Cell::symbol)
    }

    /// Text modifiers at a cell, if the cell exists.
    #[must_use]
    pub fn modifier_at(&self, row: u16, column: u16) -> Option<Modifier> {
        self.buffer.cell((column, row)).map(|cell| cell.modifier)
    }

    /// The screen as plain text lines, attributes dropped.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.bounds.rows)
            .map(|y| {
                (0..self.bounds.columns)
                    .filter_map(|x| self.buffer.cell((x, y)).map(ratatui::buffer::Cell::symbol))
                    .collect()
            })
            .collect()
    }
}

impl Widget for &Screen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(self.buffer.area);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let (Some(target), Some(source)) = (buf.cell_mut((x, y)), self.buffer.cell((x, y))) {
                    *target = source.clone();
                }
            }
        }
    }
}
