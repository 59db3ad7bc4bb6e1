//! Axis-aligned rectangle geometry for collision checks.
//!
//! Positions are measured in terminal cells: `row` grows downward and
//! `column` grows to the right. Corners may be fractional so that entities
//! can move at sub-cell speeds; extents are whole cells.

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Top edge (row of the top-left corner).
    pub row: f64,
    /// Left edge (column of the top-left corner).
    pub column: f64,
    /// Height in rows. Zero is treated as one.
    pub rows: u32,
    /// Width in columns. Zero is treated as one.
    pub columns: u32,
}

impl Rectangle {
    /// Create a rectangle from its corner and size.
    #[must_use]
    pub const fn new(row: f64, column: f64, rows: u32, columns: u32) -> Self {
        Self {
            row,
            column,
            rows,
            columns,
        }
    }

    /// A single-cell rectangle, used for point queries.
    #[must_use]
    pub const fn point(row: f64, column: f64) -> Self {
        Self::new(row, column, 1, 1)
    }

    /// Effective height; degenerate rectangles occupy one cell.
    #[must_use]
    #[inline]
    pub fn height(&self) -> f64 {
        f64::from(self.rows.max(1))
    }

    /// Effective width; degenerate rectangles occupy one cell.
    #[must_use]
    #[inline]
    pub fn width(&self) -> f64 {
        f64::from(self.columns.max(1))
    }

    /// The last cell covered by the rectangle (bottom-right corner).
    #[must_use]
    pub fn opposite_corner(&self) -> (f64, f64) {
        (
            self.row + self.height() - 1.0,
            self.column + self.width() - 1.0,
        )
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            self.row + self.height() / 2.0,
            self.column + self.width() / 2.0,
        )
    }

    /// Half-open containment test: `row` in `[top, top + rows)` and
    /// `column` in `[left, left + columns)`.
    #[must_use]
    #[inline]
    pub fn contains(&self, row: f64, column: f64) -> bool {
        let rows_inside = self.row <= row && row < self.row + self.height();
        let columns_inside = self.column <= column && column < self.column + self.width();
        rows_inside && columns_inside
    }
}

/// Size of a drawing surface in cells, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Number of rows.
    pub rows: u16,
    /// Number of columns.
    pub columns: u16,
}

impl Bounds {
    /// Create surface bounds.
    #[must_use]
    pub const fn new(rows: u16, columns: u16) -> Self {
        Self { rows, columns }
    }

    /// Whether the point lies strictly inside the one-cell border.
    #[must_use]
    pub fn interior_contains(&self, row: f64, column: f64) -> bool {
        let max_row = f64::from(self.rows) - 1.0;
        let max_column = f64::from(self.columns) - 1.0;
        0.0 < row && row < max_row && 0.0 < column && column < max_column
    }

    /// Center cell (integer division, like the spawn point of the ship).
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.rows / 2), f64::from(self.columns / 2))
    }
}

/// Check whether two rectangles overlap.
///
/// Each rectangle's top-left and bottom-right corners are tested against the
/// other rectangle. Testing both rectangles against each other catches the
/// case where one fully contains the other, which a one-sided corner test
/// would miss.
#[must_use]
pub fn rectangles_overlap(a: &Rectangle, b: &Rectangle) -> bool {
    let (a_bottom, a_right) = a.opposite_corner();
    let (b_bottom, b_right) = b.opposite_corner();

    b.contains(a.row, a.column)
        || b.contains(a_bottom, a_right)
        || a.contains(b.row, b.column)
        || a.contains(b_bottom, b_right)
}

/// Saturating clamp.
///
/// Returns `value` when `low <= value <= high`, otherwise the nearer bound.
/// Unlike [`f64::clamp`] this never panics: if the bounds are inverted
/// (a surface smaller than the frame being clamped), `low` wins.
#[must_use]
#[inline]
pub fn clamp(value: f64, low: f64, high: f64) -> f64 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
