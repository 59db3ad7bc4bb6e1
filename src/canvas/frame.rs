//! Immutable animation frames.

use std::sync::Arc;

/// A multi-line text frame with its size precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    text: Arc<str>,
    rows: u32,
    columns: u32,
}

impl Frame {
    /// Wrap frame text.
    #[must_use]
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let (rows, columns) = frame_size(&text);
        Self {
            text,
            rows,
            columns,
        }
    }

    /// The frame text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Width of the widest line, in characters.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Whether the frame has no visible character.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Size of a text block: `(lines, widest line in chars)`.
#[must_use]
pub fn frame_size(text: &str) -> (u32, u32) {
    let mut rows = 0u32;
    let mut columns = 0u32;
    for line in text.lines() {
        rows = rows.saturating_add(1);
        let width = u32::try_from(line.chars().count()).unwrap_or(u32::MAX);
        columns = columns.max(width);
    }
    (rows, columns)
}

/// Largest size over a set of frames.
#[must_use]
pub(crate) fn max_size(frames: &[Frame]) -> (u32, u32) {
    frames.iter().fold((0, 0), |(rows, columns), frame| {
        (rows.max(frame.rows()), columns.max(frame.columns()))
    })
}
