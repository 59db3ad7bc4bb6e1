//! One-shot explosion animation.

use std::sync::Arc;

use super::{Context, Step, Task, TaskKind};
use crate::canvas::{Emphasis, Frame};

/// Plays each frame for one tic around a center point, then finishes.
///
/// Purely cosmetic: explosions are never part of collision queries.
#[derive(Debug, Clone)]
pub struct Explosion {
    row: f64,
    column: f64,
    frames: Arc<[Frame]>,
    next: usize,
    shown: Option<usize>,
}

impl Explosion {
    /// Center the animation on `(center_row, center_column)`.
    #[must_use]
    pub fn new(center_row: f64, center_column: f64, frames: Arc<[Frame]>) -> Self {
        let (rows, columns) = frames
            .first()
            .map_or((0, 0), |frame| (frame.rows(), frame.columns()));
        Self {
            row: center_row - f64::from(rows) / 2.0,
            column: center_column - f64::from(columns) / 2.0,
            frames,
            next: 0,
            shown: None,
        }
    }

    /// Number of frames drawn so far.
    #[must_use]
    pub const fn frames_played(&self) -> usize {
        self.next
    }
}

impl Task for Explosion {
    fn kind(&self) -> TaskKind {
        TaskKind::Explosion
    }

    fn resume(&mut self, ctx: &mut Context<'_>) -> Step {
        if let Some(index) = self.shown.take() {
            ctx.canvas
                .erase(self.row, self.column, self.frames[index].text());
        }

        let Some(frame) = self.frames.get(self.next) else {
            return Step::Done;
        };
        if self.next == 0 {
            ctx.canvas.beep();
        }
        ctx.canvas
            .draw(self.row, self.column, frame.text(), Emphasis::Normal);
        self.shown = Some(self.next);
        self.next += 1;
        Step::Sleep(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::harness::Harness;

    fn frames() -> Arc<[Frame]> {
        ["(@)", "(*)", " . "].into_iter().map(Frame::new).collect()
    }

    #[test]
    fn test_plays_every_frame_once() {
        let mut harness = Harness::new(10, 10);
        let mut explosion = Explosion::new(5.0, 5.0, frames());

        let mut resumes = 0;
        while harness.resume(&mut explosion) != Step::Done {
            resumes += 1;
            assert!(resumes <= 3, "explosion should finish after its frames");
        }

        assert_eq!(resumes, 3);
        assert_eq!(explosion.frames_played(), 3);
        for text in ["(@)", "(*)", " . "] {
            assert_eq!(harness.canvas.draws_of(text), 1);
        }
        assert_eq!(harness.canvas.beeps(), 1);
    }

    #[test]
    fn test_leaves_screen_clean() {
        let mut harness = Harness::new(10, 10);
        let mut explosion = Explosion::new(5.0, 5.0, frames());
        while harness.resume(&mut explosion) != Step::Done {}
        assert_eq!(harness.canvas.screen().to_lines()[5].trim_matches('│').trim(), "");
    }

    #[test]
    fn test_centered() {
        let explosion = Explosion::new(5.0, 5.0, frames());
        assert!((explosion.row - 4.5).abs() < f64::EPSILON);
        assert!((explosion.column - 3.5).abs() < f64::EPSILON);
    }
}
