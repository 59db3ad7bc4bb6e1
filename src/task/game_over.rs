//! Game-over banner.

use super::{Context, Step, Task, TaskKind};
use crate::canvas::{Emphasis, Frame};

/// Redraws a banner centered on the surface every tic, forever.
#[derive(Debug, Clone)]
pub struct GameOver {
    banner: Frame,
}

impl GameOver {
    /// Show `banner` from the next tic on.
    #[must_use]
    pub const fn new(banner: Frame) -> Self {
        Self { banner }
    }
}

impl Task for GameOver {
    fn kind(&self) -> TaskKind {
        TaskKind::GameOver
    }

    fn resume(&mut self, ctx: &mut Context<'_>) -> Step {
        let bounds = ctx.world.bounds;
        let row = ((f64::from(bounds.rows) - f64::from(self.banner.rows())) / 2.0).floor();
        let column =
            ((f64::from(bounds.columns) - f64::from(self.banner.columns())) / 2.0).floor();
        ctx.canvas
            .draw(row, column, self.banner.text(), Emphasis::Bold);
        Step::Sleep(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::harness::Harness;

    #[test]
    fn test_banner_centered_every_tic() {
        let mut harness = Harness::new(11, 21);
        let mut banner = GameOver::new(Frame::new("GAME\nOVER"));

        for _ in 0..3 {
            assert_eq!(harness.resume(&mut banner), Step::Sleep(1));
        }

        assert_eq!(harness.canvas.draws_of("GAME\nOVER"), 3);
        assert_eq!(harness.canvas.screen().symbol_at(4, 8), Some("G"));
        assert_eq!(harness.canvas.screen().symbol_at(5, 11), Some("R"));
    }
}
