//! Difficulty clock task.

use std::sync::Arc;

use super::{Context, Step, Task, TaskKind};
use crate::canvas::Emphasis;
use crate::world::Milestones;

/// Advances the simulated year every `period` tics and keeps the caption in
/// the bottom-left corner up to date.
#[derive(Debug, Clone)]
pub struct YearClock {
    period: u32,
    milestones: Arc<Milestones>,
    caption: Option<String>,
}

impl YearClock {
    /// Create a clock. A zero period is treated as one tic.
    #[must_use]
    pub fn new(period: u32, milestones: Arc<Milestones>) -> Self {
        Self {
            period: period.max(1),
            milestones,
            caption: None,
        }
    }

    fn anchor(ctx: &Context<'_>) -> (f64, f64) {
        (f64::from(ctx.world.bounds.rows.saturating_sub(2)), 2.0)
    }
}

impl Task for YearClock {
    fn kind(&self) -> TaskKind {
        TaskKind::YearClock
    }

    fn resume(&mut self, ctx: &mut Context<'_>) -> Step {
        let (row, column) = Self::anchor(ctx);
        if let Some(previous) = self.caption.take() {
            ctx.canvas.erase(row, column, &previous);
            let year = ctx.world.clock.advance();
            if let Some(phrase) = self.milestones.phrase(year) {
                log::info!("{year}: {phrase}");
            }
        }

        let caption = self.milestones.caption(ctx.world.year());
        ctx.canvas.draw(row, column, &caption, Emphasis::Normal);
        self.caption = Some(caption);
        Step::Sleep(self.period)
    }
}
