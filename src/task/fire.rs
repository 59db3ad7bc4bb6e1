//! Projectile.

use super::{Context, Step, Task, TaskKind};
use crate::canvas::Emphasis;
use crate::geometry::Rectangle;
use crate::world::ObstacleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Flash,
    Glow,
    Flying,
}

/// A shot: a `*` flash, an `O` glow, then a straight flight.
///
/// While flying it checks its cell against live obstacles every tic. The
/// first obstacle it touches (oldest first, skipping ones already hit this
/// tic) gets a hit posted to the hit registry and the shot ends.
#[derive(Debug, Clone, Copy)]
pub struct Fire {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    phase: Phase,
    drawn: Option<&'static str>,
}

impl Fire {
    /// Launch a shot at `(row, column)` moving by the given speeds per tic.
    #[must_use]
    pub const fn new(row: f64, column: f64, row_speed: f64, column_speed: f64) -> Self {
        Self {
            row,
            column,
            row_speed,
            column_speed,
            phase: Phase::Flash,
            drawn: None,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    fn trail(&self) -> &'static str {
        if self.column_speed.abs() < f64::EPSILON { "|" } else { "-" }
    }

    fn target(&self, ctx: &Context<'_>) -> Option<ObstacleId> {
        let probe = Rectangle::point(self.row, self.column);
        ctx.world
            .obstacles
            .iter()
            .filter(|obstacle| !ctx.world.hits.contains(obstacle.id))
            .find(|obstacle| obstacle.has_collision(&probe))
            .map(|obstacle| obstacle.id)
    }

    fn show(&mut self, ctx: &mut Context<'_>, symbol: &'static str) {
        ctx.canvas
            .draw(self.row, self.column, symbol, Emphasis::Normal);
        self.drawn = Some(symbol);
    }
}

impl Task for Fire {
    fn kind(&self) -> TaskKind {
        TaskKind::Fire
    }

    fn resume(&mut self, ctx: &mut Context<'_>) -> Step {
        if let Some(symbol) = self.drawn.take() {
            ctx.canvas.erase(self.row, self.column, symbol);
        }

        match self.phase {
            Phase::Flash => {
                ctx.world.stats.shots_fired += 1;
                self.show(ctx, "*");
                self.phase = Phase::Glow;
            }
            Phase::Glow => {
                self.show(ctx, "O");
                ctx.canvas.beep();
                self.phase = Phase::Flying;
            }
            Phase::Flying => {
                self.row += self.row_speed;
                self.column += self.column_speed;
                if !ctx.world.bounds.interior_contains(self.row, self.column) {
                    return Step::Done;
                }
                if let Some(id) = self.target(ctx) {
                    ctx.world.hits.record(id);
                    ctx.world.stats.hits += 1;
                    log::debug!("shot hit obstacle {id} at ({:.1}, {:.1})", self.row, self.column);
                    return Step::Done;
                }
                let trail = self.trail();
                self.show(ctx, trail);
            }
        }
        Step::Sleep(1)
    }
}
