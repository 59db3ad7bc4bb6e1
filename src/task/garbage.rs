//! Falling obstacle.

use std::sync::Arc;

use super::{Context, Explosion, Step, Task, TaskKind};
use crate::canvas::{Emphasis, Frame};
use crate::geometry::{clamp, Rectangle};
use crate::world::{ObstacleId, World};

/// Lifecycle of a falling obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GarbagePhase {
    /// Registered and moving down.
    Falling,
    /// Broken; playing its explosion.
    Exploding,
    /// Unregistered and finished.
    Gone,
}

/// A piece of space debris falling from the top of the screen.
///
/// The task owns its obstacle record: it moves it, consumes its hits, and
/// unregisters it exactly once when it breaks or falls off the bottom.
#[derive(Debug, Clone)]
pub struct Garbage {
    id: ObstacleId,
    row: f64,
    column: f64,
    speed: f64,
    frame: Frame,
    explosion_frames: Arc<[Frame]>,
    explosion: Option<Explosion>,
    phase: GarbagePhase,
    drawn: bool,
}

impl Garbage {
    /// Register a new obstacle at row 0 and return the task that flies it.
    ///
    /// The column is clamped so the whole frame stays left of the right
    /// border. Health below 1 is raised to 1.
    pub fn launch(
        world: &mut World,
        column: f64,
        frame: Frame,
        speed: f64,
        health: u32,
        explosion_frames: Arc<[Frame]>,
    ) -> Self {
        let max_column = f64::from(world.bounds.columns) - f64::from(frame.columns()) - 1.0;
        let column = clamp(column, 0.0, max_column);
        let id = world.obstacles.register(
            Rectangle::new(0.0, column, frame.rows(), frame.columns()),
            health.max(1),
        );
        log::debug!("garbage {id} launched at column {column:.0}");

        Self {
            id,
            row: 0.0,
            column,
            speed,
            frame,
            explosion_frames,
            explosion: None,
            phase: GarbagePhase::Falling,
            drawn: false,
        }
    }

    /// Id of the obstacle this task owns.
    #[must_use]
    pub const fn id(&self) -> ObstacleId {
        self.id
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GarbagePhase {
        self.phase
    }

    /// Current top row.
    #[must_use]
    pub const fn row(&self) -> f64 {
        self.row
    }

    fn retire(&mut self, world: &mut World) {
        if world.obstacles.remove(self.id).is_some() {
            world.hits.take(self.id);
            log::debug!("garbage {} retired", self.id);
        }
    }

    fn fall(&mut self, ctx: &mut Context<'_>) -> Step {
        let moving = self.drawn;
        if self.drawn {
            ctx.canvas.erase(self.row, self.column, self.frame.text());
            self.drawn = false;
        }

        if ctx.world.hits.take(self.id) {
            match ctx.world.obstacles.damage(self.id) {
                Some(0) => return self.break_apart(ctx),
                Some(_) => {}
                None => {
                    self.phase = GarbagePhase::Gone;
                    return Step::Done;
                }
            }
        }

        if moving {
            self.row += self.speed;
        }
        if self.row >= f64::from(ctx.world.bounds.rows) {
            self.retire(ctx.world);
            ctx.world.stats.obstacles_escaped += 1;
            self.phase = GarbagePhase::Gone;
            return Step::Done;
        }

        if let Some(obstacle) = ctx.world.obstacles.get_mut(self.id) {
            obstacle.row = self.row;
        }
        ctx.canvas
            .draw(self.row, self.column, self.frame.text(), Emphasis::Normal);
        self.drawn = true;
        Step::Sleep(1)
    }

    fn break_apart(&mut self, ctx: &mut Context<'_>) -> Step {
        let (center_row, center_column) = ctx
            .world
            .obstacles
            .get(self.id)
            .map_or((self.row, self.column), |obstacle| {
                (obstacle.center_row(), obstacle.center_column())
            });
        self.retire(ctx.world);
        ctx.world.stats.obstacles_destroyed += 1;
        self.explosion = Some(Explosion::new(
            center_row,
            center_column,
            Arc::clone(&self.explosion_frames),
        ));
        self.phase = GarbagePhase::Exploding;
        self.explode(ctx)
    }

    fn explode(&mut self, ctx: &mut Context<'_>) -> Step {
        let step = self
            .explosion
            .as_mut()
            .map_or(Step::Done, |explosion| explosion.resume(ctx));
        if step == Step::Done {
            self.explosion = None;
            self.phase = GarbagePhase::Gone;
        }
        step
    }
}

impl Task for Garbage {
    fn kind(&self) -> TaskKind {
        TaskKind::Garbage
    }

    fn resume(&mut self, ctx: &mut Context<'_>) -> Step {
        match self.phase {
            GarbagePhase::Falling => self.fall(ctx),
            GarbagePhase::Exploding => self.explode(ctx),
            GarbagePhase::Gone => Step::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::harness::Harness;

    fn explosion_frames() -> Arc<[Frame]> {
        ["@@", "**", ".."].into_iter().map(Frame::new).collect()
    }

    fn launch(harness: &mut Harness, column: f64, health: u32) -> Garbage {
        Garbage::launch(
            &mut harness.world,
            column,
            Frame::new("##\n##"),
            0.5,
            health,
            explosion_frames(),
        )
    }

    #[test]
    fn test_launch_registers_at_top() {
        let mut harness = Harness::new(20, 20);
        let garbage = launch(&mut harness, 4.0, 1);
        let obstacle = harness.world.obstacles.get(garbage.id()).unwrap();
        assert!(obstacle.row.abs() < f64::EPSILON);
        assert!((obstacle.column - 4.0).abs() < f64::EPSILON);
        assert_eq!((obstacle.rows, obstacle.columns), (2, 2));
    }

    #[test]
    fn test_launch_clamps_column() {
        let mut harness = Harness::new(20, 20);
        let right = launch(&mut harness, 30.0, 1);
        let left = launch(&mut harness, -3.0, 1);
        assert!((harness.world.obstacles.get(right.id()).unwrap().column - 17.0).abs() < f64::EPSILON);
        assert!(harness.world.obstacles.get(left.id()).unwrap().column.abs() < f64::EPSILON);
    }

    #[test]
    fn test_falls_off_the_bottom() {
        let mut harness = Harness::new(10, 20);
        let mut garbage = launch(&mut harness, 4.0, 1);

        let mut steps = 0;
        while harness.resume(&mut garbage) != Step::Done {
            steps += 1;
            assert_eq!(garbage.phase(), GarbagePhase::Falling);
            let obstacle = harness.world.obstacles.get(garbage.id()).unwrap();
            assert!((obstacle.row - garbage.row()).abs() < f64::EPSILON);
        }

        // 0.0, 0.5, ... 9.5 drawn; 10.0 reaches the row count
        assert_eq!(steps, 20);
        assert_eq!(garbage.phase(), GarbagePhase::Gone);
        assert!(!harness.world.obstacles.contains(garbage.id()));
        assert_eq!(harness.world.stats.obstacles_escaped, 1);
        assert_eq!(harness.world.stats.obstacles_destroyed, 0);
        assert_eq!(harness.canvas.beeps(), 0);
    }

    #[test]
    fn test_single_hit_breaks_and_explodes() {
        let mut harness = Harness::new(20, 20);
        let mut garbage = launch(&mut harness, 4.0, 1);
        harness.resume(&mut garbage);
        harness.resume(&mut garbage);

        harness.world.hits.record(garbage.id());
        assert_eq!(harness.resume(&mut garbage), Step::Sleep(1));
        assert_eq!(garbage.phase(), GarbagePhase::Exploding);
        assert!(!harness.world.obstacles.contains(garbage.id()));
        assert!(harness.world.hits.is_empty());

        while harness.resume(&mut garbage) != Step::Done {}
        assert_eq!(garbage.phase(), GarbagePhase::Gone);
        for frame in ["@@", "**", ".."] {
            assert_eq!(harness.canvas.draws_of(frame), 1);
        }
        assert_eq!(harness.world.stats.obstacles_destroyed, 1);
        assert_eq!(harness.world.stats.obstacles_escaped, 0);
    }

    #[test]
    fn test_tough_garbage_survives_first_hit() {
        let mut harness = Harness::new(20, 20);
        let mut garbage = launch(&mut harness, 4.0, 2);
        harness.resume(&mut garbage);

        harness.world.hits.record(garbage.id());
        assert_eq!(harness.resume(&mut garbage), Step::Sleep(1));
        assert_eq!(garbage.phase(), GarbagePhase::Falling);
        assert_eq!(harness.world.obstacles.get(garbage.id()).unwrap().health, 1);

        harness.world.hits.record(garbage.id());
        harness.resume(&mut garbage);
        assert_eq!(garbage.phase(), GarbagePhase::Exploding);
    }

    #[test]
    fn test_erases_previous_position() {
        let mut harness = Harness::new(20, 20);
        let mut garbage = launch(&mut harness, 4.0, 1);
        garbage.speed = 2.0;
        harness.resume(&mut garbage);
        assert_eq!(harness.canvas.screen().symbol_at(0, 4), Some("#"));
        harness.resume(&mut garbage);
        assert_eq!(harness.canvas.screen().symbol_at(1, 4), Some(" "));
        assert_eq!(harness.canvas.screen().symbol_at(2, 4), Some("#"));
    }
}
