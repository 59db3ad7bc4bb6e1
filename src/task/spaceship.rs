//! Player ship.

use std::sync::Arc;

use super::{Context, Fire, GameOver, Step, Task, TaskKind};
use crate::canvas::{max_size, Emphasis, Frame};
use crate::geometry::{clamp, Rectangle};
use crate::physics::Kinematics;
use crate::world::GamePhase;

/// The plasma gun: locked until the difficulty clock reaches `unlock_year`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gun {
    /// First year the gun fires.
    pub unlock_year: u32,
    /// Projectile speed in rows per tic (shots travel upward).
    pub speed: f64,
}

impl Gun {
    /// Whether the gun fires in `year`.
    #[must_use]
    pub const fn is_unlocked(&self, year: u32) -> bool {
        year >= self.unlock_year
    }
}

/// The player's ship.
///
/// Every tic it flips its animation frame, steers from the controls, keeps
/// inside the border, fires when allowed, and finally checks its bounding
/// box against the obstacles. A collision ends the task and starts the
/// game-over banner.
#[derive(Debug, Clone)]
pub struct Spaceship {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    frames: Arc<[Frame]>,
    size: (u32, u32),
    current: usize,
    drawn: Option<usize>,
    kinematics: Kinematics,
    gun: Gun,
    banner: Frame,
}

impl Spaceship {
    /// Place the ship with its top-left corner at `(row, column)`, at rest.
    #[must_use]
    pub fn new(
        row: f64,
        column: f64,
        frames: Arc<[Frame]>,
        kinematics: Kinematics,
        gun: Gun,
        banner: Frame,
    ) -> Self {
        let size = max_size(&frames);
        Self {
            row,
            column,
            row_speed: 0.0,
            column_speed: 0.0,
            frames,
            size,
            current: 0,
            drawn: None,
            kinematics,
            gun,
            banner,
        }
    }

    /// Top-left corner.
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    /// Current `(row, column)` velocity.
    #[must_use]
    pub const fn velocity(&self) -> (f64, f64) {
        (self.row_speed, self.column_speed)
    }

    /// Bounding box over every animation frame.
    #[must_use]
    pub const fn rectangle(&self) -> Rectangle {
        Rectangle::new(self.row, self.column, self.size.0, self.size.1)
    }

    fn erase(&mut self, ctx: &mut Context<'_>) {
        if let Some(frame) = self.drawn.take().and_then(|index| self.frames.get(index)) {
            ctx.canvas.erase(self.row, self.column, frame.text());
        }
    }

    fn steer(&mut self, ctx: &mut Context<'_>) -> bool {
        let controls = ctx.canvas.read_input();
        (self.row_speed, self.column_speed) = self.kinematics.update_velocity(
            self.row_speed,
            self.column_speed,
            controls.rows,
            controls.columns,
        );

        let bounds = ctx.world.bounds;
        let (rows, columns) = self.size;
        self.row = clamp(
            self.row + self.row_speed,
            1.0,
            f64::from(bounds.rows) - f64::from(rows) - 1.0,
        );
        self.column = clamp(
            self.column + self.column_speed,
            1.0,
            f64::from(bounds.columns) - f64::from(columns) - 1.0,
        );
        controls.fire
    }
}

impl Task for Spaceship {
    fn kind(&self) -> TaskKind {
        TaskKind::Spaceship
    }

    fn resume(&mut self, ctx: &mut Context<'_>) -> Step {
        self.erase(ctx);
        if !self.frames.is_empty() {
            self.current = (self.current + 1) % self.frames.len();
        }

        let fire = self.steer(ctx);

        if let Some(frame) = self.frames.get(self.current) {
            ctx.canvas
                .draw(self.row, self.column, frame.text(), Emphasis::Normal);
            self.drawn = Some(self.current);
        }

        if fire && self.gun.is_unlocked(ctx.world.year()) {
            let nose = self.column + f64::from(self.size.1 / 2);
            ctx.spawn(Fire::new(self.row, nose, -self.gun.speed, 0.0));
        }

        if let Some(id) = ctx.world.obstacles.first_collision(&self.rectangle()) {
            self.erase(ctx);
            ctx.world.phase = GamePhase::GameOver;
            log::info!(
                "ship destroyed by obstacle {id} at ({:.1}, {:.1}) in {}",
                self.row,
                self.column,
                ctx.world.year()
            );
            ctx.spawn(GameOver::new(self.banner.clone()));
            return Step::Done;
        }

        Step::Sleep(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Controls;
    use crate::physics::Direction;
    use crate::task::harness::Harness;

    fn ship(row: f64, column: f64, unlock_year: u32) -> Spaceship {
        let frames: Arc<[Frame]> = ["A\nH", "A\nW"].into_iter().map(Frame::new).collect();
        Spaceship::new(
            row,
            column,
            frames,
            Kinematics::default(),
            Gun {
                unlock_year,
                speed: 2.0,
            },
            Frame::new("GAME OVER"),
        )
    }

    #[test]
    fn test_frames_alternate() {
        let mut harness = Harness::new(20, 40);
        let mut ship = ship(10.0, 20.0, 2020);

        harness.resume(&mut ship);
        let first = harness.canvas.screen().symbol_at(11, 20).map(str::to_string);
        harness.resume(&mut ship);
        let second = harness.canvas.screen().symbol_at(11, 20).map(str::to_string);

        assert_ne!(first, second);
        assert_eq!(harness.canvas.screen().symbol_at(10, 20), Some("A"));
    }

    #[test]
    fn test_steering_moves_and_stays_inside() {
        let mut harness = Harness::new(10, 10);
        let mut ship = ship(5.0, 5.0, 2020);
        for _ in 0..30 {
            harness
                .canvas
                .push_input(Controls::steer(Direction::Increase, Direction::Increase));
            harness.resume(&mut ship);
        }
        // frame is 2x1: bottom row must stay above the border
        assert_eq!(ship.position(), (7.0, 8.0));
    }

    #[test]
    fn test_drifts_to_rest() {
        let mut harness = Harness::new(40, 40);
        let mut ship = ship(20.0, 20.0, 2020);
        harness
            .canvas
            .push_input(Controls::steer(Direction::Decrease, Direction::Hold));
        harness.resume(&mut ship);
        assert!(ship.velocity().0 < 0.0);

        for _ in 0..Kinematics::default().calls_to_rest() {
            harness.resume(&mut ship);
        }
        assert_eq!(ship.velocity(), (0.0, 0.0));
    }

    #[test]
    fn test_gun_locked_before_unlock_year() {
        let mut harness = Harness::new(20, 40);
        let mut ship = ship(10.0, 20.0, 2020);
        harness.canvas.push_input(Controls::fire());
        harness.resume(&mut ship);
        assert!(harness.spawned.is_empty());
    }

    #[test]
    fn test_fires_from_nose_once_unlocked() {
        let mut harness = Harness::new(20, 40);
        let mut ship = ship(10.0, 20.0, 1957);
        harness.canvas.push_input(Controls::fire());
        harness.resume(&mut ship);
        assert_eq!(harness.spawned.len(), 1);
        assert_eq!(harness.spawned[0].kind(), TaskKind::Fire);
    }

    #[test]
    fn test_collision_ends_flight() {
        let mut harness = Harness::new(20, 40);
        harness
            .world
            .obstacles
            .register(Rectangle::new(10.0, 20.0, 1, 1), 1);
        let mut ship = ship(10.0, 20.0, 2020);

        assert_eq!(harness.resume(&mut ship), Step::Done);
        assert!(harness.world.is_game_over());
        assert_eq!(harness.spawned.len(), 1);
        assert_eq!(harness.spawned[0].kind(), TaskKind::GameOver);
        assert_eq!(harness.canvas.screen().symbol_at(10, 20), Some(" "));
    }
}
