//! Resumable animation tasks.
//!
//! A task is a small state machine. Each time the scheduler resumes it, it
//! draws whatever its current state calls for and then either asks to sleep
//! for some tics or reports that it is done. Sleeping is the only suspension
//! point, so a task never leaves the shared world half-updated.
//!
//! Tasks talk to each other only through the [`World`]: projectiles post
//! hits to the hit registry and each obstacle picks up its own.

mod blink;
mod explosion;
mod fire;
mod game_over;
mod garbage;
mod spaceship;
mod spawner;
mod year;

pub use blink::Blink;
pub use explosion::Explosion;
pub use fire::Fire;
pub use game_over::GameOver;
pub use garbage::{Garbage, GarbagePhase};
pub use spaceship::{Gun, Spaceship};
pub use spawner::{GarbageKit, Spawner};
pub use year::YearClock;

use std::fmt;

use crate::canvas::Canvas;
use crate::world::World;

/// What a task wants after a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Resume again after this many tics. `Sleep(0)` behaves like `Sleep(1)`.
    Sleep(u32),
    /// The task is finished and will be dropped at the end of the tic.
    Done,
}

/// Task type tag, for introspection and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Twinkling star.
    Blink,
    /// Projectile.
    Fire,
    /// Falling obstacle.
    Garbage,
    /// Stand-alone explosion animation.
    Explosion,
    /// Player ship.
    Spaceship,
    /// Obstacle spawner.
    Spawner,
    /// Difficulty clock.
    YearClock,
    /// Game-over banner.
    GameOver,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blink => "blink",
            Self::Fire => "fire",
            Self::Garbage => "garbage",
            Self::Explosion => "explosion",
            Self::Spaceship => "spaceship",
            Self::Spawner => "spawner",
            Self::YearClock => "year-clock",
            Self::GameOver => "game-over",
        };
        f.write_str(name)
    }
}

/// Everything a task may touch during one resume.
pub struct Context<'a> {
    /// Shared simulation state.
    pub world: &'a mut World,
    /// Drawing surface and input.
    pub canvas: &'a mut dyn Canvas,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl<'a> Context<'a> {
    /// Bundle the world, canvas and spawn queue for one resume.
    pub fn new(
        world: &'a mut World,
        canvas: &'a mut dyn Canvas,
        spawned: &'a mut Vec<Box<dyn Task>>,
    ) -> Self {
        Self {
            world,
            canvas,
            spawned,
        }
    }

    /// Start a new task. It is scheduled after every existing task and first
    /// runs on the next tic.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.spawned.push(Box::new(task));
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("world", &self.world)
            .field("spawned", &self.spawned.len())
            .finish_non_exhaustive()
    }
}

/// A resumable unit of animation logic.
pub trait Task: fmt::Debug {
    /// What kind of task this is.
    fn kind(&self) -> TaskKind;

    /// Run until the next suspension point.
    fn resume(&mut self, ctx: &mut Context<'_>) -> Step;
}
