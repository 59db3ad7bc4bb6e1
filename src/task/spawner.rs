//! Obstacle spawner.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Context, Garbage, Step, Task, TaskKind};
use crate::canvas::{max_size, Frame};
use crate::world::SpawnTable;

/// Everything needed to launch a piece of garbage.
#[derive(Debug, Clone)]
pub struct GarbageKit {
    /// Obstacle frames; each launch picks one at random.
    pub frames: Arc<[Frame]>,
    /// Explosion played when an obstacle breaks.
    pub explosion: Arc<[Frame]>,
    /// Fall speed in rows per tic.
    pub speed: f64,
    /// Hits needed to break an obstacle.
    pub health: u32,
}

/// Launches garbage forever, faster as the years go by.
///
/// Waits the spawn-table delay for the current year before each launch, so
/// the first obstacle appears one full delay after the game starts.
#[derive(Debug, Clone)]
pub struct Spawner {
    kit: GarbageKit,
    table: SpawnTable,
    rng: Pcg32,
    armed: bool,
}

impl Spawner {
    /// Create a spawner whose frame and column choices follow `seed`.
    #[must_use]
    pub fn new(kit: GarbageKit, table: SpawnTable, seed: u64) -> Self {
        Self {
            kit,
            table,
            rng: Pcg32::seed_from_u64(seed),
            armed: false,
        }
    }

    fn launch(&mut self, ctx: &mut Context<'_>) {
        let Some(frame) = self.kit.frames.choose(&mut self.rng).cloned() else {
            return;
        };
        let (_, widest) = max_size(&self.kit.frames);
        let last_column = u32::from(ctx.world.bounds.columns)
            .saturating_sub(widest + 1)
            .max(1);
        let column = f64::from(self.rng.random_range(1..=last_column));

        let garbage = Garbage::launch(
            ctx.world,
            column,
            frame,
            self.kit.speed,
            self.kit.health,
            Arc::clone(&self.kit.explosion),
        );
        ctx.world.stats.obstacles_spawned += 1;
        ctx.spawn(garbage);
    }
}

impl Task for Spawner {
    fn kind(&self) -> TaskKind {
        TaskKind::Spawner
    }

    fn resume(&mut self, ctx: &mut Context<'_>) -> Step {
        if self.armed {
            self.launch(ctx);
        }
        self.armed = true;
        Step::Sleep(self.table.delay_for(ctx.world.year()))
    }
}
