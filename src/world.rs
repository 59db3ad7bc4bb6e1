//! Shared simulation state lent to tasks during their step.
//!
//! Everything tasks share lives here instead of in globals:
//! - Obstacle registry (queried for collisions)
//! - Hit registry (projectile → obstacle messages)
//! - Difficulty clock (simulated year)
//! - Game phase and run statistics

mod difficulty;
mod hits;
mod obstacle;

pub use difficulty::{DifficultyClock, Milestones, SpawnBracket, SpawnTable};
pub use hits::HitRegistry;
pub use obstacle::{Obstacle, ObstacleId, ObstacleRegistry};

use serde::Serialize;

use crate::geometry::Bounds;

/// Top-level game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// The ship is alive.
    Flying,
    /// The ship was destroyed. Terminal for the run.
    GameOver,
}

/// Counters collected over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Projectiles launched (the opening shot included).
    pub shots_fired: u32,
    /// Hits posted to the hit registry.
    pub hits: u32,
    /// Obstacles launched by the spawner.
    pub obstacles_spawned: u32,
    /// Obstacles broken by projectiles.
    pub obstacles_destroyed: u32,
    /// Obstacles that fell off the bottom of the screen.
    pub obstacles_escaped: u32,
}

/// State shared between tasks.
#[derive(Debug, Clone)]
pub struct World {
    /// Surface size, fixed for the run.
    pub bounds: Bounds,
    /// Live obstacles.
    pub obstacles: ObstacleRegistry,
    /// Pending projectile hits.
    pub hits: HitRegistry,
    /// Simulated calendar.
    pub clock: DifficultyClock,
    /// Whether the ship is still flying.
    pub phase: GamePhase,
    /// Run statistics.
    pub stats: Stats,
}

impl World {
    /// Create an empty world.
    #[must_use]
    pub fn new(bounds: Bounds, start_year: u32) -> Self {
        Self {
            bounds,
            obstacles: ObstacleRegistry::new(),
            hits: HitRegistry::new(),
            clock: DifficultyClock::new(start_year),
            phase: GamePhase::Flying,
            stats: Stats::default(),
        }
    }

    /// Current simulated year.
    #[must_use]
    pub const fn year(&self) -> u32 {
        self.clock.year()
    }

    /// Whether the run has reached its terminal state.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
