//! Game loop for debris.
//!
//! Ties the pieces together:
//! - builds the opening cast of tasks from config and assets
//! - ticks the scheduler at a fixed wall-clock rate
//! - presents the canvas after every tic
//! - stops on shutdown, when no tasks remain, or after game over

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::assets::Assets;
use crate::canvas::Canvas;
use crate::config::GameConfig;
use crate::error::{ConfigurationError, EngineError};
use crate::geometry::Bounds;
use crate::scheduler::Scheduler;
use crate::task::{Blink, Fire, GarbageKit, Gun, Spaceship, Spawner, YearClock};
use crate::world::{Stats, World};

/// Row speed of the shot fired from the screen center at startup.
const OPENING_SHOT_SPEED: f64 = 0.3;

/// Cooperative stop request, shared between the input handler and the loop.
///
/// The loop checks it between tics, never in the middle of one.
#[derive(Debug, Clone, Default)]
pub struct Shutdown(Arc<AtomicBool>);

impl Shutdown {
    /// Create a handle with no stop requested.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop after the current tic.
    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether a stop was requested.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The ship was destroyed and the linger period ran out.
    GameOver,
    /// A [`Shutdown`] was requested.
    Shutdown,
    /// Every task finished.
    Exhausted,
    /// The caller's tic limit was reached.
    TicLimit,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Why the loop stopped.
    pub reason: StopReason,
    /// Tics run.
    pub tics: u64,
    /// Simulated year at the end.
    pub year: u32,
    /// Tic on which the ship was destroyed, if it was.
    pub destroyed_at: Option<u64>,
    /// Run statistics.
    pub stats: Stats,
}

/// A game in progress: world, scheduler and timing.
#[derive(Debug)]
pub struct Game {
    world: World,
    scheduler: Scheduler,
    tic_duration: Duration,
    linger: Option<u32>,
    destroyed_at: Option<u64>,
}

impl Game {
    /// Set up a new game on a surface of `bounds`.
    ///
    /// Registers, in order: the stars, the opening shot, the ship (at the
    /// screen center), the spawner and the year clock. Every random choice
    /// derives from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the surface cannot fit
    /// the ship inside its border.
    pub fn new(
        config: &GameConfig,
        assets: &Assets,
        bounds: Bounds,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let (ship_rows, ship_columns) = assets.ship_size();
        if u32::from(bounds.rows) < ship_rows + 2 || u32::from(bounds.columns) < ship_columns + 2
        {
            return Err(ConfigurationError::SurfaceTooSmall {
                rows: bounds.rows,
                columns: bounds.columns,
            });
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut scheduler = Scheduler::new();

        for _ in 0..config.stars {
            let row = rng.random_range(1..bounds.rows - 1);
            let column = rng.random_range(1..bounds.columns - 1);
            let Some(&symbol) = config.star_symbols.choose(&mut rng) else {
                break;
            };
            let offset = rng.random_range(0..Blink::CYCLE_TICS);
            scheduler.spawn(Blink::new(
                f64::from(row),
                f64::from(column),
                symbol,
                offset,
            ));
        }

        let (center_row, center_column) = bounds.center();
        if config.opening_shot {
            scheduler.spawn(Fire::new(
                center_row,
                center_column,
                -OPENING_SHOT_SPEED,
                0.0,
            ));
        }

        scheduler.spawn(Spaceship::new(
            center_row,
            center_column,
            Arc::clone(assets.ship()),
            config.kinematics,
            Gun {
                unlock_year: config.gun_year,
                speed: config.gun_speed,
            },
            assets.game_over().clone(),
        ));

        let kit = GarbageKit {
            frames: Arc::clone(assets.garbage()),
            explosion: Arc::clone(assets.explosion()),
            speed: config.garbage_speed,
            health: config.obstacle_health,
        };
        scheduler.spawn(Spawner::new(kit, config.spawn_table.clone(), rng.random()));
        scheduler.spawn(YearClock::new(
            config.year_tics,
            Arc::new(config.milestones.clone()),
        ));

        log::info!(
            "game started on {}x{} with seed {seed}, {} tasks",
            bounds.rows,
            bounds.columns,
            scheduler.len()
        );

        Ok(Self {
            world: World::new(bounds, config.start_year),
            scheduler,
            tic_duration: config.tic_duration(),
            linger: config.game_over_linger_tics,
            destroyed_at: None,
        })
    }

    /// Run one tic.
    pub fn tick(&mut self, canvas: &mut dyn Canvas) {
        self.scheduler.tick(&mut self.world, canvas);
        if self.destroyed_at.is_none() && self.world.is_game_over() {
            self.destroyed_at = Some(self.scheduler.tic());
        }
    }

    /// Shared world state.
    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    /// The task scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Tic on which the ship was destroyed, if it was.
    #[must_use]
    pub const fn destroyed_at(&self) -> Option<u64> {
        self.destroyed_at
    }

    /// Whether the game has reached a natural end.
    #[must_use]
    pub fn finished(&self) -> Option<StopReason> {
        if self.scheduler.is_empty() {
            return Some(StopReason::Exhausted);
        }
        match (self.destroyed_at, self.linger) {
            (Some(tic), Some(linger)) if self.scheduler.tic() >= tic + u64::from(linger) => {
                Some(StopReason::GameOver)
            }
            _ => None,
        }
    }

    /// Summary of the game so far.
    #[must_use]
    pub fn outcome(&self, reason: StopReason) -> Outcome {
        Outcome {
            reason,
            tics: self.scheduler.tic(),
            year: self.world.year(),
            destroyed_at: self.destroyed_at,
            stats: self.world.stats,
        }
    }

    /// Tick until the game ends, `shutdown` is requested, or `max_tics`
    /// tics have run, presenting the canvas after every tic.
    ///
    /// # Errors
    ///
    /// Returns an error if presenting to the canvas fails.
    pub fn run(
        &mut self,
        canvas: &mut dyn Canvas,
        shutdown: &Shutdown,
        max_tics: Option<u64>,
    ) -> Result<Outcome, EngineError> {
        let reason = loop {
            if shutdown.is_requested() {
                self.scheduler.shutdown();
                break StopReason::Shutdown;
            }
            if let Some(reason) = self.finished() {
                break reason;
            }
            if max_tics.is_some_and(|limit| self.scheduler.tic() >= limit) {
                break StopReason::TicLimit;
            }

            let started = Instant::now();
            self.tick(canvas);
            canvas.present().map_err(EngineError::Terminal)?;
            if let Some(rest) = self.tic_duration.checked_sub(started.elapsed()) {
                thread::sleep(rest);
            }
        };

        let outcome = self.outcome(reason);
        log::info!(
            "game stopped ({reason:?}) after {} tics in {}",
            outcome.tics,
            outcome.year
        );
        Ok(outcome)
    }
}

/// Play a game on `canvas` until it ends or `shutdown` is requested.
///
/// # Errors
///
/// Returns an error if the config or surface are unusable (before the first
/// tic) or if presenting to the canvas fails.
pub fn run(
    canvas: &mut dyn Canvas,
    assets: &Assets,
    config: &GameConfig,
    seed: u64,
    shutdown: &Shutdown,
) -> Result<Outcome, EngineError> {
    let mut game = Game::new(config, assets, canvas.bounds(), seed)?;
    game.run(canvas, shutdown, None)
}
