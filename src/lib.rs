// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Debris: a cooperative tic-scheduled terminal arcade engine.
//!
//! Dozens to hundreds of small animations share one screen: twinkling
//! stars, the player's ship, shots, falling space debris, explosions and
//! captions. Each one is a [`task::Task`], a resumable state machine that
//! draws, then sleeps for some tics. The [`scheduler::Scheduler`] resumes
//! them in registration order once per tic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Game loop (fixed tic, shutdown)   │
//! ├─────────────────────────────────────┤
//! │   Scheduler  →  Tasks               │
//! ├──────────────────┬──────────────────┤
//! │  World           │  Canvas          │
//! │  obstacles, hits │  screen, input   │
//! │  clock, stats    │                  │
//! ├──────────────────┴──────────────────┤
//! │   Geometry / Kinematics             │
//! └─────────────────────────────────────┘
//! ```
//!
//! Tasks never share references: everything they have in common lives in
//! the [`World`], lent to each task for the length of its step. A shot
//! signals a hit by posting the obstacle's id to the hit registry; the
//! obstacle's own task picks it up on its next step.

pub mod assets;
pub mod canvas;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod invariants;
pub mod physics;
pub mod scheduler;
pub mod task;
pub mod world;

pub use assets::Assets;
pub use canvas::{Canvas, Controls, Emphasis, Frame, HeadlessCanvas, TerminalCanvas};
pub use config::GameConfig;
pub use error::{ConfigurationError, EngineError};
pub use game::{run, Game, Outcome, Shutdown, StopReason};
pub use geometry::{clamp, rectangles_overlap, Bounds, Rectangle};
pub use physics::{Direction, Kinematics};
pub use scheduler::Scheduler;
pub use world::{GamePhase, Stats, World};
