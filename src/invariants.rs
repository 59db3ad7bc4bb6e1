//! World invariants - sanity checks that detect bugs.
//!
//! Between tics these must always hold. Tests and fuzz targets run them
//! after every tic; a violation means a task left the world inconsistent.

use std::fmt;

use crate::world::World;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all world invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(world: &World) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut violation = |message: String| violations.push(InvariantViolation { message });

    let rows = f64::from(world.bounds.rows);
    for obstacle in world.obstacles.iter() {
        // Broken obstacles are unregistered in the same step
        if obstacle.health == 0 {
            violation(format!("obstacle {} is registered with zero health", obstacle.id));
        }
        if !(0.0..rows).contains(&obstacle.row) {
            violation(format!(
                "obstacle {} at row {} is outside 0..{rows}",
                obstacle.id, obstacle.row
            ));
        }
        if obstacle.column < 0.0 {
            violation(format!(
                "obstacle {} has negative column {}",
                obstacle.id, obstacle.column
            ));
        }
    }

    for id in world.hits.iter() {
        if !world.obstacles.contains(id) {
            violation(format!("pending hit for unregistered obstacle {id}"));
        }
    }

    let stats = &world.stats;
    if stats.hits > stats.shots_fired {
        violation(format!(
            "{} hits from only {} shots",
            stats.hits, stats.shots_fired
        ));
    }
    if stats.obstacles_destroyed > stats.hits {
        violation(format!(
            "{} obstacles destroyed by only {} hits",
            stats.obstacles_destroyed, stats.hits
        ));
    }

    violations
}
