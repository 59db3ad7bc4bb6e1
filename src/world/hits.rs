//! The hit registry: projectiles post hits, obstacles consume them.

use std::collections::BTreeSet;

use crate::world::ObstacleId;

/// Obstacle ids struck by a projectile and not yet seen by their owner.
#[derive(Debug, Clone, Default)]
pub struct HitRegistry {
    pending: BTreeSet<ObstacleId>,
}

impl HitRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit. Returns `false` if a hit was already pending.
    pub fn record(&mut self, id: ObstacleId) -> bool {
        self.pending.insert(id)
    }

    /// Consume the pending hit for `id`, if any.
    pub fn take(&mut self, id: ObstacleId) -> bool {
        self.pending.remove(&id)
    }

    /// Whether a hit is pending for `id`.
    #[must_use]
    pub fn contains(&self, id: ObstacleId) -> bool {
        self.pending.contains(&id)
    }

    /// Number of pending hits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterate pending ids.
    pub fn iter(&self) -> impl Iterator<Item = ObstacleId> + '_ {
        self.pending.iter().copied()
    }
}
