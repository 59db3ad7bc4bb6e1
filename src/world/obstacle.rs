//! Obstacles and the shared obstacle registry.

use std::collections::BTreeMap;
use std::fmt;

use crate::geometry::{rectangles_overlap, Rectangle};

/// Opaque obstacle identity, allocated in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObstacleId(u64);

impl ObstacleId {
    /// The raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live obstacle as seen by collision queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Identity of this obstacle.
    pub id: ObstacleId,
    /// Top row (fractional while falling).
    pub row: f64,
    /// Left column.
    pub column: f64,
    /// Height in rows.
    pub rows: u32,
    /// Width in columns.
    pub columns: u32,
    /// Remaining hits before the obstacle breaks. Zero means destroyable.
    pub health: u32,
}

impl Obstacle {
    /// Bounding rectangle of the obstacle.
    #[must_use]
    pub const fn rectangle(&self) -> Rectangle {
        Rectangle::new(self.row, self.column, self.rows, self.columns)
    }

    /// Center row.
    #[must_use]
    pub fn center_row(&self) -> f64 {
        self.row + f64::from(self.rows) / 2.0
    }

    /// Center column.
    #[must_use]
    pub fn center_column(&self) -> f64 {
        self.column + f64::from(self.columns) / 2.0
    }

    /// Check whether `other` overlaps this obstacle.
    #[must_use]
    pub fn has_collision(&self, other: &Rectangle) -> bool {
        rectangles_overlap(&self.rectangle(), other)
    }

    /// Whether the obstacle has run out of health.
    #[must_use]
    pub const fn can_be_broken(&self) -> bool {
        self.health == 0
    }
}

/// The collection of live obstacles, iterated in spawn order.
///
/// Iteration order is the tie-break for collision queries: when several
/// obstacles overlap the same probe, the oldest one wins.
#[derive(Debug, Clone, Default)]
pub struct ObstacleRegistry {
    obstacles: BTreeMap<ObstacleId, Obstacle>,
    next_id: u64,
}

impl ObstacleRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new obstacle covering `area` and return its id.
    pub fn register(&mut self, area: Rectangle, health: u32) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.obstacles.insert(
            id,
            Obstacle {
                id,
                row: area.row,
                column: area.column,
                rows: area.rows,
                columns: area.columns,
                health,
            },
        );
        id
    }

    /// Remove an obstacle, returning it if it was registered.
    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        self.obstacles.remove(&id)
    }

    /// Look up an obstacle.
    #[must_use]
    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(&id)
    }

    /// Look up an obstacle mutably.
    pub fn get_mut(&mut self, id: ObstacleId) -> Option<&mut Obstacle> {
        self.obstacles.get_mut(&id)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: ObstacleId) -> bool {
        self.obstacles.contains_key(&id)
    }

    /// Apply one point of damage and return the remaining health.
    pub fn damage(&mut self, id: ObstacleId) -> Option<u32> {
        self.obstacles.get_mut(&id).map(|obstacle| {
            obstacle.health = obstacle.health.saturating_sub(1);
            obstacle.health
        })
    }

    /// Number of live obstacles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether no obstacles are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Iterate live obstacles in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.values()
    }

    /// First obstacle (in spawn order) overlapping `probe`.
    #[must_use]
    pub fn first_collision(&self, probe: &Rectangle) -> Option<ObstacleId> {
        self.iter()
            .find(|obstacle| obstacle.has_collision(probe))
            .map(|obstacle| obstacle.id)
    }
}
