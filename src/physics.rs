//! Ship kinematics: inertial velocity damped toward player input.

use serde::{Deserialize, Serialize};

use crate::geometry::clamp;

/// Discrete directional input on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Toward smaller coordinates (up or left).
    Decrease,
    /// No input.
    #[default]
    Hold,
    /// Toward larger coordinates (down or right).
    Increase,
}

impl Direction {
    /// Build a direction from a signed delta (`-1`, `0`, `1`; other values
    /// saturate to their sign).
    #[must_use]
    pub const fn from_delta(delta: i8) -> Self {
        match delta {
            i8::MIN..=-1 => Self::Decrease,
            0 => Self::Hold,
            1..=i8::MAX => Self::Increase,
        }
    }

    /// The signed delta (`-1`, `0`, `1`).
    #[must_use]
    pub const fn delta(self) -> i8 {
        match self {
            Self::Decrease => -1,
            Self::Hold => 0,
            Self::Increase => 1,
        }
    }
}

/// Tunable constants for ship handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kinematics {
    /// Fraction of velocity kept each tic (0.0 stops instantly).
    pub fading: f64,
    /// Peak acceleration per tic when the ship is at rest.
    pub acceleration: f64,
    /// Maximum absolute row speed (cells per tic).
    pub row_speed_limit: f64,
    /// Maximum absolute column speed (cells per tic).
    pub column_speed_limit: f64,
    /// Speeds below this magnitude snap to zero.
    pub stop_threshold: f64,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            fading: 0.8,
            acceleration: 0.75,
            row_speed_limit: 2.0,
            column_speed_limit: 2.0,
            stop_threshold: 0.1,
        }
    }
}

impl Kinematics {
    /// Compute the next velocity from the current one and player input.
    ///
    /// Velocity first fades, then accelerates toward any pressed direction.
    /// Acceleration shrinks as speed approaches the limit (it follows
    /// `cos(speed / limit)`), the result is clamped to the limit, and tiny
    /// speeds snap to zero so the ship drifts to a full stop.
    #[must_use]
    pub fn update_velocity(
        &self,
        row_speed: f64,
        column_speed: f64,
        rows_direction: Direction,
        columns_direction: Direction,
    ) -> (f64, f64) {
        (
            self.update_axis(row_speed, rows_direction, self.row_speed_limit),
            self.update_axis(column_speed, columns_direction, self.column_speed_limit),
        )
    }

    fn update_axis(&self, speed: f64, direction: Direction, limit: f64) -> f64 {
        let limit = limit.abs();
        let mut speed = speed * self.fading;

        if direction != Direction::Hold && limit > 0.0 {
            let delta = (speed / limit).cos() * self.acceleration;
            speed += delta * f64::from(direction.delta());
        }

        let speed = clamp(speed, -limit, limit);
        if speed.abs() < self.stop_threshold {
            0.0
        } else {
            speed
        }
    }

    /// Upper bound on the number of zero-input updates needed to bring any
    /// clamped speed to rest.
    #[must_use]
    pub fn calls_to_rest(&self) -> u32 {
        let limit = self.row_speed_limit.abs().max(self.column_speed_limit.abs());
        if self.fading <= 0.0 || limit < self.stop_threshold {
            return 1;
        }
        // limit * fading^n < threshold  =>  n > ln(threshold / limit) / ln(fading)
        let n = (self.stop_threshold / limit).ln() / self.fading.ln();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = n.ceil().max(0.0) as u32;
        n + 2
    }
}
