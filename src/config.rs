//! Game settings.
//!
//! Every field has a default, so a config file only needs the settings it
//! changes. Settings are checked once by [`GameConfig::validate`] before a
//! game starts.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::physics::Kinematics;
use crate::world::{Milestones, SpawnTable};

/// Tunable settings for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Wall-clock length of a tic in milliseconds (0 runs flat out).
    pub tic_ms: u64,
    /// Number of background stars.
    pub stars: u32,
    /// Symbols stars are drawn with.
    pub star_symbols: Vec<char>,
    /// Year shown when the game starts.
    pub start_year: u32,
    /// Tics per simulated year.
    pub year_tics: u32,
    /// First year the ship's gun fires.
    pub gun_year: u32,
    /// Projectile speed in rows per tic.
    pub gun_speed: f64,
    /// Obstacle fall speed in rows per tic.
    pub garbage_speed: f64,
    /// Hits needed to break an obstacle.
    pub obstacle_health: u32,
    /// Ship handling.
    pub kinematics: Kinematics,
    /// Year → spawn delay brackets.
    pub spawn_table: SpawnTable,
    /// Year → caption phrases.
    pub milestones: Milestones,
    /// Fire one shot from the screen center when the game starts.
    pub opening_shot: bool,
    /// Ring the terminal bell on shots and explosions.
    pub bell: bool,
    /// Tics to keep running after game over; `None` runs until shutdown.
    pub game_over_linger_tics: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tic_ms: 100,
            stars: 100,
            star_symbols: vec!['+', '*', '.', ':'],
            start_year: 1957,
            year_tics: 15,
            gun_year: 2020,
            gun_speed: 2.0,
            garbage_speed: 0.5,
            obstacle_health: 1,
            kinematics: Kinematics::default(),
            spawn_table: SpawnTable::default(),
            milestones: Milestones::default(),
            opening_shot: true,
            bell: true,
            game_over_linger_tics: Some(30),
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds invalid settings.
    pub fn from_file(path: &Path) -> Result<Self, ConfigurationError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| ConfigurationError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Tic length as a [`Duration`].
    #[must_use]
    pub const fn tic_duration(&self) -> Duration {
        Duration::from_millis(self.tic_ms)
    }

    /// Check every setting.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let invalid = |name, reason| Err(ConfigurationError::InvalidSetting { name, reason });

        if self.star_symbols.is_empty() && self.stars > 0 {
            return invalid("star_symbols", "must not be empty");
        }
        if self.year_tics == 0 {
            return invalid("year_tics", "must be at least 1");
        }
        if !(self.gun_speed.is_finite() && self.gun_speed > 0.0) {
            return invalid("gun_speed", "must be a positive number");
        }
        if !(self.garbage_speed.is_finite() && self.garbage_speed > 0.0) {
            return invalid("garbage_speed", "must be a positive number");
        }
        if self.obstacle_health == 0 {
            return invalid("obstacle_health", "must be at least 1");
        }

        let kinematics = &self.kinematics;
        if !(0.0..1.0).contains(&kinematics.fading) {
            return invalid("kinematics.fading", "must be in [0, 1)");
        }
        if !(kinematics.acceleration.is_finite() && kinematics.acceleration >= 0.0) {
            return invalid("kinematics.acceleration", "must not be negative");
        }
        if !(kinematics.row_speed_limit.is_finite() && kinematics.row_speed_limit > 0.0) {
            return invalid("kinematics.row_speed_limit", "must be a positive number");
        }
        if !(kinematics.column_speed_limit.is_finite() && kinematics.column_speed_limit > 0.0) {
            return invalid("kinematics.column_speed_limit", "must be a positive number");
        }
        if !(kinematics.stop_threshold.is_finite() && kinematics.stop_threshold > 0.0) {
            return invalid("kinematics.stop_threshold", "must be a positive number");
        }

        self.spawn_table.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tic_ms": 20, "kinematics": {{ "fading": 0.5 }} }}"#).unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.tic_ms, 20);
        assert!((config.kinematics.fading - 0.5).abs() < f64::EPSILON);
        assert!((config.kinematics.acceleration - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.gun_year, 2020);
        assert_eq!(config.spawn_table, SpawnTable::default());
    }

    #[test]
    fn test_spawn_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "spawn_table": [ {{ "from_year": 1960, "delay_tics": 9 }}, {{ "from_year": 1970, "delay_tics": 3 }} ] }}"#
        )
        .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.spawn_table.delay_for(1950), 9);
        assert_eq!(config.spawn_table.delay_for(1975), 3);
    }

    #[test]
    fn test_rejects_rising_spawn_delay() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "spawn_table": [ {{ "from_year": 1960, "delay_tics": 3 }}, {{ "from_year": 1970, "delay_tics": 9 }} ] }}"#
        )
        .unwrap();

        assert!(matches!(
            GameConfig::from_file(file.path()),
            Err(ConfigurationError::RisingSpawnDelay { year: 1970 })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            GameConfig::from_file(file.path()),
            Err(ConfigurationError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GameConfig::from_file(Path::new("/nonexistent/debris.json")),
            Err(ConfigurationError::Io { .. })
        ));
    }

    #[test]
    fn test_invalid_settings() {
        let config = GameConfig {
            garbage_speed: 0.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidSetting {
                name: "garbage_speed",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.kinematics.fading = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidSetting {
                name: "kinematics.fading",
                ..
            })
        ));
    }
}
