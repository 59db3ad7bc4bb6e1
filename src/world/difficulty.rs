//! The difficulty curve: a simulated calendar driving spawn rate and captions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Simulated calendar year, advanced by the year clock task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyClock {
    year: u32,
}

impl DifficultyClock {
    /// Start the calendar at `year`.
    #[must_use]
    pub const fn new(year: u32) -> Self {
        Self { year }
    }

    /// Current year.
    #[must_use]
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Advance by one year and return the new year.
    pub fn advance(&mut self) -> u32 {
        self.year = self.year.saturating_add(1);
        self.year
    }
}

/// One row of the spawn-rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnBracket {
    /// First year (inclusive) this bracket applies to.
    pub from_year: u32,
    /// Tics to wait between obstacle spawns.
    pub delay_tics: u32,
}

/// Piecewise-constant map from year to spawn delay.
///
/// Brackets are ordered by year; a year on a boundary belongs to the newer
/// bracket. Years before the first bracket use the first delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpawnTable {
    brackets: Vec<SpawnBracket>,
}

impl Default for SpawnTable {
    fn default() -> Self {
        Self {
            brackets: [
                (1961, 25),
                (1969, 20),
                (1981, 14),
                (1995, 10),
                (2010, 8),
                (2020, 2),
            ]
            .into_iter()
            .map(|(from_year, delay_tics)| SpawnBracket {
                from_year,
                delay_tics,
            })
            .collect(),
        }
    }
}

impl SpawnTable {
    /// Build a table, checking that it is ordered and never slows down.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, years are not strictly
    /// increasing, a delay is zero, or a later bracket has a longer delay.
    pub fn new(brackets: Vec<SpawnBracket>) -> Result<Self, ConfigurationError> {
        let table = Self { brackets };
        table.validate()?;
        Ok(table)
    }

    /// Check the table's ordering rules.
    ///
    /// # Errors
    ///
    /// See [`SpawnTable::new`].
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.brackets.is_empty() {
            return Err(ConfigurationError::EmptySpawnTable);
        }
        for bracket in &self.brackets {
            if bracket.delay_tics == 0 {
                return Err(ConfigurationError::ZeroSpawnDelay {
                    year: bracket.from_year,
                });
            }
        }
        for pair in self.brackets.windows(2) {
            if pair[1].from_year <= pair[0].from_year {
                return Err(ConfigurationError::UnorderedSpawnTable {
                    year: pair[1].from_year,
                });
            }
            if pair[1].delay_tics > pair[0].delay_tics {
                return Err(ConfigurationError::RisingSpawnDelay {
                    year: pair[1].from_year,
                });
            }
        }
        Ok(())
    }

    /// Spawn delay in tics for `year`.
    #[must_use]
    pub fn delay_for(&self, year: u32) -> u32 {
        self.brackets
            .iter()
            .rev()
            .find(|bracket| bracket.from_year <= year)
            .or_else(|| self.brackets.first())
            .map_or(1, |bracket| bracket.delay_tics)
    }

    /// The brackets in year order.
    #[must_use]
    pub fn brackets(&self) -> &[SpawnBracket] {
        &self.brackets
    }
}

/// Sparse year → caption table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milestones {
    phrases: BTreeMap<u32, String>,
}

impl Default for Milestones {
    fn default() -> Self {
        let phrases = [
            (1957, "First Sputnik"),
            (1961, "Gagarin flew!"),
            (1969, "Armstrong got on the moon!"),
            (1971, "First orbital space station Salute-1"),
            (1981, "Flight of the Shuttle Columbia"),
            (1998, "ISS start building"),
            (2011, "Messenger launch to Mercury"),
            (2020, "Take the plasma gun! Shoot the garbage!"),
        ];
        Self {
            phrases: phrases
                .into_iter()
                .map(|(year, phrase)| (year, phrase.to_string()))
                .collect(),
        }
    }
}

impl Milestones {
    /// Build a milestone table from `(year, phrase)` pairs.
    #[must_use]
    pub fn new(phrases: impl IntoIterator<Item = (u32, String)>) -> Self {
        Self {
            phrases: phrases.into_iter().collect(),
        }
    }

    /// Phrase for `year`, if that year is a milestone.
    #[must_use]
    pub fn phrase(&self, year: u32) -> Option<&str> {
        self.phrases.get(&year).map(String::as_str)
    }

    /// Caption rendered for `year`; the phrase part is empty for ordinary years.
    #[must_use]
    pub fn caption(&self, year: u32) -> String {
        format!("Year {year}  {}", self.phrase(year).unwrap_or_default())
    }
}
