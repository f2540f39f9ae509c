use serde::{Deserialize, Serialize};
use std::fmt;

// Generated by build.rs from data/levels.ron:
// DUST_MIN_LEVEL, CP_MULTIPLIERS, DUST_COSTS and MAX_LEVEL_STEPS.
include!(concat!(env!("OUT_DIR"), "/generated_data.rs"));

/// A Pokemon level. Levels advance in half steps, so the value is stored as a
/// count of half levels to keep comparisons exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Level(u8);

impl Level {
    /// Lowest level a Pokemon can have.
    pub const MIN: Level = Level(2);
    /// Highest level with a known CP multiplier.
    pub const MAX: Level = Level(MAX_LEVEL_STEPS);

    /// Build a level from its displayed value. Returns `None` unless the value
    /// is a positive multiple of 0.5.
    pub fn new(level: f64) -> Option<Level> {
        schema::LevelTableData::half_steps(level).map(Level)
    }

    pub fn from_half_steps(steps: u8) -> Level {
        Level(steps)
    }

    pub fn half_steps(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 2.0
    }

    /// The level `half_steps` half levels above this one.
    pub fn raised_by(self, half_steps: u8) -> Level {
        Level(self.0.saturating_add(half_steps))
    }

    /// CP multiplier for this level, if the level is in the table.
    pub fn cp_multiplier(self) -> Option<f64> {
        CP_MULTIPLIERS.get(&self.0).copied()
    }

    /// Highest level a trainer can power a Pokemon up to: trainer level + 1.5,
    /// capped at the top of the multiplier table.
    pub fn max_for_trainer(trainer_level: u8) -> Level {
        let steps = (trainer_level as u16 * 2 + 3).min(MAX_LEVEL_STEPS as u16);
        Level(steps as u8)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

impl From<Level> for f64 {
    fn from(level: Level) -> f64 {
        level.as_f64()
    }
}

impl TryFrom<f64> for Level {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Level::new(value).ok_or_else(|| format!("{} is not a valid level", value))
    }
}

/// Lowest level a Pokemon can be at when its next power-up costs `dust`.
pub fn min_level_for_dust(dust: u32) -> Option<Level> {
    DUST_MIN_LEVEL.get(&dust).copied().map(Level)
}

/// Every stardust price the game charges for a power-up, ascending.
pub fn dust_costs() -> &'static [u32] {
    &DUST_COSTS
}
