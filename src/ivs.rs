use crate::levels::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Highest value a single IV can take.
pub const MAX_IV: u8 = 15;
/// Highest possible sum of attack, defense and stamina IVs.
pub const MAX_IV_TOTAL: u16 = 3 * MAX_IV as u16;
/// Every value a single IV can take.
pub const IV_RANGE: RangeInclusive<u8> = 0..=MAX_IV;

/// One assignment of the hidden values behind a Pokemon's CP and HP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndividualValues {
    pub level: Level,
    pub atk: u8,
    pub def: u8,
    pub sta: u8,
}

impl IndividualValues {
    pub fn new(level: Level, atk: u8, def: u8, sta: u8) -> Self {
        IndividualValues {
            level,
            atk,
            def,
            sta,
        }
    }

    /// Same level with every IV at its maximum.
    pub fn perfect(level: Level) -> Self {
        IndividualValues::new(level, MAX_IV, MAX_IV, MAX_IV)
    }

    pub fn total(&self) -> u16 {
        self.atk as u16 + self.def as u16 + self.sta as u16
    }

    /// IV total as a whole percentage of the maximum of 45.
    pub fn percent_of_max(&self) -> u8 {
        (100.0 * self.total() as f64 / MAX_IV_TOTAL as f64).round() as u8
    }

    pub fn is_in_range(&self) -> bool {
        [self.atk, self.def, self.sta]
            .iter()
            .all(|iv| IV_RANGE.contains(iv))
    }

    /// Same IVs at a different level.
    pub fn at_level(&self, level: Level) -> Self {
        IndividualValues { level, ..*self }
    }
}

impl fmt::Display for IndividualValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lv {:<4} {:>2}/{:>2}/{:>2} ({}%)",
            self.level,
            self.atk,
            self.def,
            self.sta,
            self.percent_of_max()
        )
    }
}
