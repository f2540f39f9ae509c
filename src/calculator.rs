//! Individual value derivation.
//!
//! Works backwards from what the game shows (CP, HP, the stardust price of the
//! next power-up) to every level and IV combination that produces it. The
//! search is brute force: at most four levels, sixteen stamina values and a
//! 16x16 attack/defense grid.

use crate::appraisal::StatsAppraisal;
use crate::errors::{SpeciesDataError, SpeciesDataResult};
use crate::ivs::IndividualValues;
use crate::levels::{min_level_for_dust, Level};
use crate::species::{get_base_stats, BaseStats};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// The game never displays a CP or HP below this.
pub const MIN_DISPLAYED_STAT: u32 = 10;

/// Levels covered by a single stardust price: the minimum and the next three
/// half levels.
const DUST_PRICE_LEVEL_SPAN: u8 = 4;

/// What the player can read off the screen for one Pokemon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInputs {
    pub species: String,
    pub cp: u32,
    pub hp: u32,
    pub dust_price: u32,
    pub powered_up: bool,
    #[serde(default)]
    pub appraisal: StatsAppraisal,
}

impl QueryInputs {
    pub fn new(species: impl Into<String>, cp: u32, hp: u32, dust_price: u32, powered_up: bool) -> Self {
        QueryInputs {
            species: species.into(),
            cp,
            hp,
            dust_price,
            powered_up,
            appraisal: StatsAppraisal::NONE,
        }
    }

    pub fn with_appraisal(mut self, appraisal: StatsAppraisal) -> Self {
        self.appraisal = appraisal;
        self
    }
}

/// Displayed CP for a species at a level with the given IVs.
///
/// Returns `None` when the level has no CP multiplier.
pub fn calculate_cp(base: &BaseStats, ivs: &IndividualValues) -> Option<u32> {
    let multiplier = ivs.level.cp_multiplier()?;
    let attack = (base.attack + ivs.atk as u16) as f64;
    let defense = (base.defense + ivs.def as u16) as f64;
    let stamina = (base.stamina + ivs.sta as u16) as f64;
    let cp = attack * defense.sqrt() * stamina.sqrt() * multiplier.powi(2) / 10.0;
    Some(floor_displayed(cp))
}

/// Displayed HP for a species at a level with the given stamina IV.
pub fn calculate_hp(base: &BaseStats, level: Level, sta: u8) -> Option<u32> {
    let multiplier = level.cp_multiplier()?;
    let hp = (base.stamina + sta as u16) as f64 * multiplier;
    Some(floor_displayed(hp))
}

fn floor_displayed(value: f64) -> u32 {
    value.max(MIN_DISPLAYED_STAT as f64).floor() as u32
}

/// Levels a Pokemon can be at given the price of its next power-up. A Pokemon
/// that was never powered up sits on a whole level.
pub fn candidate_levels(dust_price: u32, powered_up: bool) -> Vec<Level> {
    let Some(min_level) = min_level_for_dust(dust_price) else {
        return Vec::new();
    };
    let step = if powered_up { 1 } else { 2 };
    (0..DUST_PRICE_LEVEL_SPAN)
        .step_by(step)
        .map(|offset| min_level.raised_by(offset))
        .collect()
}

/// A validated query, bound to the species' base stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IvCalculator {
    query: QueryInputs,
    base: BaseStats,
}

impl IvCalculator {
    /// Fails if the species is not in the catalog or the stardust price is
    /// not one the game charges.
    pub fn new(query: QueryInputs) -> SpeciesDataResult<Self> {
        let base = get_base_stats(&query.species)?;
        if min_level_for_dust(query.dust_price).is_none() {
            return Err(SpeciesDataError::InvalidDustPrice(query.dust_price));
        }
        Ok(IvCalculator { query, base })
    }

    pub fn query(&self) -> &QueryInputs {
        &self.query
    }

    pub fn base_stats(&self) -> BaseStats {
        self.base
    }

    /// Every level and IV combination matching the query, in ascending level
    /// order, then by stamina, defense and attack.
    pub fn derive_possible_ivs(&self) -> Vec<IndividualValues> {
        let levels = candidate_levels(self.query.dust_price, self.query.powered_up);
        let appraisal = &self.query.appraisal;

        let possible: Vec<IndividualValues> = levels
            .iter()
            .flat_map(|&level| self.possible_ivs_for_level(level))
            .filter(|ivs| appraisal.is_valid(ivs))
            .collect();

        debug!(
            "{} CP {} HP {} at {} stardust: searched {} level(s), found {} combination(s)",
            self.query.species,
            self.query.cp,
            self.query.hp,
            self.query.dust_price,
            levels.len(),
            possible.len()
        );
        possible
    }

    fn possible_ivs_for_level(&self, level: Level) -> Vec<IndividualValues> {
        let appraisal = &self.query.appraisal;
        let mut possible = Vec::new();
        for sta in self.possible_stamina(level) {
            for def in appraisal.def_range() {
                for atk in appraisal.atk_range() {
                    let ivs = IndividualValues::new(level, atk, def, sta);
                    if calculate_cp(&self.base, &ivs) == Some(self.query.cp) {
                        possible.push(ivs);
                    }
                }
            }
        }
        possible
    }

    fn possible_stamina(&self, level: Level) -> Vec<u8> {
        let sta_range = self.query.appraisal.sta_range();
        let hp = Some(self.query.hp);

        // HP only grows with stamina, so the bounds rule out a level quickly.
        let min_hp = calculate_hp(&self.base, level, *sta_range.start());
        let max_hp = calculate_hp(&self.base, level, *sta_range.end());
        if hp < min_hp || hp > max_hp {
            return Vec::new();
        }

        sta_range
            .filter(|&sta| calculate_hp(&self.base, level, sta) == hp)
            .collect()
    }
}

/// Every level and IV combination that produces the observed CP and HP.
///
/// An unknown species or stardust price yields no combinations.
pub fn derive_possible_ivs(query: &QueryInputs) -> Vec<IndividualValues> {
    match IvCalculator::new(query.clone()) {
        Ok(calculator) => calculator.derive_possible_ivs(),
        Err(err) => {
            warn!("no IVs derived: {}", err);
            Vec::new()
        }
    }
}
