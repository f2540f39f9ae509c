use crate::appraisal::{Appraisal, BestStat, StatsAppraisal};
use crate::calculator::{calculate_cp, calculate_hp, QueryInputs};
use crate::ivs::IndividualValues;
use crate::levels::{dust_costs, min_level_for_dust, Level};
use crate::species::base_stats;

/// A builder for queries that describe a Pokemon with known IVs, so tests can
/// check the derivation finds them again.
///
/// # Example
/// ```
/// let query = ObservedPokemon::new("Pikachu", 22.5, 10, 4, 13)
///     .powered_up()
///     .with_appraisal(StatsAppraisal::new(Appraisal::Strong, BestStat::Strong, false, false, true))
///     .query();
/// ```
pub struct ObservedPokemon {
    species: String,
    ivs: IndividualValues,
    powered_up: bool,
    appraisal: StatsAppraisal,
}

impl ObservedPokemon {
    /// Creates a new builder for a species at a level with the given IVs.
    pub fn new(species: &str, level: f64, atk: u8, def: u8, sta: u8) -> Self {
        let level = Level::new(level).unwrap_or_else(|| panic!("bad test level {}", level));
        Self {
            species: species.to_string(),
            ivs: IndividualValues::new(level, atk, def, sta),
            powered_up: false,
            appraisal: StatsAppraisal::NONE,
        }
    }

    /// Marks the Pokemon as powered up at least once.
    pub fn powered_up(mut self) -> Self {
        self.powered_up = true;
        self
    }

    pub fn with_appraisal(mut self, appraisal: StatsAppraisal) -> Self {
        self.appraisal = appraisal;
        self
    }

    pub fn ivs(&self) -> IndividualValues {
        self.ivs
    }

    /// Builds the query the game would show for this Pokemon.
    pub fn query(&self) -> QueryInputs {
        let base = base_stats(&self.species)
            .unwrap_or_else(|| panic!("unknown test species {}", self.species));
        let cp = calculate_cp(&base, &self.ivs).expect("test level has a multiplier");
        let hp = calculate_hp(&base, self.ivs.level, self.ivs.sta).expect("test level has a multiplier");
        QueryInputs::new(
            self.species.clone(),
            cp,
            hp,
            dust_price_for(self.ivs.level),
            self.powered_up,
        )
        .with_appraisal(self.appraisal)
    }
}

/// The stardust price of the next power-up at `level`.
pub fn dust_price_for(level: Level) -> u32 {
    dust_costs()
        .iter()
        .copied()
        .filter(|&dust| min_level_for_dust(dust).is_some_and(|min| min <= level))
        .last()
        .expect("level is at or above the first stardust price")
}

/// The appraisal the game would give for these IVs.
pub fn appraisal_for(ivs: &IndividualValues) -> StatsAppraisal {
    let best = ivs.atk.max(ivs.def).max(ivs.sta);
    let appraisal = match ivs.total() {
        37..=45 => Appraisal::Best,
        30..=36 => Appraisal::Strong,
        23..=29 => Appraisal::Decent,
        _ => Appraisal::NeedsImprovement,
    };
    let best_stat = match best {
        15 => BestStat::Best,
        13..=14 => BestStat::Strong,
        8..=12 => BestStat::Good,
        _ => BestStat::Ok,
    };
    StatsAppraisal::new(
        appraisal,
        best_stat,
        ivs.atk == best,
        ivs.def == best,
        ivs.sta == best,
    )
}
