// In: src/lib.rs

//! Pokebase
//!
//! Works out the hidden individual values (IVs) of a Pokemon GO Pokemon from
//! what the game shows: CP, HP, the stardust price of the next power-up and
//! the team leader's appraisal. Every combination that fits is returned;
//! narrowing them down is left to more observations.

// --- MODULE DECLARATIONS ---
pub mod appraisal;
pub mod calculator;
pub mod errors;
pub mod importer;
pub mod ivs;
pub mod levels;
pub mod pokebox;
pub mod pokemon;
pub mod species;

#[cfg(test)]
mod tests;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{LevelTableData, SpeciesRecord};

// --- From this crate's modules (`src/`) ---

// Derivation engine and its inputs.
pub use calculator::{calculate_cp, calculate_hp, derive_possible_ivs, IvCalculator, QueryInputs};

// Core value types.
pub use appraisal::{Appraisal, BestStat, BestStats, StatsAppraisal};
pub use ivs::IndividualValues;
pub use levels::Level;

// Static data access.
pub use levels::{dust_costs, min_level_for_dust};
pub use species::{base_stats, final_evolution, BaseStats};

// Records and the collection that holds them.
pub use importer::{pokemon_from_csv, pokemon_from_csv_file};
pub use pokebox::{PokeBox, SortKey};
pub use pokemon::{Ivs, Pokemon};

// Crate-specific error and result types.
pub use errors::{
    BoxError, BoxResult, ImportError, ImportResult, PokebaseError, PokebaseResult, RecordError,
    RecordResult, SpeciesDataError, SpeciesDataResult,
};
