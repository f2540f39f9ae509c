use crate::errors::{SpeciesDataError, SpeciesDataResult};
use schema::SpeciesRecord;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

// Compiled by build.rs from data/species.ron
static SPECIES_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/species.postcard"));

// Species table in pokedex order, decoded once on first use
static SPECIES_DATA: LazyLock<Vec<SpeciesRecord>> = LazyLock::new(|| {
    postcard::from_bytes(SPECIES_BYTES).expect("species table was validated by build.rs")
});

// Exact-name index into SPECIES_DATA
static SPECIES_INDEX: LazyLock<HashMap<&'static str, &'static SpeciesRecord>> =
    LazyLock::new(|| {
        SPECIES_DATA
            .iter()
            .map(|record| (record.name.as_str(), record))
            .collect()
    });

/// Base attack, defense and stamina of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseStats {
    pub attack: u16,
    pub defense: u16,
    pub stamina: u16,
}

impl From<&SpeciesRecord> for BaseStats {
    fn from(record: &SpeciesRecord) -> Self {
        BaseStats {
            attack: record.attack,
            defense: record.defense,
            stamina: record.stamina,
        }
    }
}

impl fmt::Display for BaseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ATK {} / DEF {} / STA {}",
            self.attack, self.defense, self.stamina
        )
    }
}

fn lookup(species: &str) -> Option<&'static SpeciesRecord> {
    SPECIES_INDEX.get(species).copied()
}

/// Base stats for a species. Names must match the catalog exactly.
pub fn base_stats(species: &str) -> Option<BaseStats> {
    lookup(species).map(BaseStats::from)
}

/// Same as [`base_stats`], but an unknown species is an error.
pub fn get_base_stats(species: &str) -> SpeciesDataResult<BaseStats> {
    base_stats(species).ok_or_else(|| SpeciesDataError::SpeciesNotFound(species.to_string()))
}

/// The last species in the evolution line. A species that does not evolve is
/// its own final evolution; an unknown species has none.
pub fn final_evolution(species: &str) -> Option<&'static str> {
    let mut current = lookup(species)?;
    while let Some(next) = current.evolves_into.as_deref().and_then(lookup) {
        current = next;
    }
    Some(current.name.as_str())
}

pub fn pokedex_number(species: &str) -> Option<u16> {
    lookup(species).map(|record| record.pokedex_number)
}

pub fn is_known_species(species: &str) -> bool {
    lookup(species).is_some()
}

/// All species names in pokedex order.
pub fn species_names() -> impl Iterator<Item = &'static str> {
    SPECIES_DATA.iter().map(|record| record.name.as_str())
}
