use serde::{Deserialize, Serialize};

/// One row of the species table as stored in `data/species.ron`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub pokedex_number: u16,
    pub name: String,
    pub attack: u16,
    pub defense: u16,
    pub stamina: u16,
    pub evolves_into: Option<String>, // Species name, must also be in the table
}

impl SpeciesRecord {
    pub fn evolves(&self) -> bool {
        self.evolves_into.is_some()
    }
}
