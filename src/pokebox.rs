use crate::errors::BoxResult;
use crate::levels::Level;
use crate::pokemon::Pokemon;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use strum::{Display, EnumIter, EnumString};

/// Columns the box can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum SortKey {
    #[strum(serialize = "name")]
    Name,
    #[strum(to_string = "pokédex", serialize = "pokedex")]
    Pokedex,
    #[strum(serialize = "species")]
    Species,
    #[strum(serialize = "cp")]
    Cp,
    #[strum(serialize = "hp")]
    Hp,
    #[strum(serialize = "dustPrice")]
    DustPrice,
    #[strum(serialize = "level")]
    Level,
    #[strum(serialize = "atk")]
    Atk,
    #[strum(serialize = "def")]
    Def,
    #[strum(serialize = "sta")]
    Sta,
    #[strum(serialize = "perfection")]
    Perfection,
    #[strum(serialize = "perfectCP")]
    PerfectCp,
    #[strum(serialize = "poweredUpCP")]
    PoweredUpCp,
    #[strum(serialize = "maxCP")]
    MaxCp,
}

/// The player's saved Pokemon, plus the trainer level that caps power-ups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokeBox {
    #[serde(rename = "Level", default = "default_trainer_level")]
    trainer_level: u8,
    #[serde(rename = "Pokémon", default)]
    pokemon: Vec<Pokemon>,
}

fn default_trainer_level() -> u8 {
    1
}

impl Default for PokeBox {
    fn default() -> Self {
        PokeBox::new()
    }
}

impl PokeBox {
    pub fn new() -> Self {
        PokeBox {
            trainer_level: default_trainer_level(),
            pokemon: Vec::new(),
        }
    }

    /// Read a box from disk. A missing file is an empty box.
    pub fn load(path: &Path) -> BoxResult<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let pokebox = Self::from_json(&content)?;
                info!(
                    "loaded {} Pokemon from {}",
                    pokebox.len(),
                    path.display()
                );
                Ok(pokebox)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("{} does not exist, starting an empty box", path.display());
                Ok(PokeBox::new())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> BoxResult<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        info!("saved {} Pokemon to {}", self.len(), path.display());
        Ok(())
    }

    pub fn from_json(json: &str) -> BoxResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> BoxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn trainer_level(&self) -> u8 {
        self.trainer_level
    }

    pub fn set_trainer_level(&mut self, trainer_level: u8) {
        self.trainer_level = trainer_level;
    }

    /// Highest level any Pokemon in the box can currently be powered up to.
    pub fn max_level(&self) -> Level {
        Level::max_for_trainer(self.trainer_level)
    }

    pub fn add(&mut self, pokemon: Pokemon) {
        self.pokemon.push(pokemon);
    }

    pub fn remove(&mut self, index: usize) -> Option<Pokemon> {
        if index < self.pokemon.len() {
            Some(self.pokemon.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Pokemon> {
        self.pokemon.get(index)
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokemon.iter()
    }

    /// Stable sort by one column. Pokemon with an unknown value for the
    /// column sort as if it were the lowest possible value.
    pub fn sort(&mut self, key: SortKey, ascending: bool) {
        let max_level = self.max_level();
        self.pokemon.sort_by(|a, b| {
            let ordering = compare(key, max_level, a, b);
            let ordering = if ascending { ordering } else { ordering.reverse() };
            // Same pokedex entry: best first, whatever the direction.
            if key == SortKey::Pokedex {
                ordering.then_with(|| perfection(b).cmp(&perfection(a)))
            } else {
                ordering
            }
        });
    }
}

/// IV percentage, or the top of the range while the IVs are ambiguous.
fn perfection(pokemon: &Pokemon) -> u8 {
    pokemon
        .iv_percent()
        .unwrap_or_else(|| pokemon.iv_percent_range().1)
}

fn compare(key: SortKey, max_level: Level, a: &Pokemon, b: &Pokemon) -> Ordering {
    match key {
        SortKey::Name => a.name.as_deref().unwrap_or("").cmp(b.name.as_deref().unwrap_or("")),
        SortKey::Pokedex => {
            let a = a.pokedex().unwrap_or(u16::MAX);
            let b = b.pokedex().unwrap_or(u16::MAX);
            a.cmp(&b)
        }
        SortKey::Species => a.species.cmp(&b.species),
        SortKey::Cp => a.cp.cmp(&b.cp),
        SortKey::Hp => a.hp.cmp(&b.hp),
        SortKey::DustPrice => a.dust_price.cmp(&b.dust_price),
        // Option orders None first, which is the lowest value we want.
        SortKey::Level => a.level().cmp(&b.level()),
        SortKey::Atk => a.atk().cmp(&b.atk()),
        SortKey::Def => a.def().cmp(&b.def()),
        SortKey::Sta => a.sta().cmp(&b.sta()),
        SortKey::Perfection => perfection(a).cmp(&perfection(b)),
        SortKey::PerfectCp => a.perfect_cp(max_level).cmp(&b.perfect_cp(max_level)),
        SortKey::PoweredUpCp => a.powered_up_cp(max_level).cmp(&b.powered_up_cp(max_level)),
        SortKey::MaxCp => a.max_cp(max_level).cmp(&b.max_cp(max_level)),
    }
}
