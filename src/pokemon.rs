use crate::appraisal::StatsAppraisal;
use crate::calculator::{calculate_cp, IvCalculator, QueryInputs};
use crate::errors::{RecordError, RecordResult};
use crate::ivs::IndividualValues;
use crate::levels::Level;
use crate::species::{base_stats, final_evolution, get_base_stats, pokedex_number};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What is known about a Pokemon's hidden values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ivs {
    /// Exactly one combination fits.
    Resolved(IndividualValues),
    /// None, or several, combinations fit.
    Candidates(Vec<IndividualValues>),
}

impl Ivs {
    pub fn from_candidates(mut candidates: Vec<IndividualValues>) -> Self {
        if candidates.len() == 1 {
            Ivs::Resolved(candidates.remove(0))
        } else {
            Ivs::Candidates(candidates)
        }
    }

    pub fn resolved(&self) -> Option<&IndividualValues> {
        match self {
            Ivs::Resolved(ivs) => Some(ivs),
            Ivs::Candidates(_) => None,
        }
    }

    pub fn candidates(&self) -> &[IndividualValues] {
        match self {
            Ivs::Resolved(ivs) => std::slice::from_ref(ivs),
            Ivs::Candidates(candidates) => candidates,
        }
    }
}

/// A Pokemon in the player's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PokemonJson", into = "PokemonJson")]
pub struct Pokemon {
    pub name: Option<String>,
    pub species: String,
    pub cp: u32,
    pub hp: u32,
    pub dust_price: u32,
    pub powered_up: bool,
    pub appraisal: StatsAppraisal,
    ivs: Ivs,
}

impl Pokemon {
    /// Build a record by deriving every IV combination that fits the query.
    pub fn derive(query: QueryInputs, name: Option<String>) -> RecordResult<Self> {
        let calculator = IvCalculator::new(query)?;
        let ivs = Ivs::from_candidates(calculator.derive_possible_ivs());
        Ok(Self::from_parts(calculator.query().clone(), name, ivs))
    }

    /// Build a record from IVs that are already known, skipping derivation.
    pub fn with_ivs(
        query: QueryInputs,
        name: Option<String>,
        ivs: IndividualValues,
    ) -> RecordResult<Self> {
        get_base_stats(&query.species)?;
        if !ivs.is_in_range() {
            return Err(RecordError::InvalidIndividualValues(format!(
                "{}/{}/{} exceeds 15",
                ivs.atk, ivs.def, ivs.sta
            )));
        }
        if ivs.level.cp_multiplier().is_none() {
            return Err(RecordError::InvalidIndividualValues(format!(
                "level {} is out of range",
                ivs.level
            )));
        }
        Ok(Self::from_parts(query, name, Ivs::Resolved(ivs)))
    }

    fn from_parts(query: QueryInputs, name: Option<String>, ivs: Ivs) -> Self {
        Pokemon {
            name: name.filter(|name| !name.is_empty()),
            species: query.species,
            cp: query.cp,
            hp: query.hp,
            dust_price: query.dust_price,
            powered_up: query.powered_up,
            appraisal: query.appraisal,
            ivs,
        }
    }

    pub fn query(&self) -> QueryInputs {
        QueryInputs {
            species: self.species.clone(),
            cp: self.cp,
            hp: self.hp,
            dust_price: self.dust_price,
            powered_up: self.powered_up,
            appraisal: self.appraisal,
        }
    }

    pub fn ivs(&self) -> &Ivs {
        &self.ivs
    }

    pub fn resolved_ivs(&self) -> Option<&IndividualValues> {
        self.ivs.resolved()
    }

    pub fn candidates(&self) -> &[IndividualValues] {
        self.ivs.candidates()
    }

    /// The name to show: the nickname, or the species when there is none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.species)
    }

    pub fn pokedex(&self) -> Option<u16> {
        pokedex_number(&self.species)
    }

    pub fn level(&self) -> Option<Level> {
        self.resolved_ivs().map(|ivs| ivs.level)
    }

    pub fn atk(&self) -> Option<u8> {
        self.resolved_ivs().map(|ivs| ivs.atk)
    }

    pub fn def(&self) -> Option<u8> {
        self.resolved_ivs().map(|ivs| ivs.def)
    }

    pub fn sta(&self) -> Option<u8> {
        self.resolved_ivs().map(|ivs| ivs.sta)
    }

    pub fn iv_percent(&self) -> Option<u8> {
        self.resolved_ivs().map(IndividualValues::percent_of_max)
    }

    /// Lowest and highest IV percentage across the candidates. With no
    /// candidates the range is inverted, `(100, 0)`.
    pub fn iv_percent_range(&self) -> (u8, u8) {
        self.candidates()
            .iter()
            .map(IndividualValues::percent_of_max)
            .fold((100, 0), |(min, max), percent| {
                (min.min(percent), max.max(percent))
            })
    }

    /// CP the resolved IVs would give `species` at `level`.
    pub fn projected_cp(&self, species: &str, level: Level) -> Option<u32> {
        let ivs = self.resolved_ivs()?.at_level(level);
        calculate_cp(&base_stats(species)?, &ivs)
    }

    /// CP of a 15/15/15 Pokemon of this species at `level`.
    pub fn perfect_cp(&self, level: Level) -> Option<u32> {
        self.resolved_ivs()?;
        calculate_cp(&base_stats(&self.species)?, &IndividualValues::perfect(level))
    }

    /// CP after powering up to `max_level`.
    pub fn powered_up_cp(&self, max_level: Level) -> Option<u32> {
        self.projected_cp(&self.species, max_level)
    }

    /// CP after evolving fully and powering up to `max_level`.
    pub fn max_cp(&self, max_level: Level) -> Option<u32> {
        self.projected_cp(final_evolution(&self.species)?, max_level)
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())?;
        if self.name.is_some() {
            write!(f, " ({})", self.species)?;
        }
        write!(f, " CP {} HP {}", self.cp, self.hp)?;
        match &self.ivs {
            Ivs::Resolved(ivs) => write!(f, " - {}", ivs),
            Ivs::Candidates(candidates) if candidates.is_empty() => {
                write!(f, " - no matching IVs")
            }
            Ivs::Candidates(candidates) => {
                let (min, max) = self.iv_percent_range();
                write!(f, " - {} possibilities, {}-{}%", candidates.len(), min, max)
            }
        }
    }
}

/// On-disk layout of a Pokemon record. Only resolved IVs are stored; any
/// other record is derived again when it is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PokemonJson {
    species: String,
    cp: u32,
    hp: u32,
    dust_price: u32,
    powered_up: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    appraisal: StatsAppraisal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ivs: Option<IndividualValues>,
}

impl From<Pokemon> for PokemonJson {
    fn from(pokemon: Pokemon) -> Self {
        let ivs = pokemon.resolved_ivs().copied();
        PokemonJson {
            species: pokemon.species,
            cp: pokemon.cp,
            hp: pokemon.hp,
            dust_price: pokemon.dust_price,
            powered_up: pokemon.powered_up,
            name: pokemon.name,
            appraisal: pokemon.appraisal,
            ivs,
        }
    }
}

impl TryFrom<PokemonJson> for Pokemon {
    type Error = RecordError;

    fn try_from(json: PokemonJson) -> Result<Self, Self::Error> {
        let query = QueryInputs {
            species: json.species,
            cp: json.cp,
            hp: json.hp,
            dust_price: json.dust_price,
            powered_up: json.powered_up,
            appraisal: json.appraisal,
        };
        match json.ivs {
            Some(ivs) => Pokemon::with_ivs(query, json.name, ivs),
            None => Pokemon::derive(query, json.name),
        }
    }
}
