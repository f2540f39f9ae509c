//! Import of Pokemon from comma-separated text.
//!
//! Columns, in order: Name, Species, CP, HP, Dust Price, Powered Up?, Level,
//! ATK, DEF, STA. The last four are optional; when all of them are present
//! and parse, the IVs are taken as known, otherwise they are derived.
//! Fields may be quoted, so a nickname can contain a comma.

use crate::calculator::QueryInputs;
use crate::errors::{ImportError, ImportResult};
use crate::ivs::IndividualValues;
use crate::levels::Level;
use crate::pokemon::Pokemon;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

// "Pidgey 3": a name with a trailing sequence number
static NAME_SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+) (\d+)$").expect("name pattern is valid"));

/// One parsed row, before it becomes a [`Pokemon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedRow {
    pub name: Option<String>,
    pub query: QueryInputs,
    pub ivs: Option<IndividualValues>,
}

impl ImportedRow {
    pub fn into_pokemon(self) -> ImportResult<Pokemon> {
        let pokemon = match self.ivs {
            Some(ivs) => Pokemon::with_ivs(self.query, self.name, ivs)?,
            None => Pokemon::derive(self.query, self.name)?,
        };
        Ok(pokemon)
    }
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes())
}

fn field(record: &StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn required<'a>(record: &'a StringRecord, index: usize, name: &'static str) -> ImportResult<&'a str> {
    field(record, index).ok_or(ImportError::MissingField(name))
}

fn number<T: FromStr>(value: &str, name: &'static str) -> ImportResult<T> {
    value.parse().map_err(|_| ImportError::InvalidNumber {
        field: name,
        value: value.to_string(),
    })
}

/// "TRUE" or "YES" in any case means powered up; anything else does not.
pub fn is_powered_up(value: Option<&str>) -> bool {
    value.is_some_and(|value| value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes"))
}

fn parse_ivs(level: &str, atk: &str, def: &str, sta: &str) -> ImportResult<IndividualValues> {
    let value: f64 = number(level, "Level")?;
    let level = Level::new(value).ok_or_else(|| ImportError::InvalidNumber {
        field: "Level",
        value: value.to_string(),
    })?;
    Ok(IndividualValues::new(
        level,
        number(atk, "ATK")?,
        number(def, "DEF")?,
        number(sta, "STA")?,
    ))
}

/// Level, ATK, DEF and STA when all four are present. A group that is
/// present but does not parse is ignored, so the IVs get derived instead.
fn known_ivs(record: &StringRecord) -> Option<IndividualValues> {
    let (level, atk, def, sta) = (
        field(record, 6)?,
        field(record, 7)?,
        field(record, 8)?,
        field(record, 9)?,
    );
    match parse_ivs(level, atk, def, sta) {
        Ok(ivs) => Some(ivs),
        Err(err) => {
            warn!("ignoring IV columns {},{},{},{}: {}", level, atk, def, sta, err);
            None
        }
    }
}

fn parse_record(record: &StringRecord) -> ImportResult<ImportedRow> {
    let name = field(record, 0).map(str::to_string);
    let species = required(record, 1, "Species")?;
    let cp = number(required(record, 2, "CP")?, "CP")?;
    let hp = number(required(record, 3, "HP")?, "HP")?;
    let dust_price = number(required(record, 4, "Dust Price")?, "Dust Price")?;
    let powered_up = is_powered_up(field(record, 5));

    Ok(ImportedRow {
        name,
        query: QueryInputs::new(species, cp, hp, dust_price, powered_up),
        ivs: known_ivs(record),
    })
}

/// Parse a single line of comma-separated fields.
pub fn parse_row(line: &str) -> ImportResult<ImportedRow> {
    match reader(line).records().next() {
        Some(record) => parse_record(&record?),
        None => Err(ImportError::MissingField("Species")),
    }
}

/// Split "Pidgey 3" into ("Pidgey", 3).
fn name_and_sequence(name: &str) -> Option<(String, u32)> {
    let captures = NAME_SEQUENCE.captures(name)?;
    let sequence = captures[2].parse().ok()?;
    Some((captures[1].to_string(), sequence))
}

/// Tracks the last imported name so that a run of rows like "Pidgey",
/// "Pidgey 1", "Pidgey 2" collapses into the last row, named "Pidgey".
#[derive(Debug, Default)]
struct SequenceTracker {
    previous: (String, u32),
}

impl SequenceTracker {
    /// Returns the base name when `name` continues the previous row's sequence.
    fn continues(&mut self, name: Option<&str>) -> Option<String> {
        let name = name?;
        if let Some((base, sequence)) = name_and_sequence(name) {
            if base == self.previous.0 && sequence == self.previous.1 + 1 {
                self.previous = (base.clone(), sequence);
                return Some(base);
            }
        }
        self.previous = (name.to_string(), 0);
        None
    }
}

/// Import every valid row of `text`. Blank and malformed rows (including a
/// header row) are skipped.
pub fn pokemon_from_csv(text: &str) -> Vec<Pokemon> {
    let mut imported: Vec<Pokemon> = Vec::new();
    let mut tracker = SequenceTracker::default();

    for (index, record) in reader(text).records().enumerate() {
        let line = record
            .as_ref()
            .ok()
            .and_then(StringRecord::position)
            .map_or(index as u64 + 1, |position| position.line());
        let parsed = record
            .map_err(ImportError::from)
            .and_then(|record| parse_record(&record))
            .and_then(ImportedRow::into_pokemon);
        let mut pokemon = match parsed {
            Ok(pokemon) => pokemon,
            Err(err) => {
                warn!("skipping line {}: {}", line, err);
                continue;
            }
        };

        if let Some(base) = tracker.continues(pokemon.name.as_deref()) {
            if let Some(replaced) = imported.pop() {
                debug!("{} replaces {}", base, replaced.display_name());
            }
            pokemon.name = Some(base);
        }
        imported.push(pokemon);
    }

    imported
}

/// Read a CSV file and import its rows.
pub fn pokemon_from_csv_file(path: &Path) -> ImportResult<Vec<Pokemon>> {
    let text = fs::read_to_string(path)?;
    let imported = pokemon_from_csv(&text);
    info!("imported {} Pokemon from {}", imported.len(), path.display());
    Ok(imported)
}
