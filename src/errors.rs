use std::fmt;
use std::io;

/// Main error type for the Pokebase library
#[derive(Debug)]
pub enum PokebaseError {
    /// Error related to species or level table lookups
    SpeciesData(SpeciesDataError),
    /// Error building a Pokemon record
    Record(RecordError),
    /// Error reading a row of imported data
    Import(ImportError),
    /// Error loading or saving a box file
    Box(BoxError),
}

/// Errors related to species data operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeciesDataError {
    /// The species name does not match any catalog entry
    SpeciesNotFound(String),
    /// The stardust price is not one the game charges
    InvalidDustPrice(u32),
}

/// Errors related to building a Pokemon record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record's species or stardust price could not be resolved
    SpeciesData(SpeciesDataError),
    /// Manually supplied IVs are out of range
    InvalidIndividualValues(String),
}

/// Errors related to imported data
#[derive(Debug)]
pub enum ImportError {
    /// The import file could not be read
    Io(io::Error),
    /// The text is not well-formed comma-separated data
    Csv(csv::Error),
    /// A required column is missing or empty
    MissingField(&'static str),
    /// A numeric column could not be parsed
    InvalidNumber { field: &'static str, value: String },
    /// The row parsed but does not describe a valid Pokemon
    Record(RecordError),
}

/// Errors related to box persistence
#[derive(Debug)]
pub enum BoxError {
    /// The box file could not be read or written
    Io(io::Error),
    /// The box file is not valid JSON or does not match the box layout
    Json(serde_json::Error),
}

impl fmt::Display for PokebaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokebaseError::SpeciesData(err) => write!(f, "Species data error: {}", err),
            PokebaseError::Record(err) => write!(f, "Record error: {}", err),
            PokebaseError::Import(err) => write!(f, "Import error: {}", err),
            PokebaseError::Box(err) => write!(f, "Box error: {}", err),
        }
    }
}

impl fmt::Display for SpeciesDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeciesDataError::SpeciesNotFound(name) => write!(f, "Species not found: {}", name),
            SpeciesDataError::InvalidDustPrice(dust) => {
                write!(f, "Stardust price {} is not a power-up cost", dust)
            }
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::SpeciesData(err) => write!(f, "{}", err),
            RecordError::InvalidIndividualValues(details) => {
                write!(f, "Invalid individual values: {}", details)
            }
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "Could not read import file: {}", err),
            ImportError::Csv(err) => write!(f, "Malformed CSV: {}", err),
            ImportError::MissingField(field) => write!(f, "Missing field: {}", field),
            ImportError::InvalidNumber { field, value } => {
                write!(f, "Field {} is not a number: '{}'", field, value)
            }
            ImportError::Record(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for BoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxError::Io(err) => write!(f, "I/O error: {}", err),
            BoxError::Json(err) => write!(f, "Malformed box file: {}", err),
        }
    }
}

impl std::error::Error for PokebaseError {}
impl std::error::Error for SpeciesDataError {}
impl std::error::Error for RecordError {}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for BoxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoxError::Io(err) => Some(err),
            BoxError::Json(err) => Some(err),
        }
    }
}

impl From<SpeciesDataError> for PokebaseError {
    fn from(err: SpeciesDataError) -> Self {
        PokebaseError::SpeciesData(err)
    }
}

impl From<RecordError> for PokebaseError {
    fn from(err: RecordError) -> Self {
        PokebaseError::Record(err)
    }
}

impl From<ImportError> for PokebaseError {
    fn from(err: ImportError) -> Self {
        PokebaseError::Import(err)
    }
}

impl From<BoxError> for PokebaseError {
    fn from(err: BoxError) -> Self {
        PokebaseError::Box(err)
    }
}

impl From<SpeciesDataError> for RecordError {
    fn from(err: SpeciesDataError) -> Self {
        RecordError::SpeciesData(err)
    }
}

impl From<RecordError> for ImportError {
    fn from(err: RecordError) -> Self {
        ImportError::Record(err)
    }
}

impl From<io::Error> for ImportError {
    fn from(err: io::Error) -> Self {
        ImportError::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Csv(err)
    }
}

impl From<io::Error> for BoxError {
    fn from(err: io::Error) -> Self {
        BoxError::Io(err)
    }
}

impl From<serde_json::Error> for BoxError {
    fn from(err: serde_json::Error) -> Self {
        BoxError::Json(err)
    }
}

/// Type alias for Results using PokebaseError
pub type PokebaseResult<T> = Result<T, PokebaseError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;

/// Type alias for Results using RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Type alias for Results using ImportError
pub type ImportResult<T> = Result<T, ImportError>;

/// Type alias for Results using BoxError
pub type BoxResult<T> = Result<T, BoxError>;
