// Pokebase Schema - Shared data definitions
// This crate holds the record types that describe the static game data.
// Both the main pokebase crate and its build script depend on it, so the
// RON files under data/ are parsed once at build time and decoded at runtime
// with exactly the same types.

pub use level_data::*;
pub use species_data::*;

pub mod level_data;
pub mod species_data;
