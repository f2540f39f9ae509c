use serde::{Deserialize, Serialize};

/// The two level lookup tables as stored in `data/levels.ron`.
///
/// Levels are written the way the game shows them (`20.5`); the build script
/// converts them to whole half-level steps before generating lookup maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTableData {
    pub dust_costs: Vec<(u32, f64)>,     // stardust price -> minimum level
    pub cp_multipliers: Vec<(f64, f64)>, // level -> CP multiplier
}

impl LevelTableData {
    /// Convert a displayed level into half-level steps, rejecting anything
    /// that is not a positive multiple of 0.5.
    pub fn half_steps(level: f64) -> Option<u8> {
        let doubled = level * 2.0;
        if doubled.fract() != 0.0 || doubled < 1.0 || doubled > u8::MAX as f64 {
            return None;
        }
        Some(doubled as u8)
    }
}
