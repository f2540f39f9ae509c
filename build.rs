// Compiles the static game data under data/ into the binary.
//
// - data/species.ron is validated and re-encoded with postcard, then embedded
//   with include_bytes! and decoded lazily at runtime.
// - data/levels.ron becomes two phf maps keyed by stardust price and by
//   half-level step, plus the ordered list of valid stardust prices.

use schema::{LevelTableData, SpeciesRecord};
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=data/species.ron");
    println!("cargo:rerun-if-changed=data/levels.ron");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_path = Path::new(&out_dir);

    let species = load_species(Path::new("data/species.ron"));
    let species_bytes = postcard::to_allocvec(&species).expect("species table serializes");
    fs::write(out_path.join("species.postcard"), species_bytes)
        .expect("failed to write species.postcard");

    let levels = load_levels(Path::new("data/levels.ron"));
    let generated = fs::File::create(out_path.join("generated_data.rs"))
        .expect("failed to create generated_data.rs");
    write_level_tables(&levels, &mut BufWriter::new(generated));
}

fn load_species(path: &Path) -> Vec<SpeciesRecord> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    let species: Vec<SpeciesRecord> = ron::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e));

    let mut seen = HashSet::new();
    for record in &species {
        if !seen.insert(record.name.as_str()) {
            panic!("duplicate species '{}'", record.name);
        }
        if record.attack == 0 || record.defense == 0 || record.stamina == 0 {
            panic!("species '{}' has a zero base stat", record.name);
        }
    }

    // Every evolution must exist, and following the links must terminate.
    let links: HashMap<&str, &str> = species
        .iter()
        .filter(|record| record.evolves())
        .filter_map(|record| {
            record
                .evolves_into
                .as_deref()
                .map(|target| (record.name.as_str(), target))
        })
        .collect();
    for (from, to) in &links {
        if !seen.contains(to) {
            panic!("species '{}' evolves into unknown species '{}'", from, to);
        }
    }
    for start in links.keys() {
        let mut current = *start;
        let mut steps = 0;
        while let Some(next) = links.get(current) {
            current = next;
            steps += 1;
            if steps > species.len() {
                panic!("evolution chain starting at '{}' never ends", start);
            }
        }
    }

    species
}

fn load_levels(path: &Path) -> LevelTableData {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    ron::from_str(&content).unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

fn half_steps(level: f64) -> u8 {
    LevelTableData::half_steps(level)
        .unwrap_or_else(|| panic!("level {} is not a positive half-integer", level))
}

fn write_level_tables(levels: &LevelTableData, out: &mut impl Write) {
    let multiplier_steps: HashSet<u8> = levels
        .cp_multipliers
        .iter()
        .map(|(level, _)| half_steps(*level))
        .collect();

    let mut dust_map = phf_codegen::Map::new();
    let mut dust_costs: Vec<u32> = Vec::new();
    for (dust, level) in &levels.dust_costs {
        let steps = half_steps(*level);
        if !multiplier_steps.contains(&steps) {
            panic!("stardust price {} maps to level {} which has no CP multiplier", dust, level);
        }
        dust_map.entry(*dust, &steps.to_string());
        dust_costs.push(*dust);
    }
    dust_costs.sort_unstable();

    let mut multiplier_map = phf_codegen::Map::new();
    for (level, multiplier) in &levels.cp_multipliers {
        if *multiplier <= 0.0 {
            panic!("level {} has a non-positive CP multiplier", level);
        }
        multiplier_map.entry(half_steps(*level), &format!("{:?}", multiplier));
    }

    let max_steps = multiplier_steps.iter().copied().max().unwrap_or(0);

    writeln!(out, "/// Minimum level, in half-level steps, for each stardust price.").unwrap();
    writeln!(
        out,
        "static DUST_MIN_LEVEL: phf::Map<u32, u8> = {};",
        dust_map.build()
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// CP multiplier keyed by half-level step.").unwrap();
    writeln!(
        out,
        "static CP_MULTIPLIERS: phf::Map<u8, f64> = {};",
        multiplier_map.build()
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Every valid stardust price, ascending.").unwrap();
    writeln!(
        out,
        "static DUST_COSTS: [u32; {}] = {:?};",
        dust_costs.len(),
        dust_costs
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Highest level with a CP multiplier, in half-level steps.").unwrap();
    writeln!(out, "const MAX_LEVEL_STEPS: u8 = {};", max_steps).unwrap();
}
