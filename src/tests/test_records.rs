#[cfg(test)]
mod tests {
    use crate::errors::{ImportError, RecordError, SpeciesDataError};
    use crate::importer::{parse_row, pokemon_from_csv};
    use crate::ivs::IndividualValues;
    use crate::levels::Level;
    use crate::pokemon::{Ivs, Pokemon};
    use crate::tests::common::{appraisal_for, ObservedPokemon};
    use pretty_assertions::assert_eq;

    fn level(value: f64) -> Level {
        Level::new(value).unwrap()
    }

    /// A record whose appraisal pins the IVs down to one combination.
    fn resolved_dragonite() -> Pokemon {
        let observed = ObservedPokemon::new("Dragonite", 30.0, 15, 15, 15);
        let appraisal = appraisal_for(&observed.ivs());
        let query = observed.with_appraisal(appraisal).query();
        Pokemon::derive(query, Some("Drake".to_string())).unwrap()
    }

    #[test]
    fn test_resolved_record_accessors() {
        let drake = resolved_dragonite();
        assert_eq!(
            drake.resolved_ivs(),
            Some(&IndividualValues::perfect(level(30.0)))
        );
        assert_eq!(drake.level(), Some(level(30.0)));
        assert_eq!(drake.iv_percent(), Some(100));
        assert_eq!(drake.iv_percent_range(), (100, 100));
        assert_eq!(drake.pokedex(), Some(149));
        assert_eq!(drake.display_name(), "Drake");
    }

    #[test]
    fn test_perfect_cp_bounds_the_observed_cp() {
        let drake = resolved_dragonite();
        let at_level = drake.perfect_cp(level(30.0)).unwrap();
        assert!(at_level >= drake.cp);
        assert_eq!(at_level, drake.cp);

        let pidgey = Pokemon::with_ivs(
            ObservedPokemon::new("Pidgey", 10.5, 3, 8, 1).powered_up().query(),
            None,
            IndividualValues::new(level(10.5), 3, 8, 1),
        )
        .unwrap();
        assert!(pidgey.perfect_cp(level(10.5)).unwrap() > pidgey.cp);
    }

    #[test]
    fn test_power_up_and_evolution_projections() {
        let observed = ObservedPokemon::new("Dratini", 20.0, 10, 10, 10);
        let ivs = observed.ivs();
        let dratini = Pokemon::with_ivs(observed.query(), None, ivs).unwrap();

        let powered = dratini.powered_up_cp(level(30.0)).unwrap();
        assert!(powered > dratini.cp);
        let evolved = dratini.max_cp(level(30.0)).unwrap();
        assert_eq!(evolved, dratini.projected_cp("Dragonite", level(30.0)).unwrap());
        assert!(evolved > powered);

        // Fully evolved species project onto themselves.
        let drake = resolved_dragonite();
        assert_eq!(drake.max_cp(level(35.0)), drake.powered_up_cp(level(35.0)));
    }

    #[test]
    fn test_ambiguous_record() {
        let pidgey = Pokemon::derive(
            ObservedPokemon::new("Pidgey", 10.5, 8, 8, 8).powered_up().query(),
            None,
        )
        .unwrap();
        assert!(matches!(pidgey.ivs(), Ivs::Candidates(candidates) if candidates.len() > 1));
        assert_eq!(pidgey.atk(), None);
        assert_eq!(pidgey.iv_percent(), None);
        assert_eq!(pidgey.perfect_cp(level(20.0)), None);
        assert_eq!(pidgey.max_cp(level(20.0)), None);

        let (min, max) = pidgey.iv_percent_range();
        assert!(min <= max);
        let percents: Vec<u8> = pidgey
            .candidates()
            .iter()
            .map(IndividualValues::percent_of_max)
            .collect();
        assert_eq!(Some(&min), percents.iter().min());
        assert_eq!(Some(&max), percents.iter().max());
        assert!(pidgey.to_string().contains("possibilities"));
    }

    #[test]
    fn test_no_matching_ivs() {
        let query = ObservedPokemon::new("Bulbasaur", 20.0, 12, 7, 9).query();
        let mut impossible = query.clone();
        impossible.hp += 40;
        let record = Pokemon::derive(impossible, None).unwrap();
        assert!(record.candidates().is_empty());
        assert_eq!(record.iv_percent_range(), (100, 0));
        assert!(record.to_string().ends_with("no matching IVs"));
    }

    #[test]
    fn test_record_construction_errors() {
        let query = ObservedPokemon::new("Bulbasaur", 20.0, 12, 7, 9).query();

        let mut unknown = query.clone();
        unknown.species = "Agumon".to_string();
        assert_eq!(
            Pokemon::derive(unknown, None).unwrap_err(),
            RecordError::SpeciesData(SpeciesDataError::SpeciesNotFound("Agumon".to_string()))
        );

        let too_high = IndividualValues::new(level(20.0), 16, 0, 0);
        assert!(matches!(
            Pokemon::with_ivs(query.clone(), None, too_high),
            Err(RecordError::InvalidIndividualValues(_))
        ));

        let off_the_table = IndividualValues::new(Level::MAX.raised_by(1), 0, 0, 0);
        assert!(matches!(
            Pokemon::with_ivs(query, None, off_the_table),
            Err(RecordError::InvalidIndividualValues(_))
        ));
    }

    #[test]
    fn test_records_from_import_rows() {
        let observed = ObservedPokemon::new("Gyarados", 25.0, 14, 11, 14);
        let query = observed.query();
        let text = format!(
            "Name,Pokémon,CP,HP,Dust Price,Powered Up?,Level,ATK,DEF,STA\n\
             Red,Gyarados,{cp},{hp},{dust},no\n\
             Known,Gyarados,{cp},{hp},{dust},no,25,14,11,14\n",
            cp = query.cp,
            hp = query.hp,
            dust = query.dust_price,
        );
        let imported = pokemon_from_csv(&text);
        assert_eq!(imported.len(), 2);

        let red = &imported[0];
        assert_eq!(red.query(), query);
        assert!(red.candidates().contains(&observed.ivs()));

        let known = &imported[1];
        assert_eq!(known.resolved_ivs(), Some(&observed.ivs()));
    }

    #[test]
    fn test_import_row_with_unknown_species() {
        let row = parse_row("x,Agumon,100,30,1000,no").unwrap();
        assert!(matches!(
            row.into_pokemon(),
            Err(ImportError::Record(RecordError::SpeciesData(
                SpeciesDataError::SpeciesNotFound(_)
            )))
        ));
    }

    #[test]
    fn test_record_json_round_trip() {
        let drake = resolved_dragonite();
        let json = serde_json::to_value(&drake).unwrap();
        assert_eq!(json["name"], "Drake");
        assert_eq!(json["species"], "Dragonite");
        assert_eq!(json["dustPrice"], drake.dust_price);
        let back: Pokemon = serde_json::from_value(json).unwrap();
        assert_eq!(back, drake);
    }
}
