#[cfg(test)]
mod tests {
    use crate::errors::BoxError;
    use crate::importer::pokemon_from_csv;
    use crate::levels::Level;
    use crate::pokebox::{PokeBox, SortKey};
    use crate::pokemon::Pokemon;
    use crate::tests::common::ObservedPokemon;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn sample_box() -> PokeBox {
        let mut pokebox = PokeBox::new();
        pokebox.set_trainer_level(30);
        for (name, observed) in [
            ("Sparky", ObservedPokemon::new("Pikachu", 22.5, 10, 4, 13).powered_up()),
            ("Bulby", ObservedPokemon::new("Bulbasaur", 20.0, 12, 7, 9)),
            ("Wings", ObservedPokemon::new("Pidgey", 10.5, 8, 8, 8).powered_up()),
        ] {
            let query = observed.query();
            let record = Pokemon::with_ivs(query, Some(name.to_string()), observed.ivs()).unwrap();
            pokebox.add(record);
        }
        pokebox
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("box.json");
        let pokebox = sample_box();
        pokebox.save(&path).unwrap();
        assert!(path.exists());

        let loaded = PokeBox::load(&path).unwrap();
        assert_eq!(loaded, pokebox);
        assert_eq!(loaded.trainer_level(), 30);
        assert_eq!(loaded.max_level(), Level::new(31.5).unwrap());
    }

    #[test]
    fn test_saved_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("box.json");
        sample_box().save(&path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["Level"], 30);
        let pokemon = value["Pokémon"].as_array().unwrap();
        assert_eq!(pokemon.len(), 3);
        assert_eq!(pokemon[1]["name"], "Bulby");
        assert_eq!(pokemon[1]["ivs"]["atk"], 12);
    }

    #[test]
    fn test_missing_file_is_an_empty_box() {
        let dir = TempDir::new().unwrap();
        let pokebox = PokeBox::load(&dir.path().join("absent.json")).unwrap();
        assert!(pokebox.is_empty());
        assert_eq!(pokebox.trainer_level(), 1);
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("box.json");
        fs::write(&path, "{ \"Level\": 10, \"Pokémon\": [").unwrap();
        assert!(matches!(PokeBox::load(&path), Err(BoxError::Json(_))));
    }

    #[test]
    fn test_directory_is_not_a_box() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(PokeBox::load(dir.path()), Err(BoxError::Io(_))));
    }

    #[test]
    fn test_import_sort_and_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("box.json");

        let pikachu = ObservedPokemon::new("Pikachu", 22.5, 10, 4, 13).powered_up().query();
        let mewtwo = ObservedPokemon::new("Mewtwo", 25.0, 15, 14, 15).query();
        let text = format!(
            "Bolt,Pikachu,{},{},{},yes,22.5,10,4,13\nMew,Mewtwo,{},{},{},no,25,15,14,15\n",
            pikachu.cp, pikachu.hp, pikachu.dust_price, mewtwo.cp, mewtwo.hp, mewtwo.dust_price,
        );

        let mut pokebox = PokeBox::load(&path).unwrap();
        for pokemon in pokemon_from_csv(&text) {
            pokebox.add(pokemon);
        }
        pokebox.sort(SortKey::Cp, false);
        pokebox.save(&path).unwrap();

        let loaded = PokeBox::load(&path).unwrap();
        let names: Vec<&str> = loaded.iter().map(Pokemon::display_name).collect();
        assert_eq!(names, vec!["Mew", "Bolt"]);
    }
}
