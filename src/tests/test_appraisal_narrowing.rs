#[cfg(test)]
mod tests {
    use crate::appraisal::{Appraisal, BestStat, StatsAppraisal};
    use crate::calculator::derive_possible_ivs;
    use crate::ivs::IndividualValues;
    use crate::levels::Level;
    use crate::tests::common::{appraisal_for, ObservedPokemon};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(ObservedPokemon::new("Bulbasaur", 20.0, 12, 7, 9))]
    #[case(ObservedPokemon::new("Pidgey", 10.5, 8, 8, 2).powered_up())]
    #[case(ObservedPokemon::new("Gyarados", 25.0, 14, 11, 14))]
    #[case(ObservedPokemon::new("Rattata", 5.0, 3, 1, 0))]
    #[case(ObservedPokemon::new("Lapras", 30.5, 15, 15, 15).powered_up())]
    fn test_true_appraisal_narrows_and_keeps_the_actual_ivs(#[case] pokemon: ObservedPokemon) {
        let actual = pokemon.ivs();
        let appraisal = appraisal_for(&actual);
        assert!(appraisal.is_valid(&actual));

        let unknown = derive_possible_ivs(&pokemon.query());
        let narrowed = derive_possible_ivs(&pokemon.with_appraisal(appraisal).query());
        assert!(narrowed.len() <= unknown.len());
        assert!(narrowed.contains(&actual), "{} dropped by {}", actual, appraisal);
        for ivs in &narrowed {
            assert!(unknown.contains(ivs), "{} not in the unappraised set", ivs);
            assert!(appraisal.is_valid(ivs));
        }
    }

    #[test]
    fn test_wrong_appraisal_removes_the_actual_ivs() {
        let pokemon = ObservedPokemon::new("Bulbasaur", 20.0, 12, 7, 9);
        let actual = pokemon.ivs();
        // Claims stamina is best, but attack is.
        let wrong = StatsAppraisal::new(Appraisal::Decent, BestStat::Good, false, false, true);
        let narrowed = derive_possible_ivs(&pokemon.with_appraisal(wrong).query());
        assert!(!narrowed.contains(&actual));
        for ivs in &narrowed {
            assert!(ivs.sta > ivs.atk && ivs.sta > ivs.def);
        }
    }

    #[test]
    fn test_perfect_appraisal_only_admits_perfect_ivs() {
        let appraisal = StatsAppraisal::new(Appraisal::Best, BestStat::Best, true, true, true);
        assert_eq!(appraisal.atk_range(), 15..=15);
        assert_eq!(appraisal.def_range(), 15..=15);
        assert_eq!(appraisal.sta_range(), 15..=15);
        let level = Level::new(20.0).unwrap();
        for atk in 0..=15 {
            for def in 0..=15 {
                for sta in 0..=15 {
                    let ivs = IndividualValues::new(level, atk, def, sta);
                    assert_eq!(
                        appraisal.is_valid(&ivs),
                        atk == 15 && def == 15 && sta == 15,
                        "{}",
                        ivs
                    );
                }
            }
        }
    }
}
