use bioisle_lib::SpeciesParams;
use proptest::prelude::*;

use bioisle_lib::core::fitness;

proptest! {
    #[test]
    fn fitness_stays_within_unit_interval(age in 0u32..300, weight in -50.0f64..500.0) {
        for params in [SpeciesParams::herbivore(), SpeciesParams::carnivore()] {
            let value = fitness(age, weight, &params);
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn fitness_vanishes_without_positive_weight(age in 0u32..300, weight in -500.0f64..=0.0) {
        let params = SpeciesParams::herbivore();
        prop_assert_eq!(fitness(age, weight, &params), 0.0);
    }

    #[test]
    fn fitness_never_rises_with_age(age in 0u32..299, weight in 0.1f64..500.0) {
        let params = SpeciesParams::herbivore();
        let younger = fitness(age, weight, &params);
        let older = fitness(age + 1, weight, &params);
        prop_assert!(older <= younger);
    }

    #[test]
    fn fitness_never_falls_with_weight(age in 0u32..300, weight in 0.1f64..500.0) {
        let params = SpeciesParams::herbivore();
        let lighter = fitness(age, weight, &params);
        let heavier = fitness(age, weight + 1.0, &params);
        prop_assert!(heavier >= lighter);
    }
}
