mod common;

use bioisle_lib::{Island, IslandConfig};
use common::IslandBuilder;

const CONFIG_TOML: &str = r#"
seed = 42

[herbivore]
w_birth = 8.0
sigma_birth = 1.5
beta = 0.9
eta = 0.05
a_half = 40.0
phi_age = 0.6
w_half = 10.0
phi_weight = 0.1
mu = 0.25
gamma = 0.2
zeta = 3.5
xi = 1.2
omega = 0.4
F = 10.0
"#;

#[test]
fn toml_document_with_classic_keys_matches_the_defaults() {
    let config = IslandConfig::from_toml_str(CONFIG_TOML).unwrap();
    assert_eq!(config.herbivore, IslandConfig::default().herbivore);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn toml_loaded_island_replays_a_programmatic_one() {
    let config = IslandConfig::from_toml_str(CONFIG_TOML).unwrap();
    let mut from_toml = Island::from_layout("WWWW\nWLHW\nWWWW", config).unwrap();
    from_toml
        .insert_population(&[bioisle_lib::Placement {
            location: (2, 2),
            population: vec![
                bioisle_lib::AnimalSpec {
                    species: "Herbivore".into(),
                    age: 5,
                    weight: 20.0,
                };
                30
            ],
        }])
        .unwrap();
    let mut programmatic = IslandBuilder::new("WWWW\nWLHW\nWWWW")
        .with_herd(2, 2, "Herbivore", 30, 5, 20.0)
        .build();
    for _ in 0..10 {
        from_toml.advance_year();
        programmatic.advance_year();
        assert_eq!(from_toml.census(), programmatic.census());
    }
}

#[test]
fn terrain_overrides_change_feeding_outcomes() {
    // zero out lowland fodder: the rich cell behaves like desert
    let mut island = IslandBuilder::new(common::SANCTUARY)
        .with_config(common::freeze_population)
        .with_herd(2, 2, "Herbivore", 5, 5, 20.0)
        .build();
    island
        .set_terrain_params('L', &[("f_max".into(), 0.0)])
        .unwrap();
    let eta = island.config().herbivore.eta;
    island.advance_year();
    let expected = 20.0 * (1.0 - eta);
    let census = island.census();
    assert!(census
        .herbivore_vitals
        .weights
        .iter()
        .all(|&w| (w - expected).abs() < 1e-9));
}
