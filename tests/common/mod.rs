#![allow(dead_code)]

use bioisle_lib::{AnimalSpec, Island, IslandConfig, Placement};

/// One habitable lowland cell with no reachable neighbour.
pub const SANCTUARY: &str = "WWW\nWLW\nWWW";

pub struct IslandBuilder {
    layout: String,
    config: IslandConfig,
    placements: Vec<Placement>,
}

impl IslandBuilder {
    pub fn new(layout: &str) -> Self {
        let config = IslandConfig {
            seed: Some(42),
            ..IslandConfig::default()
        };
        Self {
            layout: layout.to_string(),
            config,
            placements: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut IslandConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Queues `count` identical animals for the cell at 1-based (row, col).
    pub fn with_herd(
        mut self,
        row: usize,
        col: usize,
        species: &str,
        count: usize,
        age: u32,
        weight: f64,
    ) -> Self {
        self.placements.push(Placement {
            location: (row, col),
            population: vec![
                AnimalSpec {
                    species: species.to_string(),
                    age,
                    weight,
                };
                count
            ],
        });
        self
    }

    pub fn build(self) -> Island {
        let mut island =
            Island::from_layout(&self.layout, self.config).expect("layout should be valid");
        island
            .insert_population(&self.placements)
            .expect("population should be valid");
        island
    }
}

/// Disables every stochastic population change: no deaths, no births.
/// Useful for isolating a single stage's effect on counts.
pub fn freeze_population(config: &mut IslandConfig) {
    config.herbivore.omega = 0.0;
    config.carnivore.omega = 0.0;
    config.herbivore.gamma = 0.0;
    config.carnivore.gamma = 0.0;
}
