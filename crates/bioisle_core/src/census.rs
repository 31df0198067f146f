//! Per-cycle aggregate snapshots consumed by visualization collaborators.
//!
//! A [`Census`] is pulled from the island after a cycle and never feeds back
//! into the simulation: counts come from the population registry, the
//! per-cell grids and vitals are collected fresh from the cells.

use crate::animal::Species;
use crate::island::{Island, PopulationCount};
use serde::Serialize;

/// Age, weight and fitness of every living animal of one species.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Vitals {
    pub ages: Vec<u32>,
    pub weights: Vec<f64>,
    pub fitnesses: Vec<f64>,
}

/// Snapshot of the island after a cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Census {
    /// Completed simulation years.
    pub year: u32,
    pub counts: PopulationCount,
    pub rows: usize,
    pub cols: usize,
    /// Herbivores per cell, row-major.
    pub herbivore_map: Vec<u32>,
    /// Carnivores per cell, row-major.
    pub carnivore_map: Vec<u32>,
    pub herbivore_vitals: Vitals,
    pub carnivore_vitals: Vitals,
}

impl Island {
    /// Collects the current aggregate snapshot.
    #[must_use]
    pub fn census(&self) -> Census {
        let mut herbivore_map = vec![0u32; self.rows * self.cols];
        let mut carnivore_map = vec![0u32; self.rows * self.cols];
        let mut herbivore_vitals = Vitals::default();
        let mut carnivore_vitals = Vitals::default();

        for (idx, cell) in self.cells.iter().enumerate() {
            for species in [Species::Herbivore, Species::Carnivore] {
                let (map, vitals) = match species {
                    Species::Herbivore => (&mut herbivore_map, &mut herbivore_vitals),
                    Species::Carnivore => (&mut carnivore_map, &mut carnivore_vitals),
                };
                let herd = cell.herd(species);
                map[idx] = herd.len() as u32;
                let params = self.config.species(species);
                for animal in herd {
                    vitals.ages.push(animal.age());
                    vitals.weights.push(animal.weight());
                    vitals.fitnesses.push(animal.fitness(params));
                }
            }
        }

        Census {
            year: self.year(),
            counts: self.population(),
            rows: self.rows,
            cols: self.cols,
            herbivore_map,
            carnivore_map,
            herbivore_vitals,
            carnivore_vitals,
        }
    }
}
