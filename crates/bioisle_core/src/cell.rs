//! One grid location: terrain category, yearly fodder and the resident
//! animals, together with the per-cell share of each cycle stage.

use crate::animal::{Animal, BirthOutcome, Species};
use crate::config::IslandConfig;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Terrain category of a cell. Water is the only impassable category; the
/// other three differ in fodder capacity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Lowland,
    Highland,
    Desert,
    Water,
}

impl Terrain {
    /// Maps a layout character to a terrain category.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'L' => Some(Terrain::Lowland),
            'H' => Some(Terrain::Highland),
            'D' => Some(Terrain::Desert),
            'W' => Some(Terrain::Water),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> char {
        match self {
            Terrain::Lowland => 'L',
            Terrain::Highland => 'H',
            Terrain::Desert => 'D',
            Terrain::Water => 'W',
        }
    }

    /// Whether animals can live in or migrate into this terrain.
    #[must_use]
    pub fn is_accessible(self) -> bool {
        !matches!(self, Terrain::Water)
    }
}

/// One cell of the island grid.
#[derive(Debug, Clone)]
pub struct Cell {
    pub(crate) terrain: Terrain,
    pub(crate) available_fodder: f64,
    pub(crate) herbivores: Vec<Animal>,
    pub(crate) carnivores: Vec<Animal>,
    /// Indices of the four neighbouring cells (N, E, S, W), `None` at the
    /// grid edge.
    pub(crate) neighbours: [Option<usize>; 4],
}

impl Cell {
    pub(crate) fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            available_fodder: 0.0,
            herbivores: Vec::new(),
            carnivores: Vec::new(),
            neighbours: [None; 4],
        }
    }

    pub(crate) fn herd(&self, species: Species) -> &Vec<Animal> {
        match species {
            Species::Herbivore => &self.herbivores,
            Species::Carnivore => &self.carnivores,
        }
    }

    pub(crate) fn herd_mut(&mut self, species: Species) -> &mut Vec<Animal> {
        match species {
            Species::Herbivore => &mut self.herbivores,
            Species::Carnivore => &mut self.carnivores,
        }
    }

    /// Restocks fodder to the terrain maximum for a new cycle.
    pub(crate) fn reset_fodder(&mut self, f_max: f64) {
        self.available_fodder = f_max;
    }

    /// Feeds herbivores in strictly descending fitness order, ties broken by
    /// arrival order. Each eats `min(appetite, remaining fodder)` at most
    /// once; the ranking is fixed at stage start even though weights change
    /// as animals eat.
    pub(crate) fn graze(&mut self, config: &IslandConfig) {
        let params = &config.herbivore;
        let scores: Vec<f64> = self
            .herbivores
            .iter()
            .map(|animal| animal.fitness(params))
            .collect();
        let mut order: Vec<usize> = (0..self.herbivores.len()).collect();
        order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
        for idx in order {
            if self.available_fodder <= 0.0 {
                break;
            }
            let ration = params.appetite.min(self.available_fodder);
            self.available_fodder -= ration;
            self.herbivores[idx].eat(ration, params);
        }
    }

    /// Runs the hunting stage for this cell. Carnivores take turns in a
    /// random order; each scans the living herbivores from weakest to
    /// fittest, stopping once its cumulative weight eaten reaches its
    /// appetite. A single large kill may overshoot the appetite.
    ///
    /// Returns the number of herbivores killed.
    pub(crate) fn hunt<R: Rng>(&mut self, config: &IslandConfig, rng: &mut R) -> usize {
        let herb_params = &config.herbivore;
        let carn_params = &config.carnivore;
        let mut kills = 0;

        let mut turns: Vec<usize> = (0..self.carnivores.len()).collect();
        turns.shuffle(rng);
        for hunter in turns {
            let scores: Vec<f64> = self
                .herbivores
                .iter()
                .map(|animal| animal.fitness(herb_params))
                .collect();
            let mut prey_order: Vec<usize> = (0..self.herbivores.len()).collect();
            prey_order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

            let mut eaten = 0.0;
            let mut killed: Vec<usize> = Vec::new();
            for prey in prey_order {
                if eaten >= carn_params.appetite {
                    break;
                }
                if self.carnivores[hunter].hunts_down(scores[prey], carn_params, rng) {
                    let meal = self.herbivores[prey].weight();
                    eaten += meal;
                    self.carnivores[hunter].eat(meal, carn_params);
                    killed.push(prey);
                }
            }
            killed.sort_unstable_by(|a, b| b.cmp(a));
            for prey in killed {
                self.herbivores.remove(prey);
                kills += 1;
            }
        }
        kills
    }

    /// Runs the procreation stage for one species. Only animals resident
    /// before the stage are evaluated, against the pre-stage count; newborns
    /// are buffered and appended afterwards so they neither raise N nor
    /// procreate themselves this year.
    ///
    /// Returns the number of births.
    pub(crate) fn breed<R: Rng>(
        &mut self,
        species: Species,
        config: &IslandConfig,
        rng: &mut R,
    ) -> usize {
        let params = config.species(species);
        let herd = match species {
            Species::Herbivore => &mut self.herbivores,
            Species::Carnivore => &mut self.carnivores,
        };
        let residents = herd.len();
        let mut newborns = Vec::new();
        for idx in 0..residents {
            if herd[idx].attempts_procreation(residents, params, rng) {
                if let BirthOutcome::Offspring(child) = herd[idx].give_birth(params, rng) {
                    newborns.push(child);
                }
            }
        }
        let births = newborns.len();
        herd.append(&mut newborns);
        births
    }

    /// Ages every resident by one year.
    pub(crate) fn age_residents(&mut self) {
        for animal in self.herbivores.iter_mut().chain(self.carnivores.iter_mut()) {
            animal.grow_older();
        }
    }

    /// Applies the yearly weight loss to every resident.
    pub(crate) fn starve_residents(&mut self, config: &IslandConfig) {
        for animal in &mut self.herbivores {
            animal.lose_weight(&config.herbivore);
        }
        for animal in &mut self.carnivores {
            animal.lose_weight(&config.carnivore);
        }
    }

    /// Evaluates death for every resident, removing the dead.
    /// Returns (herbivore deaths, carnivore deaths).
    pub(crate) fn cull<R: Rng>(&mut self, config: &IslandConfig, rng: &mut R) -> (usize, usize) {
        let herb_deaths = Self::cull_herd(&mut self.herbivores, config, rng);
        let carn_deaths = Self::cull_herd(&mut self.carnivores, config, rng);
        (herb_deaths, carn_deaths)
    }

    fn cull_herd<R: Rng>(herd: &mut Vec<Animal>, config: &IslandConfig, rng: &mut R) -> usize {
        let before = herd.len();
        let mut survivors = Vec::with_capacity(before);
        for animal in herd.drain(..) {
            let params = config.species(animal.species());
            if !animal.dies(params, rng) {
                survivors.push(animal);
            }
        }
        let deaths = before - survivors.len();
        *herd = survivors;
        deaths
    }
}
