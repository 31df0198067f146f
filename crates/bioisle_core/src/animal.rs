//! Per-animal behaviour model: fitness, feeding, procreation, migration and
//! death.
//!
//! An [`Animal`] owns only its identity, species tag, age and weight; every
//! probability it reports is a pure function of those fields and the species
//! parameter table passed in by the caller. Fitness in particular is
//! recomputed on every read and never cached, so a weight or age change is
//! visible to the very next draw within the same stage.

use crate::config::SpeciesParams;
use crate::error::PlacementError;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The two species inhabiting the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Herbivore,
    Carnivore,
}

impl Species {
    /// Parses a textual species tag, case-insensitively.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("herbivore") {
            Some(Species::Herbivore)
        } else if tag.eq_ignore_ascii_case("carnivore") {
            Some(Species::Carnivore)
        } else {
            None
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Species::Herbivore => "Herbivore",
            Species::Carnivore => "Carnivore",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four von Neumann migration directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Slot of this direction in a cell's neighbour array.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// (row, column) delta of one step in this direction.
    #[must_use]
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Fitness as a function of age and weight: the product of two logistic
/// terms, one falling with age and one rising with weight. Always in [0, 1];
/// exactly 0 whenever weight is non-positive.
#[must_use]
pub fn fitness(age: u32, weight: f64, params: &SpeciesParams) -> f64 {
    if weight <= 0.0 {
        return 0.0;
    }
    let q_age = 1.0 / (1.0 + (params.phi_age * (f64::from(age) - params.a_half)).exp());
    let q_weight = 1.0 / (1.0 + (-params.phi_weight * (weight - params.w_half)).exp());
    q_age * q_weight
}

/// Result of a birth attempt.
///
/// Both skip variants leave the mother's weight untouched and produce no
/// offspring; they are distinguished so callers and tests can tell a
/// non-viable weight draw from a mother too light to carry the cost.
#[derive(Debug, Clone, PartialEq)]
pub enum BirthOutcome {
    Offspring(Animal),
    NonviableWeight,
    InsufficientMaternalWeight,
}

/// A single organism.
#[derive(Debug, Clone, PartialEq)]
pub struct Animal {
    id: Uuid,
    species: Species,
    age: u32,
    weight: f64,
}

impl Animal {
    /// Creates an animal with the given age and weight. Weight must be
    /// strictly positive.
    pub fn new<R: Rng>(
        species: Species,
        age: u32,
        weight: f64,
        rng: &mut R,
    ) -> Result<Self, PlacementError> {
        if weight <= 0.0 {
            return Err(PlacementError::NonPositiveWeight(weight));
        }
        Ok(Self {
            id: Uuid::from_u128(rng.gen()),
            species,
            age,
            weight,
        })
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn species(&self) -> Species {
        self.species
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Current fitness, recomputed from age and weight.
    #[must_use]
    pub fn fitness(&self, params: &SpeciesParams) -> f64 {
        fitness(self.age, self.weight, params)
    }

    /// Gains weight from eating `amount` of food.
    pub fn eat(&mut self, amount: f64, params: &SpeciesParams) {
        self.weight += params.beta * amount;
    }

    /// Ages by one year.
    pub fn grow_older(&mut self) {
        self.age += 1;
    }

    /// Yearly weight loss by the factor `eta`.
    pub fn lose_weight(&mut self, params: &SpeciesParams) {
        self.weight *= 1.0 - params.eta;
    }

    /// Draws whether the animal dies this year, with probability
    /// `omega * (1 - fitness)`. Consumes exactly one draw.
    pub fn dies<R: Rng>(&self, params: &SpeciesParams, rng: &mut R) -> bool {
        let probability = params.omega * (1.0 - self.fitness(params));
        rng.gen::<f64>() < probability
    }

    /// Draws whether the animal migrates this year, with probability
    /// `mu * fitness`. Consumes exactly one draw.
    pub fn wants_to_migrate<R: Rng>(&self, params: &SpeciesParams, rng: &mut R) -> bool {
        rng.gen::<f64>() < params.mu * self.fitness(params)
    }

    /// Picks one of the four directions uniformly, independent of terrain.
    pub fn migration_direction<R: Rng>(rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..4)]
    }

    /// Draws whether the animal attempts to procreate, given the number of
    /// same-species animals in its cell before any births this stage.
    ///
    /// With one animal or fewer the probability is exactly zero and no
    /// randomness is consumed; otherwise the probability is
    /// `min(1, gamma * fitness * (n - 1))` and one value is drawn.
    pub fn attempts_procreation<R: Rng>(
        &self,
        same_species_in_cell: usize,
        params: &SpeciesParams,
        rng: &mut R,
    ) -> bool {
        if same_species_in_cell <= 1 {
            return false;
        }
        let probability =
            (params.gamma * self.fitness(params) * (same_species_in_cell as f64 - 1.0)).min(1.0);
        rng.gen::<f64>() < probability
    }

    /// Attempts to give birth. The offspring weight is drawn from
    /// `Normal(w_birth, sigma_birth)`; a non-positive draw produces no
    /// offspring. A viable draw costs the mother `xi` times the offspring
    /// weight, and is skipped when she cannot cover it.
    pub fn give_birth<R: Rng>(&mut self, params: &SpeciesParams, rng: &mut R) -> BirthOutcome {
        let Ok(distribution) = Normal::new(params.w_birth, params.sigma_birth) else {
            return BirthOutcome::NonviableWeight;
        };
        let birth_weight = distribution.sample(rng);
        if birth_weight <= 0.0 {
            return BirthOutcome::NonviableWeight;
        }
        let maternal_loss = params.xi * birth_weight;
        if self.weight < maternal_loss {
            return BirthOutcome::InsufficientMaternalWeight;
        }
        self.weight -= maternal_loss;
        BirthOutcome::Offspring(Animal {
            id: Uuid::from_u128(rng.gen()),
            species: self.species,
            age: 0,
            weight: birth_weight,
        })
    }

    /// Probability that this animal kills a prey of the given fitness.
    /// Zero when the attacker is not fitter (or has no kill capability),
    /// certain when the disparity reaches `DeltaPhiMax`, linear in between.
    #[must_use]
    pub fn kill_probability(&self, prey_fitness: f64, params: &SpeciesParams) -> f64 {
        let Some(delta_phi_max) = params.delta_phi_max else {
            return 0.0;
        };
        let disparity = self.fitness(params) - prey_fitness;
        if disparity <= 0.0 {
            0.0
        } else if disparity >= delta_phi_max {
            1.0
        } else {
            disparity / delta_phi_max
        }
    }

    /// Draws whether a predation attempt succeeds. The deterministic branches
    /// (probability 0 or 1) consume no randomness.
    pub fn hunts_down<R: Rng>(
        &self,
        prey_fitness: f64,
        params: &SpeciesParams,
        rng: &mut R,
    ) -> bool {
        let probability = self.kill_probability(prey_fitness, params);
        if probability <= 0.0 {
            false
        } else if probability >= 1.0 {
            true
        } else {
            rng.gen::<f64>() < probability
        }
    }
}
