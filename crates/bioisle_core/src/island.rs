//! The island grid: layout parsing, population insertion and the ordered
//! yearly cycle.
//!
//! An [`Island`] owns every cell, its configuration, the live-population
//! registry and one seeded random generator, so independent islands never
//! contaminate each other. Each call to [`Island::advance_year`] runs the
//! seven stages with an island-wide barrier between them: a stage finishes
//! across all habitable cells before the next one starts.

use crate::animal::{Animal, Species};
use crate::cell::{Cell, Terrain};
use crate::config::IslandConfig;
use crate::error::{BuildError, ConfigError, PlacementError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Live-population counts per species, adjusted on insertion, birth,
/// predation and death. Migration never changes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopulationCount {
    pub herbivores: usize,
    pub carnivores: usize,
}

impl PopulationCount {
    #[must_use]
    pub fn total(&self) -> usize {
        self.herbivores + self.carnivores
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PopulationRegistry {
    counts: PopulationCount,
}

impl PopulationRegistry {
    fn record_births(&mut self, species: Species, amount: usize) {
        match species {
            Species::Herbivore => self.counts.herbivores += amount,
            Species::Carnivore => self.counts.carnivores += amount,
        }
    }

    fn record_deaths(&mut self, species: Species, amount: usize) {
        match species {
            Species::Herbivore => self.counts.herbivores -= amount,
            Species::Carnivore => self.counts.carnivores -= amount,
        }
    }

    fn counts(&self) -> PopulationCount {
        self.counts
    }
}

/// Descriptor of one animal to insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalSpec {
    pub species: String,
    pub age: u32,
    pub weight: f64,
}

/// A batch of animals bound for one cell, addressed by 1-based
/// (row, column) coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub location: (usize, usize),
    pub population: Vec<AnimalSpec>,
}

/// The simulated island.
#[derive(Debug)]
pub struct Island {
    pub(crate) cells: Vec<Cell>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) config: IslandConfig,
    registry: PopulationRegistry,
    rng: ChaCha8Rng,
    year: u32,
}

impl Island {
    /// Builds an island from a textual layout of equal-length lines over the
    /// terrain alphabet `W`, `L`, `H`, `D`. Leading and trailing blank lines
    /// are ignored and indentation shared by every line is stripped; uneven
    /// indentation leaves rows ragged and is rejected. Every boundary cell
    /// must be water.
    pub fn from_layout(layout: &str, config: IslandConfig) -> Result<Self, BuildError> {
        let mut lines: Vec<&str> = layout.lines().collect();
        while lines.first().is_some_and(|line| line.trim().is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        let indent = lines
            .iter()
            .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0);
        let lines: Vec<&str> = lines
            .iter()
            .map(|line| match line.char_indices().nth(indent) {
                Some((idx, _)) => &line[idx..],
                None => "",
            })
            .collect();
        if lines.is_empty() || lines[0].is_empty() {
            return Err(BuildError::EmptyLayout);
        }
        let rows = lines.len();
        let cols = lines[0].chars().count();
        if lines.iter().any(|line| line.chars().count() != cols) {
            return Err(BuildError::RaggedRows);
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in lines.iter().enumerate() {
            for (col, code) in line.chars().enumerate() {
                let boundary = row == 0 || row == rows - 1 || col == 0 || col == cols - 1;
                if boundary && code != 'W' {
                    return Err(BuildError::OpenBoundary);
                }
                let terrain = Terrain::from_code(code).ok_or(BuildError::UnknownTerrain(code))?;
                cells.push(Cell::new(terrain));
            }
        }

        for row in 0..rows {
            for col in 0..cols {
                let mut neighbours = [None; 4];
                for direction in crate::animal::Direction::ALL {
                    let (dr, dc) = direction.offset();
                    let (nr, nc) = (row as i64 + dr, col as i64 + dc);
                    if nr >= 0 && nr < rows as i64 && nc >= 0 && nc < cols as i64 {
                        neighbours[direction.index()] = Some(nr as usize * cols + nc as usize);
                    }
                }
                cells[row * cols + col].neighbours = neighbours;
            }
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Self {
            cells,
            rows,
            cols,
            config,
            registry: PopulationRegistry::default(),
            rng,
            year: 0,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Completed simulation years.
    #[must_use]
    pub fn year(&self) -> u32 {
        self.year
    }

    #[must_use]
    pub fn config(&self) -> &IslandConfig {
        &self.config
    }

    /// Terrain at 1-based (row, column), if inside the grid.
    #[must_use]
    pub fn terrain_at(&self, row: usize, col: usize) -> Option<Terrain> {
        self.index_of(row, col).map(|idx| self.cells[idx].terrain)
    }

    /// Current live-population counts.
    #[must_use]
    pub fn population(&self) -> PopulationCount {
        self.registry.counts()
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= 1 && row <= self.rows && col >= 1 && col <= self.cols {
            Some((row - 1) * self.cols + (col - 1))
        } else {
            None
        }
    }

    /// Updates one species' parameters by textual tag.
    pub fn set_species_params(
        &mut self,
        species: &str,
        updates: &[(String, f64)],
    ) -> Result<(), ConfigError> {
        let species = Species::parse(species)
            .ok_or_else(|| ConfigError::UnknownSpecies(species.to_string()))?;
        self.config.species_mut(species).apply(updates)
    }

    /// Updates one terrain category's parameters by layout code.
    pub fn set_terrain_params(
        &mut self,
        code: char,
        updates: &[(String, f64)],
    ) -> Result<(), ConfigError> {
        let terrain = Terrain::from_code(code).ok_or(ConfigError::UnknownTerrain(code))?;
        self.config.terrain_mut(terrain).apply(updates)
    }

    /// Inserts animals into the named cells. The whole batch is validated
    /// first; a bad location, species tag or weight rejects the call without
    /// committing any animal.
    pub fn insert_population(&mut self, placements: &[Placement]) -> Result<(), PlacementError> {
        let mut batch: Vec<(usize, Species, u32, f64)> = Vec::new();
        for placement in placements {
            let (row, col) = placement.location;
            let idx = self
                .index_of(row, col)
                .ok_or(PlacementError::OutOfBounds { row, col })?;
            if !self.cells[idx].terrain.is_accessible() {
                return Err(PlacementError::WaterCell { row, col });
            }
            for spec in &placement.population {
                let species = Species::parse(&spec.species)
                    .ok_or_else(|| PlacementError::UnknownSpecies(spec.species.clone()))?;
                if spec.weight <= 0.0 {
                    return Err(PlacementError::NonPositiveWeight(spec.weight));
                }
                batch.push((idx, species, spec.age, spec.weight));
            }
        }
        for (idx, species, age, weight) in batch {
            let animal = Animal::new(species, age, weight, &mut self.rng)?;
            self.cells[idx].herd_mut(species).push(animal);
            self.registry.record_births(species, 1);
        }
        Ok(())
    }

    /// Runs one full yearly cycle: feeding, hunting, procreation, migration,
    /// aging, weight loss and death, each completed island-wide before the
    /// next begins.
    pub fn advance_year(&mut self) {
        self.grazing_stage();
        self.hunting_stage();
        self.procreation_stage();
        self.migration_stage();
        self.ageing_stage();
        self.weight_loss_stage();
        self.death_stage();
        self.year += 1;

        let counts = self.registry.counts();
        tracing::debug!(
            year = self.year,
            herbivores = counts.herbivores,
            carnivores = counts.carnivores,
            "cycle complete"
        );
    }

    fn habitable(cell: &Cell) -> bool {
        cell.terrain.is_accessible()
    }

    fn grazing_stage(&mut self) {
        let Island { cells, config, .. } = self;
        for cell in cells.iter_mut().filter(|c| Self::habitable(c)) {
            let f_max = config.terrain(cell.terrain).f_max;
            cell.reset_fodder(f_max);
            cell.graze(config);
        }
    }

    fn hunting_stage(&mut self) {
        let Island {
            cells,
            config,
            rng,
            registry,
            ..
        } = self;
        for cell in cells.iter_mut().filter(|c| Self::habitable(c)) {
            let kills = cell.hunt(config, rng);
            registry.record_deaths(Species::Herbivore, kills);
        }
    }

    fn procreation_stage(&mut self) {
        let Island {
            cells,
            config,
            rng,
            registry,
            ..
        } = self;
        for cell in cells.iter_mut().filter(|c| Self::habitable(c)) {
            for species in [Species::Herbivore, Species::Carnivore] {
                let births = cell.breed(species, config, rng);
                registry.record_births(species, births);
            }
        }
    }

    /// Migration with exactly-once semantics: each cell's resident list is
    /// taken as a fixed snapshot, every resident gets one decision, and all
    /// arrivals are buffered island-wide and merged only after the sweep, so
    /// no animal is reconsidered in a destination cell this year.
    fn migration_stage(&mut self) {
        let Island {
            cells,
            config,
            rng,
            ..
        } = self;
        let mut arrivals: Vec<(usize, Animal)> = Vec::new();
        for idx in 0..cells.len() {
            if !Self::habitable(&cells[idx]) {
                continue;
            }
            for species in [Species::Herbivore, Species::Carnivore] {
                let params = config.species(species);
                let residents = std::mem::take(cells[idx].herd_mut(species));
                let mut staying = Vec::with_capacity(residents.len());
                for animal in residents {
                    let mut destination = None;
                    if animal.wants_to_migrate(params, rng) {
                        let direction = Animal::migration_direction(rng);
                        destination = cells[idx].neighbours[direction.index()]
                            .filter(|&n| cells[n].terrain.is_accessible());
                    }
                    match destination {
                        Some(dest) => arrivals.push((dest, animal)),
                        None => staying.push(animal),
                    }
                }
                *cells[idx].herd_mut(species) = staying;
            }
        }
        for (dest, animal) in arrivals {
            let species = animal.species();
            cells[dest].herd_mut(species).push(animal);
        }
    }

    fn ageing_stage(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| Self::habitable(c)) {
            cell.age_residents();
        }
    }

    fn weight_loss_stage(&mut self) {
        let Island { cells, config, .. } = self;
        for cell in cells.iter_mut().filter(|c| Self::habitable(c)) {
            cell.starve_residents(config);
        }
    }

    fn death_stage(&mut self) {
        let Island {
            cells,
            config,
            rng,
            registry,
            ..
        } = self;
        for cell in cells.iter_mut().filter(|c| Self::habitable(c)) {
            let (herb_deaths, carn_deaths) = cell.cull(config, rng);
            registry.record_deaths(Species::Herbivore, herb_deaths);
            registry.record_deaths(Species::Carnivore, carn_deaths);
        }
    }
}
