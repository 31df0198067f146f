//! # Bioisle Core
//!
//! Deterministic simulation of two interacting species (a herbivore and a
//! carnivore) on a discrete grid island, advanced one yearly cycle at a
//! time.
//!
//! Each cycle runs seven ordered stages island-wide, with a barrier between
//! stages: herbivore feeding, carnivore hunting, procreation, migration,
//! aging, weight loss and death. Every stochastic decision is driven by the
//! animal's fitness and drawn from a single seeded generator owned by the
//! island, so runs are reproducible for a fixed seed and insertion order.
//!
//! ## Example
//!
//! ```
//! use bioisle_core::{AnimalSpec, Island, IslandConfig, Placement};
//!
//! let config = IslandConfig {
//!     seed: Some(42),
//!     ..IslandConfig::default()
//! };
//! let mut island = Island::from_layout("WWWW\nWLHW\nWWWW", config)?;
//! island.insert_population(&[Placement {
//!     location: (2, 2),
//!     population: vec![
//!         AnimalSpec { species: "Herbivore".into(), age: 5, weight: 20.0 };
//!         8
//!     ],
//! }])?;
//!
//! island.advance_year();
//! assert_eq!(island.year(), 1);
//! let census = island.census();
//! assert_eq!(census.counts.total(), census.herbivore_vitals.ages.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Per-animal behaviour model (fitness, feeding, procreation, migration,
/// death, predation)
pub mod animal;
/// Terrain categories and per-cell stage logic
pub mod cell;
/// Aggregate per-cycle snapshots for visualization consumers
pub mod census;
/// Species and terrain parameter tables
pub mod config;
/// Rejection error taxonomy
pub mod error;
/// Grid construction and yearly-cycle orchestration
pub mod island;
/// Logging setup
pub mod metrics;

pub use animal::{fitness, Animal, BirthOutcome, Direction, Species};
pub use cell::Terrain;
pub use census::{Census, Vitals};
pub use config::{IslandConfig, SpeciesParams, TerrainParams};
pub use error::{BuildError, ConfigError, PlacementError};
pub use island::{AnimalSpec, Island, Placement, PopulationCount};
pub use metrics::init_logging;
