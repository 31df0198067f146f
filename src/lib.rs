//! Facade over the bioisle simulation workspace.
//!
//! Downstream consumers (plotting, persistence, scripting front ends) depend
//! on this crate and interact with the simulation through the core types
//! re-exported here.

pub use bioisle_core::{
    fitness, init_logging, Animal, AnimalSpec, BirthOutcome, BuildError, Census, ConfigError,
    Direction,
    Island, IslandConfig, Placement, PlacementError, PopulationCount, Species, SpeciesParams,
    Terrain, TerrainParams, Vitals,
};

/// Behaviour-level API for callers that need the module paths.
pub use bioisle_core as core;
