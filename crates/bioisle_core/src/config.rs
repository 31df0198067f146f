//! Parameter tables for species behaviour and terrain fodder capacity.
//!
//! All simulation constants live in an [`IslandConfig`] owned by the island
//! instance, so two islands never share mutable configuration. Values can be
//! customized programmatically through the validated [`SpeciesParams::apply`] /
//! [`TerrainParams::apply`] updates, or loaded wholesale from a TOML document.
//!
//! ## Example `island.toml`
//!
//! ```toml
//! seed = 42
//!
//! [herbivore]
//! w_birth = 8.0
//! sigma_birth = 1.5
//! beta = 0.9
//! eta = 0.05
//! a_half = 40.0
//! phi_age = 0.6
//! w_half = 10.0
//! phi_weight = 0.1
//! mu = 0.25
//! gamma = 0.2
//! zeta = 3.5
//! xi = 1.2
//! omega = 0.4
//! appetite = 10.0
//!
//! [lowland]
//! f_max = 800.0
//! ```

use crate::animal::Species;
use crate::cell::Terrain;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Behavioural constants for one species.
///
/// The named-key form accepted by [`SpeciesParams::apply`] uses the classic
/// parameter names: `w_birth`, `sigma_birth`, `beta`, `eta`, `a_half`,
/// `phi_age`, `w_half`, `phi_weight`, `mu`, `gamma`, `zeta`, `xi`, `omega`,
/// `F` (appetite) and, for carnivores only, `DeltaPhiMax`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeciesParams {
    /// Mean of the birth-weight distribution.
    pub w_birth: f64,
    /// Standard deviation of the birth-weight distribution.
    pub sigma_birth: f64,
    /// Feeding efficiency: weight gained per unit eaten.
    pub beta: f64,
    /// Yearly fractional weight loss.
    pub eta: f64,
    /// Age at which the age term of fitness crosses one half.
    pub a_half: f64,
    /// Steepness of the age term of fitness.
    pub phi_age: f64,
    /// Weight at which the weight term of fitness crosses one half.
    pub w_half: f64,
    /// Steepness of the weight term of fitness.
    pub phi_weight: f64,
    /// Migration propensity coefficient.
    pub mu: f64,
    /// Procreation propensity coefficient.
    pub gamma: f64,
    /// Birth-weight viability coefficient.
    pub zeta: f64,
    /// Maternal weight cost per unit of offspring weight.
    pub xi: f64,
    /// Death propensity coefficient.
    pub omega: f64,
    /// Yearly appetite (key `F`).
    #[serde(alias = "F")]
    pub appetite: f64,
    /// Fitness disparity beyond which a kill is certain (key `DeltaPhiMax`).
    /// `None` for species that do not hunt.
    #[serde(alias = "DeltaPhiMax")]
    pub delta_phi_max: Option<f64>,
}

impl SpeciesParams {
    /// Default herbivore parameter set.
    #[must_use]
    pub fn herbivore() -> Self {
        Self {
            w_birth: 8.0,
            sigma_birth: 1.5,
            beta: 0.9,
            eta: 0.05,
            a_half: 40.0,
            phi_age: 0.6,
            w_half: 10.0,
            phi_weight: 0.1,
            mu: 0.25,
            gamma: 0.2,
            zeta: 3.5,
            xi: 1.2,
            omega: 0.4,
            appetite: 10.0,
            delta_phi_max: None,
        }
    }

    /// Default carnivore parameter set.
    #[must_use]
    pub fn carnivore() -> Self {
        Self {
            w_birth: 6.0,
            sigma_birth: 1.0,
            beta: 0.75,
            eta: 0.125,
            a_half: 40.0,
            phi_age: 0.3,
            w_half: 4.0,
            phi_weight: 0.4,
            mu: 0.4,
            gamma: 0.8,
            zeta: 3.5,
            xi: 1.1,
            omega: 0.8,
            appetite: 50.0,
            delta_phi_max: Some(10.0),
        }
    }

    fn slot(&mut self, name: &str) -> Option<&mut f64> {
        match name {
            "w_birth" => Some(&mut self.w_birth),
            "sigma_birth" => Some(&mut self.sigma_birth),
            "beta" => Some(&mut self.beta),
            "eta" => Some(&mut self.eta),
            "a_half" => Some(&mut self.a_half),
            "phi_age" => Some(&mut self.phi_age),
            "w_half" => Some(&mut self.w_half),
            "phi_weight" => Some(&mut self.phi_weight),
            "mu" => Some(&mut self.mu),
            "gamma" => Some(&mut self.gamma),
            "zeta" => Some(&mut self.zeta),
            "xi" => Some(&mut self.xi),
            "omega" => Some(&mut self.omega),
            "F" => Some(&mut self.appetite),
            "DeltaPhiMax" => self.delta_phi_max.as_mut(),
            _ => None,
        }
    }

    /// Applies named parameter updates, rejecting the whole batch if any key
    /// is unknown for this species or any value is negative.
    pub fn apply(&mut self, updates: &[(String, f64)]) -> Result<(), ConfigError> {
        for (name, value) in updates {
            if *value < 0.0 {
                return Err(ConfigError::NegativeValue {
                    name: name.clone(),
                    value: *value,
                });
            }
            if self.slot(name).is_none() {
                return Err(ConfigError::UnknownParameter(name.clone()));
            }
        }
        for (name, value) in updates {
            if let Some(slot) = self.slot(name) {
                *slot = *value;
            }
        }
        Ok(())
    }
}

/// Constants for one terrain category.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    /// Maximum fodder available per cell per cycle.
    pub f_max: f64,
}

impl TerrainParams {
    /// Applies named parameter updates with all-or-nothing validation.
    /// `f_max` is the only recognized key.
    pub fn apply(&mut self, updates: &[(String, f64)]) -> Result<(), ConfigError> {
        for (name, value) in updates {
            if *value < 0.0 {
                return Err(ConfigError::NegativeValue {
                    name: name.clone(),
                    value: *value,
                });
            }
            if name != "f_max" {
                return Err(ConfigError::UnknownParameter(name.clone()));
            }
        }
        for (name, value) in updates {
            if name == "f_max" {
                self.f_max = *value;
            }
        }
        Ok(())
    }
}

/// Complete configuration for one island instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IslandConfig {
    /// Seed for the island's random generator; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub herbivore: SpeciesParams,
    pub carnivore: SpeciesParams,
    pub lowland: TerrainParams,
    pub highland: TerrainParams,
    pub desert: TerrainParams,
    pub water: TerrainParams,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            seed: None,
            herbivore: SpeciesParams::herbivore(),
            carnivore: SpeciesParams::carnivore(),
            lowland: TerrainParams { f_max: 800.0 },
            highland: TerrainParams { f_max: 300.0 },
            desert: TerrainParams { f_max: 0.0 },
            water: TerrainParams { f_max: 0.0 },
        }
    }
}

impl IslandConfig {
    /// Loads a configuration from a TOML document. Missing sections keep
    /// their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    #[must_use]
    pub fn species(&self, species: Species) -> &SpeciesParams {
        match species {
            Species::Herbivore => &self.herbivore,
            Species::Carnivore => &self.carnivore,
        }
    }

    pub fn species_mut(&mut self, species: Species) -> &mut SpeciesParams {
        match species {
            Species::Herbivore => &mut self.herbivore,
            Species::Carnivore => &mut self.carnivore,
        }
    }

    #[must_use]
    pub fn terrain(&self, terrain: Terrain) -> &TerrainParams {
        match terrain {
            Terrain::Lowland => &self.lowland,
            Terrain::Highland => &self.highland,
            Terrain::Desert => &self.desert,
            Terrain::Water => &self.water,
        }
    }

    pub fn terrain_mut(&mut self, terrain: Terrain) -> &mut TerrainParams {
        match terrain {
            Terrain::Lowland => &mut self.lowland,
            Terrain::Highland => &mut self.highland,
            Terrain::Desert => &mut self.desert,
            Terrain::Water => &mut self.water,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let config = IslandConfig::default();
        assert_eq!(config.herbivore.w_birth, 8.0);
        assert_eq!(config.herbivore.appetite, 10.0);
        assert_eq!(config.herbivore.delta_phi_max, None);
        assert_eq!(config.carnivore.appetite, 50.0);
        assert_eq!(config.carnivore.delta_phi_max, Some(10.0));
        assert_eq!(config.lowland.f_max, 800.0);
        assert_eq!(config.highland.f_max, 300.0);
        assert_eq!(config.desert.f_max, 0.0);
        assert_eq!(config.water.f_max, 0.0);
    }

    #[test]
    fn apply_updates_named_parameters() {
        let mut params = SpeciesParams::carnivore();
        params
            .apply(&[
                ("mu".to_string(), 1.0),
                ("F".to_string(), 25.0),
                ("DeltaPhiMax".to_string(), 0.5),
            ])
            .unwrap();
        assert_eq!(params.mu, 1.0);
        assert_eq!(params.appetite, 25.0);
        assert_eq!(params.delta_phi_max, Some(0.5));
    }

    #[test]
    fn apply_rejects_unknown_parameter() {
        let mut params = SpeciesParams::herbivore();
        let err = params
            .apply(&[("non_existent".to_string(), 1.0)])
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownParameter("non_existent".into()));
    }

    #[test]
    fn herbivores_do_not_recognize_delta_phi_max() {
        let mut params = SpeciesParams::herbivore();
        assert!(params
            .apply(&[("DeltaPhiMax".to_string(), 5.0)])
            .is_err());
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut params = SpeciesParams::herbivore();
        let before = params.clone();
        let result = params.apply(&[
            ("mu".to_string(), 0.9),
            ("omega".to_string(), -1.0),
        ]);
        assert!(matches!(result, Err(ConfigError::NegativeValue { .. })));
        assert_eq!(params, before);
    }

    #[test]
    fn terrain_apply_validates_key_and_sign() {
        let mut params = TerrainParams { f_max: 800.0 };
        params.apply(&[("f_max".to_string(), 700.0)]).unwrap();
        assert_eq!(params.f_max, 700.0);
        assert!(params.apply(&[("fodder".to_string(), 1.0)]).is_err());
        assert!(params.apply(&[("f_max".to_string(), -1.0)]).is_err());
    }

    #[test]
    fn from_toml_overrides_sections() {
        let config = IslandConfig::from_toml_str(
            r#"
            seed = 7

            [herbivore]
            w_birth = 8.0
            sigma_birth = 1.5
            beta = 0.9
            eta = 0.05
            a_half = 40.0
            phi_age = 0.6
            w_half = 10.0
            phi_weight = 0.1
            mu = 0.5
            gamma = 0.2
            zeta = 3.5
            xi = 1.2
            omega = 0.4
            appetite = 12.0

            [lowland]
            f_max = 600.0
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.herbivore.mu, 0.5);
        assert_eq!(config.herbivore.appetite, 12.0);
        assert_eq!(config.lowland.f_max, 600.0);
        // untouched sections keep their defaults
        assert_eq!(config.carnivore, SpeciesParams::carnivore());
    }

    #[test]
    fn from_toml_rejects_garbage() {
        assert!(IslandConfig::from_toml_str("seed = \"not a number\"").is_err());
    }
}
