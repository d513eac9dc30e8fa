//! Simulation parameters, validation, and error types.
//!
//! [`Config`] is a flat bag of `f32` parameters. Shells can fill it field by
//! field, by name through [`Config::set`], or from any serde format (missing
//! keys take their defaults). [`World::new`](crate::World::new) validates it
//! before building anything.

use std::error::Error;
use std::fmt;

use anosmellya_core::FluidKind;
use anosmellya_fluid::FluidRates;
use anosmellya_grid::GridError;
use serde::{Deserialize, Serialize};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating or editing a [`Config`], or while
/// constructing a [`World`](crate::World).
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The world dimensions were rejected by the grid.
    Grid(GridError),
    /// A parameter is outside its accepted range.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f32,
        /// Which constraint was violated.
        reason: &'static str,
    },
    /// No parameter has this name.
    UnknownParameter {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "{name} = {value}: {reason}"),
            Self::UnknownParameter { name } => write!(f, "unknown parameter '{name}'"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── Config ─────────────────────────────────────────────────────────

/// Every tunable parameter of a world.
///
/// Portions, chances, efficiencies and friction are fractions in `[0, 1]`.
/// Everything else is a non-negative quantity. All values must be finite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Velocity gained per tick along the summed impulse direction.
    pub acceleration: f32,
    /// Portion of each neighbour difference in the baby field that flows per tick.
    pub baby_dispersal: f32,
    /// Portion of the baby field lost per tick.
    pub baby_evap: f32,
    /// Carn scent deposited by each carnivore per tick.
    pub carn_amount: f32,
    /// Carn field dispersal portion.
    pub carn_dispersal: f32,
    /// Portion of a herbivore's food taken when a carnivore catches it.
    pub carn_eat_portion: f32,
    /// Portion of the food taken from prey that the carnivore keeps.
    pub carn_efficiency: f32,
    /// Carn field evaporation portion.
    pub carn_evap: f32,
    /// Portion of velocity lost per tick.
    pub friction: f32,
    /// Herb scent deposited by each herbivore per tick.
    pub herb_amount: f32,
    /// Herb field dispersal portion.
    pub herb_dispersal: f32,
    /// Portion of the plant on its tile a herbivore eats per tick.
    pub herb_eat_portion: f32,
    /// Portion of eaten plant a herbivore gains as food.
    pub herb_efficiency: f32,
    /// Herb field evaporation portion.
    pub herb_evap: f32,
    /// Chance that a tile starts with a founder animal.
    pub initial_animal_chance: f32,
    /// Chance that a founder is a carnivore.
    pub initial_carn_chance: f32,
    /// Mutation amount applied once to every founder.
    pub initial_variation: f32,
    /// Age in ticks at which an animal dies.
    pub lifespan: f32,
    /// Mutation amount applied to a mutant newborn.
    pub mutate_amount: f32,
    /// Chance that a newborn is a mutant.
    pub mutate_chance: f32,
    /// Plant field dispersal portion.
    pub plant_dispersal: f32,
    /// Plant field evaporation portion.
    pub plant_evap: f32,
    /// Plant added by each random placement.
    pub plant_place_amount: f32,
    /// Expected plant placements per tile per tick.
    pub plant_place_chance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            acceleration: 0.05,
            baby_dispersal: 0.2,
            baby_evap: 0.001,
            carn_amount: 1.0,
            carn_dispersal: 0.4,
            carn_eat_portion: 0.5,
            carn_efficiency: 0.8,
            carn_evap: 0.0005,
            friction: 0.03,
            herb_amount: 1.0,
            herb_dispersal: 0.4,
            herb_eat_portion: 0.5,
            herb_efficiency: 1.0,
            herb_evap: 0.0005,
            initial_animal_chance: 0.1,
            initial_carn_chance: 0.1,
            initial_variation: 100.0,
            lifespan: 500.0,
            mutate_amount: 4.0,
            mutate_chance: 0.05,
            plant_dispersal: 0.07,
            plant_evap: 0.001,
            plant_place_amount: 800.0,
            plant_place_chance: 0.000_063_492,
        }
    }
}

/// Number of parameters in a [`Config`].
const PARAMETER_COUNT: usize = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Range {
    /// `[0, 1]`.
    Fraction,
    /// `[0, inf)`.
    NonNegative,
}

impl Range {
    fn of(name: &str) -> Self {
        const FRACTION_SUFFIXES: [&str; 5] =
            ["_dispersal", "_evap", "_portion", "_chance", "_efficiency"];
        if name == "friction" || FRACTION_SUFFIXES.iter().any(|s| name.ends_with(s)) {
            Self::Fraction
        } else {
            Self::NonNegative
        }
    }

    fn check(self, name: &'static str, value: f32) -> Result<(), ConfigError> {
        let reason = if !value.is_finite() {
            "must be finite"
        } else if value < 0.0 {
            "must not be negative"
        } else if self == Self::Fraction && value > 1.0 {
            "must be at most 1"
        } else {
            return Ok(());
        };
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason,
        })
    }
}

impl Config {
    fn parameters(&self) -> [(&'static str, f32); PARAMETER_COUNT] {
        [
            ("acceleration", self.acceleration),
            ("baby_dispersal", self.baby_dispersal),
            ("baby_evap", self.baby_evap),
            ("carn_amount", self.carn_amount),
            ("carn_dispersal", self.carn_dispersal),
            ("carn_eat_portion", self.carn_eat_portion),
            ("carn_efficiency", self.carn_efficiency),
            ("carn_evap", self.carn_evap),
            ("friction", self.friction),
            ("herb_amount", self.herb_amount),
            ("herb_dispersal", self.herb_dispersal),
            ("herb_eat_portion", self.herb_eat_portion),
            ("herb_efficiency", self.herb_efficiency),
            ("herb_evap", self.herb_evap),
            ("initial_animal_chance", self.initial_animal_chance),
            ("initial_carn_chance", self.initial_carn_chance),
            ("initial_variation", self.initial_variation),
            ("lifespan", self.lifespan),
            ("mutate_amount", self.mutate_amount),
            ("mutate_chance", self.mutate_chance),
            ("plant_dispersal", self.plant_dispersal),
            ("plant_evap", self.plant_evap),
            ("plant_place_amount", self.plant_place_amount),
            ("plant_place_chance", self.plant_place_chance),
        ]
    }

    fn parameters_mut(&mut self) -> [(&'static str, &mut f32); PARAMETER_COUNT] {
        [
            ("acceleration", &mut self.acceleration),
            ("baby_dispersal", &mut self.baby_dispersal),
            ("baby_evap", &mut self.baby_evap),
            ("carn_amount", &mut self.carn_amount),
            ("carn_dispersal", &mut self.carn_dispersal),
            ("carn_eat_portion", &mut self.carn_eat_portion),
            ("carn_efficiency", &mut self.carn_efficiency),
            ("carn_evap", &mut self.carn_evap),
            ("friction", &mut self.friction),
            ("herb_amount", &mut self.herb_amount),
            ("herb_dispersal", &mut self.herb_dispersal),
            ("herb_eat_portion", &mut self.herb_eat_portion),
            ("herb_efficiency", &mut self.herb_efficiency),
            ("herb_evap", &mut self.herb_evap),
            ("initial_animal_chance", &mut self.initial_animal_chance),
            ("initial_carn_chance", &mut self.initial_carn_chance),
            ("initial_variation", &mut self.initial_variation),
            ("lifespan", &mut self.lifespan),
            ("mutate_amount", &mut self.mutate_amount),
            ("mutate_chance", &mut self.mutate_chance),
            ("plant_dispersal", &mut self.plant_dispersal),
            ("plant_evap", &mut self.plant_evap),
            ("plant_place_amount", &mut self.plant_place_amount),
            ("plant_place_chance", &mut self.plant_place_chance),
        ]
    }

    /// Names accepted by [`get`](Self::get) and [`set`](Self::set), sorted.
    pub fn parameter_names() -> impl Iterator<Item = &'static str> {
        Config::default()
            .parameters()
            .into_iter()
            .map(|(name, _)| name)
    }

    /// Check every parameter against its range.
    ///
    /// Reports the first offending parameter in name order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.parameters() {
            Range::of(name).check(name, value)?;
        }
        Ok(())
    }

    /// Value of the parameter called `name`.
    pub fn get(&self, name: &str) -> Result<f32, ConfigError> {
        self.parameters()
            .into_iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
            .ok_or_else(|| ConfigError::UnknownParameter {
                name: name.to_string(),
            })
    }

    /// Set the parameter called `name`, rejecting out-of-range values.
    ///
    /// On error the config is left unchanged.
    pub fn set(&mut self, name: &str, value: f32) -> Result<(), ConfigError> {
        let (name, slot) = self
            .parameters_mut()
            .into_iter()
            .find(|(n, _)| *n == name)
            .ok_or_else(|| ConfigError::UnknownParameter {
                name: name.to_string(),
            })?;
        Range::of(name).check(name, value)?;
        *slot = value;
        Ok(())
    }

    /// Dispersal and evaporation portions for one field.
    pub fn rates(&self, kind: FluidKind) -> FluidRates {
        match kind {
            FluidKind::Plant => FluidRates::new(self.plant_dispersal, self.plant_evap),
            FluidKind::Herb => FluidRates::new(self.herb_dispersal, self.herb_evap),
            FluidKind::Carn => FluidRates::new(self.carn_dispersal, self.carn_evap),
            FluidKind::Baby => FluidRates::new(self.baby_dispersal, self.baby_evap),
        }
    }
}
