//! Identifiers for the four smell fields and the two species.

use std::fmt;

/// One of the four diffusing scalar fields.
///
/// The discriminant doubles as the storage index used by the engine, so
/// [`FluidKind::ALL`] lists the kinds in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FluidKind {
    /// Vegetation eaten by herbivores. Replenished at random each tick.
    Plant = 0,
    /// Scent left behind by herbivores.
    Herb = 1,
    /// Scent left behind by carnivores.
    Carn = 2,
    /// Pheromone emitted by animals ready to reproduce.
    Baby = 3,
}

impl FluidKind {
    /// Every kind, in storage order.
    pub const ALL: [FluidKind; 4] = [Self::Plant, Self::Herb, Self::Carn, Self::Baby];

    /// Kinds eligible for a dedicated worker thread. The baby field is
    /// always computed by the thread driving the world.
    pub const DELEGABLE: [FluidKind; 3] = [Self::Plant, Self::Herb, Self::Carn];

    /// Storage index in `0..4`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, matching configuration and statistics keys.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plant => "plant",
            Self::Herb => "herb",
            Self::Carn => "carn",
            Self::Baby => "baby",
        }
    }
}

impl fmt::Display for FluidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Animal species. Fixed at birth and inherited from the mother.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    /// Eats plant matter; prey of carnivores.
    Herbivore,
    /// Eats herbivores.
    Carnivore,
}

impl Species {
    /// Species for an `is_carn` flag.
    pub const fn from_is_carn(is_carn: bool) -> Self {
        if is_carn {
            Self::Carnivore
        } else {
            Self::Herbivore
        }
    }

    /// Returns `true` for [`Species::Carnivore`].
    pub const fn is_carn(self) -> bool {
        matches!(self, Self::Carnivore)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Herbivore => f.write_str("herbivore"),
            Self::Carnivore => f.write_str("carnivore"),
        }
    }
}
