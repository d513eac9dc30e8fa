//! Genetic animal model: affinities, founders, crossover, mutation.
//!
//! An [`Animal`] is plain `Copy` data occupying one tile. Its heritable
//! traits (the *genome*) are three reproduction parameters and five
//! [`SmellAffinity`] records. The genome can be viewed as a flat array of
//! [`GENE_COUNT`] floats in a fixed order; crossover, mutation and
//! averaging all walk that array, so they always agree on which trait is
//! which.

use anosmellya_core::{Random, Species, Vec2};
use serde::Serialize;

// ── SmellAffinity ──────────────────────────────────────────────────

/// How strongly, and in which direction, an animal reacts to one sense.
///
/// The `impulse` is expressed relative to the sensed direction: an impulse
/// of `(1, 0)` pushes straight along the sense vector, `(-1, 0)` straight
/// away from it. The five effects scale the push by the local field values
/// and the animal's own food.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SmellAffinity {
    /// Output direction and base strength, relative to the sense direction.
    pub impulse: Vec2,
    /// Gain applied to the plant value at the animal's tile.
    pub plant_effect: f32,
    /// Gain applied to the herb value at the animal's tile.
    pub herb_effect: f32,
    /// Gain applied to the carn value at the animal's tile.
    pub carn_effect: f32,
    /// Gain applied to the baby value at the animal's tile.
    pub baby_effect: f32,
    /// Gain applied to the animal's food.
    pub food_effect: f32,
}

impl SmellAffinity {
    /// Genes per affinity.
    pub const GENES: usize = 7;

    /// An affinity with only an impulse.
    pub const fn with_impulse(x: f32, y: f32) -> Self {
        Self {
            impulse: Vec2::new(x, y),
            plant_effect: 0.0,
            herb_effect: 0.0,
            carn_effect: 0.0,
            baby_effect: 0.0,
            food_effect: 0.0,
        }
    }

    fn genes(&self) -> [f32; Self::GENES] {
        [
            self.impulse.x,
            self.impulse.y,
            self.plant_effect,
            self.herb_effect,
            self.carn_effect,
            self.baby_effect,
            self.food_effect,
        ]
    }

    fn from_genes(g: &[f32]) -> Self {
        Self {
            impulse: Vec2::new(g[0], g[1]),
            plant_effect: g[2],
            herb_effect: g[3],
            carn_effect: g[4],
            baby_effect: g[5],
            food_effect: g[6],
        }
    }
}

// ── Animal ─────────────────────────────────────────────────────────

/// Number of heritable floats in an [`Animal`].
pub const GENE_COUNT: usize = 3 + 5 * SmellAffinity::GENES;

/// One tile's occupant, or the absent placeholder.
///
/// Serializes only the statistically relevant genetic traits; physical
/// state and species are omitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Animal {
    /// Sub-tile position in world coordinates.
    #[serde(skip)]
    pub pos: Vec2,
    /// Velocity in tiles per tick.
    #[serde(skip)]
    pub vel: Vec2,
    /// Energy. Drops by one per tick; the animal dies below zero.
    #[serde(skip)]
    pub food: f32,
    /// Ticks lived.
    #[serde(skip)]
    pub age: u32,
    /// Whether a living animal occupies this slot.
    #[serde(skip)]
    pub is_present: bool,
    /// Set when the animal moved or was born ahead of the row-major scan,
    /// so the scan skips it once.
    #[serde(skip)]
    pub just_moved: bool,
    /// Species flag.
    #[serde(skip)]
    pub is_carn: bool,
    /// Baby scent emitted per tick while receptive.
    pub baby_smell_amount: f32,
    /// Food level at or above which the animal is receptive.
    pub baby_threshold: f32,
    /// Food handed to each child, capped by the mother's food.
    pub baby_food: f32,
    /// Reaction to the plant gradient.
    pub plant_aff: SmellAffinity,
    /// Reaction to the herb gradient.
    pub herb_aff: SmellAffinity,
    /// Reaction to the carn gradient.
    pub carn_aff: SmellAffinity,
    /// Reaction to the baby gradient.
    pub baby_aff: SmellAffinity,
    /// Reaction to the animal's own velocity.
    pub vel_aff: SmellAffinity,
}

impl Animal {
    /// A founder with sensible starting traits for `species`.
    ///
    /// Position is left at the origin; the caller places it.
    pub fn founder(species: Species) -> Self {
        let mut an = Self {
            food: 100.0,
            is_present: true,
            is_carn: species.is_carn(),
            baby_smell_amount: 1.0,
            baby_threshold: 100.0,
            baby_food: 50.0,
            baby_aff: SmellAffinity::with_impulse(1.0, 0.0),
            vel_aff: SmellAffinity::with_impulse(-0.2, 0.0),
            ..Self::default()
        };
        match species {
            Species::Herbivore => {
                an.plant_aff = SmellAffinity::with_impulse(1.0, 0.0);
                an.carn_aff = SmellAffinity::with_impulse(-1.0, 0.0);
            }
            Species::Carnivore => {
                an.herb_aff = SmellAffinity::with_impulse(1.0, 0.0);
            }
        }
        an
    }

    /// A founder herbivore: drawn to plants and mates, flees carnivores.
    pub fn herbivore() -> Self {
        Self::founder(Species::Herbivore)
    }

    /// A founder carnivore: drawn to herbivores and mates.
    pub fn carnivore() -> Self {
        Self::founder(Species::Carnivore)
    }

    /// A child of `mother` and `father`.
    ///
    /// Each gene comes from one parent chosen by a fair coin flip. The
    /// child takes the mother's species, position and velocity, and starts
    /// with `max(0, min(mother.baby_food, mother.food))` food. No food is
    /// taken from the mother here.
    pub fn crossover(random: &mut Random, mother: &Animal, father: &Animal) -> Self {
        let mut genes = mother.genes();
        for (gene, dad) in genes.iter_mut().zip(father.genes()) {
            if !random.coin() {
                *gene = dad;
            }
        }
        let mut kid = Self {
            pos: mother.pos,
            vel: mother.vel,
            food: mother.baby_food.min(mother.food).max(0.0),
            age: 0,
            is_present: true,
            just_moved: false,
            is_carn: mother.is_carn,
            ..Self::default()
        };
        kid.set_genes(&genes);
        kid
    }

    /// Shift every gene by an independent draw from `[-amount, amount)`.
    pub fn mutate(&mut self, random: &mut Random, amount: f32) {
        let mut genes = self.genes();
        for gene in &mut genes {
            *gene += random.next_signed(amount);
        }
        self.set_genes(&genes);
    }

    /// Add `other`'s genes to this animal's, for averaging.
    pub fn accumulate(&mut self, other: &Animal) {
        let mut genes = self.genes();
        for (gene, add) in genes.iter_mut().zip(other.genes()) {
            *gene += add;
        }
        self.set_genes(&genes);
    }

    /// Divide every gene by `divisor`.
    pub fn divide(&mut self, divisor: f32) {
        let mut genes = self.genes();
        for gene in &mut genes {
            *gene /= divisor;
        }
        self.set_genes(&genes);
    }

    /// Species of this animal.
    pub fn species(&self) -> Species {
        Species::from_is_carn(self.is_carn)
    }

    /// Whether the animal has enough food to reproduce.
    pub fn is_receptive(&self) -> bool {
        self.food >= self.baby_threshold
    }

    /// The genome as a flat array, in serialization order.
    pub fn genes(&self) -> [f32; GENE_COUNT] {
        let mut out = [0.0; GENE_COUNT];
        out[0] = self.baby_smell_amount;
        out[1] = self.baby_threshold;
        out[2] = self.baby_food;
        for (chunk, aff) in out[3..]
            .chunks_exact_mut(SmellAffinity::GENES)
            .zip(self.affinities())
        {
            chunk.copy_from_slice(&aff.genes());
        }
        out
    }

    /// Overwrite the genome from a flat array in [`genes`](Self::genes) order.
    pub fn set_genes(&mut self, genes: &[f32; GENE_COUNT]) {
        self.baby_smell_amount = genes[0];
        self.baby_threshold = genes[1];
        self.baby_food = genes[2];
        let mut chunks = genes[3..].chunks_exact(SmellAffinity::GENES);
        for aff in self.affinities_mut() {
            if let Some(chunk) = chunks.next() {
                *aff = SmellAffinity::from_genes(chunk);
            }
        }
    }

    fn affinities(&self) -> [&SmellAffinity; 5] {
        [
            &self.plant_aff,
            &self.herb_aff,
            &self.carn_aff,
            &self.baby_aff,
            &self.vel_aff,
        ]
    }

    fn affinities_mut(&mut self) -> [&mut SmellAffinity; 5] {
        [
            &mut self.plant_aff,
            &mut self.herb_aff,
            &mut self.carn_aff,
            &mut self.baby_aff,
            &mut self.vel_aff,
        ]
    }

    /// The genetic traits as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
