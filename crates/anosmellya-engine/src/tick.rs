//! The animal pass: sensing, movement, feeding, predation, reproduction.
//!
//! [`AnimalPass`] visits every tile in row-major order. Each living animal
//! is copied out of its slot, updated, and written back (or moved), so
//! collisions can touch two slots without aliasing borrows.
//!
//! # Per-animal order
//!
//! 1. Skip absent slots; clear `just_moved` and skip once.
//! 2. Age by one tick and burn one food; die at `lifespan` or below zero.
//! 3. Sum the five sense impulses into an acceleration.
//! 4. Integrate velocity and position, wrapping around the world.
//! 5. Deposit scent (and graze, for herbivores) at the destination tile.
//! 6. Move, attack, or mate, depending on who holds the destination.

use anosmellya_core::{FluidKind, Random, Vec2};
use anosmellya_fluid::smell_gradient;
use anosmellya_grid::Grid;

use crate::animal::{Animal, SmellAffinity};
use crate::config::Config;
use crate::metrics::TickMetrics;

/// Offsets walked cumulatively from a mother's tile when placing a child:
/// east, then north, then west, then south of the mother.
const BIRTH_SEARCH: [(i32, i32); 4] = [(1, 0), (-1, -1), (-1, 1), (1, 1)];

// ── Sensing ────────────────────────────────────────────────────────

/// The contribution of each sense to an animal's acceleration.
///
/// Non-finite contributions are already replaced by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SenseImpulses {
    /// From the plant gradient.
    pub plant: Vec2,
    /// From the carn gradient.
    pub carn: Vec2,
    /// From the herb gradient.
    pub herb: Vec2,
    /// From the baby gradient.
    pub baby: Vec2,
    /// From the animal's own velocity.
    pub vel: Vec2,
}

impl SenseImpulses {
    /// Sum of all five contributions, accumulated in sense order.
    pub fn total(&self) -> Vec2 {
        let mut acc = Vec2::ZERO;
        for v in [self.plant, self.carn, self.herb, self.baby, self.vel] {
            acc += v;
        }
        acc
    }
}

/// Field values at the animal's own tile.
struct Local {
    plant: f32,
    carn: f32,
    herb: f32,
    baby: f32,
    food: f32,
}

/// Turn one sense vector into an impulse.
///
/// The affinity's impulse is rotated into the sense direction, then scaled
/// by `1 + offset / |rotated|`. A zero sense, a zero impulse or an overflow
/// all surface as a non-finite scalar, and the sense is ignored.
fn output_impulse(input: Vec2, aff: &SmellAffinity, local: &Local) -> Vec2 {
    let length = input.hypot();
    let heading = Vec2::new(input.x / length, input.y / length);
    let out = aff.impulse.rotate(heading);
    let offset = local.plant * aff.plant_effect
        + local.carn * aff.carn_effect
        + local.herb * aff.herb_effect
        + local.baby * aff.baby_effect
        + local.food * aff.food_effect;
    let scalar = 1.0 + offset / out.hypot();
    if scalar.is_finite() {
        out * scalar
    } else {
        Vec2::ZERO
    }
}

/// Per-sense impulses for `an` standing on tile `(x, y)`.
pub(crate) fn sense(an: &Animal, fields: &[Grid<f32>; 4], x: u32, y: u32) -> SenseImpulses {
    let field = |kind: FluidKind| &fields[kind.index()];
    let local = Local {
        plant: *field(FluidKind::Plant).at(x, y),
        carn: *field(FluidKind::Carn).at(x, y),
        herb: *field(FluidKind::Herb).at(x, y),
        baby: *field(FluidKind::Baby).at(x, y),
        food: an.food,
    };
    let gradient = |kind: FluidKind| smell_gradient(field(kind), x, y);
    SenseImpulses {
        plant: output_impulse(gradient(FluidKind::Plant), &an.plant_aff, &local),
        carn: output_impulse(gradient(FluidKind::Carn), &an.carn_aff, &local),
        herb: output_impulse(gradient(FluidKind::Herb), &an.herb_aff, &local),
        baby: output_impulse(gradient(FluidKind::Baby), &an.baby_aff, &local),
        vel: output_impulse(an.vel, &an.vel_aff, &local),
    }
}

// ── Movement helpers ───────────────────────────────────────────────

/// Wrap a coordinate into `[0, len)`. Rounding may still land on `len`.
fn wrap(v: f32, len: u32) -> f32 {
    let len = len as f32;
    let v = v % len;
    if v < 0.0 {
        v + len
    } else {
        v
    }
}

/// Tile index for a wrapped coordinate. `len` itself and NaN map to the
/// last tile.
fn tile(v: f32, len: u32) -> u32 {
    if v < len as f32 {
        v as u32
    } else {
        len - 1
    }
}

/// First absent slot along [`BIRTH_SEARCH`] from `(x, y)`.
fn find_empty_space(animals: &Grid<Animal>, x: u32, y: u32) -> Option<(u32, u32)> {
    let (mut tx, mut ty) = (x, y);
    for (ox, oy) in BIRTH_SEARCH {
        (tx, ty) = animals.small_translate(tx, ty, ox, oy);
        if !animals.at(tx, ty).is_present {
            return Some((tx, ty));
        }
    }
    None
}

// ── AnimalPass ─────────────────────────────────────────────────────

/// Borrowed world state for one row-major sweep over the animals.
pub(crate) struct AnimalPass<'a> {
    pub config: &'a Config,
    pub random: &'a mut Random,
    pub animals: &'a mut Grid<Animal>,
    pub fields: &'a mut [Grid<f32>; 4],
    pub metrics: &'a mut TickMetrics,
}

impl AnimalPass<'_> {
    /// Tick every tile once.
    pub fn run(&mut self) {
        for y in 0..self.animals.height() {
            for x in 0..self.animals.width() {
                self.tick_tile(x, y);
            }
        }
    }

    fn field_mut(&mut self, kind: FluidKind) -> &mut Grid<f32> {
        &mut self.fields[kind.index()]
    }

    fn tick_tile(&mut self, x: u32, y: u32) {
        let mut an = *self.animals.at(x, y);
        if !an.is_present {
            return;
        }
        if an.just_moved {
            self.animals.at_mut(x, y).just_moved = false;
            return;
        }

        an.age = an.age.saturating_add(1);
        an.food -= 1.0;
        if an.age as f32 >= self.config.lifespan || !(an.food >= 0.0) {
            *self.animals.at_mut(x, y) = Animal::default();
            self.metrics.deaths += 1;
            return;
        }

        let pos_orig = an.pos;
        let acc = sense(&an, &*self.fields, x, y).total();
        let magnitude = acc.hypot();
        if magnitude != 0.0 {
            let a = self.config.acceleration;
            an.vel += Vec2::new(acc.x / magnitude * a, acc.y / magnitude * a);
        }
        an.vel *= 1.0 - self.config.friction;
        an.pos += an.vel;

        let (width, height) = (self.animals.width(), self.animals.height());
        an.pos = Vec2::new(wrap(an.pos.x, width), wrap(an.pos.y, height));
        let tx = tile(an.pos.x, width);
        let ty = tile(an.pos.y, height);

        self.deposit(&mut an, tx, ty);

        if (tx, ty) == (x, y) {
            *self.animals.at_mut(x, y) = an;
            return;
        }

        let mut target = *self.animals.at(tx, ty);
        if !target.is_present {
            an.just_moved = ty > y || tx > x;
            *self.animals.at_mut(tx, ty) = an;
            *self.animals.at_mut(x, y) = Animal::default();
            return;
        }

        match (an.is_carn, target.is_carn) {
            (true, false) => self.attack(&mut an, &mut target),
            (false, true) => self.attack(&mut target, &mut an),
            _ => {
                if target.is_receptive() {
                    self.make_baby(&mut target, tx, ty, &an);
                } else if an.is_receptive() {
                    self.make_baby(&mut an, x, y, &target);
                }
            }
        }
        an.pos = pos_orig;
        an.vel = an.vel.midpoint(target.vel);
        target.vel = an.vel;
        *self.animals.at_mut(x, y) = an;
        *self.animals.at_mut(tx, ty) = target;
    }

    /// Leave scent at the destination; herbivores also graze there.
    fn deposit(&mut self, an: &mut Animal, tx: u32, ty: u32) {
        if an.is_receptive() {
            *self.field_mut(FluidKind::Baby).at_mut(tx, ty) += an.baby_smell_amount;
        }
        let config = self.config;
        if an.is_carn {
            *self.field_mut(FluidKind::Carn).at_mut(tx, ty) += config.carn_amount;
        } else {
            let plant = self.field_mut(FluidKind::Plant).at_mut(tx, ty);
            let eat = *plant * config.herb_eat_portion;
            *plant -= eat;
            an.food += eat * config.herb_efficiency;
            *self.field_mut(FluidKind::Herb).at_mut(tx, ty) += config.herb_amount;
        }
    }

    fn attack(&mut self, predator: &mut Animal, prey: &mut Animal) {
        let eat = prey.food * self.config.carn_eat_portion;
        predator.food += eat * self.config.carn_efficiency;
        prey.food -= eat;
        self.metrics.attacks += 1;
    }

    /// Place a child of `mother` (standing on `(mx, my)`) and `father` on
    /// the first free neighbour of the mother, if any.
    fn make_baby(&mut self, mother: &mut Animal, mx: u32, my: u32, father: &Animal) {
        let Some((kx, ky)) = find_empty_space(&*self.animals, mx, my) else {
            return;
        };
        let mut kid = Animal::crossover(self.random, mother, father);
        mother.food -= kid.food;
        if self.random.chance(self.config.mutate_chance) {
            kid.mutate(self.random, self.config.mutate_amount);
        }
        kid.pos = Vec2::new(kx as f32 + 0.5, ky as f32 + 0.5);
        kid.just_moved = ky > my || kx > mx;
        *self.animals.at_mut(kx, ky) = kid;
        self.metrics.births += 1;
    }
}
