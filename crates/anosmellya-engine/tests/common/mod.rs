//! Shared builders for engine integration tests.

#![allow(dead_code)]

use anosmellya_core::{Species, Vec2};
use anosmellya_engine::{Animal, Config, World};

/// No founders, no plant placement, no mutation, no friction.
pub fn quiet_config() -> Config {
    Config {
        initial_animal_chance: 0.0,
        plant_place_chance: 0.0,
        mutate_chance: 0.0,
        friction: 0.0,
        ..Config::default()
    }
}

/// An empty single-threaded world with [`quiet_config`].
pub fn empty_world(width: u32, height: u32) -> World {
    World::new(width, height, 1, quiet_config(), 1).unwrap()
}

/// A present animal with no affinities: it only drifts with `vel`.
pub fn inert(species: Species, food: f32, vel: Vec2) -> Animal {
    Animal {
        is_present: true,
        is_carn: species.is_carn(),
        food,
        vel,
        baby_threshold: 100.0,
        baby_food: 40.0,
        baby_smell_amount: 1.0,
        ..Animal::default()
    }
}

/// Put `an` on `(x, y)`, centred in the tile.
pub fn place(world: &mut World, x: u32, y: u32, mut an: Animal) {
    an.pos = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
    *world.animal_mut(x, y) = an;
}

/// Every present animal as `(x, y, animal)`.
pub fn census(world: &World) -> Vec<(u32, u32, Animal)> {
    world
        .animals()
        .iter()
        .filter(|(_, _, an)| an.is_present)
        .map(|(x, y, an)| (x, y, *an))
        .collect()
}
