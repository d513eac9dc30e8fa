//! Benchmark profiles for the Anosmellya ecosystem simulation.
//!
//! Provides pre-built worlds for benchmarks and examples:
//!
//! - [`reference_profile`]: 300x210 tiles with the default parameters
//! - [`small_profile`]: 100x70 tiles, for quick runs
//! - [`crowded_config`]: parameters that keep many animals colliding

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use anosmellya_engine::{Config, ConfigError, World};

/// Reference world width.
pub const REFERENCE_WIDTH: u32 = 300;
/// Reference world height.
pub const REFERENCE_HEIGHT: u32 = 210;

/// Build the reference world: 300x210 tiles (63K), default parameters.
///
/// `max_threads` is passed through to [`World::new`]; use `1` to keep the
/// fluid update on the calling thread.
pub fn reference_profile(seed: u32, max_threads: usize) -> Result<World, ConfigError> {
    World::new(
        REFERENCE_WIDTH,
        REFERENCE_HEIGHT,
        seed,
        Config::default(),
        max_threads,
    )
}

/// Build a 100x70 world (7K tiles) with the default parameters.
pub fn small_profile(seed: u32, max_threads: usize) -> Result<World, ConfigError> {
    World::new(100, 70, seed, Config::default(), max_threads)
}

/// Parameters with a dense starting population, frequent births and
/// plenty of plant, for exercising collisions.
pub fn crowded_config() -> Config {
    Config {
        initial_animal_chance: 0.5,
        initial_carn_chance: 0.2,
        initial_variation: 1.0,
        plant_place_chance: 0.002,
        ..Config::default()
    }
}

/// Run `ticks` ticks and return the births, deaths and attacks summed over them.
pub fn run_ticks(world: &mut World, ticks: u32) -> (u64, u64, u64) {
    let (mut births, mut deaths, mut attacks) = (0u64, 0u64, 0u64);
    for _ in 0..ticks {
        world.simulate();
        let m = world.last_metrics();
        births += m.births as u64;
        deaths += m.deaths as u64;
        attacks += m.attacks as u64;
    }
    (births, deaths, attacks)
}
