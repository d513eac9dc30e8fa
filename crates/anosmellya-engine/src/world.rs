//! The simulated world: grids, generator, workers, and the tick loop.

use std::time::Instant;

use anosmellya_core::{FluidKind, Random, Species, Vec2};
use anosmellya_grid::Grid;

use crate::animal::Animal;
use crate::config::{Config, ConfigError};
use crate::metrics::TickMetrics;
use crate::pool::FluidPool;
use crate::stats::Statistics;
use crate::tick::{sense, AnimalPass, SenseImpulses};

/// A toroidal ecosystem of animals and smell fields.
///
/// All state lives here: there are no globals, and two worlds built from
/// the same seed, dimensions and config evolve identically regardless of
/// how many worker threads either uses.
///
/// # Examples
///
/// ```
/// use anosmellya_engine::{Config, World};
///
/// let mut world = World::new(32, 24, 7, Config::default(), 1).unwrap();
/// for _ in 0..10 {
///     world.simulate();
/// }
/// let stats = world.statistics();
/// assert_eq!(stats.tick, 10);
/// assert_eq!((stats.world_width, stats.world_height), (32, 24));
/// ```
pub struct World {
    config: Config,
    random: Random,
    tick: u64,
    animals: Grid<Animal>,
    fields: [Grid<f32>; 4],
    pool: FluidPool,
    metrics: TickMetrics,
}

impl World {
    /// Build a `width * height` world seeded with founders.
    ///
    /// Each tile independently receives a founder with probability
    /// `initial_animal_chance`; a founder is a carnivore with probability
    /// `initial_carn_chance`, starts at its tile's centre, and is mutated
    /// by `initial_variation`. `max_threads` bounds the threads used for
    /// fluid updates, counting the caller's; zero means all available.
    pub fn new(
        width: u32,
        height: u32,
        seed: u32,
        config: Config,
        max_threads: usize,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut animals: Grid<Animal> = Grid::new(width, height)?;
        let fields = [
            Grid::filled(width, height, 0.0)?,
            Grid::filled(width, height, 0.0)?,
            Grid::filled(width, height, 0.0)?,
            Grid::filled(width, height, 0.0)?,
        ];

        let mut random = Random::new(seed);
        let mut founders = 0usize;
        for y in 0..height {
            for x in 0..width {
                if !random.chance(config.initial_animal_chance) {
                    continue;
                }
                let species = if random.chance(config.initial_carn_chance) {
                    Species::Carnivore
                } else {
                    Species::Herbivore
                };
                let an = animals.at_mut(x, y);
                *an = Animal::founder(species);
                an.pos = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                an.mutate(&mut random, config.initial_variation);
                founders += 1;
            }
        }

        let pool = FluidPool::new(max_threads);
        tracing::info!(
            width,
            height,
            seed,
            workers = pool.worker_count(),
            founders,
            "world created"
        );

        Ok(Self {
            config,
            random,
            tick: 0,
            animals,
            fields,
            pool,
            metrics: TickMetrics::default(),
        })
    }

    /// Advance one tick: fluids, then animals, then plant placement.
    pub fn simulate(&mut self) {
        let started = Instant::now();
        self.tick += 1;
        let mut metrics = TickMetrics::default();

        self.pool.update(&mut self.fields, &self.config);
        metrics.fluid_us = started.elapsed().as_micros() as u64;

        let animals_started = Instant::now();
        AnimalPass {
            config: &self.config,
            random: &mut self.random,
            animals: &mut self.animals,
            fields: &mut self.fields,
            metrics: &mut metrics,
        }
        .run();
        metrics.animal_us = animals_started.elapsed().as_micros() as u64;

        metrics.plant_placements = self.place_plants();
        metrics.total_us = started.elapsed().as_micros() as u64;

        tracing::trace!(
            tick = self.tick,
            births = metrics.births,
            deaths = metrics.deaths,
            attacks = metrics.attacks,
            plants = metrics.plant_placements,
            "tick complete"
        );
        self.metrics = metrics;
    }

    /// Drop `floor(tiles * plant_place_chance + u)` portions of plant on
    /// random tiles, with `u` uniform in `[0, 1)`.
    fn place_plants(&mut self) -> u32 {
        let (width, height) = (self.width(), self.height());
        let expected = width as f32 * height as f32 * self.config.plant_place_chance;
        let count = (expected + self.random.next_float(1.0)) as u32;
        let plant = &mut self.fields[FluidKind::Plant.index()];
        for _ in 0..count {
            let x = self.random.index(width);
            let y = self.random.index(height);
            *plant.at_mut(x, y) += self.config.plant_place_amount;
        }
        count
    }

    /// Summarize the population and fields in one pass.
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics {
            world_width: self.width(),
            world_height: self.height(),
            tick: self.tick,
            ..Statistics::default()
        };
        let [plant, herb, carn, baby] = &self.fields;
        let tiles = self
            .animals
            .as_slice()
            .iter()
            .zip(plant.as_slice())
            .zip(herb.as_slice())
            .zip(carn.as_slice())
            .zip(baby.as_slice());
        for ((((an, &p), &h), &c), &b) in tiles {
            if an.is_present {
                match an.species() {
                    Species::Herbivore => {
                        stats.herb_avg.accumulate(an);
                        stats.herb_count += 1;
                    }
                    Species::Carnivore => {
                        stats.carn_avg.accumulate(an);
                        stats.carn_count += 1;
                    }
                }
            }
            stats.plant_total += p as f64;
            stats.herb_total += h as f64;
            stats.carn_total += c as f64;
            stats.baby_total += b as f64;
        }
        if stats.herb_count > 0 {
            stats.herb_avg.divide(stats.herb_count as f32);
        }
        if stats.carn_count > 0 {
            stats.carn_avg.divide(stats.carn_count as f32);
        }
        stats
    }

    /// Per-sense impulses of the animal on `(x, y)`, or `None` for an
    /// empty tile. Reflects the fields as they are now, not mid-tick.
    pub fn sense_impulses(&self, x: u32, y: u32) -> Option<SenseImpulses> {
        let an = self.animals.at(x, y);
        an.is_present.then(|| sense(an, &self.fields, x, y))
    }

    /// Columns.
    pub fn width(&self) -> u32 {
        self.animals.width()
    }

    /// Rows.
    pub fn height(&self) -> u32 {
        self.animals.height()
    }

    /// Ticks simulated so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Parameters this world was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Threads updating fluids alongside the caller.
    pub fn worker_count(&self) -> usize {
        self.pool.worker_count()
    }

    /// Timings and counts from the most recent [`simulate`](Self::simulate).
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.metrics
    }

    /// The animal slots.
    pub fn animals(&self) -> &Grid<Animal> {
        &self.animals
    }

    /// The animal slot at `(x, y)`, for shells and tests to edit between ticks.
    pub fn animal_mut(&mut self, x: u32, y: u32) -> &mut Animal {
        self.animals.at_mut(x, y)
    }

    /// One smell field.
    pub fn field(&self, kind: FluidKind) -> &Grid<f32> {
        &self.fields[kind.index()]
    }

    /// One smell field, mutably, between ticks.
    pub fn field_mut(&mut self, kind: FluidKind) -> &mut Grid<f32> {
        &mut self.fields[kind.index()]
    }

    /// Restart the generator from `seed`.
    pub fn reseed(&mut self, seed: u32) {
        self.random.reseed(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anosmellya_grid::GridError;

    fn empty_config() -> Config {
        Config {
            initial_animal_chance: 0.0,
            ..Config::default()
        }
    }

    #[test]
    fn zero_dimension_rejected() {
        let err = World::new(0, 10, 1, Config::default(), 1).err();
        assert_eq!(err, Some(ConfigError::Grid(GridError::EmptyGrid)));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = Config {
            friction: 2.0,
            ..Config::default()
        };
        assert!(matches!(
            World::new(4, 4, 1, config, 1),
            Err(ConfigError::InvalidParameter { name: "friction", .. })
        ));
    }

    #[test]
    fn founders_are_centred_and_counted() {
        let config = Config {
            initial_animal_chance: 1.0,
            initial_carn_chance: 0.0,
            initial_variation: 0.0,
            ..Config::default()
        };
        let world = World::new(5, 4, 3, config, 1).unwrap();
        let stats = world.statistics();
        assert_eq!(stats.herb_count, 20);
        assert_eq!(stats.carn_count, 0);
        assert_eq!(world.animals().at(2, 3).pos, Vec2::new(2.5, 3.5));
        for (avg, gene) in stats.herb_avg.genes().iter().zip(Animal::herbivore().genes()) {
            assert!((avg - gene).abs() < 1e-4, "{avg} vs {gene}");
        }
    }

    #[test]
    fn tick_counter_advances() {
        let mut world = World::new(6, 6, 1, empty_config(), 1).unwrap();
        assert_eq!(world.tick(), 0);
        world.simulate();
        world.simulate();
        assert_eq!(world.tick(), 2);
        assert_eq!(world.statistics().tick, 2);
    }

    #[test]
    fn sense_impulses_empty_tile_is_none() {
        let world = World::new(6, 6, 1, empty_config(), 1).unwrap();
        assert!(world.sense_impulses(2, 2).is_none());
    }

    #[test]
    fn sense_impulses_points_up_the_gradient() {
        let mut world = World::new(6, 6, 1, empty_config(), 1).unwrap();
        *world.animal_mut(2, 2) = Animal::herbivore();
        *world.field_mut(FluidKind::Plant).at_mut(3, 2) = 10.0;
        let s = world.sense_impulses(2, 2).unwrap();
        assert!(s.plant.x > 0.0 && s.plant.y.abs() < 1e-6, "{s:?}");
        assert_eq!(s.herb, Vec2::ZERO);
        assert_eq!(s.total(), s.plant);
    }

    #[test]
    fn plant_placement_respects_amount() {
        let config = Config {
            plant_place_chance: 1.0,
            plant_place_amount: 2.0,
            plant_evap: 0.0,
            ..empty_config()
        };
        let mut world = World::new(4, 4, 9, config, 1).unwrap();
        world.simulate();
        // 16 tiles at chance 1 always yields exactly 16 placements.
        assert_eq!(world.last_metrics().plant_placements, 16);
        assert!((world.statistics().plant_total - 32.0).abs() < 1e-3);
    }

    #[test]
    fn reseed_makes_runs_repeatable() {
        let config = Config {
            plant_place_chance: 0.5,
            ..empty_config()
        };
        let mut a = World::new(8, 8, 1, config.clone(), 1).unwrap();
        let mut b = World::new(8, 8, 2, config, 1).unwrap();
        a.reseed(42);
        b.reseed(42);
        for _ in 0..5 {
            a.simulate();
            b.simulate();
        }
        assert_eq!(a.field(FluidKind::Plant), b.field(FluidKind::Plant));
    }
}
