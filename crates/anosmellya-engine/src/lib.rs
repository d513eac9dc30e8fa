//! Simulation engine for the Anosmellya ecosystem.
//!
//! A [`World`] owns a grid of [`Animal`] slots, four smell fields, a
//! deterministic generator and a [`FluidPool`]. Each
//! [`World::simulate`] call runs one tick:
//!
//! 1. **Fluids.** Plant, herb and carn fields are dispersed and evaporated
//!    on worker threads while the caller updates the baby field (and any
//!    field without a worker). The caller waits for every worker before
//!    going on.
//! 2. **Animals.** Tiles are visited in row-major order; each animal
//!    senses the field gradients, moves, feeds, and may attack, mate or
//!    die.
//! 3. **Plants.** Plant matter is dropped on random tiles.
//!
//! Nothing here panics or returns errors once a world is built; invalid
//! parameters and dimensions are rejected by [`World::new`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod animal;
pub mod config;
pub mod metrics;
pub mod pool;
pub mod stats;
pub mod tick;
pub mod world;

pub use animal::{Animal, SmellAffinity, GENE_COUNT};
pub use config::{Config, ConfigError};
pub use metrics::TickMetrics;
pub use pool::FluidPool;
pub use stats::Statistics;
pub use tick::SenseImpulses;
pub use world::World;
