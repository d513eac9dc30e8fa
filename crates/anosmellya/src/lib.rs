//! Anosmellya: a toroidal ecosystem of animals that evolve to follow smells.
//!
//! This is the facade crate that re-exports the public API of the
//! Anosmellya sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use anosmellya::prelude::*;
//!
//! let config = Config {
//!     initial_animal_chance: 0.2,
//!     ..Config::default()
//! };
//! let mut world = World::new(64, 48, 42, config, 0).unwrap();
//! for _ in 0..25 {
//!     world.simulate();
//! }
//!
//! let stats = world.statistics();
//! assert_eq!(stats.tick, 25);
//! println!("{stats}");
//!
//! // Peek at the field the herbivores are grazing.
//! let plant: &Grid<f32> = world.field(FluidKind::Plant);
//! assert_eq!(plant.width(), 64);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `anosmellya-core` | `Vec2`, `Random`, `FluidKind`, `Species` |
//! | [`grid`] | `anosmellya-grid` | Toroidal `Grid<T>` and `GridError` |
//! | [`fluid`] | `anosmellya-fluid` | Dispersal, evaporation, gradients |
//! | [`engine`] | `anosmellya-engine` | Animals, fluid workers, `World`, statistics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Small value types shared by every crate (`anosmellya-core`).
pub use anosmellya_core as types;

/// Dense toroidal grid storage (`anosmellya-grid`).
pub use anosmellya_grid as grid;

/// Smell field kernels (`anosmellya-fluid`).
///
/// [`fluid::update`] runs one tick of a field; [`fluid::smell_gradient`]
/// is what animals sense.
pub use anosmellya_fluid as fluid;

/// Simulation engine (`anosmellya-engine`).
///
/// [`engine::World`] owns everything and runs ticks;
/// [`engine::Animal`] is the genetic agent.
pub use anosmellya_engine as engine;

/// Common imports for typical Anosmellya usage.
///
/// ```rust
/// use anosmellya::prelude::*;
/// ```
pub mod prelude {
    // Core values
    pub use anosmellya_core::{FluidKind, Random, Species, Vec2};

    // Storage
    pub use anosmellya_grid::{Grid, GridError};

    // Engine
    pub use anosmellya_engine::{
        Animal, Config, ConfigError, SenseImpulses, SmellAffinity, Statistics, TickMetrics, World,
    };
}
