//! Toroidal dense grid storage for Anosmellya.
//!
//! [`Grid`] is the one storage type of the simulation: the animal slots and
//! each of the four smell fields are a `Grid` of the world's dimensions.
//! Every coordinate offset wraps around both axes, so the grid behaves as
//! the surface of a torus.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
