//! Smell field kernels for Anosmellya.
//!
//! Each of the four smell fields is a [`Grid<f32>`](anosmellya_grid::Grid)
//! updated once per tick by [`update`]: a forward [`disperse`] sweep that
//! moves mass between neighbouring tiles, then an [`evaporate`] pass that
//! decays every tile. Animals read fields through [`smell_gradient`].
//!
//! # Per-tick order
//!
//! 1. [`disperse`] with the field's dispersal portion
//! 2. [`evaporate`] with the field's evaporation portion

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod diffusion;
pub mod gradient;

pub use diffusion::{disperse, evaporate, update, FluidRates};
pub use gradient::smell_gradient;
