//! Core value types for the Anosmellya ecosystem simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! small value types shared by every other crate in the workspace: the
//! [`Vec2`] used for positions, velocities and impulses, the deterministic
//! [`Random`] generator, and the identifiers for the four smell fields and
//! the two species.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod kind;
pub mod random;
pub mod vec2;

pub use kind::{FluidKind, Species};
pub use random::Random;
pub use vec2::Vec2;
