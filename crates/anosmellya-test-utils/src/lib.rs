//! Test fixtures for Anosmellya development.
//!
//! Field painters for building small, fully specified smell fields
//! ([`field_with`], [`spike`], [`ramp`]) and seeded noise fields for
//! property tests and benchmarks ([`noise_field`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{field_with, noise_field, ramp, spike, Axis};
