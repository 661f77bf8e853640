//! Core sampling primitives for the Meander toolkit.
//!
//! This crate defines the two pieces every simulation in the workspace
//! builds on:
//!
//! - [`RandomSource`] — an explicit, seedable stream of pseudo-randomness
//! - [`Categorical`] — a validated categorical distribution over a finite
//!   outcome set
//!
//! There is no ambient global generator anywhere in the workspace. Callers
//! construct a [`RandomSource`] (seeded for reproducible runs, from OS
//! entropy otherwise) and pass it into every operation that draws samples.

mod sampler;
mod source;

pub use sampler::{Categorical, SampleError};
pub use source::RandomSource;
