//! Simulation components for the Meander toolkit.
//!
//! Two independent families live here, both drawing their randomness from a
//! caller-supplied [`RandomSource`]:
//!
//! - [`walk`] — two-dimensional unit random walks: full trajectories and
//!   batches of final displacements
//! - [`coin`] — biased coin-flip sequences and the waiting times between
//!   successes
//!
//! Both produce plain in-memory data for the statistics layer; nothing here
//! renders or persists anything.
//!
//! [`RandomSource`]: meander_core::RandomSource

pub mod coin;
pub mod walk;
