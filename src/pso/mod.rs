//! Particle swarm optimization over execution-order permutations.
//!
//! A discrete PSO adaptation: each particle holds a permutation
//! ("position") and a per-index real-valued velocity interpreted as a
//! swap probability. Velocity updates combine inertia with cognitive and
//! social terms scaled by the positional distance to the particle's
//! personal best and the swarm's global best.
//!
//! # Key Types
//!
//! - [`PsoConfig`]: swarm size, iteration budget, inertia/cognitive/social weights
//! - [`PsoRunner`]: executes the swarm loop
//! - [`PsoResult`]: best permutation found plus run statistics
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"

mod config;
mod runner;

pub use config::PsoConfig;
pub use runner::{PsoResult, PsoRunner};
