//! Ant colony optimization over execution-order permutations.
//!
//! Ants construct execution orders edge by edge, guided by a learned
//! pheromone matrix over ordered process pairs and a static heuristic
//! biased toward small burst-time differences (SJF-like transitions).
//! Pheromones evaporate each iteration and every ant deposits an amount
//! inversely proportional to its tour's fitness.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: colony size, iteration budget, trail weights
//! - [`AcoRunner`]: executes the colony loop
//! - [`AcoResult`]: best permutation found plus run statistics
//!
//! # References
//!
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod runner;

pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner};
