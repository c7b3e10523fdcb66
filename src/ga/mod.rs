//! Genetic algorithm over execution-order permutations.
//!
//! Evolves a population of candidate execution orders against the shared
//! fitness oracle (average waiting time, lower is better): tournament
//! selection, order crossover, swap mutation, and one elitist copy of the
//! generation best per generation. The population is seeded with the
//! arrival-sorted and burst-sorted orders plus random permutations.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation budget, operator rates
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best permutation found plus run statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
