//! Simulated annealing over execution-order permutations.
//!
//! Single-solution trajectory search: starting from the arrival-sorted
//! order, neighbors are generated by one random pairwise swap and
//! accepted by the Metropolis criterion under a geometrically cooling
//! temperature. The best-ever solution is tracked and returned.
//!
//! # Key Types
//!
//! - [`SaConfig`]: temperatures, cooling rate, inner iteration count
//! - [`SaRunner`]: executes the annealing loop
//! - [`SaResult`]: best permutation found plus run statistics
//!
//! # References
//!
//! - Kirkpatrick et al. (1983), Cerny (1985)

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
