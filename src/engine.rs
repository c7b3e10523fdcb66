//! Batch execution of scheduling algorithms.
//!
//! Runs any subset of the available algorithms over one process set and
//! collects their results in request order, ready for
//! [ranking](crate::ranking). Each metaheuristic's best permutation is
//! replayed through the schedule builder so every result carries the
//! same per-process timeline shape as the deterministic schedulers.

use crate::aco::{AcoConfig, AcoRunner};
use crate::classic::{fcfs, priority, round_robin, sjf, RrConfig};
use crate::ga::{GaConfig, GaRunner};
use crate::metrics::assemble_result;
use crate::process::{Algorithm, AlgorithmResult, Process};
use crate::pso::{PsoConfig, PsoRunner};
use crate::sa::{SaConfig, SaRunner};
use crate::sim::build_schedule;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-algorithm tuning for a batch run.
///
/// # Examples
///
/// ```
/// use cpu_sched::engine::RunConfig;
///
/// let config = RunConfig::default().with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Round robin settings (time quantum).
    pub round_robin: RrConfig,

    /// Genetic algorithm settings.
    pub genetic: GaConfig,

    /// Particle swarm settings.
    pub particle_swarm: PsoConfig,

    /// Ant colony settings.
    pub ant_colony: AcoConfig,

    /// Simulated annealing settings.
    pub simulated_annealing: SaConfig,
}

impl RunConfig {
    /// Sets the same random seed on every stochastic algorithm, making
    /// the whole batch reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.genetic = self.genetic.with_seed(seed);
        self.particle_swarm = self.particle_swarm.with_seed(seed);
        self.ant_colony = self.ant_colony.with_seed(seed);
        self.simulated_annealing = self.simulated_annealing.with_seed(seed);
        self
    }

    /// Validates every nested configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.round_robin.validate()?;
        self.genetic.validate()?;
        self.particle_swarm.validate()?;
        self.ant_colony.validate()?;
        self.simulated_annealing.validate()?;
        Ok(())
    }
}

/// Runs one algorithm over `processes`.
pub fn run_algorithm(
    processes: &[Process],
    algorithm: Algorithm,
    config: &RunConfig,
) -> AlgorithmResult {
    match algorithm {
        Algorithm::Fcfs => fcfs(processes),
        Algorithm::Sjf => sjf(processes),
        Algorithm::RoundRobin => round_robin(processes, &config.round_robin),
        Algorithm::Priority => priority(processes),
        Algorithm::Genetic => {
            let run = GaRunner::run(processes, &config.genetic);
            order_result(Algorithm::Genetic, processes, &run.best)
        }
        Algorithm::ParticleSwarm => {
            let run = PsoRunner::run(processes, &config.particle_swarm);
            order_result(Algorithm::ParticleSwarm, processes, &run.best)
        }
        Algorithm::AntColony => {
            let run = AcoRunner::run(processes, &config.ant_colony);
            order_result(Algorithm::AntColony, processes, &run.best)
        }
        Algorithm::SimulatedAnnealing => {
            let run = SaRunner::run(processes, &config.simulated_annealing);
            order_result(Algorithm::SimulatedAnnealing, processes, &run.best)
        }
    }
}

/// Runs the selected algorithms and returns their results in the same
/// order they were requested. Duplicates run again.
pub fn run_algorithms(
    processes: &[Process],
    selected: &[Algorithm],
    config: &RunConfig,
) -> Vec<AlgorithmResult> {
    selected
        .iter()
        .map(|&algorithm| run_algorithm(processes, algorithm, config))
        .collect()
}

/// Like [`run_algorithms`], but each algorithm runs on a rayon worker.
/// Result order still matches the request order.
#[cfg(feature = "parallel")]
pub fn run_algorithms_parallel(
    processes: &[Process],
    selected: &[Algorithm],
    config: &RunConfig,
) -> Vec<AlgorithmResult> {
    selected
        .par_iter()
        .map(|&algorithm| run_algorithm(processes, algorithm, config))
        .collect()
}

/// Runs every available algorithm with the given configuration.
pub fn run_all(processes: &[Process], config: &RunConfig) -> Vec<AlgorithmResult> {
    run_algorithms(processes, &Algorithm::ALL, config)
}

/// Replays a metaheuristic's best permutation into a full result.
fn order_result(algorithm: Algorithm, processes: &[Process], order: &[usize]) -> AlgorithmResult {
    let built = build_schedule(processes, order);
    assemble_result(algorithm, processes, built.scheduled, None)
}
