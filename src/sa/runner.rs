//! SA annealing loop execution.

use super::config::SaConfig;
use crate::perm::{arrival_order, rng_from_seed, swap_neighbor};
use crate::process::Process;
use crate::sim::fitness;
use rand::Rng;

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best execution order found during the entire run.
    pub best: Vec<usize>,

    /// Fitness of the best order (average waiting time).
    pub best_fitness: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,
}

/// Executes the simulated annealing loop.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA over execution-order permutations of `processes`.
    ///
    /// The starting solution is the arrival-sorted (FCFS) order, so the
    /// best-ever fitness returned is never worse than the FCFS baseline.
    /// Neighbors swap two distinct random positions; worse neighbors are
    /// accepted with probability `exp(-delta / temperature)`, and the
    /// temperature cools geometrically until it reaches the floor.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(processes: &[Process], config: &SaConfig) -> SaResult {
        config.validate().expect("invalid SaConfig");

        let mut rng = rng_from_seed(config.seed);

        let mut current = arrival_order(processes);
        let mut current_fitness = fitness(processes, &current);
        let mut best = current.clone();
        let mut best_fitness = current_fitness;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                let neighbor = swap_neighbor(&current, &mut rng);
                let neighbor_fitness = fitness(processes, &neighbor);
                let delta = neighbor_fitness - current_fitness;

                // Metropolis acceptance criterion.
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                };

                if accept {
                    current = neighbor;
                    current_fitness = neighbor_fitness;
                    accepted_moves += 1;

                    if current_fitness < best_fitness {
                        best = current.clone();
                        best_fitness = current_fitness;
                    }
                }

                iterations += 1;
            }

            temperature *= config.cooling_rate;
        }

        SaResult {
            best,
            best_fitness,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        }
    }
}
