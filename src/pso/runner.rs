//! PSO swarm loop execution.

use rand::Rng;

use super::config::PsoConfig;
use crate::perm::{position_distance, random_order, rng_from_seed};
use crate::process::Process;
use crate::sim::fitness;

/// Result of a PSO optimization run.
#[derive(Debug, Clone)]
pub struct PsoResult {
    /// The best execution order found during the entire run.
    pub best: Vec<usize>,

    /// Fitness of the best order (average waiting time).
    pub best_fitness: f64,

    /// Number of swarm iterations executed.
    pub iterations: usize,

    /// Best-so-far fitness at the end of each iteration.
    pub fitness_history: Vec<f64>,
}

/// One particle: a permutation position with per-index swap velocities.
struct Particle {
    position: Vec<usize>,
    velocity: Vec<f64>,
    best_position: Vec<usize>,
    best_fitness: f64,
}

/// Executes the particle swarm loop.
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO over execution-order permutations of `processes`.
    ///
    /// Velocity per index `i` is updated as
    /// `w·v[i] + c1·r1·d(pos, pbest) + c2·r2·d(pos, gbest)` with fresh
    /// uniform draws `r1`, `r2` per index and `d` the positional
    /// distance between permutations. The position update swaps index
    /// `i` with a uniformly random index whenever a draw falls below
    /// `v[i]`.
    ///
    /// The global best starts at the best initial personal best and is
    /// updated whenever an improving personal best beats it, so the
    /// returned candidate is the best position ever evaluated.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`PsoConfig::validate`] first to get a descriptive error).
    pub fn run(processes: &[Process], config: &PsoConfig) -> PsoResult {
        config.validate().expect("invalid PsoConfig");

        let n = processes.len();
        let mut rng = rng_from_seed(config.seed);

        let mut swarm: Vec<Particle> = (0..config.particles)
            .map(|_| {
                let position = random_order(n, &mut rng);
                let velocity: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..1.0)).collect();
                let best_fitness = fitness(processes, &position);
                Particle {
                    best_position: position.clone(),
                    position,
                    velocity,
                    best_fitness,
                }
            })
            .collect();

        let seed_best = swarm
            .iter()
            .min_by(|a, b| {
                a.best_fitness
                    .partial_cmp(&b.best_fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("swarm must not be empty");
        let mut global_best: Vec<usize> = seed_best.best_position.clone();
        let mut global_fitness = seed_best.best_fitness;
        let mut fitness_history = Vec::with_capacity(config.iterations);

        for _ in 0..config.iterations {
            for p in 0..swarm.len() {
                let cognitive_dist =
                    position_distance(&swarm[p].position, &swarm[p].best_position) as f64;
                let social_dist = position_distance(&swarm[p].position, &global_best) as f64;

                for i in 0..n {
                    let r1: f64 = rng.random_range(0.0..1.0);
                    let r2: f64 = rng.random_range(0.0..1.0);
                    swarm[p].velocity[i] = config.inertia * swarm[p].velocity[i]
                        + config.cognitive * r1 * cognitive_dist
                        + config.social * r2 * social_dist;
                }

                // Probabilistic swap walk driven by per-index velocity.
                for i in 0..n {
                    if rng.random_range(0.0..1.0) < swarm[p].velocity[i] {
                        let j = rng.random_range(0..n);
                        swarm[p].position.swap(i, j);
                    }
                }

                let evaluated = fitness(processes, &swarm[p].position);
                if evaluated < swarm[p].best_fitness {
                    swarm[p].best_position = swarm[p].position.clone();
                    swarm[p].best_fitness = evaluated;

                    if evaluated < global_fitness {
                        global_best = swarm[p].position.clone();
                        global_fitness = evaluated;
                    }
                }
            }

            fitness_history.push(global_fitness);
        }

        PsoResult {
            best: global_best,
            best_fitness: global_fitness,
            iterations: config.iterations,
            fitness_history,
        }
    }
}
