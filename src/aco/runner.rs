//! ACO colony loop execution.

use rand::Rng;

use super::config::AcoConfig;
use crate::perm::rng_from_seed;
use crate::process::Process;
use crate::sim::fitness;

/// Floor for the deposit denominator: a zero-waiting tour would
/// otherwise deposit an infinite pheromone amount.
const MIN_DEPOSIT_FITNESS: f64 = 1e-9;

/// Result of an ACO optimization run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The best execution order found during the entire run.
    pub best: Vec<usize>,

    /// Fitness of the best order (average waiting time).
    pub best_fitness: f64,

    /// Number of colony iterations executed.
    pub iterations: usize,

    /// Best-so-far fitness at the end of each iteration.
    pub fitness_history: Vec<f64>,
}

/// Executes the ant colony loop.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO over execution-order permutations of `processes`.
    ///
    /// The pheromone matrix over ordered process pairs starts at 1.0;
    /// the static heuristic is `1 / (1 + |burst_i - burst_j|)`, biasing
    /// ants toward SJF-like transitions. Each ant starts at a random
    /// process and extends its tour by roulette selection among
    /// unvisited processes, weighted `pheromone^alpha * heuristic^beta`.
    /// After each iteration the matrix evaporates by `1 - rho` and every
    /// ant deposits `Q / fitness` along its tour, including a closing
    /// edge from the tour's last process back to its first (a carried-over
    /// cyclic-tour convention; the schedule itself is linear).
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`AcoConfig::validate`] first to get a descriptive error).
    pub fn run(processes: &[Process], config: &AcoConfig) -> AcoResult {
        config.validate().expect("invalid AcoConfig");

        let n = processes.len();
        if n == 0 {
            return AcoResult {
                best: Vec::new(),
                best_fitness: 0.0,
                iterations: config.iterations,
                fitness_history: vec![0.0; config.iterations],
            };
        }

        let mut rng = rng_from_seed(config.seed);
        let mut pheromone = vec![vec![1.0_f64; n]; n];

        // Static heuristic: prefer transitions between similar bursts.
        let mut heuristic = vec![vec![0.0_f64; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    let diff = (processes[i].burst_time - processes[j].burst_time).abs();
                    heuristic[i][j] = 1.0 / (1.0 + diff);
                }
            }
        }

        let mut best: Vec<usize> = Vec::new();
        let mut best_fitness = f64::INFINITY;
        let mut fitness_history = Vec::with_capacity(config.iterations);

        for _ in 0..config.iterations {
            let mut tours: Vec<(Vec<usize>, f64)> = Vec::with_capacity(config.ants);

            for _ in 0..config.ants {
                let tour = construct_tour(&pheromone, &heuristic, config, n, &mut rng);
                let tour_fitness = fitness(processes, &tour);

                if tour_fitness < best_fitness {
                    best = tour.clone();
                    best_fitness = tour_fitness;
                }
                tours.push((tour, tour_fitness));
            }

            // Evaporation, then deposits.
            for row in pheromone.iter_mut() {
                for cell in row.iter_mut() {
                    *cell *= 1.0 - config.evaporation;
                }
            }

            for (tour, tour_fitness) in &tours {
                let amount = config.deposit / tour_fitness.max(MIN_DEPOSIT_FITNESS);
                for edge in tour.windows(2) {
                    pheromone[edge[0]][edge[1]] += amount;
                }
                // Closing edge, last back to first.
                pheromone[tour[tour.len() - 1]][tour[0]] += amount;
            }

            fitness_history.push(best_fitness);
        }

        AcoResult {
            best,
            best_fitness,
            iterations: config.iterations,
            fitness_history,
        }
    }
}

/// Builds one full tour by roulette selection over unvisited processes.
fn construct_tour<R: Rng>(
    pheromone: &[Vec<f64>],
    heuristic: &[Vec<f64>],
    config: &AcoConfig,
    n: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);

    let mut current = rng.random_range(0..n);
    visited[current] = true;
    tour.push(current);

    while tour.len() < n {
        let weights: Vec<f64> = (0..n)
            .map(|next| {
                if visited[next] {
                    0.0
                } else {
                    pheromone[current][next].powf(config.alpha)
                        * heuristic[current][next].powf(config.beta)
                }
            })
            .collect();

        let total: f64 = weights.iter().sum();
        let next = if total > 0.0 {
            roulette(&weights, total, rng)
        } else {
            // All weights vanished; take the first unvisited process.
            visited.iter().position(|&v| !v).expect("tour incomplete")
        };

        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour
}

/// Roulette-wheel pick over non-negative weights summing to `total`.
fn roulette<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    // Floating-point fallback: last positive weight.
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .expect("total > 0 implies a positive weight")
}
