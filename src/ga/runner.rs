//! GA evolutionary loop execution.

use rand::Rng;

use super::config::GaConfig;
use crate::perm::{arrival_order, burst_order, order_crossover, random_order, rng_from_seed, swap_mutation};
use crate::process::Process;
use crate::sim::fitness;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best execution order found during the entire run.
    pub best: Vec<usize>,

    /// Fitness of the best order (average waiting time).
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best-so-far fitness at the end of each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use cpu_sched::ga::{GaConfig, GaRunner};
/// use cpu_sched::Process;
///
/// let processes = vec![
///     Process::new("a", 4.0, 0.0),
///     Process::new("b", 1.0, 0.0),
/// ];
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&processes, &config);
/// assert_eq!(result.best.len(), 2);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA over execution-order permutations of `processes`.
    ///
    /// The initial population contains the arrival-sorted order (the FCFS
    /// schedule), the burst-sorted order (SJF-like), and random
    /// permutations for diversity. One unmutated copy of each
    /// generation's best survives into the next generation, so the
    /// best-found fitness never regresses below the FCFS baseline.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(processes: &[Process], config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let n = processes.len();
        let mut rng = rng_from_seed(config.seed);

        // Seeded population: FCFS order, SJF-like order, then random.
        let mut population: Vec<Vec<usize>> = Vec::with_capacity(config.population_size);
        population.push(arrival_order(processes));
        population.push(burst_order(processes));
        while population.len() < config.population_size {
            population.push(random_order(n, &mut rng));
        }

        let mut best: Vec<usize> = population[0].clone();
        let mut best_fitness = f64::INFINITY;
        let mut fitness_history = Vec::with_capacity(config.generations);

        for _ in 0..config.generations {
            let fitnesses: Vec<f64> = population
                .iter()
                .map(|order| fitness(processes, order))
                .collect();

            let gen_best = min_index(&fitnesses);
            if fitnesses[gen_best] < best_fitness {
                best = population[gen_best].clone();
                best_fitness = fitnesses[gen_best];
            }
            fitness_history.push(best_fitness);

            // Elitism: the generation best survives unmutated.
            let mut next_gen: Vec<Vec<usize>> = Vec::with_capacity(config.population_size);
            next_gen.push(population[gen_best].clone());

            while next_gen.len() < config.population_size {
                let p1 = tournament(&fitnesses, config.tournament_size, &mut rng);
                let p2 = tournament(&fitnesses, config.tournament_size, &mut rng);
                let mut child = order_crossover(&population[p1], &population[p2], &mut rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    swap_mutation(&mut child, &mut rng);
                }
                next_gen.push(child);
            }

            population = next_gen;
        }

        GaResult {
            best,
            best_fitness,
            generations: config.generations,
            fitness_history,
        }
    }
}

/// Tournament selection: sample `k` members, return the fittest index.
fn tournament<R: Rng>(fitnesses: &[f64], k: usize, rng: &mut R) -> usize {
    let n = fitnesses.len();
    let mut best = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if fitnesses[idx] < fitnesses[best] {
            best = idx;
        }
    }
    best
}

/// Index of the minimum fitness value.
fn min_index(fitnesses: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitnesses.iter().enumerate() {
        if f < fitnesses[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classic::fcfs;

    fn workload() -> Vec<Process> {
        vec![
            Process::new("a", 8.0, 0.0),
            Process::new("b", 1.0, 0.0),
            Process::new("c", 4.0, 0.0),
            Process::new("d", 2.0, 1.0),
            Process::new("e", 6.0, 2.0),
        ]
    }

    #[test]
    fn test_ga_finds_sjf_order_for_simultaneous_arrivals() {
        let ps = vec![
            Process::new("a", 4.0, 0.0),
            Process::new("b", 2.0, 0.0),
            Process::new("c", 1.0, 0.0),
        ];
        let result = GaRunner::run(&ps, &GaConfig::default().with_seed(42));

        // Optimal for simultaneous arrivals is shortest-first: c, b, a.
        assert_eq!(result.best, vec![2, 1, 0]);
        assert!((result.best_fitness - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ga_never_worse_than_fcfs() {
        let ps = workload();
        let baseline = fcfs(&ps).average_waiting_time;
        let result = GaRunner::run(&ps, &GaConfig::default().with_seed(42));
        assert!(
            result.best_fitness <= baseline + 1e-9,
            "GA {} worse than FCFS {}",
            result.best_fitness,
            baseline
        );
    }

    #[test]
    fn test_ga_history_monotone_non_increasing() {
        let result = GaRunner::run(&workload(), &GaConfig::default().with_seed(7));
        assert_eq!(result.fitness_history.len(), result.generations);
        for pair in result.fitness_history.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-12);
        }
    }

    #[test]
    fn test_ga_seeded_runs_identical() {
        let ps = workload();
        let config = GaConfig::default().with_seed(123);
        let a = GaRunner::run(&ps, &config);
        let b = GaRunner::run(&ps, &config);
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_ga_single_process() {
        let ps = vec![Process::new("only", 3.0, 0.0)];
        let result = GaRunner::run(&ps, &GaConfig::default().with_seed(1));
        assert_eq!(result.best, vec![0]);
        assert!((result.best_fitness - 0.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "invalid GaConfig")]
    fn test_ga_rejects_invalid_config() {
        let ps = workload();
        GaRunner::run(&ps, &GaConfig::default().with_population_size(1));
    }
}
