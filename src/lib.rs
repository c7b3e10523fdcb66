//! CPU scheduling algorithms with comparative analysis.
//!
//! Schedules a set of processes on a single CPU using classic
//! deterministic policies and metaheuristic search, then compares the
//! resulting performance metrics:
//!
//! - **FCFS**: First-Come-First-Served, non-preemptive arrival order.
//! - **SJF**: Shortest Job First, non-preemptive greedy selection.
//! - **Round Robin (RR)**: Preemptive time slicing with a fixed quantum.
//! - **Priority**: Non-preemptive, lower priority number runs first.
//! - **Genetic Algorithm (GA)**: Evolves execution-order permutations
//!   with tournament selection, order crossover, and swap mutation.
//! - **Particle Swarm Optimization (PSO)**: Discrete PSO over
//!   permutations with probabilistic swap-based velocity.
//! - **Ant Colony Optimization (ACO)**: Pheromone-guided tour
//!   construction with a burst-similarity heuristic.
//! - **Simulated Annealing (SA)**: Metropolis acceptance over pairwise
//!   swaps with geometric cooling.
//!
//! All algorithms minimize average waiting time over non-preemptive
//! execution orders (RR excepted, which simulates preemption directly).
//! The [`engine`] module runs any selection of them in one batch and
//! [`ranking`] picks the best result per metric or by a weighted
//! composite score.
//!
//! # Example
//!
//! ```
//! use cpu_sched::engine::{run_algorithms, RunConfig};
//! use cpu_sched::ranking::{best_overall, find_best, Metric};
//! use cpu_sched::{Algorithm, Process};
//!
//! let processes = vec![
//!     Process::new("p1", 6.0, 0.0),
//!     Process::new("p2", 2.0, 1.0),
//!     Process::new("p3", 4.0, 2.0),
//! ];
//!
//! let selected = [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Genetic];
//! let results = run_algorithms(&processes, &selected, &RunConfig::default().with_seed(42));
//!
//! let fastest = find_best(&results, Metric::AverageWaitingTime).unwrap();
//! let overall = best_overall(&results).unwrap();
//! assert!(fastest.average_waiting_time <= results[0].average_waiting_time);
//! assert!(!overall.name.is_empty());
//! ```

pub mod aco;
pub mod classic;
pub mod engine;
pub mod ga;
pub mod metrics;
pub mod perm;
pub mod process;
pub mod pso;
pub mod ranking;
pub mod sa;
pub mod sim;

pub use process::{Algorithm, AlgorithmResult, Process, ScheduledProcess};
