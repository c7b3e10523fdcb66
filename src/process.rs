//! Core data model: process descriptors, schedule records, and the
//! algorithm identifier set.
//!
//! Inputs are assumed pre-validated by the caller: `burst_time > 0`,
//! `arrival_time >= 0`. The simulators do not re-check these and may
//! produce meaningless metrics if they are violated.

use std::fmt;
use std::str::FromStr;

/// An immutable process descriptor supplied by the caller.
///
/// `priority` follows the usual convention: lower numeric value means
/// higher scheduling priority. A missing priority is treated as the
/// worst possible value by the priority scheduler.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Process {
    /// Unique, stable identifier.
    pub id: String,

    /// Display name. Not interpreted by any algorithm.
    pub name: String,

    /// Total CPU time required to run to completion. Must be positive.
    pub burst_time: f64,

    /// Instant the process becomes eligible for scheduling. Must be >= 0.
    pub arrival_time: f64,

    /// Optional priority; lower = more urgent. `None` = lowest priority.
    pub priority: Option<u32>,
}

impl Process {
    /// Creates a process with the given identity and timing.
    ///
    /// The display name defaults to the id.
    pub fn new(id: impl Into<String>, burst_time: f64, arrival_time: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            burst_time,
            arrival_time,
            priority: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the priority (lower = more urgent).
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A process together with its simulated execution record.
///
/// For non-preemptive algorithms `end_time == start_time + burst_time`
/// and `response_time == waiting_time`. Round Robin aggregates multiple
/// slices: `start_time` is the first dispatch, `end_time` the final
/// completion, and `response_time` may be strictly less than
/// `waiting_time`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledProcess {
    /// The scheduled process.
    pub process: Process,

    /// First (or only) dispatch time. Always >= arrival time.
    pub start_time: f64,

    /// Completion time.
    pub end_time: f64,

    /// Time spent ready but not executing: `turnaround - burst`.
    pub waiting_time: f64,

    /// Total time from arrival to completion: `end - arrival`.
    pub turnaround_time: f64,

    /// Time from arrival to first dispatch.
    pub response_time: f64,
}

/// The outcome of running one algorithm over one process set.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmResult {
    /// Human-readable algorithm label.
    pub name: String,

    /// One entry per input process. Order is the completion/selection
    /// order and is not significant for consumers.
    pub scheduled: Vec<ScheduledProcess>,

    /// Mean waiting time across all processes.
    pub average_waiting_time: f64,

    /// Mean turnaround time across all processes.
    pub average_turnaround_time: f64,

    /// Completed processes per unit time (`n / makespan`).
    pub throughput: f64,

    /// Busy fraction of the CPU as a percentage.
    pub cpu_utilization: f64,

    /// Mean response time; populated by preemptive algorithms only.
    pub average_response_time: Option<f64>,
}

/// The fixed set of selectable scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// First-Come-First-Served: run in arrival order.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Round Robin with a fixed time quantum.
    RoundRobin,
    /// Priority scheduling, non-preemptive.
    Priority,
    /// Genetic algorithm over execution-order permutations.
    Genetic,
    /// Particle swarm optimization over permutations.
    ParticleSwarm,
    /// Ant colony optimization over permutations.
    AntColony,
    /// Simulated annealing over permutations.
    SimulatedAnnealing,
}

impl Algorithm {
    /// All algorithms, in canonical presentation order.
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Priority,
        Algorithm::Genetic,
        Algorithm::ParticleSwarm,
        Algorithm::AntColony,
        Algorithm::SimulatedAnnealing,
    ];

    /// Stable machine identifier for this algorithm.
    pub fn identifier(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "first-come-first-served",
            Algorithm::Sjf => "shortest-job-first",
            Algorithm::RoundRobin => "round-robin",
            Algorithm::Priority => "priority",
            Algorithm::Genetic => "genetic",
            Algorithm::ParticleSwarm => "particle-swarm",
            Algorithm::AntColony => "ant-colony",
            Algorithm::SimulatedAnnealing => "simulated-annealing",
        }
    }

    /// Human-readable label used in [`AlgorithmResult::name`].
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come-First-Served (FCFS)",
            Algorithm::Sjf => "Shortest Job First (SJF)",
            Algorithm::RoundRobin => "Round Robin (RR)",
            Algorithm::Priority => "Priority Scheduling",
            Algorithm::Genetic => "Genetic Algorithm (GA)",
            Algorithm::ParticleSwarm => "Particle Swarm Optimization (PSO)",
            Algorithm::AntColony => "Ant Colony Optimization (ACO)",
            Algorithm::SimulatedAnnealing => "Simulated Annealing (SA)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.identifier() == s)
            .ok_or_else(|| format!("unknown algorithm identifier: {s:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("p1", 4.0, 1.0)
            .with_name("editor")
            .with_priority(2);
        assert_eq!(p.id, "p1");
        assert_eq!(p.name, "editor");
        assert!((p.burst_time - 4.0).abs() < 1e-12);
        assert!((p.arrival_time - 1.0).abs() < 1e-12);
        assert_eq!(p.priority, Some(2));
    }

    #[test]
    fn test_process_name_defaults_to_id() {
        let p = Process::new("p7", 1.0, 0.0);
        assert_eq!(p.name, "p7");
        assert_eq!(p.priority, None);
    }

    #[test]
    fn test_identifier_round_trip() {
        for algo in Algorithm::ALL {
            let parsed: Algorithm = algo.identifier().parse().expect("round trip");
            assert_eq!(parsed, algo);
        }
    }

    #[test]
    fn test_unknown_identifier_rejected() {
        assert!("multilevel-feedback".parse::<Algorithm>().is_err());
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            Algorithm::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels.len(), Algorithm::ALL.len());
    }
}
