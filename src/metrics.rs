//! Schedule performance metrics.
//!
//! Computes the summary statistics every algorithm reports from a
//! finished set of [`ScheduledProcess`] records and the original input.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting time | mean(waiting) |
//! | Average turnaround time | mean(turnaround) |
//! | Makespan | max(end time), 0 when empty |
//! | Throughput | n / max(makespan, 1) |
//! | CPU utilization | 100 × Σburst / max(makespan, 1) |
//! | Average response time | mean(response) |
//!
//! The `max(makespan, 1)` floor is the deliberate division-by-zero
//! convention for empty or zero-length schedules, not an error path.

use crate::process::{Algorithm, AlgorithmResult, Process, ScheduledProcess};

/// Summary statistics for one finished schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleMetrics {
    /// Mean waiting time (0.0 when there are no processes).
    pub average_waiting_time: f64,

    /// Mean turnaround time (0.0 when there are no processes).
    pub average_turnaround_time: f64,

    /// Completion time of the last-finishing process; 0.0 when empty.
    pub makespan: f64,

    /// Completed processes per unit time.
    pub throughput: f64,

    /// Busy CPU percentage over the makespan.
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule and its input process set.
    pub fn calculate(processes: &[Process], scheduled: &[ScheduledProcess]) -> Self {
        let n = processes.len();
        let total_waiting: f64 = scheduled.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: f64 = scheduled.iter().map(|p| p.turnaround_time).sum();
        let total_burst: f64 = processes.iter().map(|p| p.burst_time).sum();

        let makespan = scheduled
            .iter()
            .map(|p| p.end_time)
            .fold(0.0_f64, f64::max);
        let denom = if makespan > 0.0 { makespan } else { 1.0 };

        let (average_waiting_time, average_turnaround_time) = if n == 0 {
            (0.0, 0.0)
        } else {
            (total_waiting / n as f64, total_turnaround / n as f64)
        };

        Self {
            average_waiting_time,
            average_turnaround_time,
            makespan,
            throughput: n as f64 / denom,
            cpu_utilization: total_burst / denom * 100.0,
        }
    }
}

/// Packages a finished schedule as an [`AlgorithmResult`].
///
/// `average_response_time` is `Some` only for preemptive algorithms.
pub fn assemble_result(
    algorithm: Algorithm,
    processes: &[Process],
    scheduled: Vec<ScheduledProcess>,
    average_response_time: Option<f64>,
) -> AlgorithmResult {
    let metrics = ScheduleMetrics::calculate(processes, &scheduled);
    AlgorithmResult {
        name: algorithm.label().to_string(),
        scheduled,
        average_waiting_time: metrics.average_waiting_time,
        average_turnaround_time: metrics.average_turnaround_time,
        throughput: metrics.throughput,
        cpu_utilization: metrics.cpu_utilization,
        average_response_time,
    }
}

/// Mean response time across a schedule (0.0 when empty).
///
/// Only meaningful for preemptive algorithms; the non-preemptive ones
/// leave the result field unset instead.
pub fn average_response_time(scheduled: &[ScheduledProcess]) -> f64 {
    if scheduled.is_empty() {
        return 0.0;
    }
    scheduled.iter().map(|p| p.response_time).sum::<f64>() / scheduled.len() as f64
}
