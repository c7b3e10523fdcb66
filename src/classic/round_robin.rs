//! Round Robin scheduling (preemptive, fixed quantum).

use crate::metrics::{assemble_result, average_response_time};
use crate::perm::arrival_order;
use crate::process::{Algorithm, AlgorithmResult, Process, ScheduledProcess};

/// Configuration for Round Robin.
///
/// # Examples
///
/// ```
/// use cpu_sched::classic::RrConfig;
///
/// let config = RrConfig::default().with_quantum(4.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RrConfig {
    /// Time quantum: the maximum length of one CPU slice.
    pub quantum: f64,
}

impl Default for RrConfig {
    fn default() -> Self {
        Self { quantum: 2.0 }
    }
}

impl RrConfig {
    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: f64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.quantum <= 0.0 {
            return Err(format!("quantum must be positive, got {}", self.quantum));
        }
        Ok(())
    }
}

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, PartialEq)]
struct Slice {
    idx: usize,
    start: f64,
    end: f64,
}

/// Per-process completion record from the time-sliced simulation.
#[derive(Debug, Clone)]
struct Completion {
    first_dispatch: f64,
    end_time: f64,
}

/// Runs preemptive Round Robin with the configured quantum.
///
/// A FIFO ready queue is dispatched in slices of
/// `min(quantum, remaining burst)`. Processes arriving during a slice are
/// enqueued before the preempted incumbent is re-appended; a process
/// finishing exactly at the quantum boundary completes and is not
/// re-enqueued. Waiting and turnaround times are computed once at final
/// completion; response time is measured at the first dispatch.
///
/// # Panics
/// Panics if the configuration is invalid (call [`RrConfig::validate`]
/// first to get a descriptive error).
pub fn round_robin(processes: &[Process], config: &RrConfig) -> AlgorithmResult {
    config.validate().expect("invalid RrConfig");

    let (_, completions) = simulate(processes, config.quantum);

    let by_arrival = arrival_order(processes);
    let mut scheduled = Vec::with_capacity(processes.len());
    for idx in by_arrival {
        let process = &processes[idx];
        let done = &completions[idx];

        let turnaround_time = done.end_time - process.arrival_time;
        scheduled.push(ScheduledProcess {
            process: process.clone(),
            start_time: done.first_dispatch,
            end_time: done.end_time,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
            response_time: done.first_dispatch - process.arrival_time,
        });
    }

    let avg_response = average_response_time(&scheduled);
    assemble_result(
        Algorithm::RoundRobin,
        processes,
        scheduled,
        Some(avg_response),
    )
}

/// Time-sliced simulation producing the raw dispatch sequence and
/// per-process completion records.
fn simulate(processes: &[Process], quantum: f64) -> (Vec<Slice>, Vec<Completion>) {
    let n = processes.len();
    let by_arrival = arrival_order(processes);

    let mut remaining: Vec<f64> = processes.iter().map(|p| p.burst_time).collect();
    let mut completions: Vec<Completion> = processes
        .iter()
        .map(|_| Completion {
            first_dispatch: 0.0,
            end_time: 0.0,
        })
        .collect();
    let mut dispatched = vec![false; n];
    let mut enqueued = vec![false; n];
    let mut finished = vec![false; n];
    let mut finished_count = 0usize;

    let mut queue: std::collections::VecDeque<usize> = std::collections::VecDeque::new();
    let mut slices = Vec::new();
    let mut clock = 0.0_f64;

    // Processes present at time zero enter the queue in arrival order.
    for &idx in &by_arrival {
        if processes[idx].arrival_time == 0.0 {
            queue.push_back(idx);
            enqueued[idx] = true;
        }
    }

    while finished_count < n {
        let Some(idx) = queue.pop_front() else {
            // Idle: jump to the next unfinished arrival.
            let next_arrival = by_arrival
                .iter()
                .filter(|&&i| !finished[i] && !enqueued[i])
                .map(|&i| processes[i].arrival_time)
                .fold(f64::INFINITY, f64::min);
            if !next_arrival.is_finite() {
                break;
            }
            clock = next_arrival;
            for &i in &by_arrival {
                if !enqueued[i] && processes[i].arrival_time == clock {
                    queue.push_back(i);
                    enqueued[i] = true;
                }
            }
            continue;
        };

        if !dispatched[idx] {
            completions[idx].first_dispatch = clock;
            dispatched[idx] = true;
        }

        let slice_len = quantum.min(remaining[idx]);
        let slice_start = clock;
        let slice_end = clock + slice_len;
        slices.push(Slice {
            idx,
            start: slice_start,
            end: slice_end,
        });
        remaining[idx] -= slice_len;

        // Arrivals inside this slice enter ahead of the incumbent.
        for &i in &by_arrival {
            if !enqueued[i]
                && processes[i].arrival_time > slice_start
                && processes[i].arrival_time <= slice_end
            {
                queue.push_back(i);
                enqueued[i] = true;
            }
        }

        clock = slice_end;

        if remaining[idx] <= 0.0 {
            completions[idx].end_time = clock;
            finished[idx] = true;
            finished_count += 1;
        } else {
            queue.push_back(idx);
        }
    }

    (slices, completions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn procs(specs: &[(f64, f64)]) -> Vec<Process> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(burst, arrival))| Process::new(format!("p{i}"), burst, arrival))
            .collect()
    }

    #[test]
    fn test_rr_alternates_within_quantum() {
        // Two jobs of 4 at t=0, quantum 2: p0 [0,2), p1 [2,4), p0 [4,6), p1 [6,8).
        let ps = procs(&[(4.0, 0.0), (4.0, 0.0)]);
        let (slices, completions) = simulate(&ps, 2.0);

        let seq: Vec<(usize, f64, f64)> = slices.iter().map(|s| (s.idx, s.start, s.end)).collect();
        assert_eq!(
            seq,
            vec![
                (0, 0.0, 2.0),
                (1, 2.0, 4.0),
                (0, 4.0, 6.0),
                (1, 6.0, 8.0),
            ]
        );
        assert!((completions[0].end_time - 6.0).abs() < 1e-12);
        assert!((completions[1].end_time - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_rr_quantum_boundary_completion() {
        // Burst equals the quantum: one slice, no re-enqueue.
        let ps = procs(&[(2.0, 0.0)]);
        let (slices, _) = simulate(&ps, 2.0);
        assert_eq!(slices.len(), 1);
    }

    #[test]
    fn test_rr_mid_slice_arrival_precedes_requeue() {
        // p1 arrives during p0's first slice; it must run before p0's
        // second slice.
        let ps = procs(&[(4.0, 0.0), (2.0, 1.0)]);
        let (slices, _) = simulate(&ps, 2.0);

        let idxs: Vec<usize> = slices.iter().map(|s| s.idx).collect();
        assert_eq!(idxs, vec![0, 1, 0]);
    }

    #[test]
    fn test_rr_idle_advances_to_next_arrival() {
        let ps = procs(&[(2.0, 5.0)]);
        let (slices, _) = simulate(&ps, 2.0);
        assert!((slices[0].start - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_rr_metrics_and_response_time() {
        let ps = procs(&[(4.0, 0.0), (4.0, 0.0)]);
        let result = round_robin(&ps, &RrConfig::default());

        let p0 = &result.scheduled[0];
        let p1 = &result.scheduled[1];

        // p0: completes at 6, turnaround 6, waiting 2, response 0.
        assert!((p0.start_time - 0.0).abs() < 1e-12);
        assert!((p0.end_time - 6.0).abs() < 1e-12);
        assert!((p0.waiting_time - 2.0).abs() < 1e-12);
        assert!((p0.response_time - 0.0).abs() < 1e-12);

        // p1: first dispatched at 2, completes at 8, waiting 4, response 2.
        assert!((p1.start_time - 2.0).abs() < 1e-12);
        assert!((p1.end_time - 8.0).abs() < 1e-12);
        assert!((p1.waiting_time - 4.0).abs() < 1e-12);
        assert!((p1.response_time - 2.0).abs() < 1e-12);

        // Response may be strictly less than waiting under preemption.
        assert!(p1.response_time < p1.waiting_time);
        let avg = result.average_response_time.expect("preemptive result");
        assert!((avg - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rr_empty_input() {
        let result = round_robin(&[], &RrConfig::default());
        assert!(result.scheduled.is_empty());
        assert!((result.throughput - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_rr_rejects_bad_quantum() {
        assert!(RrConfig::default().with_quantum(0.0).validate().is_err());
        assert!(RrConfig::default().with_quantum(-1.0).validate().is_err());
    }

    #[test]
    fn test_rr_idempotent() {
        let ps = procs(&[(4.0, 0.0), (3.0, 1.0), (2.0, 2.5)]);
        let a = round_robin(&ps, &RrConfig::default());
        let b = round_robin(&ps, &RrConfig::default());
        assert_eq!(a.scheduled, b.scheduled);
    }

    proptest! {
        #[test]
        fn prop_rr_invariants(
            specs in proptest::collection::vec((0.5f64..20.0, 0.0f64..30.0), 1..10),
            quantum in 0.5f64..5.0,
        ) {
            let ps = procs(&specs);
            let (slices, completions) = simulate(&ps, quantum);

            // No slice exceeds the quantum.
            for s in &slices {
                prop_assert!(s.end - s.start <= quantum + 1e-9);
                prop_assert!(s.end > s.start);
            }

            // Slices are strictly ordered in time on the single CPU.
            for pair in slices.windows(2) {
                prop_assert!(pair[1].start >= pair[0].end - 1e-9);
            }

            // Every process completes, and its slices sum to its burst.
            for (idx, p) in ps.iter().enumerate() {
                let total: f64 = slices
                    .iter()
                    .filter(|s| s.idx == idx)
                    .map(|s| s.end - s.start)
                    .sum();
                prop_assert!((total - p.burst_time).abs() < 1e-9);
                prop_assert!(completions[idx].end_time >= p.arrival_time + p.burst_time - 1e-9);
                prop_assert!(completions[idx].first_dispatch >= p.arrival_time - 1e-9);
            }
        }
    }
}
