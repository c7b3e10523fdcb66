//! Non-preemptive schedule construction.
//!
//! [`build_schedule`] simulates a single CPU executing processes strictly
//! in a caller-supplied order, gating each dispatch on its arrival time.
//! It is a pure function and serves as the fitness oracle for every
//! permutation-searching algorithm in this crate: fitness = average
//! waiting time, lower is better.

use crate::process::{Process, ScheduledProcess};

/// A completed non-preemptive simulation.
#[derive(Debug, Clone)]
pub struct BuiltSchedule {
    /// One record per process, in execution order.
    pub scheduled: Vec<ScheduledProcess>,

    /// Sum of all waiting times.
    pub total_waiting_time: f64,

    /// Mean waiting time (0.0 for an empty order).
    pub average_waiting_time: f64,
}

/// Simulates a single CPU executing `order` (indices into `processes`)
/// non-preemptively, in the given order.
///
/// The clock starts at 0 and jumps forward to a process's arrival time
/// when the CPU would otherwise sit idle. Each process runs to completion
/// once dispatched.
///
/// # Panics
/// Panics if `order` contains an index out of bounds for `processes`.
pub fn build_schedule(processes: &[Process], order: &[usize]) -> BuiltSchedule {
    let mut scheduled = Vec::with_capacity(order.len());
    let mut clock = 0.0_f64;
    let mut total_waiting_time = 0.0;

    for &idx in order {
        let process = &processes[idx];
        if clock < process.arrival_time {
            clock = process.arrival_time;
        }

        let waiting_time = (clock - process.arrival_time).max(0.0);
        let start_time = clock;
        let end_time = start_time + process.burst_time;
        let turnaround_time = end_time - process.arrival_time;

        scheduled.push(ScheduledProcess {
            process: process.clone(),
            start_time,
            end_time,
            waiting_time,
            turnaround_time,
            // Non-preemptive: first dispatch is the only dispatch.
            response_time: waiting_time,
        });

        total_waiting_time += waiting_time;
        clock = end_time;
    }

    let average_waiting_time = if scheduled.is_empty() {
        0.0
    } else {
        total_waiting_time / scheduled.len() as f64
    };

    BuiltSchedule {
        scheduled,
        total_waiting_time,
        average_waiting_time,
    }
}

/// Average waiting time of executing `order` — the shared fitness value.
pub fn fitness(processes: &[Process], order: &[usize]) -> f64 {
    build_schedule(processes, order).average_waiting_time
}
