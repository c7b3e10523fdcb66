//! Priority scheduling (non-preemptive).

use super::sjf::select_order;
use crate::metrics::assemble_result;
use crate::perm::identity;
use crate::process::{Algorithm, AlgorithmResult, Process};
use crate::sim::build_schedule;

/// Runs non-preemptive priority scheduling.
///
/// At each decision point the arrived process with the lowest priority
/// number (= most urgent) is dispatched and runs to completion. A
/// missing priority counts as the worst possible value, so unprioritized
/// processes schedule last among the arrived candidates. Ties keep the
/// candidate encountered first in input order.
pub fn priority(processes: &[Process]) -> AlgorithmResult {
    let order = select_order(
        processes,
        |p| p.priority.unwrap_or(u32::MAX) as f64,
        identity(processes.len()),
    );
    let built = build_schedule(processes, &order);
    assemble_result(Algorithm::Priority, processes, built.scheduled, None)
}
