//! Shortest Job First scheduling (non-preemptive).

use crate::metrics::assemble_result;
use crate::perm::arrival_order;
use crate::process::{Algorithm, AlgorithmResult, Process};
use crate::sim::build_schedule;

/// Runs non-preemptive Shortest Job First.
///
/// At each decision point the shortest job among the arrived, not-yet-
/// scheduled processes is dispatched and runs to completion. Burst-time
/// ties keep the candidate encountered first in arrival order. When no
/// process has arrived, the clock jumps to the earliest remaining arrival.
pub fn sjf(processes: &[Process]) -> AlgorithmResult {
    let order = select_order(processes, |p| p.burst_time, arrival_order(processes));
    let built = build_schedule(processes, &order);
    assemble_result(Algorithm::Sjf, processes, built.scheduled, None)
}

/// Greedy decision-point selection shared by SJF and Priority.
///
/// Repeatedly picks the arrived candidate with the strictly smallest key
/// from `remaining` (scanned in the given order), advancing the clock to
/// the next arrival whenever the CPU would idle.
pub(super) fn select_order(
    processes: &[Process],
    key: impl Fn(&Process) -> f64,
    mut remaining: Vec<usize>,
) -> Vec<usize> {
    let mut order = Vec::with_capacity(remaining.len());
    let mut clock = 0.0_f64;

    while !remaining.is_empty() {
        let mut chosen: Option<usize> = None;
        for (pos, &idx) in remaining.iter().enumerate() {
            if processes[idx].arrival_time > clock {
                continue;
            }
            match chosen {
                Some(best) if key(&processes[idx]) >= key(&processes[remaining[best]]) => {}
                _ => chosen = Some(pos),
            }
        }

        let Some(pos) = chosen else {
            // Nothing has arrived: jump to the earliest remaining arrival.
            clock = remaining
                .iter()
                .map(|&idx| processes[idx].arrival_time)
                .fold(f64::INFINITY, f64::min);
            continue;
        };

        let idx = remaining.remove(pos);
        clock = clock.max(processes[idx].arrival_time) + processes[idx].burst_time;
        order.push(idx);
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjf_scenario() {
        // A(0,4), B(0,2), C(0,1) ⇒ order C, B, A; waits 0, 1, 3.
        let ps = vec![
            Process::new("a", 4.0, 0.0),
            Process::new("b", 2.0, 0.0),
            Process::new("c", 1.0, 0.0),
        ];
        let result = sjf(&ps);

        let ids: Vec<&str> = result
            .scheduled
            .iter()
            .map(|p| p.process.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);

        assert!((result.scheduled[0].waiting_time - 0.0).abs() < 1e-12);
        assert!((result.scheduled[1].waiting_time - 1.0).abs() < 1e-12);
        assert!((result.scheduled[2].waiting_time - 3.0).abs() < 1e-12);
        assert!((result.average_waiting_time - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sjf_respects_arrival_gating() {
        // The short job arrives after the long one has been dispatched.
        let ps = vec![Process::new("long", 10.0, 0.0), Process::new("short", 1.0, 1.0)];
        let result = sjf(&ps);

        // Non-preemptive: the long job was alone at t=0 and runs first.
        assert_eq!(result.scheduled[0].process.id, "long");
        assert!((result.scheduled[1].start_time - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_sjf_idles_to_next_arrival() {
        let ps = vec![Process::new("a", 2.0, 5.0), Process::new("b", 1.0, 4.0)];
        let result = sjf(&ps);

        assert_eq!(result.scheduled[0].process.id, "b");
        assert!((result.scheduled[0].start_time - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_sjf_burst_ties_keep_arrival_order() {
        let ps = vec![
            Process::new("later", 2.0, 1.0),
            Process::new("earlier", 2.0, 0.0),
        ];
        let result = sjf(&ps);
        assert_eq!(result.scheduled[0].process.id, "earlier");
    }

    #[test]
    fn test_sjf_idempotent() {
        let ps = vec![
            Process::new("a", 4.0, 0.0),
            Process::new("b", 2.0, 3.0),
            Process::new("c", 6.0, 1.0),
        ];
        let first = sjf(&ps);
        let second = sjf(&ps);
        assert_eq!(first.scheduled, second.scheduled);
    }
}
