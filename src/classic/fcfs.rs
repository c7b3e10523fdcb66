//! First-Come-First-Served scheduling.

use crate::metrics::assemble_result;
use crate::perm::arrival_order;
use crate::process::{Algorithm, AlgorithmResult, Process};
use crate::sim::build_schedule;

/// Runs First-Come-First-Served: processes execute in arrival order.
///
/// The sort is stable, so processes with equal arrival times keep their
/// input order.
pub fn fcfs(processes: &[Process]) -> AlgorithmResult {
    let order = arrival_order(processes);
    let built = build_schedule(processes, &order);
    assemble_result(Algorithm::Fcfs, processes, built.scheduled, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fcfs_scenario() {
        // A(arrival=0, burst=5), B(arrival=1, burst=3).
        let ps = vec![Process::new("a", 5.0, 0.0), Process::new("b", 3.0, 1.0)];
        let result = fcfs(&ps);

        assert_eq!(result.scheduled[0].process.id, "a");
        assert!((result.scheduled[0].start_time - 0.0).abs() < 1e-12);
        assert!((result.scheduled[0].end_time - 5.0).abs() < 1e-12);
        assert_eq!(result.scheduled[1].process.id, "b");
        assert!((result.scheduled[1].start_time - 5.0).abs() < 1e-12);
        assert!((result.scheduled[1].end_time - 8.0).abs() < 1e-12);
        assert!((result.scheduled[1].waiting_time - 4.0).abs() < 1e-12);

        assert!((result.average_waiting_time - 2.0).abs() < 1e-12);
        assert!((result.throughput - 0.25).abs() < 1e-12);
        assert!((result.cpu_utilization - 100.0).abs() < 1e-12);
        assert!(result.average_response_time.is_none());
    }

    #[test]
    fn test_fcfs_stable_under_arrival_ties() {
        let ps = vec![
            Process::new("first", 2.0, 1.0),
            Process::new("second", 3.0, 1.0),
            Process::new("third", 1.0, 1.0),
        ];
        let result = fcfs(&ps);

        let ids: Vec<&str> = result
            .scheduled
            .iter()
            .map(|p| p.process.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let ps = vec![Process::new("late", 2.0, 10.0)];
        let result = fcfs(&ps);
        assert!((result.scheduled[0].start_time - 10.0).abs() < 1e-12);
        assert!((result.scheduled[0].waiting_time - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_fcfs_empty_input() {
        let result = fcfs(&[]);
        assert!(result.scheduled.is_empty());
        assert!((result.throughput - 0.0).abs() < 1e-12);
        assert!((result.cpu_utilization - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_fcfs_idempotent() {
        let ps = vec![
            Process::new("a", 4.0, 2.0),
            Process::new("b", 1.0, 0.0),
            Process::new("c", 3.0, 2.0),
        ];
        let first = fcfs(&ps);
        let second = fcfs(&ps);
        assert_eq!(first.scheduled, second.scheduled);
        assert!((first.average_waiting_time - second.average_waiting_time).abs() < 1e-15);
    }
}
