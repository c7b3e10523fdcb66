//! Cross-algorithm result ranking.
//!
//! Selects the best result for a single metric and computes a weighted
//! composite score across all metrics (lower is better): waiting and
//! turnaround weigh 0.3 each, throughput and utilization 0.2 each, with
//! the maximizing metrics inverted before weighting.

use crate::process::AlgorithmResult;

/// A single comparable performance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Mean waiting time; lower is better.
    AverageWaitingTime,
    /// Mean turnaround time; lower is better.
    AverageTurnaroundTime,
    /// Completed processes per unit time; higher is better.
    Throughput,
    /// Busy CPU percentage; higher is better.
    CpuUtilization,
}

impl Metric {
    /// Whether larger values of this metric are better.
    pub fn maximizing(&self) -> bool {
        matches!(self, Metric::Throughput | Metric::CpuUtilization)
    }

    fn value(&self, result: &AlgorithmResult) -> f64 {
        match self {
            Metric::AverageWaitingTime => result.average_waiting_time,
            Metric::AverageTurnaroundTime => result.average_turnaround_time,
            Metric::Throughput => result.throughput,
            Metric::CpuUtilization => result.cpu_utilization,
        }
    }
}

/// Composite score weights: waiting, turnaround, throughput, utilization.
const WEIGHTS: [(Metric, f64); 4] = [
    (Metric::AverageWaitingTime, 0.3),
    (Metric::AverageTurnaroundTime, 0.3),
    (Metric::Throughput, 0.2),
    (Metric::CpuUtilization, 0.2),
];

/// Returns the result with the best value for `metric`, or `None` for an
/// empty slice. Ties keep the earlier result.
pub fn find_best<'a>(results: &'a [AlgorithmResult], metric: Metric) -> Option<&'a AlgorithmResult> {
    let cmp = |a: &&AlgorithmResult, b: &&AlgorithmResult| {
        metric
            .value(a)
            .partial_cmp(&metric.value(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    };
    // min_by keeps the first of equal elements; comparing reversed turns
    // it into a first-wins maximum for the maximizing metrics.
    if metric.maximizing() {
        results.iter().min_by(|a, b| cmp(b, a))
    } else {
        results.iter().min_by(cmp)
    }
}

/// Computes the weighted composite score of each result (lower is
/// better), parallel to the input slice.
///
/// Per metric, each value is normalized against the maximum across all
/// results (0 = best for minimizing metrics; maximizing metrics are
/// inverted after normalization). A zero maximum contributes 0 for that
/// metric.
pub fn composite_scores(results: &[AlgorithmResult]) -> Vec<f64> {
    let maxima: Vec<f64> = WEIGHTS
        .iter()
        .map(|(metric, _)| {
            results
                .iter()
                .map(|r| metric.value(r))
                .fold(0.0_f64, f64::max)
        })
        .collect();

    results
        .iter()
        .map(|result| {
            WEIGHTS
                .iter()
                .zip(&maxima)
                .map(|(&(metric, weight), &max)| {
                    let normalized = if max > 0.0 { metric.value(result) / max } else { 0.0 };
                    let score = if metric.maximizing() {
                        1.0 - normalized
                    } else {
                        normalized
                    };
                    weight * score
                })
                .sum()
        })
        .collect()
}

/// Returns the result with the lowest composite score, or `None` for an
/// empty slice. Ties keep the earlier result.
pub fn best_overall(results: &[AlgorithmResult]) -> Option<&AlgorithmResult> {
    let scores = composite_scores(results);
    let mut best: Option<(usize, f64)> = None;
    for (i, score) in scores.into_iter().enumerate() {
        match best {
            Some((_, current)) if score >= current => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| &results[i])
}
