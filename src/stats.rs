use crate::types::ProbeResult;

/// Per-target accumulator for probe outcomes.
///
/// Buckets are mutually exclusive: a result lands in exactly one of
/// success/failed/error, so the bucket sum always equals the number of
/// results folded in. Only positive durations are recorded, which keeps
/// the zero-duration placeholders of failure results out of the latency
/// figures.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HostStats {
    /// Responses with status in [200, 400)
    pub success_count: usize,
    /// Responses with status in [400, 600)
    pub failed_count: usize,
    /// Timeouts, transport faults and anything else without a response
    pub error_count: usize,
    /// Observed latencies in seconds, in fold order
    pub times: Vec<f64>,
}

impl HostStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single result into the accumulator.
    pub fn add_result(&mut self, result: &ProbeResult) {
        if result.is_error() {
            self.error_count += 1;
        } else if result.is_failed_status() {
            self.failed_count += 1;
        } else {
            self.success_count += 1;
        }

        if result.duration > 0.0 {
            self.times.push(result.duration);
        }
    }

    /// Total number of results folded into this accumulator.
    pub fn total(&self) -> usize {
        self.success_count + self.failed_count + self.error_count
    }

    /// Smallest observed latency, 0 when nothing was recorded.
    pub fn min_time(&self) -> f64 {
        self.times.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    /// Largest observed latency, 0 when nothing was recorded.
    pub fn max_time(&self) -> f64 {
        self.times.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    /// Average observed latency, 0 when nothing was recorded.
    pub fn avg_time(&self) -> f64 {
        if self.times.is_empty() {
            0.0
        } else {
            self.times.iter().sum::<f64>() / self.times.len() as f64
        }
    }
}

/// Fold a batch of results into a fresh HostStats.
pub fn aggregate(results: &[ProbeResult]) -> HostStats {
    let mut stats = HostStats::new();
    for result in results {
        stats.add_result(result);
    }
    stats
}
