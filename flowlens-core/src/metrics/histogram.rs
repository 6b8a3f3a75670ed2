use crate::flow::Flow;
use crate::metrics::constants::LATENCY_BUCKETS_MS;
use crate::metrics::http_flows;
use crate::metrics::types::{LatencyBucket, LatencyHistogram};

/// Fixed-bound latency histogram with a trailing overflow bucket.
#[derive(Debug, Clone)]
pub struct Histogram {
    bounds: &'static [u64],
    counts: Vec<u64>,
}

impl Histogram {
    pub fn new(bounds: &'static [u64]) -> Self {
        Self {
            bounds,
            counts: vec![0; bounds.len() + 1],
        }
    }

    /// Count `value` in the first bucket whose upper bound it does not exceed.
    pub fn record(&mut self, value: u64) {
        let i = self
            .bounds
            .iter()
            .position(|upper| value <= *upper)
            .unwrap_or(self.bounds.len());
        self.counts[i] += 1;
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn buckets(&self) -> Vec<LatencyBucket> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, count)| LatencyBucket {
                label: self.label(i),
                upper_ms: self.bounds.get(i).copied(),
                count: *count,
            })
            .collect()
    }

    /// `(upper bound, count)` pairs; the overflow bucket reports `u64::MAX`.
    pub fn numeric_buckets(&self) -> Vec<(u64, u64)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, count)| (self.bounds.get(i).copied().unwrap_or(u64::MAX), *count))
            .collect()
    }

    fn label(&self, i: usize) -> String {
        match (i.checked_sub(1).map(|p| self.bounds[p]), self.bounds.get(i)) {
            (None, Some(upper)) => format!("0–{upper}ms"),
            (Some(lower), Some(upper)) => format!("{}–{upper}ms", lower + 1),
            (Some(lower), None) => format!(">{lower}ms"),
            (None, None) => "all".to_string(),
        }
    }
}

/// Smallest bucket bound covering `pct` of `total` samples.
///
/// Landing in the overflow bucket reports one past the last real bound.
pub fn percentile_from_histogram(buckets: &[(u64, u64)], total: u64, pct: f64) -> u64 {
    if total == 0 {
        return 0;
    }

    let target = (total as f64 * pct).ceil() as u64;
    let mut running = 0;

    for (upper, count) in buckets {
        running += *count;
        if running >= target {
            if *upper == u64::MAX {
                return buckets
                    .iter()
                    .rev()
                    .find(|(u, _)| *u != u64::MAX)
                    .map(|(u, _)| u.saturating_add(1))
                    .unwrap_or(0);
            }
            return *upper;
        }
    }

    0
}

/// Response-time distribution over timed flows, milliseconds rounded up.
pub fn calculate_latency_histogram(flows: &[Flow]) -> LatencyHistogram {
    let mut histogram = Histogram::new(LATENCY_BUCKETS_MS);

    for ms in http_flows(flows).filter_map(|f| f.response_time_ms()) {
        histogram.record(ms.max(0.0).ceil() as u64);
    }

    let numeric = histogram.numeric_buckets();
    let total = histogram.total();

    LatencyHistogram {
        buckets: histogram.buckets(),
        p95_ms: percentile_from_histogram(&numeric, total, 0.95),
        p99_ms: percentile_from_histogram(&numeric, total, 0.99),
    }
}
