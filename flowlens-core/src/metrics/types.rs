use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub total_requests: usize,
    /// Percentage of flows answered with status 400 or above.
    pub error_rate: f64,
    /// Mean response time in milliseconds over timed flows.
    pub avg_response_time: f64,
    pub slow_queries: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCodeCount {
    pub code: u16,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainStat {
    pub domain: String,
    pub count: usize,
    /// Milliseconds.
    pub avg_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseTimePoint {
    /// Bucket start, milliseconds since the epoch.
    pub timestamp: i64,
    /// Mean response time within the bucket, milliseconds.
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatencyBucket {
    pub label: String,
    /// Inclusive upper bound; `None` for the overflow bucket.
    pub upper_ms: Option<u64>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatencyHistogram {
    pub buckets: Vec<LatencyBucket>,
    pub p95_ms: u64,
    pub p99_ms: u64,
}

/// Denominator used for a domain's average response time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum DomainAverage {
    /// Summed time of timed flows divided by every flow to the host,
    /// in-flight ones included. Matches the dashboard's numbers.
    #[default]
    AllFlows,
    /// Summed time divided by the number of timed flows only.
    TimedFlows,
}
