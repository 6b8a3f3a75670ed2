use crate::flow::Flow;
use crate::metrics::constants::DEFAULT_BUCKET_SIZE_MS;
use crate::metrics::domains::calculate_domain_stats;
use crate::metrics::histogram::calculate_latency_histogram;
use crate::metrics::series::calculate_response_time_series;
use crate::metrics::status_codes::calculate_status_codes;
use crate::metrics::summary::calculate_summary;
use crate::metrics::types::{
    DomainAverage, DomainStat, LatencyHistogram, MetricsSummary, ResponseTimePoint,
    StatusCodeCount,
};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsOptions {
    pub bucket_size_ms: u64,
    pub domain_average: DomainAverage,
}

impl Default for MetricsOptions {
    fn default() -> Self {
        Self {
            bucket_size_ms: DEFAULT_BUCKET_SIZE_MS,
            domain_average: DomainAverage::default(),
        }
    }
}

/// Every metrics view computed over one flow list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub summary: MetricsSummary,
    pub status_codes: Vec<StatusCodeCount>,
    pub domains: Vec<DomainStat>,
    pub response_times: Vec<ResponseTimePoint>,
    pub latency: LatencyHistogram,
}

impl MetricsReport {
    pub fn from_flows(flows: &[Flow], options: &MetricsOptions) -> Self {
        let report = Self {
            summary: calculate_summary(flows),
            status_codes: calculate_status_codes(flows),
            domains: calculate_domain_stats(flows, options.domain_average),
            response_times: calculate_response_time_series(flows, options.bucket_size_ms),
            latency: calculate_latency_histogram(flows),
        };

        debug!(
            flows = flows.len(),
            requests = report.summary.total_requests,
            buckets = report.response_times.len(),
            "computed metrics report"
        );
        report
    }
}
