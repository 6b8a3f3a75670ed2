//! Traffic-wide metrics.
//!
//! Every calculation here is an independent pass over the same flow list:
//!
//! flows
//! calculate_summary / calculate_status_codes / calculate_domain_stats
//! calculate_response_time_series / calculate_latency_histogram
//! MetricsReport
//!
//! None of them look at flow categories; they see all HTTP traffic.

mod constants;
mod domains;
mod histogram;
mod report;
mod series;
mod status_codes;
mod summary;
#[cfg(test)]
mod tests;
mod types;

pub use constants::*;
pub use domains::calculate_domain_stats;
pub use histogram::{Histogram, calculate_latency_histogram, percentile_from_histogram};
pub use report::{MetricsOptions, MetricsReport};
pub use series::calculate_response_time_series;
pub use status_codes::calculate_status_codes;
pub use summary::calculate_summary;
pub use types::*;

use crate::flow::{Flow, HttpFlow};

pub(crate) fn http_flows(flows: &[Flow]) -> impl Iterator<Item = &HttpFlow> {
    flows.iter().filter_map(Flow::as_http)
}
