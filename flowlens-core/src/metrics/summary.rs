use crate::flow::Flow;
use crate::metrics::constants::SLOW_QUERY_THRESHOLD_MS;
use crate::metrics::http_flows;
use crate::metrics::types::MetricsSummary;

pub fn calculate_summary(flows: &[Flow]) -> MetricsSummary {
    let mut total_requests = 0;
    let mut errors = 0;
    let mut timed = 0;
    let mut total_time = 0.0;
    let mut slow_queries = 0;

    for flow in http_flows(flows) {
        total_requests += 1;

        if flow
            .response
            .as_ref()
            .and_then(|r| r.status_code)
            .is_some_and(|code| code >= 400) {
            errors += 1;
        }

        if let Some(ms) = flow.response_time_ms() {
            timed += 1;
            total_time += ms;
            if ms > SLOW_QUERY_THRESHOLD_MS {
                slow_queries += 1;
            }
        }
    }

    MetricsSummary {
        total_requests,
        error_rate: if total_requests > 0 {
            errors as f64 / total_requests as f64 * 100.0
        } else {
            0.0
        },
        avg_response_time: if timed > 0 {
            total_time / timed as f64
        } else {
            0.0
        },
        slow_queries,
    }
}
