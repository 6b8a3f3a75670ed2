use crate::flow::Flow;
use crate::metrics::constants::{DEFAULT_BUCKET_SIZE_MS, SERIES_RETENTION};
use crate::metrics::http_flows;
use crate::metrics::types::ResponseTimePoint;
use std::collections::BTreeMap;
use tracing::debug;

/// Mean response time per fixed-width bucket of request start time.
///
/// Buckets are keyed by `floor(start_ms / size) * size` and returned oldest
/// first; only the newest [`SERIES_RETENTION`] buckets are kept. A bucket
/// size of zero means the default. Flows whose bucket start falls outside
/// the `i64` range are left out.
pub fn calculate_response_time_series(
    flows: &[Flow],
    bucket_size_ms: u64,
) -> Vec<ResponseTimePoint> {
    let size = if bucket_size_ms == 0 {
        DEFAULT_BUCKET_SIZE_MS
    } else {
        bucket_size_ms
    };
    let size = i64::try_from(size).unwrap_or(i64::MAX);

    let mut buckets: BTreeMap<i64, (f64, u32)> = BTreeMap::new();

    for flow in http_flows(flows) {
        let Some(ms) = flow.response_time_ms() else {
            continue;
        };

        let start_ms = (flow.request.timestamp_start * 1000.0).floor() as i64;
        // starts near i64::MIN have no representable bucket
        let Some(key) = start_ms.div_euclid(size).checked_mul(size) else {
            debug!(flow_id = %flow.id, start_ms, "skipping flow with unbucketable start");
            continue;
        };

        let (sum, n) = buckets.entry(key).or_insert((0.0, 0));
        *sum += ms;
        *n += 1;
    }

    let skip = buckets.len().saturating_sub(SERIES_RETENTION);

    buckets
        .into_iter()
        .skip(skip)
        .map(|(timestamp, (sum, n))| ResponseTimePoint {
            timestamp,
            time: sum / f64::from(n),
        })
        .collect()
}
