/// Responses slower than this count as slow queries.
pub const SLOW_QUERY_THRESHOLD_MS: f64 = 1000.0;

pub const DEFAULT_BUCKET_SIZE_MS: u64 = 5000;

/// Points kept in the response-time series, newest last.
pub const SERIES_RETENTION: usize = 50;

/// Rows kept in the status-code and domain rankings.
pub const TOP_N: usize = 10;

pub const LATENCY_BUCKETS_MS: &[u64] = &[1, 5, 10, 25, 50, 100, 250, 500, 1000];
