use flowlens_core::metrics::{DomainAverage, MetricsOptions, MetricsReport};
use integration_tests::harness::load_flows;
use pretty_assertions::assert_eq;

static FIXTURE: &str = "mixed_traffic.jsonl";

#[test]
fn summary_over_mixed_traffic() {
    // Arrange
    let flows = load_flows(FIXTURE);

    // Act
    let report = MetricsReport::from_flows(&flows, &MetricsOptions::default());

    // Assert
    assert_eq!(report.summary.total_requests, 6);
    assert!((report.summary.error_rate - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(report.summary.avg_response_time, 500.0);
    assert_eq!(report.summary.slow_queries, 1);
}

#[test]
fn status_codes_and_domains() {
    // Arrange
    let flows = load_flows(FIXTURE);

    // Act
    let report = MetricsReport::from_flows(&flows, &MetricsOptions::default());

    // Assert
    let codes: Vec<(u16, usize)> = report
        .status_codes
        .iter()
        .map(|c| (c.code, c.count))
        .collect();
    assert_eq!(codes, vec![(200, 3), (503, 1), (404, 1)]);

    let domains: Vec<(&str, usize, f64)> = report
        .domains
        .iter()
        .map(|d| (d.domain.as_str(), d.count, d.avg_time))
        .collect();
    assert_eq!(domains, vec![("api.test", 4, 562.5), ("cdn.test", 2, 125.0)]);
}

#[test]
fn timed_flows_domain_average() {
    // Arrange
    let flows = load_flows(FIXTURE);
    let options = MetricsOptions {
        domain_average: DomainAverage::TimedFlows,
        ..MetricsOptions::default()
    };

    // Act
    let report = MetricsReport::from_flows(&flows, &options);

    // Assert
    assert_eq!(report.domains[0].avg_time, 750.0);
}

#[test]
fn response_time_series_and_latency() {
    // Arrange
    let flows = load_flows(FIXTURE);

    // Act
    let report = MetricsReport::from_flows(&flows, &MetricsOptions::default());

    // Assert
    let keys: Vec<i64> = report.response_times.iter().map(|p| p.timestamp).collect();
    assert_eq!(
        keys,
        vec![1_700_000_000_000, 1_700_000_005_000, 1_700_000_010_000]
    );
    assert_eq!(report.response_times[1].time, 1500.0);

    let counts: Vec<u64> = report.latency.buckets.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![0, 0, 0, 0, 0, 0, 3, 1, 0, 1]);
    assert_eq!(report.latency.p95_ms, 1001);
}
