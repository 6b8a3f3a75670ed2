use crate::metrics::tests::test_helpers::{in_flight, timed};
use crate::metrics::{ResponseTimePoint, SERIES_RETENTION, calculate_response_time_series};
use pretty_assertions::assert_eq;

#[test]
fn groups_by_bucket_start() {
    // Arrange
    let flows = vec![
        timed("1", "a.test", 200, 1.0, 0.25),
        timed("2", "a.test", 200, 4.5, 0.75),
        timed("3", "a.test", 200, 5.0, 0.5),
    ];

    // Act
    let series = calculate_response_time_series(&flows, 5000);

    // Assert
    assert_eq!(
        series,
        vec![
            ResponseTimePoint {
                timestamp: 0,
                time: 500.0,
            },
            ResponseTimePoint {
                timestamp: 5000,
                time: 500.0,
            },
        ]
    );
}

#[test]
fn untimed_flows_are_skipped() {
    // Arrange
    let flows = vec![in_flight("1", "a.test", 1.0)];

    // Act
    let series = calculate_response_time_series(&flows, 5000);

    // Assert
    assert!(series.is_empty());
}

#[test]
fn keeps_the_newest_fifty_buckets_in_order() {
    // Arrange
    let flows: Vec<_> = (0..60)
        .rev()
        .map(|i| timed(&i.to_string(), "a.test", 200, 1000.0 + 5.0 * i as f64, 0.5))
        .collect();

    // Act
    let series = calculate_response_time_series(&flows, 5000);

    // Assert
    assert_eq!(series.len(), SERIES_RETENTION);
    assert_eq!(series[0].timestamp, 1_050_000);
    assert_eq!(series[49].timestamp, 1_295_000);
    assert!(series.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[test]
fn zero_bucket_size_falls_back_to_default() {
    // Arrange
    let flows = vec![
        timed("1", "a.test", 200, 1.0, 0.5),
        timed("2", "a.test", 200, 6.0, 0.5),
    ];

    // Act
    let series = calculate_response_time_series(&flows, 0);

    // Assert
    let keys: Vec<i64> = series.iter().map(|p| p.timestamp).collect();
    assert_eq!(keys, vec![0, 5000]);
}

#[test]
fn custom_bucket_size() {
    // Arrange
    let flows = vec![
        timed("1", "a.test", 200, 1.0, 0.5),
        timed("2", "a.test", 200, 2.5, 0.5),
    ];

    // Act
    let series = calculate_response_time_series(&flows, 1000);

    // Assert
    let keys: Vec<i64> = series.iter().map(|p| p.timestamp).collect();
    assert_eq!(keys, vec![1000, 2000]);
}

#[test]
fn bucket_boundary_belongs_to_the_next_bucket() {
    // Arrange
    let flows = vec![
        timed("1", "a.test", 200, 4.9995, 0.5),
        timed("2", "a.test", 200, 5.0, 0.5),
    ];

    // Act
    let series = calculate_response_time_series(&flows, 5000);

    // Assert
    let keys: Vec<i64> = series.iter().map(|p| p.timestamp).collect();
    assert_eq!(keys, vec![0, 5000]);
}

#[test]
fn negative_starts_bucket_downwards() {
    // Arrange
    let flows = vec![timed("1", "a.test", 200, -1.0, 0.5)];

    // Act
    let series = calculate_response_time_series(&flows, 5000);

    // Assert
    let keys: Vec<i64> = series.iter().map(|p| p.timestamp).collect();
    assert_eq!(keys, vec![-5000]);
}

#[test]
fn start_without_representable_bucket_is_skipped() {
    // Arrange
    let flows = vec![
        timed("1", "a.test", 200, -9.3e15, 1.0),
        timed("2", "a.test", 200, 1.0, 0.5),
    ];

    // Act
    let series = calculate_response_time_series(&flows, 5000);

    // Assert
    assert_eq!(
        series,
        vec![ResponseTimePoint {
            timestamp: 0,
            time: 500.0,
        }]
    );
}
