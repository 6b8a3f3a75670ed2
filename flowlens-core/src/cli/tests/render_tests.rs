use crate::ads::{AdRecord, AdStats, AdStatus};
use crate::cli::{render_ads, render_metrics, render_tiara};
use crate::flow::{Flow, HttpFlow};
use crate::metrics::{MetricsOptions, MetricsReport};
use crate::tiara::{MISSING, TiaraEvent};
use serde_json::Value;

fn ad(adsid: &str, status: AdStatus) -> AdRecord {
    let mut ad = AdRecord::placeholder(adsid);
    ad.status = status;
    ad
}

fn event(action_type: &str) -> TiaraEvent {
    TiaraEvent {
        id: "f1-0".to_string(),
        timestamp: 1_700_000_000_123,
        action_type: action_type.to_string(),
        action_name: "tap_banner".to_string(),
        page: "home".to_string(),
        section: MISSING.to_string(),
        summary: "imp_id: 1".to_string(),
        raw: Value::Null,
    }
}

#[test]
fn ads_report_has_stats_header_and_rows() {
    // Arrange
    let clicked = ad("abcdef123456", AdStatus::Clicked);
    let impressed = ad("zzz", AdStatus::Impressed);
    let stats = AdStats {
        total: 2,
        impressed: 2,
        clicked: 1,
        ctr: Some(50.0),
    };

    // Act
    let out = render_ads(&[&clicked, &impressed], &stats, false);

    // Assert
    assert!(out.starts_with("Ad Tracking\n"));
    assert!(out.contains("ads: 2 | impressed: 2 | clicked: 1 | CTR: 50.0%"));
    assert!(out.contains("clicked    abcdef123456"));
    assert!(out.contains("Ad abcdef12..."));
    assert!(out.lines().all(|l| l == l.trim_end()));
}

#[test]
fn ads_report_without_ads() {
    // Arrange
    let stats = AdStats {
        total: 0,
        impressed: 0,
        clicked: 0,
        ctr: None,
    };

    // Act
    let out = render_ads(&[], &stats, false);

    // Assert
    assert!(out.contains("CTR: -"));
    assert!(out.ends_with("<no ads>\n"));
}

#[test]
fn tiara_report_lists_action_types_from_all_events() {
    // Arrange
    let events = vec![event("click"), event("pageview")];
    let shown: Vec<&TiaraEvent> = events.iter().filter(|e| e.action_type == "click").collect();

    // Act
    let out = render_tiara(&events, &shown, false);

    // Assert
    assert!(out.contains("events: 2 (showing 1) | action types: click, pageview"));
    assert!(out.contains("22:13:20.123"));
    assert!(out.contains("imp_id: 1"));
}

#[test]
fn tiara_report_without_events() {
    // Act
    let out = render_tiara(&[], &[], false);

    // Assert
    assert!(out.contains("action types: -"));
    assert!(out.ends_with("<no events>\n"));
}

#[test]
fn metrics_report_sections() {
    // Arrange
    let flows: Vec<Flow> = vec![
        HttpFlow::new("1", "https", "a.test", "/", 1000.0)
            .with_response(200, Some(1000.25))
            .into(),
        HttpFlow::new("2", "https", "a.test", "/", 1000.0)
            .with_response(503, Some(1001.5))
            .into(),
    ];
    let report = MetricsReport::from_flows(&flows, &MetricsOptions::default());

    // Act
    let out = render_metrics(&report, false);

    // Assert
    assert!(out.contains("requests: 2 | errors: 50.0% | avg: 875ms | slow (>1s): 1"));
    assert!(out.contains("Status codes:\n  200"));
    assert!(out.contains("  503"));
    assert!(out.contains("a.test"));
    assert!(out.contains("Latency p95 ≈ 1001ms | p99 ≈ 1001ms"));
    assert!(out.contains("Response time trend:\n"));
}

#[test]
fn metrics_report_without_flows() {
    // Act
    let out = render_metrics(&MetricsReport::from_flows(&[], &MetricsOptions::default()), false);

    // Assert
    assert!(out.contains("requests: 0 | errors: 0.0% | avg: 0ms | slow (>1s): 0"));
    assert!(out.contains("Status codes: <no responses>"));
    assert!(out.contains("Latency: <no samples>"));
    assert!(out.contains("Response time trend: <no samples>"));
}

#[test]
fn ad_status_uses_its_badge_color() {
    // Arrange
    let clicked = ad("abc", AdStatus::Clicked);
    let stats = AdStats {
        total: 1,
        impressed: 1,
        clicked: 1,
        ctr: Some(100.0),
    };

    // Act
    let colored = render_ads(&[&clicked], &stats, true);
    let plain = render_ads(&[&clicked], &stats, false);

    // Assert
    // #10b981
    assert!(colored.contains("\x1b[38;2;16;185;129m"));
    assert!(!plain.contains('\x1b'));
}
