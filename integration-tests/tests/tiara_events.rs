use flowlens_core::diagnostics::{CollectingSink, Diagnostic};
use flowlens_core::tiara::{
    FixedClock, TiaraExtractor, extract_unique_action_types, parse_tiara_events,
};
use integration_tests::harness::{capture_events, load_flows};
use pretty_assertions::assert_eq;
use tracing::Level;

static FIXTURE: &str = "tiara_batch.json";

#[test]
fn batches_expand_into_events_in_flow_order() {
    // Arrange
    let flows = load_flows(FIXTURE);
    let sink = CollectingSink::new();
    let clock = FixedClock(0);

    // Act
    let events = TiaraExtractor::new(&sink, &clock).extract_all(&flows);

    // Assert
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["tiara-1-0", "tiara-1-1", "tiara-bytes-0"]);

    assert_eq!(events[0].action_type, "pageview");
    assert_eq!(events[0].section, "main");
    assert_eq!(events[0].timestamp, 1_700_000_010_000);
    assert_eq!(
        events[0].summary,
        "imp_id: i1, i2, i3 | copy: Spring sale, New arrivals"
    );

    assert_eq!(events[1].section, "-");
    assert_eq!(events[1].summary, "click_imp_id: i1 | click_copy: Spring sale");

    assert_eq!(events[2].page, "settings");
}

#[test]
fn undecodable_bodies_are_reported_per_flow() {
    // Arrange
    let flows = load_flows(FIXTURE);
    let sink = CollectingSink::new();
    let clock = FixedClock(0);

    // Act
    TiaraExtractor::new(&sink, &clock).extract_all(&flows);

    // Assert
    let diagnostics = sink.diagnostics();
    let flow_ids: Vec<&str> = diagnostics.iter().map(Diagnostic::flow_id).collect();
    assert_eq!(flow_ids, vec!["tiara-bad-json", "tiara-object"]);
    assert!(matches!(diagnostics[0], Diagnostic::InvalidJson { .. }));
    assert!(matches!(
        diagnostics[1],
        Diagnostic::NotAnArray {
            found: "object",
            ..
        }
    ));
}

#[test]
fn action_types_are_unique_and_sorted() {
    // Arrange
    let flows = load_flows(FIXTURE);
    let clock = FixedClock(0);
    let sink = CollectingSink::new();
    let events = TiaraExtractor::new(&sink, &clock).extract_all(&flows);

    // Act
    let types = extract_unique_action_types(&events);

    // Assert
    assert_eq!(types, vec!["click", "pageview", "usage"]);
}

/// The default extractor logs diagnostics as warnings
#[test]
fn default_extractor_logs_diagnostics() {
    // Arrange
    let flows = load_flows(FIXTURE);

    // Act
    let (events, logs) = capture_events(|| flows.iter().flat_map(parse_tiara_events).count());

    // Assert
    assert_eq!(events, 3);
    let warned: Vec<&str> = logs
        .iter()
        .filter(|e| e.level == Level::WARN)
        .filter_map(|e| e.field("flow_id"))
        .collect();
    assert_eq!(warned, vec!["tiara-bad-json", "tiara-object"]);
}
