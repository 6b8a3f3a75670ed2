use super::test_helpers::*;
use crate::ads::extract_adsid;
use crate::diagnostics::{CollectingSink, Diagnostic};
use crate::flow::{Flow, HttpFlow};
use pretty_assertions::assert_eq;

#[test]
fn reads_adsid_from_impression_and_click_queries() {
    let sink = CollectingSink::new();

    assert_eq!(
        extract_adsid(&impression("f", "abc", 1.0), &sink),
        Some("abc".to_string())
    );
    assert_eq!(
        extract_adsid(&click("f", "def", 1.0), &sink),
        Some("def".to_string())
    );
    assert!(sink.is_empty());
}

#[test]
fn percent_encoding_is_decoded() {
    let sink = CollectingSink::new();
    let flow = tracking_flow("f", IMPRESSION_PATH, "adsid=a%2Fb%20c", 1.0);

    assert_eq!(extract_adsid(&flow, &sink), Some("a/b c".to_string()));
}

#[test]
fn last_repeated_adsid_wins() {
    let sink = CollectingSink::new();
    let flow = tracking_flow("f", CLICK_PATH, "adsid=first&adsid=second", 1.0);

    assert_eq!(extract_adsid(&flow, &sink), Some("second".to_string()));
}

#[test]
fn missing_or_empty_adsid_is_none() {
    let sink = CollectingSink::new();

    assert_eq!(
        extract_adsid(&tracking_flow("f", CLICK_PATH, "ads=1", 1.0), &sink),
        None
    );
    assert_eq!(
        extract_adsid(&tracking_flow("f", CLICK_PATH, "adsid=", 1.0), &sink),
        None
    );
    assert!(sink.is_empty());
}

#[test]
fn other_flows_have_no_adsid() {
    let sink = CollectingSink::new();
    let list = tracking_flow("f", REQUEST_PATH, "adsid=abc", 1.0);
    let other: Flow = HttpFlow::new("g", "https", "example.com", "/?adsid=abc", 1.0).into();

    assert_eq!(extract_adsid(&list, &sink), None);
    assert_eq!(extract_adsid(&other, &sink), None);
}

#[test]
fn malformed_url_reports_and_yields_none() {
    // Arrange
    let sink = CollectingSink::new();
    let flow: Flow = HttpFlow::new(
        "bad-1",
        "",
        crate::classify::AD_API_HOST,
        format!("{IMPRESSION_PATH}?adsid=abc"),
        1.0,
    )
    .into();

    // Act
    let adsid = extract_adsid(&flow, &sink);

    // Assert
    assert_eq!(adsid, None);
    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(
        &diagnostics[0],
        Diagnostic::MalformedUrl { flow_id, .. } if flow_id == "bad-1"
    ));
}
