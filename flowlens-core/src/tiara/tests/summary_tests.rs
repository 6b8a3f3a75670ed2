use crate::tiara::{MISSING, extract_summary};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn takes_three_ids_and_two_copies_from_each_list() {
    // Arrange
    let event = json!({
        "viewimp_contents": [
            { "imp_id": "a", "copy": "one" },
            { "imp_id": "", "copy": "" },
            { "imp_id": "b", "copy": "two" },
            { "imp_id": "c", "copy": "three" },
            { "imp_id": "d" }
        ],
        "click_contents": [
            { "imp_id": "x", "copy": "tap" }
        ]
    });

    // Act
    let summary = extract_summary(&event);

    // Assert
    assert_eq!(
        summary,
        "imp_id: a, b, c | copy: one, two | click_imp_id: x | click_copy: tap"
    );
}

#[test]
fn groups_without_values_are_left_out() {
    let event = json!({
        "viewimp_contents": [{ "copy": "only copy" }],
        "click_contents": [{ "imp_id": 7 }]
    });

    assert_eq!(
        extract_summary(&event),
        "copy: only copy | click_imp_id: 7"
    );
}

#[test]
fn nothing_to_summarize_is_a_placeholder() {
    assert_eq!(extract_summary(&json!({})), MISSING);
    assert_eq!(extract_summary(&json!({ "viewimp_contents": [] })), MISSING);
    assert_eq!(
        extract_summary(&json!({ "viewimp_contents": [{ "imp_id": null, "copy": 0 }] })),
        MISSING
    );
    assert_eq!(extract_summary(&json!({ "click_contents": "oops" })), MISSING);
}
