use crate::tiara::fields::text_at;
use crate::tiara::types::MISSING;
use serde_json::Value;

const MAX_IMP_IDS: usize = 3;
const MAX_COPIES: usize = 2;

/// One-line summary of an event's impression and click contents.
///
/// Up to three `imp_id`s and two `copy` texts are taken from each of
/// `viewimp_contents` and `click_contents`, e.g.
/// `imp_id: a, b, c | copy: Hello | click_imp_id: a`.
pub fn extract_summary(event: &Value) -> String {
    let mut parts = Vec::new();

    for (list, prefix) in [("viewimp_contents", ""), ("click_contents", "click_")] {
        let Some(contents) = event.get(list).and_then(Value::as_array) else {
            continue;
        };

        let imp_ids = collect(contents, "imp_id", MAX_IMP_IDS);
        if !imp_ids.is_empty() {
            parts.push(format!("{prefix}imp_id: {}", imp_ids.join(", ")));
        }

        let copies = collect(contents, "copy", MAX_COPIES);
        if !copies.is_empty() {
            parts.push(format!("{prefix}copy: {}", copies.join(", ")));
        }
    }

    if parts.is_empty() {
        MISSING.to_string()
    } else {
        parts.join(" | ")
    }
}

fn collect(contents: &[Value], key: &str, limit: usize) -> Vec<String> {
    contents
        .iter()
        .filter_map(|content| text_at(content, key))
        .take(limit)
        .collect()
}
