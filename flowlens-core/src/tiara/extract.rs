use crate::classify::is_tiara_flow;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::flow::{Flow, HttpFlow};
use crate::tiara::clock::{Clock, SystemClock};
use crate::tiara::decode::decode_batch;
use crate::tiara::fields::{is_present, text_at};
use crate::tiara::summary::extract_summary;
use crate::tiara::types::{MISSING, TiaraEvent};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

pub struct TiaraExtractor<'a> {
    sink: &'a dyn DiagnosticSink,
    clock: &'a dyn Clock,
}

impl<'a> TiaraExtractor<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink, clock: &'a dyn Clock) -> Self {
        Self { sink, clock }
    }

    /// Events carried by one flow. Empty for non-Tiara flows and for any body
    /// that does not decode to a JSON array.
    pub fn extract(&self, flow: &Flow) -> Vec<TiaraEvent> {
        if !is_tiara_flow(flow) {
            return Vec::new();
        }
        let Some(http) = flow.as_http() else {
            return Vec::new();
        };
        let Some(batch) = decode_batch(http, self.sink) else {
            return Vec::new();
        };

        let events: Vec<TiaraEvent> = batch
            .into_iter()
            .enumerate()
            .filter_map(|(index, element)| self.event(http, index, element))
            .collect();

        debug!(flow_id = %http.id, events = events.len(), "decoded tiara batch");
        events
    }

    /// Events from every flow, in flow order.
    pub fn extract_all(&self, flows: &[Flow]) -> Vec<TiaraEvent> {
        flows.iter().flat_map(|flow| self.extract(flow)).collect()
    }

    // Elements lacking `action` or `common` are skipped without a diagnostic.
    fn event(&self, flow: &HttpFlow, index: usize, element: Value) -> Option<TiaraEvent> {
        let action = element.get("action").filter(|v| is_present(v))?;
        let common = element.get("common").filter(|v| is_present(v))?;

        let timestamp = common
            .get("access_timestamp")
            .filter(|v| is_present(v))
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .unwrap_or_else(|| self.clock.now_millis());

        let or_missing = |v: Option<String>| v.unwrap_or_else(|| MISSING.to_string());

        Some(TiaraEvent {
            id: format!("{}-{}", flow.id, index),
            timestamp,
            action_type: or_missing(text_at(action, "type")),
            action_name: or_missing(text_at(action, "name")),
            page: or_missing(text_at(common, "page")),
            section: or_missing(text_at(common, "section")),
            summary: extract_summary(&element),
            raw: element,
        })
    }
}

/// Extract with tracing diagnostics and the system clock.
pub fn parse_tiara_events(flow: &Flow) -> Vec<TiaraEvent> {
    TiaraExtractor::new(&TracingSink, &SystemClock).extract(flow)
}

/// Distinct action types, sorted, without the `-` placeholder.
pub fn extract_unique_action_types(events: &[TiaraEvent]) -> Vec<String> {
    events
        .iter()
        .map(|e| e.action_type.as_str())
        .filter(|t| !t.is_empty() && *t != MISSING)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
