use crate::ads::adsid::extract_adsid;
use crate::ads::book::AdBook;
use crate::ads::listing::parse_ad_request_response;
use crate::ads::types::{StatusPolicy, TrackingEvent, TrackingEventKind};
use crate::classify::{FlowCategory, classify};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::flow::Flow;
use tracing::debug;

/// Folds a flow sequence into per-ad lifecycle records.
///
/// Flows are applied in the order given, which is display order and not
/// necessarily chronological.
pub struct AdLifecycleReducer<'a> {
    sink: &'a dyn DiagnosticSink,
    policy: StatusPolicy,
}

impl<'a> AdLifecycleReducer<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            sink,
            policy: StatusPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn reduce(&self, flows: &[Flow]) -> AdBook {
        let mut book = AdBook::default();

        for flow in flows {
            self.apply(&mut book, flow);
        }

        debug!(flows = flows.len(), ads = book.len(), "reduced ad lifecycle");
        book
    }

    fn apply(&self, book: &mut AdBook, flow: &Flow) {
        let Some(http) = flow.as_http() else {
            return;
        };

        match classify(flow) {
            FlowCategory::AdRequest => {
                if http.response.is_none() {
                    return;
                }
                for listing in parse_ad_request_response(flow) {
                    let event = TrackingEvent::from_flow(http, TrackingEventKind::Request);
                    book.merge_listing(&listing, event, self.policy);
                }
            }
            FlowCategory::Impression => {
                let Some(adsid) = extract_adsid(flow, self.sink) else {
                    return;
                };
                let event = TrackingEvent::from_flow(http, TrackingEventKind::Impression);
                book.entry(&adsid).record_impression(event, self.policy);
            }
            FlowCategory::Click => {
                let Some(adsid) = extract_adsid(flow, self.sink) else {
                    return;
                };
                let event = TrackingEvent::from_flow(http, TrackingEventKind::Click);
                book.entry(&adsid).record_click(event, self.policy);
            }
            FlowCategory::Tiara | FlowCategory::Unrelated => {}
        }
    }
}

/// Reduce with the default overwrite policy, logging diagnostics via tracing.
pub fn reduce_ad_flows(flows: &[Flow]) -> AdBook {
    AdLifecycleReducer::new(&TracingSink).reduce(flows)
}
