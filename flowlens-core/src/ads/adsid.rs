use crate::classify::{is_click_flow, is_impression_flow};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::flow::Flow;
use url::Url;

/// Query parameter carrying the advertisement id on tracking calls.
pub const ADSID_PARAM: &str = "adsid";

/// Pull the advertisement id out of an impression or click flow.
///
/// Returns `None` for any other flow, for a URL that does not parse, and for
/// a missing or empty `adsid`. When the parameter repeats, the last value
/// wins.
pub fn extract_adsid(flow: &Flow, sink: &dyn DiagnosticSink) -> Option<String> {
    if !is_impression_flow(flow) && !is_click_flow(flow) {
        return None;
    }
    let http = flow.as_http()?;

    let raw = http.url();
    let url = match Url::parse(&raw) {
        Ok(url) => url,
        Err(e) => {
            sink.report(Diagnostic::MalformedUrl {
                flow_id: http.id.clone(),
                url: raw,
                reason: e.to_string(),
            });
            return None;
        }
    };

    url.query_pairs()
        .filter(|(key, _)| key == ADSID_PARAM)
        .last()
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
