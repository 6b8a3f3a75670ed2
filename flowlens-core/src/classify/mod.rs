//! Flow classification.
//!
//! Every predicate here is an exact match: hosts are compared byte for byte
//! and endpoint patterns are anchored at the end of the path. A host that
//! differs by case, port or subdomain is a different host.


use crate::flow::{Flow, HttpFlow};
use once_cell::sync::Lazy;
use regex::Regex;

/// Host serving ad lists and impression/click tracking.
pub const AD_API_HOST: &str = "ads-api-kcsandbox-01.kidsnote.com";

/// Host receiving batched Tiara analytics payloads.
pub const TIARA_API_HOST: &str = "stat.tiara.daum.net";

pub const AD_REQUEST_PATTERN: &str = r"/api/v1/kidsnote_benefit/benefit/req$";
pub const IMPRESSION_PATTERN: &str = r"/api/v1/kidsnote_benefit/benefit/imp$";
// click is served from v2, the others from v1
pub const CLICK_PATTERN: &str = r"/api/v2/kidsnote_benefit/benefit/click$";

static AD_REQUEST: Lazy<Regex> =
    Lazy::new(|| Regex::new(AD_REQUEST_PATTERN).expect("ad request pattern compiles"));
static IMPRESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(IMPRESSION_PATTERN).expect("impression pattern compiles"));
static CLICK: Lazy<Regex> =
    Lazy::new(|| Regex::new(CLICK_PATTERN).expect("click pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowCategory {
    /// Ad list fetch (`/req`).
    AdRequest,
    Impression,
    Click,
    Tiara,
    Unrelated,
}

pub fn is_ad_api_flow(flow: &Flow) -> bool {
    flow.as_http().is_some_and(is_ad_api_host)
}

pub fn is_ad_request_flow(flow: &Flow) -> bool {
    ad_endpoint_matches(flow, &AD_REQUEST)
}

pub fn is_impression_flow(flow: &Flow) -> bool {
    ad_endpoint_matches(flow, &IMPRESSION)
}

pub fn is_click_flow(flow: &Flow) -> bool {
    ad_endpoint_matches(flow, &CLICK)
}

pub fn is_tiara_flow(flow: &Flow) -> bool {
    flow.as_http().is_some_and(|f| f.request.host == TIARA_API_HOST)
}

/// Place a flow in exactly one category.
///
/// The ad endpoint patterns cannot overlap, so the order of the checks only
/// matters between ad-host and Tiara-host flows, which are disjoint by host.
pub fn classify(flow: &Flow) -> FlowCategory {
    if is_ad_request_flow(flow) {
        FlowCategory::AdRequest
    } else if is_impression_flow(flow) {
        FlowCategory::Impression
    } else if is_click_flow(flow) {
        FlowCategory::Click
    } else if is_tiara_flow(flow) {
        FlowCategory::Tiara
    } else {
        FlowCategory::Unrelated
    }
}

fn is_ad_api_host(flow: &HttpFlow) -> bool {
    flow.request.host == AD_API_HOST
}

// Tracking endpoints carry `adsid` in the query string, which the host
// delivers as part of the path, so the pattern is applied to the bare path.
fn ad_endpoint_matches(flow: &Flow, endpoint: &Regex) -> bool {
    flow.as_http()
        .filter(|f| is_ad_api_host(f))
        .is_some_and(|f| endpoint.is_match(f.request.path_only()))
}
