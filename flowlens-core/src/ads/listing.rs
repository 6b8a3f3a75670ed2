use crate::ads::types::AdListing;
use crate::classify::is_ad_request_flow;
use crate::flow::Flow;
use tracing::trace;

/// Ad listings carried by an ad-list response.
///
/// Only request bodies reach this crate; response content stays with the
/// capture host. A completed ad-list flow is therefore recognized but always
/// yields no listings, and the lifecycle keeps its three-stage shape with an
/// empty first stage.
pub fn parse_ad_request_response(flow: &Flow) -> Vec<AdListing> {
    let Some(http) = flow.as_http() else {
        return Vec::new();
    };
    if !is_ad_request_flow(flow) || http.response.is_none() {
        return Vec::new();
    }

    trace!(flow_id = %http.id, "ad list response recognized, no content available");
    Vec::new()
}
