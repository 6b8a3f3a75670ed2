use crate::flow::Flow;
use crate::metrics::constants::TOP_N;
use crate::metrics::http_flows;
use crate::metrics::types::StatusCodeCount;
use crate::ordered::OrderedMap;

/// Most frequent response codes, ties in first-seen order.
pub fn calculate_status_codes(flows: &[Flow]) -> Vec<StatusCodeCount> {
    let mut counts: OrderedMap<u16, usize> = OrderedMap::default();

    for code in http_flows(flows).filter_map(|f| f.response.as_ref()?.status_code) {
        *counts.get_or_insert_with(code, || 0) += 1;
    }

    let mut codes: Vec<StatusCodeCount> = counts
        .into_entries()
        .into_iter()
        .map(|(code, count)| StatusCodeCount { code, count })
        .collect();

    // stable sort keeps first-seen order among equal counts
    codes.sort_by(|a, b| b.count.cmp(&a.count));
    codes.truncate(TOP_N);
    codes
}
