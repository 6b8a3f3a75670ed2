use crate::flow::Flow;
use crate::metrics::constants::TOP_N;
use crate::metrics::http_flows;
use crate::metrics::types::{DomainAverage, DomainStat};
use crate::ordered::OrderedMap;

#[derive(Default)]
struct DomainTally {
    count: usize,
    timed: usize,
    total_time: f64,
}

/// Busiest hosts by flow count, ties in first-seen order.
pub fn calculate_domain_stats(flows: &[Flow], average: DomainAverage) -> Vec<DomainStat> {
    let mut domains: OrderedMap<String, DomainTally> = OrderedMap::default();

    for flow in http_flows(flows) {
        let tally = domains.get_or_insert_with(flow.request.host.clone(), DomainTally::default);
        tally.count += 1;

        if let Some(ms) = flow.response_time_ms() {
            tally.timed += 1;
            tally.total_time += ms;
        }
    }

    let mut stats: Vec<DomainStat> = domains
        .into_entries()
        .into_iter()
        .map(|(domain, tally)| {
            let denominator = match average {
                DomainAverage::AllFlows => tally.count,
                DomainAverage::TimedFlows => tally.timed,
            };

            DomainStat {
                domain,
                count: tally.count,
                avg_time: if denominator > 0 {
                    tally.total_time / denominator as f64
                } else {
                    0.0
                },
            }
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats.truncate(TOP_N);
    stats
}
