use crate::ads::types::{AdListing, AdRecord, AdStatus, StatusPolicy, TrackingEvent};
use crate::ordered::OrderedMap;
use serde::{Serialize, Serializer};

/// Advertisement records keyed by ad id, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct AdBook {
    ads: OrderedMap<String, AdRecord>,
}

impl AdBook {
    pub fn len(&self) -> usize {
        self.ads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ads.is_empty()
    }

    pub fn get(&self, adsid: &str) -> Option<&AdRecord> {
        self.ads.get(adsid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdRecord> {
        self.ads.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ads.iter().map(|(id, _)| id.as_str())
    }

    pub fn into_records(self) -> Vec<AdRecord> {
        self.ads.into_entries().into_iter().map(|(_, ad)| ad).collect()
    }

    /// Existing record for `adsid`, or a fresh placeholder.
    pub(crate) fn entry(&mut self, adsid: &str) -> &mut AdRecord {
        self.ads
            .get_or_insert_with(adsid.to_string(), || AdRecord::placeholder(adsid))
    }

    pub(crate) fn merge_listing(
        &mut self,
        listing: &AdListing,
        event: TrackingEvent,
        policy: StatusPolicy,
    ) {
        self.entry(&listing.id).record_listing(listing, event, policy);
    }

    /// Records matching `query`, most recent first.
    pub fn query(&self, query: &AdQuery) -> Vec<&AdRecord> {
        let mut ads: Vec<&AdRecord> = self.iter().filter(|ad| query.matches(ad)).collect();
        ads.sort_by(|a, b| b.preferred_time().total_cmp(&a.preferred_time()));
        ads
    }

    pub fn stats(&self) -> AdStats {
        let total = self.len();
        let clicked = self
            .iter()
            .filter(|ad| ad.status == AdStatus::Clicked)
            .count();
        let impressed = self
            .iter()
            .filter(|ad| matches!(ad.status, AdStatus::Impressed | AdStatus::Clicked))
            .count();

        AdStats {
            total,
            impressed,
            clicked,
            ctr: (total > 0).then(|| clicked as f64 / total as f64 * 100.0),
        }
    }
}

impl Serialize for AdBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Free-text and status filter over an [`AdBook`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdQuery {
    /// Case-insensitive substring of the ad id or title.
    pub search: Option<String>,
    pub status: Option<AdStatus>,
}

impl AdQuery {
    pub fn matches(&self, ad: &AdRecord) -> bool {
        if self.status.is_some_and(|status| ad.status != status) {
            return false;
        }

        match self.search.as_deref().filter(|s| !s.is_empty()) {
            Some(search) => {
                let needle = search.to_lowercase();
                ad.adsid.to_lowercase().contains(&needle)
                    || ad.title.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdStats {
    pub total: usize,
    /// Ads that reached at least the impression stage.
    pub impressed: usize,
    pub clicked: usize,
    /// Click-through rate in percent, `None` when there are no ads.
    pub ctr: Option<f64>,
}
