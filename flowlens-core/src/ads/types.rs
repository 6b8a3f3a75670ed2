use crate::flow::HttpFlow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingEventKind {
    /// Ad list fetched.
    Request,
    Impression,
    Click,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackingEvent {
    pub kind: TrackingEventKind,
    /// Milliseconds since the epoch, taken from the request start.
    pub timestamp_ms: f64,
    pub flow_id: String,
}

impl TrackingEvent {
    pub fn from_flow(flow: &HttpFlow, kind: TrackingEventKind) -> Self {
        Self {
            kind,
            timestamp_ms: flow.request.timestamp_start * 1000.0,
            flow_id: flow.id.clone(),
        }
    }
}

/// Coarse lifecycle stage. Ordered `Requested < Impressed < Clicked`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AdStatus {
    Requested,
    Impressed,
    Clicked,
}

impl AdStatus {
    pub fn label(self) -> &'static str {
        match self {
            AdStatus::Requested => "requested",
            AdStatus::Impressed => "impressed",
            AdStatus::Clicked => "clicked",
        }
    }

    /// Badge color used by the dashboard, as a hex RGB string.
    pub fn color(self) -> &'static str {
        match self {
            AdStatus::Requested => "#6b7280",
            AdStatus::Impressed => "#3b82f6",
            AdStatus::Clicked => "#10b981",
        }
    }
}

/// How a new tracking event changes an ad's status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Each event sets its own status, even if that moves backwards
    /// (a late impression turns a clicked ad back into an impressed one).
    #[default]
    Overwrite,
    /// Status only ever advances.
    Monotonic,
}

impl StatusPolicy {
    pub fn apply(self, current: AdStatus, next: AdStatus) -> AdStatus {
        match self {
            StatusPolicy::Overwrite => next,
            StatusPolicy::Monotonic => current.max(next),
        }
    }
}

/// One advertisement as listed by an ad-list (`/req`) response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdListing {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub ad_imp: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdRecord {
    pub adsid: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Impression tracking URL.
    pub ad_imp: Option<String>,
    pub link: Option<String>,

    pub request_event: Option<TrackingEvent>,
    pub impression_event: Option<TrackingEvent>,
    pub click_event: Option<TrackingEvent>,

    pub status: AdStatus,

    pub request_time: Option<f64>,
    pub impression_time: Option<f64>,
    pub click_time: Option<f64>,
}

impl AdRecord {
    /// A record for an id seen only through tracking events.
    pub fn placeholder(adsid: &str) -> Self {
        let short: String = adsid.chars().take(8).collect();

        Self {
            adsid: adsid.to_string(),
            title: format!("Ad {short}..."),
            subtitle: None,
            ad_imp: None,
            link: None,
            request_event: None,
            impression_event: None,
            click_event: None,
            status: AdStatus::Requested,
            request_time: None,
            impression_time: None,
            click_time: None,
        }
    }

    pub fn record_impression(&mut self, event: TrackingEvent, policy: StatusPolicy) {
        self.impression_time = Some(event.timestamp_ms);
        self.impression_event = Some(event);
        self.status = policy.apply(self.status, AdStatus::Impressed);
    }

    pub fn record_click(&mut self, event: TrackingEvent, policy: StatusPolicy) {
        self.click_time = Some(event.timestamp_ms);
        self.click_event = Some(event);
        self.status = policy.apply(self.status, AdStatus::Clicked);
    }

    /// Merge ad-list metadata and the list request that delivered it.
    pub fn record_listing(
        &mut self,
        listing: &AdListing,
        event: TrackingEvent,
        policy: StatusPolicy,
    ) {
        self.title = listing.title.clone();
        self.subtitle = listing.subtitle.clone();
        self.ad_imp = listing.ad_imp.clone();
        self.link = listing.link.clone();
        self.request_time = Some(event.timestamp_ms);
        self.request_event = Some(event);
        self.status = policy.apply(self.status, AdStatus::Requested);
    }

    /// Timestamp used for "most recent first" ordering: request, then
    /// impression, then click, else zero.
    pub fn preferred_time(&self) -> f64 {
        self.request_time
            .or(self.impression_time)
            .or(self.click_time)
            .unwrap_or(0.0)
    }
}
