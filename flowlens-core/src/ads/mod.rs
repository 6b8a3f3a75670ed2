//! Advertisement lifecycle tracking.
//!
//! Ads move through three stages: the app fetches an ad list (`/req`),
//! reports an impression (`/imp`), and reports a click (`/click`). The
//! tracking calls carry the ad id as an `adsid` query parameter, which is
//! what ties the stages together.

mod adsid;
mod book;
mod listing;
mod reducer;
#[cfg(test)]
mod tests;
mod types;

pub use adsid::{ADSID_PARAM, extract_adsid};
pub use book::{AdBook, AdQuery, AdStats};
pub use listing::parse_ad_request_response;
pub use reducer::{AdLifecycleReducer, reduce_ad_flows};
pub use types::*;
