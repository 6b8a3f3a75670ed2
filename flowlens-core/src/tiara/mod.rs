//! Tiara analytics events.
//!
//! The app batches analytics events into a JSON array and posts it to the
//! Tiara collector. Each element carries an `action` (what happened) and a
//! `common` block (where and when), plus optional impression and click
//! content lists that feed the one-line summary.

mod clock;
mod decode;
mod extract;
mod fields;
mod summary;
#[cfg(test)]
mod tests;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use extract::{TiaraExtractor, extract_unique_action_types, parse_tiara_events};
pub use summary::extract_summary;
pub use types::*;
