//! Captured flows as delivered by the capture host.
//!
//! Flows arrive as JSON documents in roughly the shape mitmproxy's web UI
//! uses. `parse_flow` turns one document into a [`Flow`], tolerating missing
//! optional fields and rejecting only documents that cannot be identified.

mod parse;
mod types;

pub use parse::parse_flow;
pub use types::*;
