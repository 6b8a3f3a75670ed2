mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, load_flows};
pub use tracing::{CapturedEvent, capture_events};
