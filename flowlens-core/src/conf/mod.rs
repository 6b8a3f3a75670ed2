mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, load_optional, parse_config, validate};
pub use types::{AdsConfig, FlowLensConfig, MetricsConfig};
