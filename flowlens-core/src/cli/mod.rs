//! Command-line front end.
//!
//! Every command follows the same pipeline:
//!
//! input (file or stdin)
//! read_flows
//! Vec<Flow>
//! AdLifecycleReducer / TiaraExtractor / MetricsReport
//! render_* or JSON
//! stdout

mod ads;
mod config;
mod input;
mod metrics;
mod render;
#[cfg(test)]
mod tests;
mod tiara;

pub use ads::{AdsArgs, run_ads};
pub use config::{ConfigCmd, config_error_hint, run_config};
pub use input::{parse_flows_text, read_flows};
pub use metrics::{MetricsArgs, run_metrics};
pub use render::{render_ads, render_metrics, render_tiara};
pub use tiara::{TiaraArgs, run_tiara};

use crate::conf::{DEFAULT_CONFIG_FILE, FlowLensConfig, load_optional};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Explicit `--config`, else `./flowlens.hcl` when it exists, else defaults.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<FlowLensConfig> {
    let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
    let path = explicit.or_else(|| fallback.is_file().then_some(fallback.as_path()));
    Ok(load_optional(path)?)
}

pub(crate) fn use_color() -> bool {
    io::stdout().is_terminal()
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
