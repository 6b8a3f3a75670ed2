use crate::conf::error::ConfigError;
use crate::conf::types::FlowLensConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "flowlens.hcl";

pub fn load_config(path: &Path) -> Result<FlowLensConfig, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = parse_config(path, &s)?;

    debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

/// Load `path` if given, otherwise fall back to defaults.
pub fn load_optional(path: Option<&Path>) -> Result<FlowLensConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(FlowLensConfig::default()),
    }
}

/// Parse and validate HCL source; `path` is only used for error context.
pub fn parse_config(path: &Path, source: &str) -> Result<FlowLensConfig, ConfigError> {
    let cfg: FlowLensConfig = hcl::from_str(source).map_err(|e| ConfigError::parse(path, e))?;
    validate(&cfg)?;
    Ok(cfg)
}

pub fn validate(cfg: &FlowLensConfig) -> Result<(), ConfigError> {
    if cfg.metrics.bucket_size_ms == 0 {
        return Err(ConfigError::InvalidBucketSize {
            value: cfg.metrics.bucket_size_ms,
        });
    }
    Ok(())
}
