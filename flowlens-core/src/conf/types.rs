use crate::ads::StatusPolicy;
use crate::metrics::{DEFAULT_BUCKET_SIZE_MS, DomainAverage, MetricsOptions};
use serde::{Deserialize, Serialize};

/// Contents of `flowlens.hcl`. Every block and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FlowLensConfig {
    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub ads: AdsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    #[serde(default = "default_bucket_size_ms")]
    pub bucket_size_ms: u64,

    #[serde(default)]
    pub domain_average: DomainAverage,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            bucket_size_ms: default_bucket_size_ms(),
            domain_average: DomainAverage::default(),
        }
    }
}

impl From<&MetricsConfig> for MetricsOptions {
    fn from(cfg: &MetricsConfig) -> Self {
        MetricsOptions {
            bucket_size_ms: cfg.bucket_size_ms,
            domain_average: cfg.domain_average,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdsConfig {
    #[serde(default)]
    pub status_policy: StatusPolicy,
}

fn default_bucket_size_ms() -> u64 {
    DEFAULT_BUCKET_SIZE_MS
}
