use crate::conf::{ConfigError, DEFAULT_CONFIG_FILE, load_config};
use clap::Subcommand;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a configuration file and exit
    Check {
        /// Path to the config file
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

pub fn run_config(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
    }
}

fn check(path: PathBuf) -> anyhow::Result<()> {
    let cfg = match load_config(&path) {
        Ok(cfg) => cfg,
        Err(err) => {
            if let Some(hint) = config_error_hint(&err) {
                eprintln!("{}: {hint}", "hint".yellow().bold());
            }
            return Err(err.into());
        }
    };

    println!("✔ Config loaded successfully");
    println!("✔ bucket_size_ms = {}", cfg.metrics.bucket_size_ms);
    println!(
        "✔ domain_average = {}",
        serde_json::to_string(&cfg.metrics.domain_average)?
    );
    println!(
        "✔ status_policy = {}",
        serde_json::to_string(&cfg.ads.status_policy)?
    );
    Ok(())
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::InvalidBucketSize { .. } => Some(
            "The trend bucket width must be a positive number of milliseconds.\n\
             \n\
             Example:\n\
             \n\
             metrics = {\n\
             \x20 bucket_size_ms = 5000\n\
             }",
        ),

        ConfigError::Parse { .. } => Some(
            "Known settings are metrics.bucket_size_ms, metrics.domain_average \
             (\"all_flows\" or \"timed_flows\") and ads.status_policy \
             (\"overwrite\" or \"monotonic\").",
        ),

        ConfigError::ReadFile { .. } => None,
    }
}
