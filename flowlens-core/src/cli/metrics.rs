use crate::cli::input::read_flows;
use crate::cli::render::render_metrics;
use crate::cli::{print_json, resolve_config, use_color};
use crate::metrics::{DomainAverage, MetricsOptions, MetricsReport};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Flow file (JSON array or JSON lines); stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Width of the response-time trend buckets
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub bucket_size_ms: Option<u64>,

    /// Override the configured domain average
    #[arg(long, value_enum)]
    pub domain_average: Option<DomainAverage>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to flowlens.hcl
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run_metrics(args: MetricsArgs) -> Result<()> {
    let cfg = resolve_config(args.config.as_deref())?;
    let flows = read_flows(args.input.as_deref())?;

    let mut options = MetricsOptions::from(&cfg.metrics);
    if let Some(size) = args.bucket_size_ms {
        options.bucket_size_ms = size;
    }
    if let Some(average) = args.domain_average {
        options.domain_average = average;
    }

    let report = MetricsReport::from_flows(&flows, &options);

    if args.json {
        return print_json(&report);
    }

    print!("{}", render_metrics(&report, use_color()));
    Ok(())
}
