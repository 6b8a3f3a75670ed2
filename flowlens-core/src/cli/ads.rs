use crate::ads::{AdLifecycleReducer, AdQuery, AdStatus, StatusPolicy};
use crate::cli::render::render_ads;
use crate::cli::{print_json, resolve_config, use_color};
use crate::cli::input::read_flows;
use crate::diagnostics::TracingSink;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AdsArgs {
    /// Flow file (JSON array or JSON lines); stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Case-insensitive match on ad id or title
    #[arg(long)]
    pub search: Option<String>,

    /// Only show ads in this stage
    #[arg(long, value_enum)]
    pub status: Option<AdStatus>,

    /// Override the configured status policy
    #[arg(long, value_enum)]
    pub policy: Option<StatusPolicy>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to flowlens.hcl
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run_ads(args: AdsArgs) -> Result<()> {
    let cfg = resolve_config(args.config.as_deref())?;
    let flows = read_flows(args.input.as_deref())?;

    let policy = args.policy.unwrap_or(cfg.ads.status_policy);
    let book = AdLifecycleReducer::new(&TracingSink)
        .with_policy(policy)
        .reduce(&flows);

    let query = AdQuery {
        search: args.search,
        status: args.status,
    };
    let ads = book.query(&query);

    if args.json {
        return print_json(&ads);
    }

    print!("{}", render_ads(&ads, &book.stats(), use_color()));
    Ok(())
}
