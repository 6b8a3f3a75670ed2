use crate::cli::input::read_flows;
use crate::cli::render::render_tiara;
use crate::cli::{print_json, use_color};
use crate::diagnostics::TracingSink;
use crate::tiara::{SystemClock, TiaraEvent, TiaraExtractor};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct TiaraArgs {
    /// Flow file (JSON array or JSON lines); stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Only show events with this action type
    #[arg(long)]
    pub action_type: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_tiara(args: TiaraArgs) -> Result<()> {
    let flows = read_flows(args.input.as_deref())?;
    let events = TiaraExtractor::new(&TracingSink, &SystemClock).extract_all(&flows);

    let selected: Vec<&TiaraEvent> = events
        .iter()
        .filter(|e| {
            args.action_type
                .as_deref()
                .is_none_or(|wanted| e.action_type == wanted)
        })
        .collect();

    if args.json {
        return print_json(&selected);
    }

    print!("{}", render_tiara(&events, &selected, use_color()));
    Ok(())
}
