use crate::flow::{Flow, parse_flow};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Read flows from `path`, or stdin when no path is given.
pub fn read_flows(path: Option<&Path>) -> Result<Vec<Flow>> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read flows from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read flows from stdin")?;
            buf
        }
    };

    parse_flows_text(&text)
}

/// Parse flow documents as a JSON array (leading `[`) or as JSON lines.
///
/// A malformed array is an error. Malformed lines are logged and skipped.
pub fn parse_flows_text(text: &str) -> Result<Vec<Flow>> {
    let trimmed = text.trim_start();

    let flows = if trimmed.starts_with('[') {
        let docs: Vec<Value> =
            serde_json::from_str(trimmed).context("input is not a valid JSON array of flows")?;

        docs.iter()
            .enumerate()
            .filter_map(|(index, doc)| {
                let flow = parse_flow(doc);
                if flow.is_none() {
                    warn!(index, "skipping element that is not a flow");
                }
                flow
            })
            .collect()
    } else {
        parse_json_lines(text)
    };

    debug!(count = flows.len(), "read flows");
    Ok(flows)
}

fn parse_json_lines(text: &str) -> Vec<Flow> {
    let mut flows = Vec::new();

    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let doc = match serde_json::from_str::<Value>(line) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(line = n + 1, error = %e, "skipping unparseable line");
                continue;
            }
        };

        match parse_flow(&doc) {
            Some(flow) => flows.push(flow),
            None => warn!(line = n + 1, "skipping line that is not a flow"),
        }
    }

    flows
}
