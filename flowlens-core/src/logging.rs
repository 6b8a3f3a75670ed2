use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Output shape of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Install the global subscriber.
///
/// Filtering comes from `RUST_LOG` (default `warn`). Everything goes to
/// stderr so stdout carries only reports.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().flatten_event(true).init(),
        LogFormat::Text => builder
            .compact()
            .with_ansi(io::stderr().is_terminal())
            .init(),
    }
}
