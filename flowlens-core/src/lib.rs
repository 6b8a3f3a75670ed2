pub mod ads;
pub mod classify;
pub mod cli;
pub mod conf;
pub mod diagnostics;
pub mod flow;
pub mod format;
pub mod logging;
pub mod metrics;
mod ordered;
pub mod tiara;
