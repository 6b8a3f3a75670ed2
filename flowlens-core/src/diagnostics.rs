//! Non-fatal diagnostics.
//!
//! Decoding never fails outward. When a body, payload or URL cannot be read
//! the caller gets an empty result and a [`Diagnostic`] goes to whichever
//! [`DiagnosticSink`] it was handed.

use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("flow {flow_id}: request body is not valid UTF-8: {reason}")]
    BodyNotUtf8 { flow_id: String, reason: String },

    #[error("flow {flow_id}: request body has an unsupported representation")]
    UnsupportedBody { flow_id: String },

    #[error("flow {flow_id}: request body is not valid JSON: {reason}")]
    InvalidJson { flow_id: String, reason: String },

    #[error("flow {flow_id}: expected a JSON array payload, found {found}")]
    NotAnArray { flow_id: String, found: &'static str },

    #[error("flow {flow_id}: malformed url '{url}': {reason}")]
    MalformedUrl {
        flow_id: String,
        url: String,
        reason: String,
    },
}

impl Diagnostic {
    pub fn flow_id(&self) -> &str {
        match self {
            Self::BodyNotUtf8 { flow_id, .. }
            | Self::UnsupportedBody { flow_id }
            | Self::InvalidJson { flow_id, .. }
            | Self::NotAnArray { flow_id, .. }
            | Self::MalformedUrl { flow_id, .. } => flow_id,
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        warn!(flow_id = diagnostic.flow_id(), "{diagnostic}");
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Keeps every diagnostic in memory, in the order reported.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
