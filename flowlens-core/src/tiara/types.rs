use serde::Serialize;
use serde_json::Value;

/// Placeholder for a missing field.
pub const MISSING: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TiaraEvent {
    /// `<flow id>-<index in batch>`
    pub id: String,
    /// Milliseconds since the epoch.
    pub timestamp: i64,
    pub action_type: String,
    pub action_name: String,
    pub page: String,
    pub section: String,
    pub summary: String,
    /// The batch element exactly as decoded.
    pub raw: Value,
}
