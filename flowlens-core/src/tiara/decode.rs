use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::flow::{HttpFlow, RequestBody};
use crate::tiara::fields::kind_name;
use serde_json::Value;

/// Request body as text. Empty bodies count as absent.
fn body_text<'f>(flow: &'f HttpFlow, sink: &dyn DiagnosticSink) -> Option<&'f str> {
    let text = match flow.request.body.as_ref()? {
        RequestBody::Text(text) => text.as_str(),
        RequestBody::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                sink.report(Diagnostic::BodyNotUtf8 {
                    flow_id: flow.id.clone(),
                    reason: e.to_string(),
                });
                return None;
            }
        },
        RequestBody::Other(_) => {
            sink.report(Diagnostic::UnsupportedBody {
                flow_id: flow.id.clone(),
            });
            return None;
        }
    };

    (!text.is_empty()).then_some(text)
}

/// Decode the request body into the elements of a JSON array batch.
pub(crate) fn decode_batch(flow: &HttpFlow, sink: &dyn DiagnosticSink) -> Option<Vec<Value>> {
    let text = body_text(flow, sink)?;

    let payload: Value = match serde_json::from_str(text) {
        Ok(payload) => payload,
        Err(e) => {
            sink.report(Diagnostic::InvalidJson {
                flow_id: flow.id.clone(),
                reason: e.to_string(),
            });
            return None;
        }
    };

    match payload {
        Value::Array(items) => Some(items),
        other => {
            sink.report(Diagnostic::NotAnArray {
                flow_id: flow.id.clone(),
                found: kind_name(&other),
            });
            None
        }
    }
}
