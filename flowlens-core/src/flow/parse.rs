use crate::flow::types::{Flow, HttpFlow, OtherFlow, Request, RequestBody, Response};
use serde_json::Value;

fn str_field(obj: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| obj.get(name).and_then(Value::as_str))
        .map(str::to_string)
}

fn f64_field(obj: &Value, names: &[&str]) -> Option<f64> {
    names
        .iter()
        .find_map(|name| obj.get(name).and_then(Value::as_f64))
}

/// Convert one flow document into a [`Flow`].
///
/// Returns `None` when the document has no `id`, or claims to be an HTTP flow
/// without a usable `request`.
pub fn parse_flow(flow: &Value) -> Option<Flow> {
    let id = flow.get("id").and_then(Value::as_str)?.to_string();

    let kind = flow.get("type").and_then(Value::as_str).unwrap_or("http");
    if kind != "http" {
        return Some(Flow::Other(OtherFlow {
            id,
            kind: kind.to_string(),
        }));
    }

    let request = parse_request(flow.get("request")?)?;
    let response = flow.get("response").and_then(parse_response);

    Some(Flow::Http(HttpFlow {
        id,
        request,
        response,
    }))
}

fn parse_request(request: &Value) -> Option<Request> {
    Some(Request {
        // pretty_host reflects the Host header, which is what the UI shows
        host: str_field(request, &["pretty_host", "host"])?,
        path: str_field(request, &["path"])?,
        scheme: str_field(request, &["scheme"]).unwrap_or_else(|| "http".to_string()),
        timestamp_start: f64_field(request, &["timestamp_start", "start_time"]).unwrap_or(0.0),
        body: ["content", "body"]
            .iter()
            .find_map(|name| request.get(name))
            .and_then(parse_body),
    })
}

fn parse_response(response: &Value) -> Option<Response> {
    if !response.is_object() {
        return None;
    }

    Some(Response {
        status_code: response
            .get("status_code")
            .and_then(Value::as_u64)
            .and_then(|code| u16::try_from(code).ok()),
        timestamp_end: f64_field(response, &["timestamp_end", "end_time"]),
    })
}

fn parse_body(body: &Value) -> Option<RequestBody> {
    match body {
        Value::Null => None,
        Value::String(s) => Some(RequestBody::Text(s.clone())),
        Value::Array(items) => {
            let bytes: Option<Vec<u8>> = items
                .iter()
                .map(|b| b.as_u64().and_then(|b| u8::try_from(b).ok()))
                .collect();

            Some(match bytes {
                Some(bytes) => RequestBody::Bytes(bytes),
                None => RequestBody::Other(body.clone()),
            })
        }
        other => Some(RequestBody::Other(other.clone())),
    }
}
