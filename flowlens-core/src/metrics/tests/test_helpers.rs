use crate::flow::{Flow, HttpFlow, OtherFlow, Response};

/// Completed flow; `duration` is in seconds.
pub fn timed(id: &str, host: &str, status: u16, start: f64, duration: f64) -> Flow {
    HttpFlow::new(id, "https", host, "/", start)
        .with_response(status, Some(start + duration))
        .into()
}

pub fn in_flight(id: &str, host: &str, start: f64) -> Flow {
    HttpFlow::new(id, "https", host, "/", start).into()
}

pub fn tcp(id: &str) -> Flow {
    Flow::Other(OtherFlow {
        id: id.to_string(),
        kind: "tcp".to_string(),
    })
}

/// Completed flow whose response carried no status code.
pub fn without_status(id: &str, host: &str, start: f64, duration: f64) -> Flow {
    let mut flow = HttpFlow::new(id, "https", host, "/", start);
    flow.response = Some(Response {
        status_code: None,
        timestamp_end: Some(start + duration),
    });
    flow.into()
}
