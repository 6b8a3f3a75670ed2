use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Http(HttpFlow),
    /// tcp, udp, dns and anything else the host captures
    Other(OtherFlow),
}

impl Flow {
    pub fn id(&self) -> &str {
        match self {
            Flow::Http(f) => &f.id,
            Flow::Other(f) => &f.id,
        }
    }

    pub fn as_http(&self) -> Option<&HttpFlow> {
        match self {
            Flow::Http(f) => Some(f),
            Flow::Other(_) => None,
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Flow::Http(_))
    }
}

impl From<HttpFlow> for Flow {
    fn from(flow: HttpFlow) -> Self {
        Flow::Http(flow)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OtherFlow {
    pub id: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpFlow {
    pub id: String,
    pub request: Request,
    /// `None` while the exchange is still in flight.
    pub response: Option<Response>,
}

impl HttpFlow {
    pub fn new(
        id: impl Into<String>,
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
        timestamp_start: f64,
    ) -> Self {
        Self {
            id: id.into(),
            request: Request {
                host: host.into(),
                path: path.into(),
                scheme: scheme.into(),
                timestamp_start,
                body: None,
            },
            response: None,
        }
    }

    pub fn with_response(mut self, status_code: u16, timestamp_end: Option<f64>) -> Self {
        self.response = Some(Response {
            status_code: Some(status_code),
            timestamp_end,
        });
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.request.body = Some(body);
        self
    }

    /// Full request URL rebuilt from scheme, host and path (query included).
    pub fn url(&self) -> String {
        format!(
            "{}://{}{}",
            self.request.scheme, self.request.host, self.request.path
        )
    }

    /// Milliseconds between request start and response end.
    ///
    /// Only defined when both timestamps are present and non-zero; a zero
    /// timestamp is how the host marks "not recorded".
    pub fn response_time_ms(&self) -> Option<f64> {
        let end = self
            .response
            .as_ref()
            .and_then(|r| r.timestamp_end)
            .filter(|t| *t != 0.0)?;

        let start = self.request.timestamp_start;
        if start == 0.0 {
            return None;
        }

        Some((end - start) * 1000.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub host: String,
    /// Path as delivered by the host, query string and all.
    pub path: String,
    pub scheme: String,
    /// Seconds since the epoch, fractional.
    pub timestamp_start: f64,
    pub body: Option<RequestBody>,
}

impl Request {
    /// The path with any `?query` or `#fragment` suffix removed.
    pub fn path_only(&self) -> &str {
        let end = self.path.find(|c: char| c == '?' || c == '#').unwrap_or(self.path.len());
        &self.path[..end]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// `None` when the host recorded a response without a usable code.
    pub status_code: Option<u16>,
    /// Seconds since the epoch, fractional.
    pub timestamp_end: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Text(String),
    Bytes(Vec<u8>),
    /// Any representation the host sent that is neither text nor bytes.
    Other(Value),
}
