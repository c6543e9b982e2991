//! Executors for `HttpRequest` values.
//!
//! `Transport` is the seam between the deterministic client and real I/O.
//! `UreqTransport` is the blocking implementation used by hosts and the
//! integration tests; any `Fn(&HttpRequest) -> Result<HttpResponse, _>` also
//! works, which keeps unit tests free of sockets.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Correlation id attached to every request sent by `UreqTransport`.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub trait Transport {
    /// Execute `request`. Non-2xx statuses are data, not errors; only a
    /// failure to obtain any response is an `Err`.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}

/// Blocking transport on top of a ureq agent.
///
/// The agent has ureq's status-as-error behavior disabled so 4xx/5xx
/// responses come back as `HttpResponse` values and the client classifies
/// them. No timeout is configured beyond ureq's defaults.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let request_id = Uuid::new_v4().to_string();
        debug!(
            request_id = %request_id,
            method = request.method.as_str(),
            url = %request.path,
            "sending request"
        );

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(&request.path), request, &request_id).call(),
            HttpMethod::Delete => {
                with_headers(self.agent.delete(&request.path), request, &request_id).call()
            }
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(&request.path), request, &request_id);
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
            HttpMethod::Put => {
                let builder = with_headers(self.agent.put(&request.path), request, &request_id);
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| {
            warn!(request_id = %request_id, url = %request.path, error = %e, "transport failure");
            TransportError(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        debug!(request_id = %request_id, status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    request: &HttpRequest,
    request_id: &str,
) -> ureq::RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder.header(REQUEST_ID_HEADER, request_id)
}
