//! Blocking ureq transport for the core's request values.

use todolist_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Runs each `HttpRequest` with one shared ureq agent.
///
/// Status-as-error is turned off so 4xx/5xx come back as responses and the
/// core decides what they mean; only I/O failures become `ApiError::Network`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
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

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = &self.agent;
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| {
            tracing::debug!(path = %req.path, error = %e, "transport failed");
            ApiError::Network(e.to_string())
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
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
