//! HTTP transport
//!
//! One `ureq::Agent` per client so connections are pooled across requests.

use std::time::Duration;

use serde_json::Value;

use super::error::ApiError;

/// Fetches a URL and decodes the body as JSON
pub trait Transport: Send + Sync {
    fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Value, ApiError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("skyblock-stats/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn get_json(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let mut request = self.agent.get(url);
        for (name, value) in query {
            request = request.query(name, value);
        }
        for (name, value) in headers {
            request = request.set(name, value);
        }

        log::debug!("GET {}", url);
        match request.call() {
            // Mojang answers unknown names with an empty 204
            Ok(response) if response.status() == 204 => Ok(Value::Null),
            Ok(response) => response
                .into_json::<Value>()
                .map_err(|e| ApiError::Decode(e.to_string())),
            Err(ureq::Error::Status(404, _)) => Err(ApiError::NotFound),
            Err(ureq::Error::Status(code, response)) => {
                // Hypixel still sends a JSON body with a cause on 4xx
                let cause = response
                    .into_json::<Value>()
                    .ok()
                    .and_then(|body| body.get("cause").and_then(Value::as_str).map(str::to_owned));
                Err(ApiError::Status { code, cause })
            }
            Err(ureq::Error::Transport(e)) => Err(ApiError::Transport(e.to_string())),
        }
    }
}
