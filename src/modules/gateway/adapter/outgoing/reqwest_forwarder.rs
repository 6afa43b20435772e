use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::gateway::application::ports::outgoing::{
    is_hop_by_hop, ForwardError, ForwardRequest, ForwardResponse, UpstreamForwarder,
};

/// Forwards requests over HTTP. Redirects are passed back to the client
/// untouched rather than followed.
pub struct ReqwestForwarder {
    http: reqwest::Client,
}

impl ReqwestForwarder {
    pub fn new(timeout: Duration) -> Result<Self, ForwardError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(timeout)
            .build()
            .map_err(|e| ForwardError::InvalidRequest(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl UpstreamForwarder for ReqwestForwarder {
    async fn forward(&self, request: ForwardRequest) -> Result<ForwardResponse, ForwardError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| ForwardError::InvalidRequest(e.to_string()))?;

        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            if !is_hop_by_hop(name) {
                builder = builder.header(name.as_str(), value.as_slice());
            }
        }

        debug!("Forwarding {} {}", request.method, request.url);
        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| ForwardError::Unreachable {
                url: request.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter(|(name, _)| !is_hop_by_hop(name.as_str()))
            .map(|(name, value)| (name.as_str().to_string(), value.as_bytes().to_vec()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| ForwardError::Body(e.to_string()))?
            .to_vec();

        Ok(ForwardResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn closed_port_is_unreachable() {
        let forwarder = ReqwestForwarder::new(Duration::from_secs(2)).unwrap();
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = forwarder
            .forward(ForwardRequest {
                method: "GET".into(),
                url: format!("http://127.0.0.1:{port}/v1/"),
                headers: vec![],
                body: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ForwardError::Unreachable { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn rejects_malformed_methods() {
        let forwarder = ReqwestForwarder::new(Duration::from_secs(2)).unwrap();

        let err = forwarder
            .forward(ForwardRequest {
                method: "GE T".into(),
                url: "http://127.0.0.1:9/".into(),
                headers: vec![],
                body: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ForwardError::InvalidRequest(_)));
    }
}
