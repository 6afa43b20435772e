use async_trait::async_trait;

/// A request to replay against an upstream theme server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardRequest {
    pub method: String,
    /// Absolute upstream URL including path and query.
    pub url: String,
    pub headers: Vec<(String, Vec<u8>)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardResponse {
    pub status: u16,
    pub headers: Vec<(String, Vec<u8>)>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForwardError {
    #[error("Upstream {url} unreachable: {message}")]
    Unreachable { url: String, message: String },

    #[error("Invalid forwarded request: {0}")]
    InvalidRequest(String),

    #[error("Failed to read upstream body: {0}")]
    Body(String),
}

/// Replays a request on another server. No retries.
#[async_trait]
pub trait UpstreamForwarder {
    async fn forward(&self, request: ForwardRequest) -> Result<ForwardResponse, ForwardError>;
}

const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

/// Headers that describe one connection and must not be forwarded.
pub fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| h.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_connection_headers_case_insensitively() {
        assert!(is_hop_by_hop("Connection"));
        assert!(is_hop_by_hop("transfer-encoding"));
        assert!(is_hop_by_hop("Host"));
        assert!(!is_hop_by_hop("accept-language"));
        assert!(!is_hop_by_hop("cookie"));
    }
}
