mod upstream_forwarder;

pub use upstream_forwarder::{
    is_hop_by_hop, ForwardError, ForwardRequest, ForwardResponse, UpstreamForwarder,
};
