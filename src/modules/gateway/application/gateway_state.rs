use std::sync::Arc;

use crate::gateway::application::{
    domain::{GatewayMode, ProxyTable},
    ports::outgoing::UpstreamForwarder,
};

#[derive(Clone)]
pub struct GatewayState {
    pub mode: GatewayMode,
    pub table: Arc<ProxyTable>,
    pub forwarder: Arc<dyn UpstreamForwarder + Send + Sync>,
}
