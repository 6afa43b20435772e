pub mod domain;
pub mod gateway_state;
pub mod ports;
