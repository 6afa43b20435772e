pub mod gateway_mode;
pub mod proxy_table;

pub use gateway_mode::GatewayMode;
pub use proxy_table::{ProxyRoute, ProxyTable, ProxyTableError, DEFAULT_BASE_PORT};
