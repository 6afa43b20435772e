mod dispatch;
mod get_routes;

pub use dispatch::*;
pub use get_routes::*;
