mod app;
pub mod support;
